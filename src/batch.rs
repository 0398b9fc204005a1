//! Parallel conversion of many independent trees.
//!
//! The serializer holds no mutable state, so disjoint trees can be converted
//! on the rayon thread pool without coordination. Output order always matches
//! input order.

use rayon::prelude::*;

use crate::component::Component;
use crate::convert::HytaleSerializer;
use crate::message::Message;

impl HytaleSerializer {
    /// Serialize every component in parallel.
    pub fn serialize_batch(&self, components: &[Component]) -> Vec<Message> {
        components.par_iter().map(|c| self.serialize(c)).collect()
    }

    /// Deserialize every message in parallel.
    pub fn deserialize_batch(&self, messages: &[Message]) -> Vec<Component> {
        messages.par_iter().map(|m| self.deserialize(m)).collect()
    }
}

/// Serialize components in parallel with the shared serializer.
pub fn serialize_batch(components: &[Component]) -> Vec<Message> {
    HytaleSerializer::get().serialize_batch(components)
}

/// Deserialize messages in parallel with the shared serializer.
pub fn deserialize_batch(messages: &[Message]) -> Vec<Component> {
    HytaleSerializer::get().deserialize_batch(messages)
}
