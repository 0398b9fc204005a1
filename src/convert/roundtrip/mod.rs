//! Roundtrip tests for Component ↔ Message conversion.
//!
//! Tests verify that:
//! - Component → Message → Component reproduces the component
//! - Message → Component → Message reproduces the message
//! - Lossy fields are dropped the same way in both directions

#[cfg(test)]
pub(crate) mod common;

#[cfg(test)]
mod content;

#[cfg(test)]
mod edge;

#[cfg(test)]
mod style;
