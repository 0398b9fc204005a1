//! Test helpers for roundtrip tests.

use crate::component::Component;
use crate::config::Options;
use crate::convert::HytaleSerializer;
use crate::message::Message;

/// Serializer with default options.
pub fn serializer() -> HytaleSerializer {
    HytaleSerializer::with_options(Options::default())
}

/// Test Component → Message → Component roundtrip.
pub fn assert_roundtrip(component: Component) {
    let serializer = serializer();
    let message = serializer.serialize(&component);
    let result = serializer.deserialize(&message);

    assert_eq!(
        component, result,
        "Roundtrip mismatch:\nInput:   {component:#?}\nMessage: {message:#?}\nOutput:  {result:#?}"
    );
}

/// Test Message → Component → Message roundtrip.
pub fn assert_message_roundtrip(message: Message) {
    let serializer = serializer();
    let component = serializer.deserialize(&message);
    let result = serializer.serialize(&component);

    assert_eq!(
        message, result,
        "Message roundtrip mismatch:\nInput:     {message:#?}\nComponent: {component:#?}\nOutput:    {result:#?}"
    );
}

/// Component → Message → Component, returning the result.
pub fn through_wire(component: &Component) -> Component {
    let serializer = serializer();
    serializer.deserialize(&serializer.serialize(component))
}
