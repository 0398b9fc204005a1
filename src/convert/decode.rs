//! Message → Component decoding.

use crate::component::{Component, ComponentContent, TranslationArgument};
use crate::config::Options;
use crate::message::{Message, ParamValue};

use super::style;

/// Convert a message tree to a component tree.
///
/// Raw text takes precedence over a translation id when both are present.
/// A message with neither decodes to an empty text component.
pub(crate) fn message_to_component(message: &Message, options: &Options) -> Component {
    let content = match (message.raw_text(), message.message_id()) {
        (Some(text), id) => {
            if let Some(id) = id {
                tracing::debug!(
                    raw_text = text,
                    message_id = id,
                    "message has both raw text and id, using raw text"
                );
            }
            ComponentContent::Text(text.to_owned())
        }
        (None, Some(id)) => ComponentContent::Translatable {
            key: id.to_owned(),
            args: if options.restore_arguments {
                restore_arguments(message, options)
            } else {
                Vec::new()
            },
        },
        (None, None) => ComponentContent::default(),
    };

    let style = style::import(message.formatted(), options);

    let children = message
        .children()
        .iter()
        .map(|child| message_to_component(child, options))
        .collect();

    Component::from_parts(content, style, children)
}

/// Collect params `"0"`, `"1"`, ... until the first gap.
///
/// Named params are left out: they have no position in the argument list.
fn restore_arguments(message: &Message, options: &Options) -> Vec<TranslationArgument> {
    let args: Vec<_> = (0usize..)
        .map_while(|index| message.param_value(&index.to_string()))
        .map(|param| param_to_argument(param, options))
        .collect();

    if args.len() < message.params().len() {
        tracing::trace!(
            restored = args.len(),
            total = message.params().len(),
            "ignoring params outside the positional range"
        );
    }
    args
}

fn param_to_argument(param: &ParamValue, options: &Options) -> TranslationArgument {
    match param {
        ParamValue::Bool(b) => TranslationArgument::Bool(*b),
        ParamValue::Int(i) => TranslationArgument::Int(*i),
        ParamValue::Long(l) => TranslationArgument::Long(*l),
        ParamValue::Float(f) => TranslationArgument::Float(*f),
        ParamValue::Double(d) => TranslationArgument::Double(*d),
        ParamValue::String(s) => TranslationArgument::Str(s.clone()),
        ParamValue::Message(m) => TranslationArgument::Component(message_to_component(m, options)),
    }
}
