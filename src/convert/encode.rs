//! Component → Message encoding.

use crate::component::{Component, ComponentContent, TranslationArgument};
use crate::config::Options;
use crate::message::{Message, ParamValue};

use super::style;

/// Convert a component tree to a message tree.
///
/// - `Text` with non-empty content → raw text
/// - `Translatable` → translation id, arguments as params `"0"`, `"1"`, ...
/// - anything else → empty message
///
/// Style is exported onto the new message, then children are appended in order.
pub(crate) fn component_to_message(component: &Component, options: &Options) -> Message {
    let mut message = match component.content() {
        ComponentContent::Text(text) if !text.is_empty() => Message::raw(text.as_str()),
        ComponentContent::Text(_) => Message::empty(),
        ComponentContent::Translatable { key, args } => {
            let mut message = Message::translation(key.as_str());
            for (index, arg) in args.iter().enumerate() {
                message.param(index.to_string(), argument_to_param(arg, options));
            }
            message
        }
        ComponentContent::Keybind(key) => {
            tracing::trace!(key = key.as_str(), "keybind has no message equivalent, encoding empty");
            Message::empty()
        }
    };

    style::export(component.style(), &mut message, options);

    for child in component.children() {
        message.insert(component_to_message(child, options));
    }

    message
}

/// Convert one translation argument to its wire param.
///
/// Numbers without a wire type of their own are widened to double, never
/// narrowed. Characters go out as strings.
fn argument_to_param(arg: &TranslationArgument, options: &Options) -> ParamValue {
    let param = match arg {
        TranslationArgument::Bool(b) => ParamValue::Bool(*b),
        TranslationArgument::Int(i) => ParamValue::Int(*i),
        TranslationArgument::Long(l) => ParamValue::Long(*l),
        TranslationArgument::Float(f) => ParamValue::Float(*f),
        TranslationArgument::Double(d) => ParamValue::Double(*d),
        TranslationArgument::Short(s) => ParamValue::Double(f64::from(*s)),
        TranslationArgument::Byte(b) => ParamValue::Double(f64::from(*b)),
        TranslationArgument::Str(s) => ParamValue::String(s.clone()),
        TranslationArgument::Char(c) => ParamValue::String(c.to_string()),
        TranslationArgument::Component(c) => {
            ParamValue::Message(Box::new(component_to_message(c, options)))
        }
    };
    if arg.kind() != param.type_name() && !matches!(param, ParamValue::Message(_)) {
        tracing::trace!(
            from = arg.kind(),
            to = param.type_name(),
            "argument has no wire type of its own, converting"
        );
    }
    param
}
