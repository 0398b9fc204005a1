//! JSON form of wire messages.
//!
//! ```json
//! {
//!   "messageId": "chat.kill",
//!   "params": {
//!     "0": {"type": "string", "value": "Steve"},
//!     "1": {"type": "message", "value": {"rawText": "Zombie"}}
//!   },
//!   "color": "#FF0000",
//!   "bold": true,
//!   "children": [{"rawText": "!"}]
//! }
//! ```
//!
//! Unset fields are omitted. Params carry a `type` tag so numeric widths
//! survive the trip.

mod error;

use serde_json::{Map, Value as JsonValue, json};

use crate::message::{FormattedStyle, MaybeBool, Message, ParamValue};

pub use error::WireError;

// =============================================================================
// Message → JSON
// =============================================================================

/// Serialize a message tree to JSON.
pub fn message_to_json(message: &Message) -> JsonValue {
    let mut obj = Map::new();

    if let Some(text) = message.raw_text() {
        obj.insert("rawText".into(), json!(text));
    }
    if let Some(id) = message.message_id() {
        obj.insert("messageId".into(), json!(id));
    }

    if !message.params().is_empty() {
        let params: Map<String, JsonValue> = message
            .params()
            .iter()
            .map(|(key, value)| (key.clone(), param_to_json(value)))
            .collect();
        obj.insert("params".into(), JsonValue::Object(params));
    }

    let style = message.formatted();
    if let Some(color) = &style.color {
        obj.insert("color".into(), json!(color));
    }
    for (field, flag) in flag_fields(style) {
        if let Some(value) = flag.to_option() {
            obj.insert(field.into(), json!(value));
        }
    }
    if let Some(link) = &style.link {
        obj.insert("link".into(), json!(link));
    }

    if !message.children().is_empty() {
        let children = message.children().iter().map(message_to_json).collect();
        obj.insert("children".into(), JsonValue::Array(children));
    }

    JsonValue::Object(obj)
}

/// Serialize a message tree to a JSON string.
pub fn to_string(message: &Message) -> String {
    message_to_json(message).to_string()
}

fn flag_fields(style: &FormattedStyle) -> [(&'static str, MaybeBool); 4] {
    [
        ("bold", style.bold),
        ("italic", style.italic),
        ("underlined", style.underlined),
        ("monospace", style.monospace),
    ]
}

fn param_to_json(param: &ParamValue) -> JsonValue {
    let value = match param {
        ParamValue::Bool(b) => json!(b),
        ParamValue::Int(i) => json!(i),
        ParamValue::Long(l) => json!(l),
        ParamValue::Float(f) => float_to_json(f64::from(*f)),
        ParamValue::Double(d) => float_to_json(*d),
        ParamValue::String(s) => json!(s),
        ParamValue::Message(m) => message_to_json(m),
    };
    json!({"type": param.type_name(), "value": value})
}

/// JSON has no NaN or infinities; those go out as strings.
fn float_to_json(value: f64) -> JsonValue {
    if value.is_nan() {
        json!("NaN")
    } else if value == f64::INFINITY {
        json!("Infinity")
    } else if value == f64::NEG_INFINITY {
        json!("-Infinity")
    } else {
        json!(value)
    }
}

// =============================================================================
// JSON → Message
// =============================================================================

/// Deserialize a message tree from JSON.
///
/// Unknown top-level fields are ignored.
pub fn message_from_json(json: &JsonValue) -> Result<Message, WireError> {
    let obj = json.as_object().ok_or(WireError::NotObject(json_type_name(json)))?;

    let mut message = Message::empty();
    message.set_raw_text(optional_string(obj, "rawText")?);
    message.set_message_id(optional_string(obj, "messageId")?);

    if let Some(params) = obj.get("params").filter(|v| !v.is_null()) {
        let params = params.as_object().ok_or_else(|| invalid("params", "object", params))?;
        for (key, entry) in params {
            message.param(key.as_str(), param_from_json(key, entry)?);
        }
    }

    message.set_formatted(FormattedStyle {
        color: optional_string(obj, "color")?,
        bold: optional_flag(obj, "bold")?,
        italic: optional_flag(obj, "italic")?,
        underlined: optional_flag(obj, "underlined")?,
        monospace: optional_flag(obj, "monospace")?,
        link: optional_string(obj, "link")?,
    });

    if let Some(children) = obj.get("children").filter(|v| !v.is_null()) {
        let children = children
            .as_array()
            .ok_or_else(|| invalid("children", "array", children))?;
        for child in children {
            message.insert(message_from_json(child)?);
        }
    }

    Ok(message)
}

/// Deserialize a message tree from a JSON string.
pub fn from_str(s: &str) -> Result<Message, WireError> {
    let json: JsonValue = serde_json::from_str(s)?;
    message_from_json(&json)
}

fn param_from_json(key: &str, entry: &JsonValue) -> Result<ParamValue, WireError> {
    let missing = |field| WireError::MissingParamField {
        key: key.to_string(),
        field,
    };
    let tag = entry
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| missing("type"))?;
    let value = entry.get("value").ok_or_else(|| missing("value"))?;

    let bad = |type_name| WireError::InvalidParam {
        key: key.to_string(),
        type_name,
    };

    match tag {
        "bool" => value.as_bool().map(ParamValue::Bool).ok_or_else(|| bad("bool")),
        "int" => value
            .as_i64()
            .and_then(|i| i32::try_from(i).ok())
            .map(ParamValue::Int)
            .ok_or_else(|| bad("int")),
        "long" => value.as_i64().map(ParamValue::Long).ok_or_else(|| bad("long")),
        "float" => float_from_json(value)
            .map(|f| ParamValue::Float(f as f32))
            .ok_or_else(|| bad("float")),
        "double" => float_from_json(value).map(ParamValue::Double).ok_or_else(|| bad("double")),
        "string" => value
            .as_str()
            .map(|s| ParamValue::String(s.to_string()))
            .ok_or_else(|| bad("string")),
        "message" => Ok(ParamValue::Message(Box::new(message_from_json(value)?))),
        other => Err(WireError::UnknownParamType {
            key: key.to_string(),
            tag: other.to_string(),
        }),
    }
}

fn float_from_json(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => match s.as_str() {
            "NaN" => Some(f64::NAN),
            "Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            _ => None,
        },
        _ => None,
    }
}

fn optional_string(
    obj: &Map<String, JsonValue>,
    field: &'static str,
) -> Result<Option<String>, WireError> {
    match obj.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(invalid(field, "string", other)),
    }
}

fn optional_flag(obj: &Map<String, JsonValue>, field: &'static str) -> Result<MaybeBool, WireError> {
    match obj.get(field) {
        None | Some(JsonValue::Null) => Ok(MaybeBool::Null),
        Some(JsonValue::Bool(b)) => Ok(MaybeBool::from_bool(*b)),
        Some(other) => Err(invalid(field, "boolean", other)),
    }
}

fn invalid(field: &'static str, expected: &'static str, found: &JsonValue) -> WireError {
    WireError::InvalidField {
        field,
        expected,
        found: json_type_name(found),
    }
}

fn json_type_name(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
