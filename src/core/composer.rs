//! Message composition: sanitizing structured payloads and appending them
//! to a base message as exported JSON blocks
//!
//! Every function here is total. Values JSON cannot carry faithfully are
//! turned into their display text instead of failing.

use super::data_value::DataValue;
use serde_json::{Map, Number, Value};

/// Largest integer magnitude a double-precision consumer reads back exactly
/// (2^53). Numbers beyond it are exported as decimal strings.
pub const SAFE_INTEGER_LIMIT: u64 = 1 << 53;

/// Recursively convert a payload into a JSON value safe for export
///
/// - null, booleans and strings pass through
/// - numbers with a magnitude above [`SAFE_INTEGER_LIMIT`] become strings
/// - map keys become text, map values and sequence elements are sanitized
/// - anything else becomes its display text
///
/// ```
/// use lifecycle_logging::core::composer::sanitize;
/// use lifecycle_logging::DataValue;
/// use serde_json::json;
///
/// let big = 1_i64 << 60;
/// let value = DataValue::map().entry("key", big);
/// assert_eq!(sanitize(&value), json!({"key": big.to_string()}));
/// ```
pub fn sanitize(data: &DataValue) -> Value {
    match data {
        DataValue::Null => Value::Null,
        DataValue::Bool(b) => Value::Bool(*b),
        DataValue::String(s) => Value::String(s.clone()),
        DataValue::Int(i) => sanitize_int(*i),
        DataValue::Float(f) => sanitize_float(*f),
        DataValue::Seq(items) => Value::Array(items.iter().map(sanitize).collect()),
        DataValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.to_string(), sanitize(value)))
                .collect::<Map<String, Value>>(),
        ),
        DataValue::Other(text) => Value::String(text.clone()),
    }
}

fn sanitize_int(i: i128) -> Value {
    if i.unsigned_abs() > u128::from(SAFE_INTEGER_LIMIT) {
        return Value::String(i.to_string());
    }
    // Within ±2^53, so the narrowing is exact
    Value::Number(Number::from(i as i64))
}

fn sanitize_float(f: f64) -> Value {
    if !f.is_finite() || f.abs() > SAFE_INTEGER_LIMIT as f64 {
        return Value::String(f.to_string());
    }
    Number::from_f64(f)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(f.to_string()))
}

/// Render a sanitized value as a pretty-printed JSON block
pub fn export(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Append labeled payloads in order.
///
/// A map value is written as `\n{label}:\n{json}`. Any other value is
/// wrapped as `{label: value}` and written as `\n:{json}`, so the label only
/// survives inside the JSON block.
pub fn add_labeled_json(mut msg: String, labeled_data: &[(String, DataValue)]) -> String {
    for (label, data) in labeled_data {
        if data.is_map() {
            msg.push('\n');
            msg.push_str(label);
            msg.push_str(":\n");
            msg.push_str(&export(&sanitize(data)));
        } else {
            let wrapped = DataValue::map().entry(label.as_str(), data.clone());
            msg.push_str("\n:");
            msg.push_str(&export(&sanitize(&wrapped)));
        }
    }
    msg
}

/// Append unlabeled payloads. A sequence contributes one block per element,
/// any other value a single block.
pub fn add_unlabeled_json(mut msg: String, json_data: &DataValue) -> String {
    let blocks = match json_data {
        DataValue::Seq(items) => items.as_slice(),
        single => std::slice::from_ref(single),
    };

    for block in blocks {
        msg.push_str("\n:");
        msg.push_str(&export(&sanitize(block)));
    }
    msg
}

/// Append labeled then unlabeled payloads, skipping whichever is empty
pub fn add_json_data(
    msg: String,
    json_data: Option<&DataValue>,
    labeled_json_data: &[(String, DataValue)],
) -> String {
    let mut msg = msg;
    if !labeled_json_data.is_empty() {
        msg = add_labeled_json(msg, labeled_json_data);
    }

    if let Some(data) = json_data.filter(|data| !data.is_empty()) {
        msg = add_unlabeled_json(msg, data);
    }

    msg
}
