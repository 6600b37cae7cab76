//! Shape checks for positional pandoc payloads

use crate::error::SchemaError;
use serde_json::Value;

/// A `{"t": tag, "c": payload}` object, split open.
pub(super) struct Node<'a> {
    pub tag: &'a str,
    pub payload: Option<&'a Value>,
}

impl<'a> Node<'a> {
    /// The payload, which must be present.
    pub fn payload(&self) -> Result<&'a Value, SchemaError> {
        self.payload.ok_or_else(|| SchemaError::MissingField {
            node: self.tag.to_string(),
            field: "c",
        })
    }

    /// Fails unless the node carries no payload.
    pub fn expect_empty(&self) -> Result<(), SchemaError> {
        match self.payload {
            None => Ok(()),
            Some(_) => Err(SchemaError::UnexpectedPayload {
                node: self.tag.to_string(),
            }),
        }
    }

    /// The payload as an array of exactly `N` elements.
    pub fn fields<const N: usize>(&self) -> Result<[&'a Value; N], SchemaError> {
        fields(self.payload()?, self.tag)
    }
}

pub(super) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_error(node: &str, expected: &'static str, value: &Value) -> SchemaError {
    SchemaError::Type {
        node: node.to_string(),
        expected,
        found: json_type(value),
    }
}

/// Split a tagged object. `c: null` counts as absent.
pub(super) fn node<'a>(value: &'a Value, kind: &'static str) -> Result<Node<'a>, SchemaError> {
    let object = value
        .as_object()
        .ok_or_else(|| type_error(kind, "object", value))?;
    let tag = object
        .get("t")
        .ok_or(SchemaError::MissingField {
            node: kind.to_string(),
            field: "t",
        })?
        .as_str()
        .ok_or_else(|| type_error(kind, "string tag", value))?;
    let payload = object.get("c").filter(|c| !c.is_null());
    Ok(Node { tag, payload })
}

pub(super) fn fields<'a, const N: usize>(
    value: &'a Value,
    node: &str,
) -> Result<[&'a Value; N], SchemaError> {
    let items = array(value, node)?;
    if items.len() != N {
        return Err(SchemaError::Arity {
            node: node.to_string(),
            expected: N,
            found: items.len(),
        });
    }
    Ok(std::array::from_fn(|i| &items[i]))
}

pub(super) fn array<'a>(value: &'a Value, node: &str) -> Result<&'a [Value], SchemaError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| type_error(node, "array", value))
}

pub(super) fn string(value: &Value, node: &str) -> Result<String, SchemaError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| type_error(node, "string", value))
}

pub(super) fn boolean(value: &Value, node: &str) -> Result<bool, SchemaError> {
    value.as_bool().ok_or_else(|| type_error(node, "bool", value))
}

pub(super) fn integer(value: &Value, node: &str) -> Result<i64, SchemaError> {
    value
        .as_i64()
        .ok_or_else(|| type_error(node, "integer", value))
}

pub(super) fn number(value: &Value, node: &str) -> Result<f64, SchemaError> {
    value.as_f64().ok_or_else(|| type_error(node, "number", value))
}

/// An integer that must be at least `min`.
pub(super) fn bounded(value: &Value, node: &str, field: &str, min: i64) -> Result<u32, SchemaError> {
    let raw = integer(value, node)?;
    if raw < min {
        return Err(SchemaError::InvalidValue {
            node: node.to_string(),
            detail: format!("{field} must be >= {min}, got {raw}"),
        });
    }
    u32::try_from(raw).map_err(|_| SchemaError::InvalidValue {
        node: node.to_string(),
        detail: format!("{field} {raw} out of range"),
    })
}

/// Decode every element of an array with `decode`.
pub(super) fn list<T>(
    value: &Value,
    node: &str,
    decode: impl Fn(&Value) -> Result<T, SchemaError>,
) -> Result<Vec<T>, SchemaError> {
    array(value, node)?.iter().map(decode).collect()
}
