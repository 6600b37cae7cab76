//! YAML front matter

use crate::ast::{Meta, MetaValue};
use crate::error::FormatError;
use serde_yaml::{Mapping, Value};

/// `---` delimited block with one entry per metadata key.
///
/// Strings and booleans are scalars and lists become sequences. Strings that
/// YAML would read back as another type (`1984`, `0x10`, `true`) are quoted.
/// Inline, block and map values have no flat form and are rejected.
pub fn write_front_matter(meta: &Meta) -> Result<String, FormatError> {
    let mut mapping = Mapping::new();
    for (key, value) in meta {
        mapping.insert(Value::String(key.clone()), yaml_value(key, value)?);
    }
    let body = serde_yaml::to_string(&Value::Mapping(mapping))
        .map_err(|e| FormatError::FrontMatter(e.to_string()))?;
    Ok(format!("---\n{body}---\n"))
}

fn yaml_value(key: &str, value: &MetaValue) -> Result<Value, FormatError> {
    match value {
        MetaValue::MetaString(text) => Ok(Value::String(text.clone())),
        MetaValue::MetaBool(flag) => Ok(Value::Bool(*flag)),
        MetaValue::MetaList(items) => items
            .iter()
            .map(|item| yaml_value(key, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Sequence),
        other => Err(FormatError::unsupported(format!(
            "{} in front matter key '{key}'",
            other.tag()
        ))),
    }
}
