use serde::Deserialize;
use serde_json::Value;

/// Tree of translatable strings for one page variant and language.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable(Value);

impl TranslationTable {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Look up a dot-path key such as `nav.home`.
    ///
    /// Strings are returned as-is, numbers and booleans as their JSON text.
    /// Anything else (objects, arrays, null, a missing segment, an empty key)
    /// is not found.
    pub fn resolve(&self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }

        let mut current = &self.0;
        for segment in key.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                _ => return None,
            };
        }

        match current {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}
