use regex::Regex;
use serde_json::{Map, Value};

use crate::core::{PresentationModel, Renderer};

/// Substitutes `{{field}}` tags in the template with values from the
/// serialized presentation model. Strings render verbatim, other values as
/// compact JSON, unknown tags as nothing.
pub struct TagRenderer {
    tag: Regex,
}

impl TagRenderer {
    pub fn new() -> Self {
        Self {
            tag: Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap(),
        }
    }
}

impl Default for TagRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TagRenderer {
    fn render(&self, template: &str, model: &PresentationModel) -> String {
        let fields = match serde_json::to_value(model) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        self.tag
            .replace_all(template, |caps: &regex::Captures<'_>| {
                fields.get(&caps[1]).map(field_text).unwrap_or_default()
            })
            .into_owned()
    }
}

fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
