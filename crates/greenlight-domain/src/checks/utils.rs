use greenlight_types::{Reason, ReasonKind};
use serde_json::Value;

pub fn reason(kind: ReasonKind, rule_id: &str, code: &str, message: String, data: Value) -> Reason {
    Reason {
        kind,
        rule_id: rule_id.to_string(),
        code: code.to_string(),
        message,
        data,
    }
}

/// Uppercase the first character, leave the rest untouched ("tree-nuts" -> "Tree-nuts").
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
