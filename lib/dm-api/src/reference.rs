//! Reference expressions between resources
//!
//! A reference has the form `$(ref.<resource>.<field>)` and is resolved by
//! the provisioning engine to a runtime attribute of another resource in the
//! same deployment. This module only builds and locates the tokens; it never
//! resolves them.

const PREFIX: &str = "$(ref.";

/// A reference found inside a string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reference<'a> {
    /// Name of the referenced resource
    pub resource: &'a str,
    /// Attribute path on the referenced resource (e.g., "selfLink")
    pub field: &'a str,
}

/// Build the reference expression for `field` of `resource`
pub fn reference(resource: &str, field: &str) -> String {
    format!("{}{}.{})", PREFIX, resource, field)
}

/// All well-formed references embedded in `text`, in order of appearance
pub fn references_in(text: &str) -> Vec<Reference<'_>> {
    let mut found = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(PREFIX) {
        let body = &rest[start + PREFIX.len()..];
        let Some(end) = body.find(')') else {
            break;
        };

        if let Some((resource, field)) = body[..end].split_once('.') {
            if !resource.is_empty() && !field.is_empty() {
                found.push(Reference { resource, field });
            }
        }
        rest = &body[end + 1..];
    }

    found
}

/// All references in any string nested inside `value`
pub fn references_in_value(value: &serde_json::Value) -> Vec<Reference<'_>> {
    let mut found = Vec::new();
    collect(value, &mut found);
    found
}

fn collect<'a>(value: &'a serde_json::Value, found: &mut Vec<Reference<'a>>) {
    match value {
        serde_json::Value::String(s) => found.extend(references_in(s)),
        serde_json::Value::Array(items) => items.iter().for_each(|v| collect(v, found)),
        serde_json::Value::Object(map) => map.values().for_each(|v| collect(v, found)),
        _ => {}
    }
}
