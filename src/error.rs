//! Error types for registry writes and editor input.

/// Host input that a value type's editor refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, got {found}")]
pub struct InputError {
    /// What the editor accepts, e.g. `"number"`.
    pub expected: &'static str,
    /// Short description of what arrived instead.
    pub found: String,
}

impl InputError {
    /// Build an error describing the JSON input that was rejected.
    #[must_use]
    pub fn rejected(expected: &'static str, input: &serde_json::Value) -> Self {
        let found = match input {
            serde_json::Value::Null => "null".to_owned(),
            serde_json::Value::Bool(b) => format!("bool {b}"),
            serde_json::Value::Number(n) => format!("number {n}"),
            serde_json::Value::String(s) => format!("string {s:?}"),
            serde_json::Value::Array(_) => "array".to_owned(),
            serde_json::Value::Object(_) => "object".to_owned(),
        };
        Self { expected, found }
    }
}

/// Errors raised by panel edits and registry write-back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TweakError {
    /// No site has declared this label yet.
    #[error("unknown tunable label: {0}")]
    UnknownLabel(String),
    /// A value of the wrong concrete type reached a cell.
    #[error("type mismatch for {label}: declared {expected}, got {found}")]
    TypeMismatch {
        label: String,
        expected: &'static str,
        found: &'static str,
    },
    /// The editor rejected the host input.
    #[error("invalid input for {label}: {source}")]
    InvalidInput {
        label: String,
        #[source]
        source: InputError,
    },
}
