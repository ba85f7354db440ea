use thiserror::Error;

/// Rejected attribute write. Numeric attributes never fail; unparsable
/// numbers fall back to the property default instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropertyError {
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),
    #[error("invalid value `{value}` for attribute `{name}`")]
    InvalidValue { name: String, value: String },
}
