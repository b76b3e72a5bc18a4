use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Unit code that names no known kind
    InvalidUnit(u32),
    /// Text without a leading numeric literal
    Unparseable(String),
    /// Kind name that is not in the catalog
    UnknownKind(String),
    Config(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::InvalidUnit(code) => write!(f, "Invalid unit: code {}", code),
            UnitError::Unparseable(text) => write!(f, "Parse error: no number in '{}'", text),
            UnitError::UnknownKind(name) => write!(f, "Unknown unit kind: {}", name),
            UnitError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for UnitError {}
