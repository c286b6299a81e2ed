use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("unknown dataset label '{label}', expected one of: {expected}")]
    UnknownLabel { label: String, expected: String },
    #[error("no dataset option has the path '{value}'")]
    UnknownValue { value: String },
}
