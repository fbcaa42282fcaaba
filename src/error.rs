use thiserror::Error;

use crate::Address;

// Everything here is recoverable: the operation that fails has not touched
// the cache or the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemError {
    #[error("address {address} is outside of memory (size {size})")]
    OutOfRange { address: Address, size: usize },

    #[error("invalid memory address {address}")]
    InvalidAddress { address: Address },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{command} is missing its {operand} operand")]
    MissingOperand { command: &'static str, operand: &'static str },

    #[error("bad {operand} operand for {command}: {text}")]
    BadOperand { command: &'static str, operand: &'static str, text: String },

    #[error("unexpected trailing input after {command}: {text}")]
    Trailing { command: &'static str, text: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    ZeroDimension { name: &'static str },

    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
