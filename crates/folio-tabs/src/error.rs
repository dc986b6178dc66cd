//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabError {
    #[error("Unknown tab: {0}")]
    Unknown(String),

    #[error("Tab position out of range: {0}")]
    OutOfRange(usize),

    #[error("Invalid phase transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}
