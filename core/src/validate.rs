//! Field constraints for todo payloads.
//!
//! Lengths are counted in characters, not bytes, so a title of fifty
//! multi-byte characters is accepted.

use serde::Serialize;
use thiserror::Error;

pub const TITLE_MAX_CHARS: usize = 50;
pub const DETAIL_MAX_CHARS: usize = 200;

/// A payload field that broke one of its constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub fn title(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len == 0 {
        return Err(ValidationError::new("title", "must not be empty"));
    }
    if len > TITLE_MAX_CHARS {
        return Err(ValidationError::new(
            "title",
            format!("must be at most {TITLE_MAX_CHARS} characters, got {len}"),
        ));
    }
    Ok(())
}

pub fn detail(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > DETAIL_MAX_CHARS {
        return Err(ValidationError::new(
            "detail",
            format!("must be at most {DETAIL_MAX_CHARS} characters, got {len}"),
        ));
    }
    Ok(())
}
