//! Domain DTOs for the todo API.
//!
//! # Design
//! The same types are used on both sides of the HTTP boundary: the server
//! stores and returns `Todo`, and accepts `NewTodo` / `TodoPatch` as request
//! bodies; the client serializes the payloads and decodes the responses.
//! Field constraints live in `validate`.

use serde::{Deserialize, Serialize};

use crate::validate::{self, ValidationError};

/// A single todo item as held by the store and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub detail: Option<String>,
    pub done: bool,
}

/// Request payload for creating a new todo. `done` is not accepted here;
/// every new todo starts out not done.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub detail: Option<String>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::title(&self.title)?;
        if let Some(detail) = &self.detail {
            validate::detail(detail)?;
        }
        Ok(())
    }

    /// Build the stored record once the store has picked an id.
    pub fn into_todo(self, id: i64) -> Todo {
        Todo {
            id,
            title: self.title,
            detail: self.detail,
            done: false,
        }
    }
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields (and explicit `null`s) leave the
/// stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl TodoPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            validate::title(title)?;
        }
        if let Some(detail) = &self.detail {
            validate::detail(detail)?;
        }
        Ok(())
    }

    /// Merge the supplied fields into `todo`. The id is never touched.
    ///
    /// Callers validate first; this only copies values across.
    pub fn apply_to(self, todo: &mut Todo) {
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(detail) = self.detail {
            todo.detail = Some(detail);
        }
        if let Some(done) = self.done {
            todo.done = done;
        }
    }
}

/// Body of the liveness probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
