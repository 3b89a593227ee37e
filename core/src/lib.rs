//! Shared core of the todo service: domain types, field validation and a
//! synchronous API client.
//!
//! # Overview
//! The server crate stores and returns these types; the client builds
//! `HttpRequest` values and parses `HttpResponse` values without touching the
//! network (host-does-IO pattern).
//!
//! # Design
//! - `Todo` is the only entity. `NewTodo` and `TodoPatch` are the create and
//!   merge-patch payloads, and both validate against the same rules.
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Nothing here does I/O, so every item is testable without a runtime.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod validate;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Health, NewTodo, Todo, TodoPatch};
pub use validate::ValidationError;
