//! Stateless request builder and response parser for the todo API.
//!
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Health, NewTodo, Todo, TodoPatch};

/// Client for the todo API. Holds only the base URL.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_health(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/health")
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/todos")
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/todos/{id}"))
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/todos", input)
    }

    pub fn build_update_todo(&self, id: i64, patch: &TodoPatch) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, &format!("/todos/{id}"), patch)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/todos/{id}"))
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<Health, ApiError> {
        decode(response, 200)
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        decode(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        decode(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        decode(response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        decode(response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut req = self.request(method, path);
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        req.body = Some(body);
        Ok(req)
    }
}

fn decode<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        s if s == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        422 => Err(ApiError::Validation(response.body.clone())),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
