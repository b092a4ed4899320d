/*
[INPUT]:  Console API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the console API schema changes or new types are added
*/

use serde::{Deserialize, Serialize};

/// Body returned by a successful `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    #[serde(default)]
    pub groups: Vec<String>,
}

/// Error body the console attaches to non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub reason: String,
}
