/*
[INPUT]:  HTTP client configuration and console endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod cioignore;
pub mod client;
pub mod error;
pub mod fcluns;
pub mod lunscan;
pub mod nwdevices;
pub mod session;
pub mod storagedevices;
pub mod tasks;

pub use client::{ClientConfig, GingerClient};
pub use error::{GingerError, Result};
