/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public console adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod poll;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    GingerClient,
    GingerError,
    Result,
};

// Re-export the task poller
pub use poll::{
    DEFAULT_MAX_ATTEMPTS,
    DEFAULT_POLL_INTERVAL,
    TaskPoller,
    TaskSource,
};

// Re-export all wire types
pub use types::*;
