//! Knights client: HTTP API port and reqwest adapter.
//!
//! The domain's validated shapes are the request payloads; this crate only
//! carries them over the wire. Cancellation and timeout live entirely in
//! the client configuration.

mod api;
mod config;
mod error;
mod ports;

pub use api::HttpKnightsApi;
pub use config::{ApiConfig, BASE_URL_ENV_VAR, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use ports::KnightsApi;
