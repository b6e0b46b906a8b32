//! HTTP inbound adapter exposing the student REST endpoints.

pub mod envelope;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod students;

pub use error::ApiResult;
