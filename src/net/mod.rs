//! Network layer: payload models, the shared error type, and the REST
//! client with its bearer-token and 401-teardown behavior.

pub mod api;
pub mod error;
pub mod types;
