//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. `session` is the authoritative authentication state and
//! the only piece that touches durable storage (via `util::storage`); `ui`
//! is purely ephemeral tab selection.

pub mod session;
pub mod ui;
