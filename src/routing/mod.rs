//! Client-side routing rules.
//!
//! The guard itself is a pure function over (auth view, requested route) so
//! it can be exercised natively; the reactive wiring lives in `app`.

pub mod guard;
