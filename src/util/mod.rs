//! Small helpers: localStorage persistence and display formatting.

pub mod format;
pub mod storage;
