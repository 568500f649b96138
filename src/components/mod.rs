//! Shared leaf components used by both dashboards.

pub mod alert;
pub mod photo_capture;
pub mod spinner;
pub mod stat_card;
pub mod tab_button;
