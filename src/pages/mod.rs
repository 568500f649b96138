//! Top-level routed views.

pub mod employee_dashboard;
pub mod forgot_password;
pub mod hr_dashboard;
pub mod login;
