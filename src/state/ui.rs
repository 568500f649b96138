//! UI selector state for the dashboard tab bars.
//!
//! Tabs are tagged enums dispatched through `match`, so an invalid tab value
//! cannot exist at runtime.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs available on the employee dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmployeeTab {
    #[default]
    Home,
    Attendance,
    Leaves,
    Holidays,
    Profile,
}

impl EmployeeTab {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Attendance,
        Self::Leaves,
        Self::Holidays,
        Self::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Attendance => "Attendance",
            Self::Leaves => "Leaves",
            Self::Holidays => "Holidays",
            Self::Profile => "Profile",
        }
    }
}

/// Tabs available on the HR admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HrTab {
    #[default]
    Dashboard,
    Employees,
    Attendance,
    Leaves,
    Holidays,
}

impl HrTab {
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Employees,
        Self::Attendance,
        Self::Leaves,
        Self::Holidays,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Employees => "Employees",
            Self::Attendance => "Attendance",
            Self::Leaves => "Leaves",
            Self::Holidays => "Holidays",
        }
    }
}
