use super::*;

#[test]
fn employee_tabs_default_to_home() {
    assert_eq!(EmployeeTab::default(), EmployeeTab::Home);
}

#[test]
fn hr_tabs_default_to_dashboard() {
    assert_eq!(HrTab::default(), HrTab::Dashboard);
}

#[test]
fn tab_labels_are_distinct() {
    let labels: std::collections::BTreeSet<_> =
        EmployeeTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels.len(), EmployeeTab::ALL.len());

    let labels: std::collections::BTreeSet<_> = HrTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels.len(), HrTab::ALL.len());
}
