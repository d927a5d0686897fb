//! Screens
//!
//! One module per screen. Every tenant-scoped screen follows the same loop:
//! filter state drives a list fetch, row actions open a modal pre-filled from
//! the row, and a submit mutates then re-fetches.

mod admins;
mod attendance;
mod contacts;
mod invoices;
mod leave_applications;
mod leave_policies;
mod leave_types;
mod locations;
mod login;
mod shifts;
mod visits;
mod week_offs;

pub use login::LoginPage;

use admins::AdminsPage;
use attendance::AttendancePage;
use contacts::ContactsPage;
use invoices::InvoicesPage;
use leave_applications::LeaveApplicationsPage;
use leave_policies::LeavePoliciesPage;
use leave_types::LeaveTypesPage;
use locations::LocationsPage;
use shifts::ShiftsPage;
use visits::VisitsPage;
use week_offs::WeekOffsPage;

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Contacts,
    Visits,
    Attendance,
    LeaveTypes,
    LeavePolicies,
    LeaveApplications,
    Shifts,
    WeekOffs,
    Locations,
    Invoices,
    Admins,
}

impl Screen {
    pub const ALL: [Screen; 11] = [
        Screen::Contacts,
        Screen::Visits,
        Screen::Attendance,
        Screen::LeaveTypes,
        Screen::LeavePolicies,
        Screen::LeaveApplications,
        Screen::Shifts,
        Screen::WeekOffs,
        Screen::Locations,
        Screen::Invoices,
        Screen::Admins,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Contacts => "Contacts",
            Screen::Visits => "Visits",
            Screen::Attendance => "Attendance",
            Screen::LeaveTypes => "Leave Types",
            Screen::LeavePolicies => "Leave Policies",
            Screen::LeaveApplications => "Leave Applications",
            Screen::Shifts => "Shifts",
            Screen::WeekOffs => "Week Offs",
            Screen::Locations => "Locations",
            Screen::Invoices => "Invoices",
            Screen::Admins => "Admins",
        }
    }

    /// Admin management belongs to organizations only.
    pub fn is_visible(&self, is_organization: bool) -> bool {
        match self {
            Screen::Admins => is_organization,
            _ => true,
        }
    }

    pub fn render(self) -> AnyView {
        match self {
            Screen::Contacts => view! { <ContactsPage /> }.into_any(),
            Screen::Visits => view! { <VisitsPage /> }.into_any(),
            Screen::Attendance => view! { <AttendancePage /> }.into_any(),
            Screen::LeaveTypes => view! { <LeaveTypesPage /> }.into_any(),
            Screen::LeavePolicies => view! { <LeavePoliciesPage /> }.into_any(),
            Screen::LeaveApplications => view! { <LeaveApplicationsPage /> }.into_any(),
            Screen::Shifts => view! { <ShiftsPage /> }.into_any(),
            Screen::WeekOffs => view! { <WeekOffsPage /> }.into_any(),
            Screen::Locations => view! { <LocationsPage /> }.into_any(),
            Screen::Invoices => view! { <InvoicesPage /> }.into_any(),
            Screen::Admins => view! { <AdminsPage /> }.into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admins_screen_only_for_organizations() {
        let for_admin: Vec<Screen> = Screen::ALL.into_iter().filter(|s| s.is_visible(false)).collect();
        assert!(!for_admin.contains(&Screen::Admins));
        assert_eq!(for_admin.len(), Screen::ALL.len() - 1);
        assert!(Screen::ALL.iter().all(|s| s.is_visible(true)));
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<&str> = Screen::ALL.iter().map(Screen::label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Screen::ALL.len());
    }
}
