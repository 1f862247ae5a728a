//! Named dashboard capabilities and the roles each one demands.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::Requirement;

/// Guarded views and actions offered by the dashboard.
///
/// Each capability maps to exactly one requirement through
/// [`Capability::requirement`]; presentation code asks the session model
/// about a capability instead of testing roles inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Open the landing dashboard.
    ViewDashboard,
    /// Open the task board.
    ViewTasks,
    /// Open the announcements feed.
    ViewAnnouncements,
    /// Open the team calendar.
    ViewCalendar,
    /// Open personal settings.
    ViewSettings,
    /// Open user administration.
    ViewUsers,
    /// Open reports and analytics.
    ViewReports,
    /// Create a task.
    CreateTask,
    /// Publish an announcement.
    CreateAnnouncement,
    /// Schedule a calendar event.
    CreateEvent,
    /// See the team overview panel on the dashboard.
    ViewTeamOverview,
    /// Open the administrative settings tab.
    ManageAdminSettings,
    /// Invite a new user account.
    AddUser,
    /// Add a member from the team overview panel.
    AddTeamMember,
    /// Export report data.
    ExportReports,
    /// Run data management operations from administrative settings.
    ManageData,
    /// Remove a user account. Executive manager accounts are never removable;
    /// see [`Role::is_removable`](crate::domain::Role::is_removable).
    RemoveUser,
}

/// Error returned when a string does not name a known [`Capability`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown capability '{value}'")]
pub struct CapabilityParseError {
    value: String,
}

impl Capability {
    /// Every capability in declaration order.
    pub const ALL: [Self; 17] = [
        Self::ViewDashboard,
        Self::ViewTasks,
        Self::ViewAnnouncements,
        Self::ViewCalendar,
        Self::ViewSettings,
        Self::ViewUsers,
        Self::ViewReports,
        Self::CreateTask,
        Self::CreateAnnouncement,
        Self::CreateEvent,
        Self::ViewTeamOverview,
        Self::ManageAdminSettings,
        Self::AddUser,
        Self::AddTeamMember,
        Self::ExportReports,
        Self::ManageData,
        Self::RemoveUser,
    ];

    /// Roles demanded by this capability; `None` when signing in is enough.
    #[must_use]
    pub const fn requirement(self) -> Option<Requirement> {
        match self {
            Self::ViewDashboard
            | Self::ViewTasks
            | Self::ViewAnnouncements
            | Self::ViewCalendar
            | Self::ViewSettings => None,
            Self::ViewUsers
            | Self::ViewReports
            | Self::CreateTask
            | Self::CreateAnnouncement
            | Self::CreateEvent
            | Self::ViewTeamOverview
            | Self::ManageAdminSettings
            | Self::RemoveUser => Some(Requirement::MANAGEMENT),
            Self::AddUser | Self::AddTeamMember | Self::ExportReports | Self::ManageData => {
                Some(Requirement::EXECUTIVE)
            }
        }
    }

    /// Kebab-case name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ViewDashboard => "view-dashboard",
            Self::ViewTasks => "view-tasks",
            Self::ViewAnnouncements => "view-announcements",
            Self::ViewCalendar => "view-calendar",
            Self::ViewSettings => "view-settings",
            Self::ViewUsers => "view-users",
            Self::ViewReports => "view-reports",
            Self::CreateTask => "create-task",
            Self::CreateAnnouncement => "create-announcement",
            Self::CreateEvent => "create-event",
            Self::ViewTeamOverview => "view-team-overview",
            Self::ManageAdminSettings => "manage-admin-settings",
            Self::AddUser => "add-user",
            Self::AddTeamMember => "add-team-member",
            Self::ExportReports => "export-reports",
            Self::ManageData => "manage-data",
            Self::RemoveUser => "remove-user",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = CapabilityParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|capability| capability.as_str() == wanted)
            .ok_or_else(|| CapabilityParseError {
                value: value.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{Identity, Role, Session, authorize};
    use rstest::rstest;

    fn allowed(role: Role, capability: Capability) -> bool {
        let identity =
            Identity::try_from_parts("7", "Capability Check", "check@example.com", role, None)
                .expect("fixture identity");
        authorize(&Session::Authenticated(identity), capability.requirement()).is_allowed()
    }

    #[rstest]
    #[case(Capability::ViewTasks, [true, true, true])]
    #[case(Capability::ViewSettings, [true, true, true])]
    #[case(Capability::ViewUsers, [true, true, false])]
    #[case(Capability::ViewReports, [true, true, false])]
    #[case(Capability::CreateTask, [true, true, false])]
    #[case(Capability::CreateAnnouncement, [true, true, false])]
    #[case(Capability::CreateEvent, [true, true, false])]
    #[case(Capability::ManageAdminSettings, [true, true, false])]
    #[case(Capability::RemoveUser, [true, true, false])]
    #[case(Capability::AddUser, [true, false, false])]
    #[case(Capability::ExportReports, [true, false, false])]
    #[case(Capability::ManageData, [true, false, false])]
    fn capability_matrix(#[case] capability: Capability, #[case] expected: [bool; 3]) {
        for (role, want) in Role::ALL.into_iter().zip(expected) {
            assert_eq!(allowed(role, capability), want, "{capability} for {role}");
        }
    }

    #[rstest]
    fn names_round_trip() {
        for capability in Capability::ALL {
            assert_eq!(capability.as_str().parse::<Capability>(), Ok(capability));
        }
    }

    #[rstest]
    fn unknown_names_are_rejected() {
        let err = "delete-everything"
            .parse::<Capability>()
            .expect_err("unknown capability");
        assert_eq!(err.to_string(), "unknown capability 'delete-everything'");
    }
}
