//! Sidebar navigation entries filtered by the current session.

use crate::domain::{Session, authorize};

use super::routes::Route;

/// One entry of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    /// Destination view.
    pub route: Route,
    /// Text shown for the entry.
    pub label: &'static str,
}

const MENU: [MenuEntry; 7] = [
    MenuEntry {
        route: Route::Dashboard,
        label: "Dashboard",
    },
    MenuEntry {
        route: Route::Tasks,
        label: "Tasks",
    },
    MenuEntry {
        route: Route::Announcements,
        label: "Announcements",
    },
    MenuEntry {
        route: Route::Calendar,
        label: "Calendar",
    },
    MenuEntry {
        route: Route::Users,
        label: "User Management",
    },
    MenuEntry {
        route: Route::Reports,
        label: "Reports",
    },
    MenuEntry {
        route: Route::Settings,
        label: "Settings",
    },
];

/// Menu entries the session may open, in display order.
///
/// Anonymous sessions get an empty menu.
///
/// # Examples
/// ```
/// use teamboard::domain::Session;
/// use teamboard::inbound::navigation_menu;
///
/// assert!(navigation_menu(&Session::Anonymous).is_empty());
/// ```
#[must_use]
pub fn navigation_menu(session: &Session) -> Vec<MenuEntry> {
    MENU.into_iter()
        .filter(|entry| authorize(session, entry.route.requirement()).is_allowed())
        .collect()
}
