//! Route table and guard.
//!
//! [`RouteGuard::resolve`] turns a requested path and the current
//! [`SessionState`] into a [`Navigation`]: show a loading state, render a
//! view, or redirect. Denials are soft: anonymous callers go to the login
//! view, callers lacking a role go back to the dashboard.

use std::fmt;

use crate::domain::{AuthDecision, Capability, DenyReason, Requirement, SessionState, authorize};

/// Views reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/login`
    Login,
    /// `/dashboard`, the default landing view.
    Dashboard,
    /// `/tasks`
    Tasks,
    /// `/announcements`
    Announcements,
    /// `/calendar`
    Calendar,
    /// `/users`
    Users,
    /// `/reports`
    Reports,
    /// `/settings`
    Settings,
    /// Catch-all for unknown paths.
    NotFound,
}

impl Route {
    /// Routes that require a signed-in session, in menu order.
    pub const PROTECTED: [Self; 7] = [
        Self::Dashboard,
        Self::Tasks,
        Self::Announcements,
        Self::Calendar,
        Self::Users,
        Self::Reports,
        Self::Settings,
    ];

    /// Canonical path. The catch-all reports `*`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Tasks => "/tasks",
            Self::Announcements => "/announcements",
            Self::Calendar => "/calendar",
            Self::Users => "/users",
            Self::Reports => "/reports",
            Self::Settings => "/settings",
            Self::NotFound => "*",
        }
    }

    /// Capability guarding the view, or `None` for public views.
    #[must_use]
    pub const fn capability(self) -> Option<Capability> {
        match self {
            Self::Login | Self::NotFound => None,
            Self::Dashboard => Some(Capability::ViewDashboard),
            Self::Tasks => Some(Capability::ViewTasks),
            Self::Announcements => Some(Capability::ViewAnnouncements),
            Self::Calendar => Some(Capability::ViewCalendar),
            Self::Users => Some(Capability::ViewUsers),
            Self::Reports => Some(Capability::ViewReports),
            Self::Settings => Some(Capability::ViewSettings),
        }
    }

    /// Whether the view needs a signed-in session.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        self.capability().is_some()
    }

    /// Role requirement of a protected view.
    #[must_use]
    pub const fn requirement(self) -> Option<Requirement> {
        match self.capability() {
            Some(capability) => capability.requirement(),
            None => None,
        }
    }

    /// Match a request path against the table.
    ///
    /// Matching ignores ASCII case, a query string, and a trailing slash.
    /// Returns `None` for the root path, which only ever redirects.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        let known = [Self::Login]
            .into_iter()
            .chain(Self::PROTECTED)
            .find(|route| route.path().eq_ignore_ascii_case(trimmed));
        Some(known.unwrap_or(Self::NotFound))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// What the presentation layer should do for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The session is still being restored; show a loading indicator.
    Loading,
    /// Show the view.
    Render(Route),
    /// Send the caller to another view.
    Redirect(Route),
    /// Send the caller to the login view, remembering where they were going.
    RedirectToLogin {
        /// Route the caller originally asked for.
        from: Route,
    },
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("loading"),
            Self::Render(route) => write!(f, "render {route}"),
            Self::Redirect(route) => write!(f, "redirect {route}"),
            Self::RedirectToLogin { from } => {
                write!(f, "redirect {} (from {from})", Route::Login)
            }
        }
    }
}

/// Guard deciding navigation outcomes from the session state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    /// Resolve `path` against `state`.
    ///
    /// # Examples
    /// ```
    /// use teamboard::domain::{Session, SessionState};
    /// use teamboard::inbound::{Navigation, Route, RouteGuard};
    ///
    /// let state = SessionState::resolved(Session::Anonymous);
    /// assert_eq!(
    ///     RouteGuard::resolve("/users", &state),
    ///     Navigation::RedirectToLogin { from: Route::Users },
    /// );
    /// assert_eq!(RouteGuard::resolve("/users", &SessionState::pending()), Navigation::Loading);
    /// ```
    #[must_use]
    pub fn resolve(path: &str, state: &SessionState) -> Navigation {
        if state.is_pending() {
            return Navigation::Loading;
        }
        let Some(route) = Route::from_path(path) else {
            return Navigation::Redirect(Route::Dashboard);
        };
        match route {
            Route::Login if state.session.is_authenticated() => {
                Navigation::Redirect(Route::Dashboard)
            }
            Route::Login | Route::NotFound => Navigation::Render(route),
            protected => match authorize(&state.session, protected.requirement()) {
                AuthDecision::Allow => Navigation::Render(protected),
                AuthDecision::Deny(DenyReason::Unauthenticated) => {
                    Navigation::RedirectToLogin { from: protected }
                }
                AuthDecision::Deny(DenyReason::InsufficientRole) => {
                    Navigation::Redirect(Route::Dashboard)
                }
            },
        }
    }
}
