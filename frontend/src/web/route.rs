//! Route definitions.
//!
//! Pure domain layer: no DOM or web_sys here. Each dashboard route is
//! bound to exactly one role; guard decisions live in
//! [`AppRoute::guard`] so the router engine stays generic.

use campuslink_shared::Role;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Login page (default route).
    #[default]
    Login,
    Student,
    Teacher,
    Admin,
    NotFound,
}

/// Outcome of checking a route against the current session role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Unauthenticated or mis-scoped access: back to login.
    RedirectToLogin,
    /// Authenticated user on the login page: on to their dashboard.
    RedirectToDashboard(AppRoute),
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/student" => Self::Student,
            "/teacher" => Self::Teacher,
            "/admin" => Self::Admin,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Student => "/student",
            Self::Teacher => "/teacher",
            Self::Admin => "/admin",
            Self::NotFound => "/404",
        }
    }

    /// The role a session must hold to stay on this route.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::Student => Some(Role::Student),
            Self::Teacher => Some(Role::Teacher),
            Self::Admin => Some(Role::Admin),
            Self::Login | Self::NotFound => None,
        }
    }

    /// The dashboard a role lands on after login.
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Student => Self::Student,
            Role::Teacher => Self::Teacher,
            Role::Admin => Self::Admin,
        }
    }

    /// Guard check for this route under the given session role.
    pub fn guard(&self, session_role: Option<Role>) -> GuardDecision {
        if let Some(required) = self.required_role() {
            return match session_role {
                Some(role) if role == required => GuardDecision::Allow,
                _ => GuardDecision::RedirectToLogin,
            };
        }
        // Authenticated users have no business on the login page.
        if *self == Self::Login {
            if let Some(role) = session_role {
                return GuardDecision::RedirectToDashboard(Self::home_for(role));
            }
        }
        GuardDecision::Allow
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [AppRoute::Login, AppRoute::Student, AppRoute::Teacher, AppRoute::Admin] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/nowhere"), AppRoute::NotFound);
    }

    #[test]
    fn unauthenticated_access_to_dashboards_redirects_to_login() {
        for route in [AppRoute::Student, AppRoute::Teacher, AppRoute::Admin] {
            assert_eq!(route.guard(None), GuardDecision::RedirectToLogin);
        }
        assert_eq!(AppRoute::Login.guard(None), GuardDecision::Allow);
        assert_eq!(AppRoute::NotFound.guard(None), GuardDecision::Allow);
    }

    #[test]
    fn mis_scoped_access_redirects_to_login() {
        assert_eq!(
            AppRoute::Admin.guard(Some(Role::Student)),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            AppRoute::Student.guard(Some(Role::Teacher)),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        assert_eq!(AppRoute::Student.guard(Some(Role::Student)), GuardDecision::Allow);
        assert_eq!(AppRoute::Teacher.guard(Some(Role::Teacher)), GuardDecision::Allow);
        assert_eq!(AppRoute::Admin.guard(Some(Role::Admin)), GuardDecision::Allow);
    }

    #[test]
    fn authenticated_users_leave_the_login_page_for_their_dashboard() {
        assert_eq!(
            AppRoute::Login.guard(Some(Role::Admin)),
            GuardDecision::RedirectToDashboard(AppRoute::Admin)
        );
        assert_eq!(
            AppRoute::Login.guard(Some(Role::Student)),
            GuardDecision::RedirectToDashboard(AppRoute::Student)
        );
    }
}
