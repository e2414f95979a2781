//! Access guard: decides on every navigation whether the requested route may
//! render for the current session, or where to send the user instead.

use tracing::debug;

use shared_models::auth::{Role, Session};

use crate::router::{Navigator, Route, RouteAccess};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    Unauthenticated,
    AuthenticatedAllowed,
    AuthenticatedDenied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

impl Navigation {
    pub fn route(&self) -> &Route {
        match self {
            Navigation::Render(route) | Navigation::Redirect(route) => route,
        }
    }

    pub fn is_render(&self) -> bool {
        matches!(self, Navigation::Render(_))
    }
}

pub fn evaluate(session: Option<&Session>, allowed_roles: &[Role]) -> AccessState {
    match session {
        None => AccessState::Unauthenticated,
        Some(session) if allowed_roles.is_empty() || allowed_roles.contains(&session.role) => {
            AccessState::AuthenticatedAllowed
        }
        Some(_) => AccessState::AuthenticatedDenied,
    }
}

/// Gate `requested` behind `allowed_roles`.
pub fn authorize(session: Option<&Session>, allowed_roles: &[Role], requested: Route) -> Navigation {
    match evaluate(session, allowed_roles) {
        AccessState::Unauthenticated => {
            debug!("No session, redirecting {} to login", requested);
            Navigation::Redirect(Route::Login)
        }
        AccessState::AuthenticatedDenied => {
            debug!("Role not permitted for {}, redirecting to unauthorized", requested);
            Navigation::Redirect(Route::Unauthorized)
        }
        AccessState::AuthenticatedAllowed => Navigation::Render(requested),
    }
}

/// Gate `requested` using the route table's own policy.
pub fn resolve(session: Option<&Session>, requested: Route) -> Navigation {
    match requested.access() {
        RouteAccess::Public => Navigation::Render(requested),
        RouteAccess::Authenticated(roles) => authorize(session, roles, requested),
    }
}

/// Resolves `requested` and records the outcome on the navigator.
pub fn navigate<N: Navigator + ?Sized>(
    navigator: &mut N,
    session: Option<&Session>,
    requested: Route,
) -> Navigation {
    let outcome = resolve(session, requested);
    navigator.navigate(outcome.route().clone());
    outcome
}
