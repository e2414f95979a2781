use std::fmt;

use shared_models::auth::Role;

const PATIENT_ONLY: &[Role] = &[Role::Patient];
const DOCTOR_ONLY: &[Role] = &[Role::Doctor];

/// Every view the client can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    Unauthorized,
    Main,
    Booking { doctor_id: i64 },
    PatientProfile,
    DoctorProfile,
    PatientDashboard,
    DoctorDashboard,
}

/// Who may see a route. An empty role list admits any signed-in role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated(&'static [Role]),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Unauthorized => "/unauthorized".to_string(),
            Route::Main => "/main".to_string(),
            Route::Booking { doctor_id } => format!("/booking/{}", doctor_id),
            Route::PatientProfile => "/patient-profile".to_string(),
            Route::DoctorProfile => "/doctor-profile".to_string(),
            Route::PatientDashboard => "/patient-dashboard".to_string(),
            Route::DoctorDashboard => "/doctor-dashboard".to_string(),
        }
    }

    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');

        let route = match trimmed {
            "" => Route::Landing,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/unauthorized" => Route::Unauthorized,
            "/main" => Route::Main,
            "/patient-profile" => Route::PatientProfile,
            "/doctor-profile" => Route::DoctorProfile,
            "/patient-dashboard" => Route::PatientDashboard,
            "/doctor-dashboard" => Route::DoctorDashboard,
            other => {
                let id = other.strip_prefix("/booking/")?;
                Route::Booking {
                    doctor_id: id.parse().ok()?,
                }
            }
        };

        Some(route)
    }

    pub fn access(&self) -> RouteAccess {
        match self {
            Route::Landing
            | Route::Login
            | Route::Register
            | Route::Unauthorized
            | Route::PatientProfile
            | Route::DoctorProfile => RouteAccess::Public,
            Route::Main | Route::Booking { .. } | Route::PatientDashboard => {
                RouteAccess::Authenticated(PATIENT_ONLY)
            }
            Route::DoctorDashboard => RouteAccess::Authenticated(DOCTOR_ONLY),
        }
    }

    /// Where a freshly signed-in user lands.
    pub fn landing_for(role: Role) -> Route {
        match role {
            Role::Patient => Route::Main,
            Role::Doctor => Route::DoctorDashboard,
        }
    }

    /// Profile form that follows registration.
    pub fn profile_for(role: Role) -> Route {
        match role {
            Role::Patient => Route::PatientProfile,
            Role::Doctor => Route::DoctorProfile,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Redirect-by-path sink consumed by the access guard.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
    fn current(&self) -> Option<&Route>;
}

/// In-memory navigation history.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Route>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Route] {
        &self.entries
    }
}

impl Navigator for History {
    fn navigate(&mut self, route: Route) {
        self.entries.push(route);
    }

    fn current(&self) -> Option<&Route> {
        self.entries.last()
    }
}
