pub mod guard;
pub mod models;
pub mod router;
pub mod services;

pub use guard::{AccessState, Navigation};
pub use router::{History, Navigator, Route, RouteAccess};
pub use services::*;
