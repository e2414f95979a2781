pub mod auth;
pub mod profile;
pub mod session;

pub use auth::AuthService;
pub use profile::ProfileService;
pub use session::{FileSessionStore, MemorySessionStore, SessionContext, SessionStorage};
