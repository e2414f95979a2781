use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use shared_models::auth::{LoginCredentials, RegisterRequest, Role, Session, TokenResponse};
use shared_models::error::AppError;

use crate::models::StoredSession;
use crate::router::Route;
use crate::services::auth::AuthService;

/// Durable backing for the session. Only [`SessionContext`] touches it.
pub trait SessionStorage {
    fn read(&self) -> Result<StoredSession, AppError>;
    fn write(&self, state: &StoredSession) -> Result<(), AppError>;
}

/// JSON file store; survives process restarts.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileSessionStore {
    fn read(&self) -> Result<StoredSession, AppError> {
        if !self.path.exists() {
            return Ok(StoredSession::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(StoredSession::default());
        }

        Ok(serde_json::from_str(&raw)?)
    }

    /// Writes to a temp file beside the target, then renames it over the
    /// target. The temp file is created owner-only (0600 on unix), so the
    /// bearer token is never world-readable and a crash never leaves a
    /// half-written session.
    fn write(&self, state: &StoredSession) -> Result<(), AppError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let raw = serde_json::to_string_pretty(state)?;
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(raw.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path)
            .map_err(|e| AppError::Storage(format!("failed to save session: {}", e.error)))?;

        debug!("Session saved to {}", self.path.display());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    state: Mutex<StoredSession>,
}

impl MemorySessionStore {
    pub fn new(state: StoredSession) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }
}

impl SessionStorage for MemorySessionStore {
    fn read(&self) -> Result<StoredSession, AppError> {
        self.state
            .lock()
            .map(|state| state.clone())
            .map_err(|_| AppError::Storage("session store lock poisoned".to_string()))
    }

    fn write(&self, state: &StoredSession) -> Result<(), AppError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| AppError::Storage("session store lock poisoned".to_string()))?;
        *guard = state.clone();
        Ok(())
    }
}

/// Owns the active session. Login, registration and logout are the only
/// writers; everything else reads through [`SessionContext::session`].
pub struct SessionContext<S: SessionStorage> {
    storage: S,
    stored: StoredSession,
    current: Option<Session>,
}

impl<S: SessionStorage> SessionContext<S> {
    pub fn load(storage: S) -> Result<Self, AppError> {
        let stored = match storage.read() {
            Ok(stored) => stored,
            Err(AppError::Decode(e)) => {
                warn!("Session file is unreadable, starting signed out: {}", e);
                StoredSession::default()
            }
            Err(e) => return Err(e),
        };

        let current = stored.session();
        debug!("Session loaded (signed in: {})", current.is_some());

        Ok(Self {
            storage,
            stored,
            current,
        })
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|s| s.role)
    }

    pub fn registered_user_id(&self) -> Option<i64> {
        self.stored.user_id
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub async fn login(
        &mut self,
        auth: &AuthService,
        credentials: &LoginCredentials,
    ) -> Result<Route, AppError> {
        let response = auth.login(credentials).await?;
        self.establish(response)
    }

    /// Stores a token response and returns the role's landing route.
    pub fn establish(&mut self, response: TokenResponse) -> Result<Route, AppError> {
        let role: Role = response.role.parse().map_err(|_| {
            warn!("Token response carried unknown role '{}'", response.role);
            AppError::Validation("Login failed: Unknown user role".to_string())
        })?;

        let mut next = self.stored.clone();
        next.token = Some(response.access_token.clone());
        next.role = Some(role.as_str().to_string());
        self.storage.write(&next)?;

        self.stored = next;
        self.current = Some(Session::new(response.access_token, role));
        info!("Signed in as {}", role);

        Ok(Route::landing_for(role))
    }

    /// Registers an account and remembers its id for the profile step.
    pub async fn register(
        &mut self,
        auth: &AuthService,
        request: &RegisterRequest,
    ) -> Result<Route, AppError> {
        let user = auth.register(request).await?;

        let mut next = self.stored.clone();
        next.user_id = Some(user.id);
        self.storage.write(&next)?;
        self.stored = next;
        info!("Registered user {} ({})", user.username, user.id);

        Ok(Route::profile_for(request.role))
    }

    pub fn logout(&mut self) -> Result<Route, AppError> {
        let mut next = self.stored.clone();
        next.token = None;
        next.role = None;
        self.storage.write(&next)?;

        self.stored = next;
        self.current = None;
        info!("Signed out");

        Ok(Route::Login)
    }
}
