use axum::http::Uri;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    config::AccessMode,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, FlashSession},
    model::{
        scope::FleetScope,
        user::{Role, SessionUser},
    },
    service::auth::AuthService,
};

pub const MANAGER_REQUIRED_MESSAGE: &str = "Insufficient permission: managers only";

pub enum Permission {
    /// Only managers may continue.
    Manager,
}

/// Who is making the request, as established by [`AuthGuard::require`].
#[derive(Debug, Clone, PartialEq)]
pub enum Viewer {
    /// No login in this access mode.
    Open,
    Manager {
        user_id: i32,
        manager_id: i32,
        fleet_id: i32,
    },
    Driver {
        user_id: i32,
        driver_id: i32,
        fleet_id: i32,
    },
}

impl Viewer {
    fn from_session_user(user: &SessionUser) -> Self {
        match user.role {
            Role::Manager => Self::Manager {
                user_id: user.user_id,
                manager_id: user.related_id,
                fleet_id: user.fleet_id,
            },
            Role::Driver => Self::Driver {
                user_id: user.user_id,
                driver_id: user.related_id,
                fleet_id: user.fleet_id,
            },
        }
    }

    /// Fleets every query made for this viewer is limited to.
    pub fn scope(&self) -> FleetScope {
        match self {
            Self::Open => FleetScope::All,
            Self::Manager { fleet_id, .. } | Self::Driver { fleet_id, .. } => {
                FleetScope::Fleet(*fleet_id)
            }
        }
    }

    /// Fleet that form submissions are bound to, `None` when the form picks
    /// the fleet itself.
    pub fn forced_fleet(&self) -> Option<i32> {
        self.scope().fleet_id()
    }

    pub fn user_id(&self) -> Option<i32> {
        match self {
            Self::Open => None,
            Self::Manager { user_id, .. } | Self::Driver { user_id, .. } => Some(*user_id),
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
    access_mode: AccessMode,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session, access_mode: AccessMode) -> Self {
        Self {
            db,
            session,
            access_mode,
        }
    }

    /// Establishes the viewer and checks every permission.
    ///
    /// In open mode every request is [`Viewer::Open`]. Otherwise the session
    /// user is re-checked against the database; a session whose account was
    /// removed or changed is cleared. The fleet is looked up again on every
    /// request and the session follows it when the user has moved.
    ///
    /// # Arguments
    /// - `uri` - Requested URI, used as the post-login destination
    /// - `permissions` - Checks that must all pass
    ///
    /// # Returns
    /// - `Ok(Viewer)` - Request may proceed
    /// - `Err(AuthError::LoginRequired)` - No valid login in the session
    /// - `Err(AuthError::ManagerRequired)` - A non-manager hit a manager-only
    ///   route; an error flash has been queued
    pub async fn require(
        &self,
        uri: &Uri,
        permissions: &[Permission],
    ) -> Result<Viewer, AppError> {
        if self.access_mode == AccessMode::Open {
            return Ok(Viewer::Open);
        }

        let next = uri
            .path_and_query()
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());

        let auth_session = AuthSession::new(self.session);
        let Some(mut session_user) = auth_session.get_user().await? else {
            return Err(AuthError::LoginRequired { next }.into());
        };

        let user = UserRepository::new(self.db)
            .find_by_id(session_user.user_id)
            .await?
            .filter(|user| {
                user.role == session_user.role && user.related_id == session_user.related_id
            });
        let fleet_id = match user {
            Some(ref user) => AuthService::new(self.db).fleet_of(user).await?,
            None => None,
        };
        let Some(fleet_id) = fleet_id else {
            tracing::warn!(
                "Session user {} no longer matches a stored account",
                session_user.user_id
            );
            auth_session.clear().await;
            return Err(AuthError::LoginRequired { next }.into());
        };

        if fleet_id != session_user.fleet_id {
            tracing::info!(
                "Session user {} moved from fleet {} to fleet {}",
                session_user.user_id,
                session_user.fleet_id,
                fleet_id
            );
            session_user.fleet_id = fleet_id;
            auth_session.set_user(&session_user).await?;
        }

        let viewer = Viewer::from_session_user(&session_user);

        for permission in permissions {
            match permission {
                Permission::Manager => {
                    if !matches!(viewer, Viewer::Manager { .. }) {
                        FlashSession::new(self.session)
                            .push_error(MANAGER_REQUIRED_MESSAGE)
                            .await?;
                        return Err(AuthError::ManagerRequired(session_user.user_id).into());
                    }
                }
            }
        }

        Ok(viewer)
    }
}
