//! Session use case
//!
//! Sign-in, sign-up and sign-out against the identity repository, with the
//! outcome recorded on the shared [`Session`].

use crate::config::SimulatedLatency;
use crate::ports::activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::clock::SystemPorts;
use crate::ports::progress::{NoProgress, Operation, ProgressNotifier};
use crate::ports::repository::{IdentityRepository, RepositoryError};
use crate::session::Session;
use crate::use_cases::shared::reported;
use photofeed_domain::{
    DomainError, ErrorKind, Identity, Registration, sign_in_secret_accepted,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during session operations
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0}")]
    Validation(#[from] DomainError),

    #[error("Username or email already exists")]
    Conflict,

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::InvalidCredentials => ErrorKind::InvalidCredentials,
            SessionError::Validation(_) => ErrorKind::Validation,
            SessionError::Conflict => ErrorKind::Conflict,
            SessionError::Repository(_) => ErrorKind::Storage,
        }
    }
}

impl From<RepositoryError> for SessionError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Duplicate(_) => SessionError::Conflict,
            other => SessionError::Repository(other),
        }
    }
}

/// Use case for establishing and clearing the signed-in session
pub struct SessionUseCase {
    identities: Arc<dyn IdentityRepository>,
    session: Session,
    system: SystemPorts,
    latency: SimulatedLatency,
    activity: Arc<dyn ActivityLogger>,
    progress: Arc<dyn ProgressNotifier>,
}

impl SessionUseCase {
    pub fn new(
        identities: Arc<dyn IdentityRepository>,
        session: Session,
        system: SystemPorts,
    ) -> Self {
        Self {
            identities,
            session,
            system,
            latency: SimulatedLatency::default(),
            activity: Arc::new(NoActivityLogger),
            progress: Arc::new(NoProgress),
        }
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_activity_logger(mut self, activity: Arc<dyn ActivityLogger>) -> Self {
        self.activity = activity;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// The session this use case writes to
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.session.current_identity()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Sign in with a contact address and secret.
    ///
    /// Fails with [`SessionError::InvalidCredentials`] when no identity has
    /// the address or the secret is too short.
    pub async fn authenticate(&self, email: &str, secret: &str) -> Result<Identity, SessionError> {
        reported(
            self.progress.as_ref(),
            Operation::SignIn,
            self.authenticate_inner(email, secret),
        )
        .await
    }

    async fn authenticate_inner(
        &self,
        email: &str,
        secret: &str,
    ) -> Result<Identity, SessionError> {
        self.latency.wait(Operation::SignIn).await;

        let identity = match self.identities.find_by_email(email).await? {
            Some(identity) if sign_in_secret_accepted(secret) => identity,
            _ => {
                warn!("Sign-in rejected for {}", email);
                return Err(SessionError::InvalidCredentials);
            }
        };

        self.session.establish(identity.clone());
        info!("Signed in as {} ({})", identity.username, identity.id);
        self.activity.log(ActivityEvent::new(
            "signed_in",
            json!({ "identity_id": identity.id, "username": identity.username }),
        ));
        Ok(identity)
    }

    /// Create an account and sign in as it.
    ///
    /// Field validation happens before the simulated round-trip; the
    /// uniqueness check happens after it.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        secret: &str,
    ) -> Result<Identity, SessionError> {
        reported(
            self.progress.as_ref(),
            Operation::SignUp,
            self.register_inner(username, email, secret),
        )
        .await
    }

    async fn register_inner(
        &self,
        username: &str,
        email: &str,
        secret: &str,
    ) -> Result<Identity, SessionError> {
        let registration = Registration::try_new(username, email, secret)?;

        self.latency.wait(Operation::SignUp).await;

        let identity = Identity::new(
            self.system.ids.next_id(),
            registration.username(),
            registration.email(),
        )
        .with_avatar(Identity::generated_avatar(registration.username()));

        if let Err(e) = self.identities.insert_unique(identity.clone()).await {
            debug!("Sign-up for {} failed: {}", registration.username(), e);
            return Err(e.into());
        }

        self.session.establish(identity.clone());
        info!("Registered {} ({})", identity.username, identity.id);
        self.activity.log(ActivityEvent::new(
            "signed_up",
            json!({ "identity_id": identity.id, "username": identity.username }),
        ));
        Ok(identity)
    }

    /// Sign out. Always succeeds, whether or not anyone was signed in.
    pub async fn deauthenticate(&self) {
        self.progress.on_operation_start(Operation::SignOut);
        self.latency.wait(Operation::SignOut).await;

        let previous = self.session.current_identity();
        self.session.clear();

        if let Some(identity) = previous {
            info!("Signed out {}", identity.username);
            self.activity.log(ActivityEvent::new(
                "signed_out",
                json!({ "identity_id": identity.id }),
            ));
        }
        self.progress.on_operation_complete(Operation::SignOut, true);
    }

    /// Look up an identity by its handle.
    pub async fn find_by_handle(&self, username: &str) -> Result<Option<Identity>, SessionError> {
        Ok(self.identities.find_by_username(username).await?)
    }
}
