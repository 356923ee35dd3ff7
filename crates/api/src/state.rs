use std::sync::Arc;

use quill_core::CoreError;
use quill_store::ContentStore;

use crate::authz::Enforcer;
use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc` and immutable after
/// startup, so requests share no mutable state through it.
#[derive(Clone)]
pub struct AppState {
    /// Data-access collaborator for content resources.
    pub store: Arc<dyn ContentStore>,
    /// Authorization collaborator consulted per request.
    pub enforcer: Arc<dyn Enforcer>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Fail-closed capability check.
    ///
    /// An explicit deny and an enforcer failure both surface to the client
    /// as the same generic 403; the failure itself is only logged.
    pub async fn authorize(
        &self,
        subject: &str,
        resource: &str,
        action: &str,
    ) -> Result<(), AppError> {
        match self.enforcer.enforce(subject, resource, action).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(CoreError::Forbidden("permission denied".into()).into()),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    subject,
                    resource,
                    action,
                    "Enforcer failure, denying request"
                );
                Err(CoreError::Forbidden("permission denied".into()).into())
            }
        }
    }
}
