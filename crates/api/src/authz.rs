//! Authorization seam.
//!
//! Capability checks go through the [`Enforcer`] trait so a real policy
//! engine can be plugged in per deployment. The check itself is invoked
//! uniformly by every CRUD handler via `AppState::authorize`, which applies
//! the fail-closed policy.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header naming the acting subject for authorization checks.
pub const SUBJECT_HEADER: &str = "x-subject";

/// Failure reported by an enforcer backend.
///
/// Never surfaced to clients; the fail-closed policy turns it into the same
/// generic 403 as an explicit deny.
#[derive(Debug, thiserror::Error)]
#[error("enforcer failure: {0}")]
pub struct EnforcerError(pub String);

/// Yes/no capability decision for a subject acting on a resource.
#[async_trait]
pub trait Enforcer: Send + Sync {
    async fn enforce(
        &self,
        subject: &str,
        resource: &str,
        action: &str,
    ) -> Result<bool, EnforcerError>;
}

/// Permits everything. Default wiring for deployments without a policy
/// engine; tests use purpose-built stubs instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

#[async_trait]
impl Enforcer for AllowAll {
    async fn enforce(&self, _: &str, _: &str, _: &str) -> Result<bool, EnforcerError> {
        Ok(true)
    }
}

/// Acting subject, taken from the `x-subject` header.
///
/// Falls back to `anonymous` when the header is missing or unreadable, so
/// unauthenticated requests still hit the enforcer with a real subject.
#[derive(Debug, Clone)]
pub struct Subject(pub String);

impl<S> FromRequestParts<S> for Subject
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let subject = parts
            .headers
            .get(SUBJECT_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .unwrap_or("anonymous")
            .to_owned();

        Ok(Subject(subject))
    }
}
