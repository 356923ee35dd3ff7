use crate::envelope::ErrorBody;

/// Domain-level error shared across crates.
///
/// Carries no HTTP knowledge of its own; the API crate maps each variant to
/// a transport status and a wire-level [`ErrorBody`].
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{resource} with id {id} not found")]
    NotFound { resource: String, id: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Wire-level error body for this variant.
    ///
    /// Internal errors are sanitized here: the caller is expected to log the
    /// original message before conversion, the client only ever sees a
    /// generic one. Forbidden maps to the ad-hoc message-only shape used by
    /// authorization denials.
    pub fn to_error_body(&self) -> ErrorBody {
        match self {
            CoreError::NotFound { .. } => ErrorBody::not_found(self.to_string()),
            CoreError::Validation { field, message } => {
                ErrorBody::validation(field.clone(), message.clone())
            }
            CoreError::BadRequest(msg) => ErrorBody::bad_request(msg.clone()),
            CoreError::Forbidden(msg) => {
                let mut body = ErrorBody::new(msg.clone());
                body.status = Some(403);
                body
            }
            CoreError::Internal(_) => ErrorBody::internal("An internal error occurred"),
        }
    }
}
