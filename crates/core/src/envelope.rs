//! The standard `{data, error, meta}` response envelope and its error body.
//!
//! Every endpoint response uses this wrapper. Field optionality is modelled
//! with explicit `Option`s plus `skip_serializing_if` so the wire output is
//! deterministic: a field is either present with a value or absent, never
//! ambiguously null.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::pagination::Pagination;

/// Standard response wrapper for every endpoint.
///
/// `data` is always serialized (null on error responses); `error` is omitted
/// entirely on success; `meta` is omitted when there is nothing to report.
/// `data` and `error` are never both non-null in one envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T: Serialize> Envelope<T> {
    /// Success envelope: payload plus optional meta.
    pub fn success(data: T, meta: Option<Meta>) -> Self {
        Self {
            data: Some(data),
            error: None,
            meta,
        }
    }

    /// Error envelope: null data, error body, optional meta.
    pub fn failure(error: ErrorBody, meta: Option<Meta>) -> Self {
        Self {
            data: None,
            error: Some(error),
            meta,
        }
    }
}

/// Response metadata: pagination for list endpoints, the request trace id,
/// and the handler duration in whole milliseconds.
///
/// `took` is always computed by the responder, never caller-supplied.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    pub took: u64,
}

/// Wire-level error shape: `{code?, status?, name?, message, details?}`.
///
/// `code` is a stable 4-digit application code, `status` mirrors the
/// transport status, `name` is the machine-readable category. Ad-hoc errors
/// (e.g. the generic 403) may carry only `message`. `details` is an open
/// map for field-level context, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl ErrorBody {
    /// Message-only error, for ad-hoc shapes outside the fixed taxonomy.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            status: None,
            name: None,
            message: message.into(),
            details: None,
        }
    }

    /// 400 / 4001 / BadRequestError.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: Some(4001),
            status: Some(400),
            name: Some("BadRequestError"),
            message: message.into(),
            details: None,
        }
    }

    /// 404 / 4041 / NotFoundError.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: Some(4041),
            status: Some(404),
            name: Some("NotFoundError"),
            message: message.into(),
            details: None,
        }
    }

    /// 500 / 5000 / InternalServerError.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: Some(5000),
            status: Some(500),
            name: Some("InternalServerError"),
            message: message.into(),
            details: None,
        }
    }

    /// 400 / 4001 / ValidationError with a single `{field: message}` detail.
    ///
    /// One field/message pair per call; callers accumulate multiple failures
    /// into one `details` map via [`ErrorBody::with_detail`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut details = BTreeMap::new();
        details.insert(field.into(), message.into());
        Self {
            code: Some(4001),
            status: Some(400),
            name: Some("ValidationError"),
            message: "Validation failed".into(),
            details: Some(details),
        }
    }

    /// Add (or overwrite) one `details` entry.
    pub fn with_detail(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(field.into(), message.into());
        self
    }

    /// Transport status for this error, defaulting to 500 when the body
    /// carries no explicit status.
    pub fn status_or_default(&self) -> u16 {
        self.status.unwrap_or(500)
    }
}
