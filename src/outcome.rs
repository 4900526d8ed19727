//! Typed success/failure results
//!
//! Explicit result values instead of raised errors, shaped for
//! serialization into API responses: `{"success": true, "data": ...}` on
//! success, `{"code", "statusCode", "description", "fieldErrors"?}` on
//! failure. Error descriptors live in fixed catalogs ([`common`] and
//! [`auth`]), created at compile time and never mutated.
//!
//! One deliberate quirk is preserved from the wire contract: a failure's
//! `success` field may be `false` or absent, and BOTH mean failure. Only an
//! explicit `success: true` counts as success.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Static error descriptor: stable machine code, HTTP-style status, human
/// description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorModel {
    pub code: &'static str,
    pub status_code: u16,
    pub description: &'static str,
}

/// General-purpose error descriptors.
pub mod common {
    use super::ErrorModel;

    pub const INTERNAL_SERVER_ERROR: ErrorModel = ErrorModel {
        code: "INTERNAL_SERVER_ERROR",
        status_code: 500,
        description: "An unexpected error occurred",
    };
    pub const VALIDATION_FAILED: ErrorModel = ErrorModel {
        code: "VALIDATION_FAILED",
        status_code: 400,
        description: "Request validation failed",
    };
    pub const BAD_REQUEST: ErrorModel = ErrorModel {
        code: "BAD_REQUEST",
        status_code: 400,
        description: "The request could not be understood",
    };
    pub const NOT_FOUND: ErrorModel = ErrorModel {
        code: "NOT_FOUND",
        status_code: 404,
        description: "The requested resource was not found",
    };
    pub const CONFLICT: ErrorModel = ErrorModel {
        code: "CONFLICT",
        status_code: 409,
        description: "The request conflicts with the current state",
    };
    pub const RATE_LIMITED: ErrorModel = ErrorModel {
        code: "RATE_LIMITED",
        status_code: 429,
        description: "Too many requests",
    };
    pub const SERVICE_UNAVAILABLE: ErrorModel = ErrorModel {
        code: "SERVICE_UNAVAILABLE",
        status_code: 503,
        description: "The service is temporarily unavailable",
    };
}

/// Authentication and authorization error descriptors.
pub mod auth {
    use super::ErrorModel;

    pub const UNAUTHORIZED: ErrorModel = ErrorModel {
        code: "UNAUTHORIZED",
        status_code: 401,
        description: "Authentication is required",
    };
    pub const INVALID_CREDENTIALS: ErrorModel = ErrorModel {
        code: "INVALID_CREDENTIALS",
        status_code: 401,
        description: "The provided credentials are invalid",
    };
    pub const TOKEN_EXPIRED: ErrorModel = ErrorModel {
        code: "TOKEN_EXPIRED",
        status_code: 401,
        description: "The authentication token has expired",
    };
    pub const TOKEN_INVALID: ErrorModel = ErrorModel {
        code: "TOKEN_INVALID",
        status_code: 401,
        description: "The authentication token is malformed or revoked",
    };
    pub const SESSION_EXPIRED: ErrorModel = ErrorModel {
        code: "SESSION_EXPIRED",
        status_code: 401,
        description: "The session has expired, sign in again",
    };
    pub const FORBIDDEN: ErrorModel = ErrorModel {
        code: "FORBIDDEN",
        status_code: 403,
        description: "You do not have access to this resource",
    };
}

/// Successful result, optionally carrying data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Failed result carrying a stable code, status, description, and optional
/// per-field validation messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub code: String,
    pub status_code: u16,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<BTreeMap<String, String>>,
}

impl FailureResult {
    pub fn from_model(model: &ErrorModel) -> Self {
        Self {
            success: Some(false),
            code: model.code.to_string(),
            status_code: model.status_code,
            description: model.description.to_string(),
            field_errors: None,
        }
    }

    pub fn with_field_errors(mut self, field_errors: BTreeMap<String, String>) -> Self {
        self.field_errors = Some(field_errors);
        self
    }

    /// Wire shape for API responses: `status_code` is dropped (it belongs in
    /// the transport status line, not the body).
    pub fn response_body(&self) -> Value {
        let mut body = json!({
            "code": self.code,
            "description": self.description,
        });
        if let Some(success) = self.success {
            body["success"] = json!(success);
        }
        if let Some(field_errors) = &self.field_errors {
            body["fieldErrors"] = json!(field_errors);
        }
        body
    }
}

/// Tagged union of [`SuccessResult`] and [`FailureResult`].
///
/// Deserialization is shape-driven: a failure is recognized by its
/// `code`/`statusCode`/`description` fields, so a payload with no `success`
/// discriminant at all still lands on the failure side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResult<T> {
    Failure(FailureResult),
    Success(SuccessResult<T>),
}

impl<T> ApiResult<T> {
    /// Borrow the success data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResult::Success(s) => s.data.as_ref(),
            ApiResult::Failure(_) => None,
        }
    }
}

/// Success without data.
pub fn ok<T>() -> ApiResult<T> {
    ApiResult::Success(SuccessResult {
        success: true,
        data: None,
    })
}

/// Success carrying data.
pub fn ok_with<T>(data: T) -> ApiResult<T> {
    ApiResult::Success(SuccessResult {
        success: true,
        data: Some(data),
    })
}

/// Failure from a catalog descriptor.
pub fn failure<T>(model: &ErrorModel) -> ApiResult<T> {
    ApiResult::Failure(FailureResult::from_model(model))
}

/// Failure with per-field validation messages.
pub fn failure_with_fields<T>(
    model: &ErrorModel,
    field_errors: BTreeMap<String, String>,
) -> ApiResult<T> {
    ApiResult::Failure(FailureResult::from_model(model).with_field_errors(field_errors))
}

/// True only for an explicit `success == true`.
pub fn is_success_result<T>(result: &ApiResult<T>) -> bool {
    match result {
        ApiResult::Success(s) => s.success,
        ApiResult::Failure(f) => f.success == Some(true),
    }
}

/// True for everything that is not an explicit success: `success` of
/// `false` AND an absent `success` both count as failure.
pub fn is_failure_result<T>(result: &ApiResult<T>) -> bool {
    !is_success_result(result)
}
