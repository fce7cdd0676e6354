//! Construction options for [`Envelope`](crate::Envelope).

use chrono::{DateTime, SecondsFormat, Utc};

use crate::types::ErrorBody;

/// Optional settings applied when an envelope is built.
///
/// All fields default to "off"; use the `with_*` builders to set them.
#[derive(Clone, Debug, Default)]
pub struct EnvelopeOptions {
    /// Enables pagination, positioning the envelope on page 1.
    pub paginate: bool,
    /// When the underlying information was last updated.
    pub updated_time: Option<DateTime<Utc>>,
    /// Error code for a failed envelope. Falls back to `0`.
    pub error_code: Option<i64>,
    /// Error message for a failed envelope. Falls back to `"Unknown Error."`.
    pub error_message: Option<String>,
    /// Emits `tracing` diagnostics on construction and every recomputation.
    pub diagnostics: bool,
}

impl EnvelopeOptions {
    pub fn with_paginate(mut self, paginate: bool) -> Self {
        self.paginate = paginate;
        self
    }

    pub fn with_updated_time(mut self, updated_time: DateTime<Utc>) -> Self {
        self.updated_time = Some(updated_time);
        self
    }

    pub fn with_error_code(mut self, code: i64) -> Self {
        self.error_code = Some(code);
        self
    }

    pub fn with_error_message(mut self, message: &str) -> Self {
        self.error_message = Some(message.to_string());
        self
    }

    pub fn with_error(self, error: ErrorBody) -> Self {
        self.with_error_code(error.code)
            .with_error_message(&error.message)
    }

    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Error body with per-field defaults for anything left unset.
    pub(crate) fn error_body(&self) -> ErrorBody {
        let fallback = ErrorBody::default();
        ErrorBody {
            code: self.error_code.unwrap_or(fallback.code),
            message: self.error_message.clone().unwrap_or(fallback.message),
        }
    }

    /// `updated_time` in its wire form, e.g. `2024-03-01T12:00:00.000Z`.
    pub(crate) fn updated_time_json(&self) -> Option<String> {
        self.updated_time
            .map(|time| time.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
