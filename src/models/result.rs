use serde::Serialize;

use crate::error::{ConversionError, ErrorCategory};
use crate::models::country::Country;

/// Selections of the coordinate converter echoed back with each of its results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrsContext {
    pub country: Country,
    #[serde(rename = "sourceCRS")]
    pub source_crs: String,
    #[serde(rename = "targetCRS")]
    pub target_crs: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionSuccess {
    pub input: String,
    pub output: String,
    /// Output ordinates at full precision; library-only, not part of the serialized result
    #[serde(skip)]
    pub values: [f64; 2],
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub context: Option<CrsContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionFailure {
    pub input: String,
    pub output: String,
    pub error_category: ErrorCategory,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub context: Option<CrsContext>,
}

/// Outcome of a single conversion request: always exactly one of success or error
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversionResult {
    Success(ConversionSuccess),
    Error(ConversionFailure),
}

impl ConversionResult {
    pub fn success(
        input: String,
        output: String,
        values: [f64; 2],
        context: Option<CrsContext>,
        note: &str,
    ) -> Self {
        Self::Success(ConversionSuccess {
            input,
            output,
            values,
            context,
            note: Some(note.to_string()),
        })
    }

    pub fn failure(error: &ConversionError, input: String, context: Option<CrsContext>) -> Self {
        Self::Error(ConversionFailure {
            input,
            output: error.to_string(),
            error_category: error.category(),
            context,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn input(&self) -> &str {
        match self {
            Self::Success(success) => &success.input,
            Self::Error(failure) => &failure.input,
        }
    }

    /// Formatted result on success, user-facing message on error
    pub fn output(&self) -> &str {
        match self {
            Self::Success(success) => &success.output,
            Self::Error(failure) => &failure.output,
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            Self::Success(success) => success.note.as_deref(),
            Self::Error(_) => None,
        }
    }

    pub fn values(&self) -> Option<[f64; 2]> {
        match self {
            Self::Success(success) => Some(success.values),
            Self::Error(_) => None,
        }
    }

    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Self::Success(_) => None,
            Self::Error(failure) => Some(failure.error_category),
        }
    }

    pub fn context(&self) -> Option<&CrsContext> {
        match self {
            Self::Success(success) => success.context.as_ref(),
            Self::Error(failure) => failure.context.as_ref(),
        }
    }
}
