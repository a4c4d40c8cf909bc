use crate::{DataType, FingerPosition};
use enum_binding::enum_kind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

enum_kind! {
    /// Outcome of a verification.
    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ResponseStatus {
        Matched => "MATCHED",
        NotMatched => "NOT_MATCHED",
    }
}

/// Parameters of a single fingerprint verification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifyRequestParams {
    /// Base64 encoded fingerprint image.
    pub image: String,
    pub position: FingerPosition,
}

/// Search a backend and compare the result against a fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub backend: String,
    pub image: String,
    pub position: FingerPosition,
    #[serde(default)]
    pub filters: HashMap<String, String>,
    /// Cleared with `""`; falls back to [`DataType::Image`].
    #[serde(default, deserialize_with = "enum_binding::de::option")]
    pub image_type: Option<DataType>,
}

impl Query {
    #[must_use]
    pub fn image_type(&self) -> DataType {
        self.image_type.unwrap_or_default()
    }
}
