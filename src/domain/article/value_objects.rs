use crate::domain::errors::{DomainError, DomainResult};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Declares a string newtype that refuses blank input.
macro_rules! non_blank_text {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::Validation(
                        concat!($field, " cannot be empty").into(),
                    ));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_blank_text!(
    /// Client-supplied article identity. Opaque: usually a UUID string, never regenerated.
    ArticleId,
    "articleId"
);
non_blank_text!(ArticleTitle, "title");
non_blank_text!(Publisher, "publisher");
non_blank_text!(ArticleUrl, "url");
non_blank_text!(ArticleContent, "content");
non_blank_text!(ContentS3Path, "contentS3Path");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArticleStatus {
    #[default]
    Published,
    Unpublished,
}

impl ArticleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Unpublished => "unpublished",
        }
    }

    /// Status an article carries once enrichment succeeded: whatever the
    /// caller asked for, `published` when it asked for nothing.
    pub fn after_enrichment(requested: Option<Self>) -> Self {
        requested.unwrap_or(Self::Published)
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "published" => Ok(Self::Published),
            "unpublished" => Ok(Self::Unpublished),
            other => Err(DomainError::Validation(format!(
                "unknown article status: {other}"
            ))),
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named entities mentioned in an article (`organizations`, `locations`,
/// `individuals`, ...). Kept as the JSON object the model produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleEntities(Map<String, Value>);

impl ArticleEntities {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn from_value(value: Value) -> DomainResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(DomainError::Validation(format!(
                "entities must be a JSON object, got {other}"
            ))),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
