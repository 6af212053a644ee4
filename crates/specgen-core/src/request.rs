use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{DetailLevel, Language, SpecgenError};

/// Body of `POST /api/generate` as it arrives on the wire.
///
/// Every field is optional here; [`GenerateBody::validate`] turns it into a
/// [`GenerationRequest`]. Decoding follows loose JSON truthiness:
///
/// - a body that is valid JSON but not an object has no fields, so it decodes
///   to an empty body (and validation then rejects the missing idea)
/// - a `productIdea` of `false`, `0` or `null` counts as absent
/// - any other non-string `productIdea`, or a `null` body, is a decode error
/// - the two option fields accept anything and fall back to their defaults
#[derive(Debug, Default)]
pub struct GenerateBody {
    pub product_idea: Option<String>,
    pub detail_level: DetailLevel,
    pub language: Language,
}

impl<'de> Deserialize<'de> for GenerateBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = match Value::deserialize(deserializer)? {
            Value::Null => return Err(D::Error::custom("request body is null")),
            Value::Object(fields) => fields,
            _ => return Ok(Self::default()),
        };

        let product_idea = match fields.get("productIdea") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "productIdea must be a string, got {other}"
                )))
            }
        };
        let detail_level = fields
            .get("detailLevel")
            .and_then(Value::as_str)
            .map(DetailLevel::parse_or_default)
            .unwrap_or_default();
        let language = fields
            .get("language")
            .and_then(Value::as_str)
            .map(Language::parse_or_default)
            .unwrap_or_default();

        Ok(Self {
            product_idea,
            detail_level,
            language,
        })
    }
}

impl GenerateBody {
    /// Reject a missing or whitespace-only idea. The idea itself is kept
    /// untrimmed.
    pub fn validate(self) -> Result<GenerationRequest, SpecgenError> {
        match self.product_idea {
            Some(idea) if !idea.trim().is_empty() => Ok(GenerationRequest {
                product_idea: idea,
                detail_level: self.detail_level,
                language: self.language,
            }),
            _ => Err(SpecgenError::MissingIdea),
        }
    }
}

/// A validated generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub product_idea: String,
    #[serde(default)]
    pub detail_level: DetailLevel,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub specification: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
