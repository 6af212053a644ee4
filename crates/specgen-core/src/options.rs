use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::SpecgenError;

/// How long and thorough the generated document should be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DetailLevel {
    Brief,
    #[default]
    Standard,
    Detailed,
}

impl DetailLevel {
    pub const ALL: &[DetailLevel] = &[DetailLevel::Brief, DetailLevel::Standard, DetailLevel::Detailed];

    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Brief => "brief",
            DetailLevel::Standard => "standard",
            DetailLevel::Detailed => "detailed",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "brief" => Some(DetailLevel::Brief),
            "standard" => Some(DetailLevel::Standard),
            "detailed" => Some(DetailLevel::Detailed),
            _ => None,
        }
    }

    /// Unrecognized values fall back to [`DetailLevel::Standard`].
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse_str(s).unwrap_or_default()
    }
}

/// Output language of the generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    pub const ALL: &[Language] = &[Language::Ru, Language::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "ru" => Some(Language::Ru),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Unrecognized values fall back to [`Language::Ru`].
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse_str(s).unwrap_or_default()
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailLevel {
    type Err = SpecgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s).ok_or_else(|| {
            SpecgenError::InvalidInput(format!(
                "unknown detail level '{s}' (expected brief, standard or detailed)"
            ))
        })
    }
}

impl FromStr for Language {
    type Err = SpecgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s).ok_or_else(|| {
            SpecgenError::InvalidInput(format!("unknown language '{s}' (expected ru or en)"))
        })
    }
}

impl Serialize for DetailLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Deserialization never fails: any JSON value that is not a recognized
// string (numbers, objects, null, typos) maps to the default.
impl<'de> Deserialize<'de> for DetailLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Self::parse_or_default).unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Self::parse_or_default).unwrap_or_default())
    }
}
