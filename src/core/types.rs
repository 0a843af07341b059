//! Core data types shared across the data source, the selectors and output
//!
//! `Pet` deserializes through `RawPet`, so every pet that enters the program,
//! whether from the API or from a local cache file, passes the same checks.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Pet identifier as served by the API (numeric in practice, strings tolerated)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum PetId {
    Number(u64),
    Text(String),
}

impl PetId {
    /// Identifier typed on the command line; digits are taken as a number
    pub(crate) fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<u64>() {
            Ok(n) => PetId::Number(n),
            Err(_) => PetId::Text(trimmed.to_string()),
        }
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetId::Number(n) => write!(f, "{n}"),
            PetId::Text(s) => f.write_str(s),
        }
    }
}

/// Kind of pet. Lives are only tracked for cats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub(crate) enum Species {
    Cat { number_of_lives: u32 },
    Dog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPet")]
pub(crate) struct Pet {
    pub(crate) id: PetId,
    pub(crate) name: String,
    #[serde(flatten)]
    pub(crate) species: Species,
    /// Grams
    pub(crate) weight: f64,
    /// Centimeters
    pub(crate) height: f64,
    /// Centimeters
    pub(crate) length: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) photo_url: Option<String>,
    pub(crate) description: String,
}

/// Pet record exactly as the API serves it, before validation
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawPet {
    id: PetId,
    #[serde(default)]
    name: String,
    kind: String,
    weight: f64,
    height: f64,
    length: f64,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    number_of_lives: Option<i64>,
}

impl TryFrom<RawPet> for Pet {
    type Error = RecordError;

    fn try_from(raw: RawPet) -> Result<Self, Self::Error> {
        let id = raw.id.to_string();

        let invalid = [
            ("weight", raw.weight),
            ("height", raw.height),
            ("length", raw.length),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite() || *value <= 0.0);
        if let Some((field, value)) = invalid {
            return Err(RecordError::NonPositive { id, field, value });
        }

        let species = match raw.kind.trim().to_ascii_lowercase().as_str() {
            "cat" => match raw.number_of_lives {
                Some(lives) if lives >= 1 => Species::Cat {
                    number_of_lives: u32::try_from(lives).map_err(|_| {
                        RecordError::LivesOutOfRange {
                            id: id.clone(),
                            value: lives,
                        }
                    })?,
                },
                _ => return Err(RecordError::MissingLives { id }),
            },
            "dog" => {
                if raw.number_of_lives.is_some() {
                    return Err(RecordError::UnexpectedLives { id });
                }
                Species::Dog
            }
            _ => {
                return Err(RecordError::UnknownKind {
                    id,
                    kind: raw.kind,
                });
            }
        };

        Ok(Pet {
            id: raw.id,
            name: raw.name,
            species,
            weight: raw.weight,
            height: raw.height,
            length: raw.length,
            photo_url: raw.photo_url.filter(|url| !url.trim().is_empty()),
            description: raw.description,
        })
    }
}

/// Derived health tier, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum HealthStatus {
    Unhealthy,
    Healthy,
    VeryHealthy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SortKey {
    #[default]
    Name,
    Kind,
    Weight,
    Height,
    Length,
}

impl SortKey {
    /// Field name understood by the API's `_sort` parameter
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Kind => "kind",
            SortKey::Weight => "weight",
            SortKey::Height => "height",
            SortKey::Length => "length",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SortDirection {
    /// Ascending (default)
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortDirection {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SortOption {
    pub(crate) key: SortKey,
    pub(crate) direction: SortDirection,
}

impl SortOption {
    /// Anything other than name ascending counts as an active filter
    pub(crate) fn is_default(&self) -> bool {
        *self == SortOption::default()
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key.as_str(), self.direction.as_str())
    }
}

/// One page of the catalog plus the collection size reported by the API
#[derive(Debug, Clone, Default)]
pub(crate) struct PetPage {
    pub(crate) pets: Vec<Pet>,
    pub(crate) total_count: u64,
}
