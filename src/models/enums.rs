//! Enums for the ingestion and record models
//!
//! # Serde Casing Conventions
//!
//! - `lowercase`: dataset slot names and history actions, matching the persisted store layout
//! - Explicit `rename`: Portuguese display labels that are stored verbatim (InjuryStatus, AgeBracket)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dataset slot an upload targets.
///
/// Selects the typed record constructor and the storage slot. At most one live
/// [`IngestionEntry`](super::IngestionEntry) exists per dataset type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetType {
    Players,
    Injuries,
    Evaluations,
    Gps,
    Statistics,
}

impl DatasetType {
    /// All dataset types in display order
    pub const ALL: [DatasetType; 5] = [
        DatasetType::Players,
        DatasetType::Injuries,
        DatasetType::Evaluations,
        DatasetType::Gps,
        DatasetType::Statistics,
    ];

    /// Slot name used in the persisted entry store
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetType::Players => "players",
            DatasetType::Injuries => "injuries",
            DatasetType::Evaluations => "evaluations",
            DatasetType::Gps => "gps",
            DatasetType::Statistics => "statistics",
        }
    }

    /// Human readable title shown next to the upload slot
    pub fn title(&self) -> &'static str {
        match self {
            DatasetType::Players => "Jogadores",
            DatasetType::Injuries => "Lesões",
            DatasetType::Evaluations => "Avaliações Físicas",
            DatasetType::Gps => "Dados GPS",
            DatasetType::Statistics => "Estatísticas",
        }
    }
}

impl FromStr for DatasetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "players" => Ok(DatasetType::Players),
            "injuries" => Ok(DatasetType::Injuries),
            "evaluations" => Ok(DatasetType::Evaluations),
            "gps" => Ok(DatasetType::Gps),
            "statistics" => Ok(DatasetType::Statistics),
            _ => Err(format!(
                "Unknown dataset type: {}. Use one of players, injuries, evaluations, gps, statistics.",
                s
            )),
        }
    }
}

impl fmt::Display for DatasetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of provenance event recorded in an entry's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    /// First upload that created the entry
    Initial,
    /// Later upload recorded against an existing entry
    Update,
}

/// Injury status derived from the presence of a discharge date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InjuryStatus {
    #[default]
    #[serde(rename = "Ativo")]
    Active,
    #[serde(rename = "Recuperado")]
    Recovered,
}

impl InjuryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InjuryStatus::Active => "Ativo",
            InjuryStatus::Recovered => "Recuperado",
        }
    }
}

/// Standardized age bracket computed from a raw `idade` cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "16-21 anos")]
    From16To21,
    #[serde(rename = "22-30 anos")]
    From22To30,
    #[serde(rename = "> 30 anos")]
    Over30,
    #[serde(rename = "Não informado")]
    NotInformed,
}

impl AgeBracket {
    /// Bracket for a parsed age. Ages below 16 (and zero) are not informed.
    pub fn from_age(age: Option<i64>) -> Self {
        match age {
            Some(16..=21) => AgeBracket::From16To21,
            Some(22..=30) => AgeBracket::From22To30,
            Some(a) if a > 30 => AgeBracket::Over30,
            _ => AgeBracket::NotInformed,
        }
    }

    /// Label stored in the `idade_padronizada` field
    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::From16To21 => "16-21 anos",
            AgeBracket::From22To30 => "22-30 anos",
            AgeBracket::Over30 => "> 30 anos",
            AgeBracket::NotInformed => "Não informado",
        }
    }

    /// Inverse of [`label`](Self::label)
    pub fn from_label(label: &str) -> Option<Self> {
        [
            AgeBracket::From16To21,
            AgeBracket::From22To30,
            AgeBracket::Over30,
            AgeBracket::NotInformed,
        ]
        .into_iter()
        .find(|b| b.label() == label)
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
