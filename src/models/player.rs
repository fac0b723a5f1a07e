//! Player record

use serde::{Deserialize, Serialize};

use super::enums::AgeBracket;
use super::record::Record;

/// Squad member from the `players` dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub nome: String,
    pub posicao: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_nascimento: Option<String>,
    /// Jersey number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idade: Option<i64>,
    /// Bracket label as supplied by the file, or computed from `idade`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idade_padronizada: Option<String>,
}

impl Player {
    /// Standard bracket, `None` for custom labels
    pub fn age_bracket(&self) -> Option<AgeBracket> {
        self.idade_padronizada.as_deref().and_then(AgeBracket::from_label)
    }
}

impl Record for Player {
    fn id(&self) -> &str {
        &self.id
    }
}
