//! Match statistics record

use serde::{Deserialize, Serialize};

use super::enums::AgeBracket;
use super::record::impl_athlete_record;

/// Season totals from the `statistics` dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub id: String,
    pub id_atleta: String,
    pub nome: String,
    pub posicao: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idade: Option<i64>,
    /// Bracket label as supplied by the file, or computed from `idade`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idade_padronizada: Option<String>,
    pub jogos: i64,
    pub minutos: i64,
    pub gols: i64,
    /// Availability ratio; absent rather than zero when the column is missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disponibilidade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participacao_em_jogos: Option<f64>,
}

impl Statistics {
    /// Standard bracket, `None` for custom labels
    pub fn age_bracket(&self) -> Option<AgeBracket> {
        self.idade_padronizada.as_deref().and_then(AgeBracket::from_label)
    }
}

impl_athlete_record!(Statistics);
