//! Injury record

use serde::{Deserialize, Serialize};

use super::enums::InjuryStatus;
use super::record::impl_athlete_record;

/// Medical department entry from the `injuries` dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Injury {
    pub id: String,
    pub id_atleta: String,
    pub nome: String,
    pub posicao: String,
    pub data: String,
    pub tipo: String,
    pub mecanismo: String,
    pub status: InjuryStatus,
    /// Days lost to the injury
    #[serde(rename = "diasDM")]
    pub dias_dm: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regiao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lado: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grau: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesao_previa: Option<String>,
}

impl Injury {
    pub fn is_active(&self) -> bool {
        self.status == InjuryStatus::Active
    }
}

impl_athlete_record!(Injury);
