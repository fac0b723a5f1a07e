//! GPS session record

use serde::{Deserialize, Serialize};

use super::record::impl_athlete_record;

/// Training load sample from the `gps` dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpsData {
    pub id: String,
    pub id_atleta: String,
    pub nome: String,
    pub posicao: String,
    pub data: String,
    pub sessao: String,
    #[serde(rename = "playerLoad")]
    pub player_load: f64,
    pub distancia: f64,
    pub sprints: i64,
}

impl_athlete_record!(GpsData);
