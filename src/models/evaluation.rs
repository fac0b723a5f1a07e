//! Physical evaluation record

use serde::{Deserialize, Serialize};

use super::record::impl_athlete_record;

/// Anthropometric and jump test results from the `evaluations` dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: String,
    pub id_atleta: String,
    pub nome: String,
    pub posicao: String,
    pub data: String,
    /// Body mass in kilograms
    pub peso: f64,
    /// Height in meters
    pub altura: f64,
    /// Body fat percentage
    pub gordura: f64,
    /// Countermovement jump
    pub cmj: f64,
    /// Squat jump
    pub sj: f64,
}

impl_athlete_record!(Evaluation);
