//! Typed record store
//!
//! Five typed arrays plus the time of the last mutation. Each array is replaced as a
//! whole when its dataset is (re)ingested; `lastUpdate` is refreshed by every
//! mutating operation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::convert::TypedRecords;
use crate::models::{
    AthleteRecord, DatasetType, Evaluation, GpsData, Injury, Player, Record, Statistics,
};

use super::repository::PersistedStore;

/// Date formats accepted in record `data` fields, tried in order
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Parse a record date in ISO (`2024-03-01`) or Brazilian (`01/03/2024`) form
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Persisted store of typed records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStore {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub injuries: Vec<Injury>,
    #[serde(default)]
    pub evaluations: Vec<Evaluation>,
    #[serde(default)]
    pub gps_data: Vec<GpsData>,
    #[serde(default)]
    pub statistics: Vec<Statistics>,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
}

impl PersistedStore for DataStore {
    const NAME: &'static str = "football-data-store";
    const VERSION: u32 = 1;
}

macro_rules! record_collection {
    ($field:ident, $ty:ty, $set:ident, $add:ident, $update:ident, $remove:ident) => {
        pub fn $set(&mut self, records: Vec<$ty>) {
            self.$field = records;
            self.touch();
        }

        pub fn $add(&mut self, record: $ty) {
            self.$field.push(record);
            self.touch();
        }

        /// Apply `update` to the record with the given id. Returns `false` when no
        /// record matches.
        pub fn $update(&mut self, id: &str, update: impl FnOnce(&mut $ty)) -> bool {
            let found = match self.$field.iter_mut().find(|r| r.id() == id) {
                Some(record) => {
                    update(record);
                    true
                }
                None => false,
            };
            self.touch();
            found
        }

        /// Remove the record with the given id. Returns `false` when no record matches.
        pub fn $remove(&mut self, id: &str) -> bool {
            let before = self.$field.len();
            self.$field.retain(|r| r.id() != id);
            self.touch();
            self.$field.len() != before
        }
    };
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    record_collection!(players, Player, set_players, add_player, update_player, remove_player);
    record_collection!(injuries, Injury, set_injuries, add_injury, update_injury, remove_injury);
    record_collection!(
        evaluations,
        Evaluation,
        set_evaluations,
        add_evaluation,
        update_evaluation,
        remove_evaluation
    );
    record_collection!(gps_data, GpsData, set_gps_data, add_gps_data, update_gps_data, remove_gps_data);
    record_collection!(
        statistics,
        Statistics,
        set_statistics,
        add_statistics,
        update_statistics,
        remove_statistics
    );

    /// Refresh `last_update` without changing any record
    pub fn touch(&mut self) {
        self.last_update = Some(Utc::now());
    }

    /// Empty all five arrays
    pub fn clear_all_data(&mut self) {
        self.players.clear();
        self.injuries.clear();
        self.evaluations.clear();
        self.gps_data.clear();
        self.statistics.clear();
        self.touch();
    }

    /// Empty the array backing one dataset
    pub fn clear_dataset(&mut self, dataset: DatasetType) {
        self.replace_records(TypedRecords::empty(dataset));
    }

    /// Replace the array backing the records' dataset. Never merges.
    pub fn replace_records(&mut self, records: TypedRecords) {
        match records {
            TypedRecords::Players(v) => self.set_players(v),
            TypedRecords::Injuries(v) => self.set_injuries(v),
            TypedRecords::Evaluations(v) => self.set_evaluations(v),
            TypedRecords::Gps(v) => self.set_gps_data(v),
            TypedRecords::Statistics(v) => self.set_statistics(v),
        }
    }

    /// Number of records held for a dataset
    pub fn record_count(&self, dataset: DatasetType) -> usize {
        match dataset {
            DatasetType::Players => self.players.len(),
            DatasetType::Injuries => self.injuries.len(),
            DatasetType::Evaluations => self.evaluations.len(),
            DatasetType::Gps => self.gps_data.len(),
            DatasetType::Statistics => self.statistics.len(),
        }
    }

    pub fn player_by_id(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Case-insensitive name lookup
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        let name = name.to_lowercase();
        self.players.iter().find(|p| p.nome.to_lowercase() == name)
    }

    /// Injuries of an athlete, matched by athlete id or name
    pub fn injuries_by_player(&self, player: &str) -> Vec<&Injury> {
        by_player(&self.injuries, player)
    }

    pub fn active_injuries(&self) -> Vec<&Injury> {
        self.injuries.iter().filter(|i| i.is_active()).collect()
    }

    pub fn evaluations_by_player(&self, player: &str) -> Vec<&Evaluation> {
        by_player(&self.evaluations, player)
    }

    /// Most recent evaluation of an athlete. Evaluations with unparsable dates are
    /// only returned when no dated evaluation exists.
    pub fn latest_evaluation_by_player(&self, player: &str) -> Option<&Evaluation> {
        self.evaluations_by_player(player)
            .into_iter()
            .max_by_key(|e| parse_record_date(&e.data))
    }

    pub fn gps_by_player(&self, player: &str) -> Vec<&GpsData> {
        by_player(&self.gps_data, player)
    }

    pub fn statistics_by_player(&self, player: &str) -> Vec<&Statistics> {
        by_player(&self.statistics, player)
    }
}

fn by_player<'a, T: AthleteRecord>(records: &'a [T], player: &str) -> Vec<&'a T> {
    records.iter().filter(|r| r.belongs_to(player)).collect()
}
