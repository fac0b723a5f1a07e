//! Typed record conversion
//!
//! Second phase of ingestion: the generic rows of an [`IngestionEntry`] are coerced into
//! the typed record set of their dataset.

pub mod records;
pub mod report;

pub use records::{
    evaluation_from_row, gps_from_row, injury_from_row, player_from_row, statistics_from_row,
    synthesize_id,
};
pub use report::{CoercionReport, CoercionWarning};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{
    DatasetType, Evaluation, GpsData, IngestionEntry, Injury, Player, RawRecord, Statistics,
};

/// Typed records of one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dataset", content = "records", rename_all = "lowercase")]
pub enum TypedRecords {
    Players(Vec<Player>),
    Injuries(Vec<Injury>),
    Evaluations(Vec<Evaluation>),
    Gps(Vec<GpsData>),
    Statistics(Vec<Statistics>),
}

impl TypedRecords {
    /// An empty record set for a dataset
    pub fn empty(dataset: DatasetType) -> Self {
        match dataset {
            DatasetType::Players => TypedRecords::Players(Vec::new()),
            DatasetType::Injuries => TypedRecords::Injuries(Vec::new()),
            DatasetType::Evaluations => TypedRecords::Evaluations(Vec::new()),
            DatasetType::Gps => TypedRecords::Gps(Vec::new()),
            DatasetType::Statistics => TypedRecords::Statistics(Vec::new()),
        }
    }

    pub fn dataset(&self) -> DatasetType {
        match self {
            TypedRecords::Players(_) => DatasetType::Players,
            TypedRecords::Injuries(_) => DatasetType::Injuries,
            TypedRecords::Evaluations(_) => DatasetType::Evaluations,
            TypedRecords::Gps(_) => DatasetType::Gps,
            TypedRecords::Statistics(_) => DatasetType::Statistics,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TypedRecords::Players(v) => v.len(),
            TypedRecords::Injuries(v) => v.len(),
            TypedRecords::Evaluations(v) => v.len(),
            TypedRecords::Gps(v) => v.len(),
            TypedRecords::Statistics(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Typed records plus the cells that fell back to defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub records: TypedRecords,
    pub report: CoercionReport,
}

fn convert_with<T>(
    rows: &[RawRecord],
    report: &mut CoercionReport,
    build: fn(&RawRecord, usize, &mut CoercionReport) -> T,
) -> Vec<T> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| build(row, idx + 1, report))
        .collect()
}

/// Convert generic rows into the typed records of `dataset`.
///
/// Never fails: unparsable numeric cells keep their default and appear in the report.
pub fn convert_rows(dataset: DatasetType, rows: &[RawRecord]) -> Conversion {
    let mut report = CoercionReport::new();
    let records = match dataset {
        DatasetType::Players => {
            TypedRecords::Players(convert_with(rows, &mut report, player_from_row))
        }
        DatasetType::Injuries => {
            TypedRecords::Injuries(convert_with(rows, &mut report, injury_from_row))
        }
        DatasetType::Evaluations => {
            TypedRecords::Evaluations(convert_with(rows, &mut report, evaluation_from_row))
        }
        DatasetType::Gps => TypedRecords::Gps(convert_with(rows, &mut report, gps_from_row)),
        DatasetType::Statistics => {
            TypedRecords::Statistics(convert_with(rows, &mut report, statistics_from_row))
        }
    };

    debug!("Converted {} {} record(s)", records.len(), dataset);
    if !report.is_empty() {
        warn!(
            "{} cell(s) in {} could not be parsed and were set to defaults",
            report.len(),
            dataset
        );
    }

    Conversion { records, report }
}

/// Convert the content of an ingestion entry
pub fn convert_entry(entry: &IngestionEntry) -> Conversion {
    convert_rows(entry.name, &entry.content)
}
