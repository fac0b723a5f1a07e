//! Dataset-specific record construction
//!
//! Each constructor reads one [`RawRecord`] and produces a typed record. Text fields
//! take the first non-null alias or a fixed default. Numeric fields use lenient prefix
//! parsing; a present but unparsable cell keeps the field default and is recorded in
//! the [`CoercionReport`].

use chrono::Utc;
use uuid::Uuid;

use crate::import::numeric::{parse_leading_float, parse_leading_int};
use crate::import::rows::{IDADE, IDADE_PADRONIZADA, LOCAL2_DIRETO, MECANISMO_DIRETO};
use crate::models::{
    AgeBracket, Evaluation, GpsData, Injury, InjuryStatus, Player, RawRecord, Statistics,
};

use super::report::CoercionReport;

/// Default position label
pub const POSITION_NOT_SPECIFIED: &str = "Não especificada";
/// Default GPS session label
pub const SESSION_NOT_SPECIFIED: &str = "Não especificada";
/// Default injury type label
pub const TYPE_NOT_SPECIFIED: &str = "Não especificado";

/// Identifier for a row without an `id` cell: milliseconds since epoch plus a random
/// suffix, unique within a batch.
pub fn synthesize_id() -> String {
    format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

/// Cell reader for one row that records numeric fallbacks
struct Cells<'a> {
    row: &'a RawRecord,
    row_number: usize,
    report: &'a mut CoercionReport,
}

impl<'a> Cells<'a> {
    fn new(row: &'a RawRecord, row_number: usize, report: &'a mut CoercionReport) -> Self {
        Self {
            row,
            row_number,
            report,
        }
    }

    fn opt_text(&self, keys: &[&str]) -> Option<String> {
        self.row.get_any(keys).map(str::to_string)
    }

    fn text(&self, keys: &[&str], default: &str) -> String {
        self.opt_text(keys).unwrap_or_else(|| default.to_string())
    }

    fn id(&self) -> String {
        self.opt_text(&["id"]).unwrap_or_else(synthesize_id)
    }

    fn int(&mut self, field: &str, keys: &[&str]) -> Option<i64> {
        let raw = self.row.get_any(keys)?;
        let parsed = parse_leading_int(raw);
        if parsed.is_none() {
            self.report.push(self.row_number, field, raw);
        }
        parsed
    }

    fn float(&mut self, field: &str, keys: &[&str]) -> Option<f64> {
        let raw = self.row.get_any(keys)?;
        let parsed = parse_leading_float(raw);
        if parsed.is_none() {
            self.report.push(self.row_number, field, raw);
        }
        parsed
    }

    /// Supplied bracket label kept verbatim, otherwise computed from the age
    fn age_label(&self, idade: Option<i64>) -> Option<String> {
        match self.row.get(IDADE_PADRONIZADA) {
            Some(label) => Some(label.to_string()),
            None if self.row.contains_key(IDADE) => {
                Some(AgeBracket::from_age(idade).label().to_string())
            }
            None => None,
        }
    }
}

/// Build a [`Player`] from a `players` row
pub fn player_from_row(row: &RawRecord, row_number: usize, report: &mut CoercionReport) -> Player {
    let mut cells = Cells::new(row, row_number, report);
    let idade = cells.int("idade", &["idade"]);
    Player {
        id: cells.id(),
        nome: cells.text(&["nome"], ""),
        posicao: cells.text(&["posicao"], POSITION_NOT_SPECIFIED),
        data_nascimento: cells.opt_text(&["data_nascimento"]),
        numero: cells.int("numero", &["numero"]),
        idade,
        idade_padronizada: cells.age_label(idade),
    }
}

/// Build an [`Injury`] from an `injuries` row.
///
/// `mecanismo` and `local2` prefer the header-keyed cell and fall back to the
/// positional copies taken from the fixed export columns.
pub fn injury_from_row(row: &RawRecord, row_number: usize, report: &mut CoercionReport) -> Injury {
    let mut cells = Cells::new(row, row_number, report);
    let status = if row.get("saida").is_some() {
        InjuryStatus::Recovered
    } else {
        InjuryStatus::Active
    };
    Injury {
        id: cells.id(),
        id_atleta: cells.text(&["id_atleta"], ""),
        nome: cells.text(&["nome"], ""),
        posicao: cells.text(&["posicao"], POSITION_NOT_SPECIFIED),
        data: cells.text(&["data", "entrada"], ""),
        tipo: cells.text(&["tipo", "diagnostico_queixa"], TYPE_NOT_SPECIFIED),
        mecanismo: cells.text(&["mecanismo", MECANISMO_DIRETO], ""),
        status,
        dias_dm: cells.int("diasDM", &["dias_dm"]).unwrap_or(0),
        regiao: cells.opt_text(&["regiao"]),
        local: cells.opt_text(&["local"]),
        local2: Some(cells.text(&["local2", LOCAL2_DIRETO], "")),
        lado: cells.opt_text(&["lado"]),
        membro: cells.opt_text(&["membro"]),
        grau: cells.opt_text(&["grau"]),
        lesao_previa: cells.opt_text(&["lesao_previa"]),
    }
}

/// Build an [`Evaluation`] from an `evaluations` row. Height is read in centimeters
/// and stored in meters.
pub fn evaluation_from_row(
    row: &RawRecord,
    row_number: usize,
    report: &mut CoercionReport,
) -> Evaluation {
    let mut cells = Cells::new(row, row_number, report);
    let altura_cm = cells.float("altura", &["altura", "altura_cm"]).unwrap_or(0.0);
    Evaluation {
        id: cells.id(),
        id_atleta: cells.text(&["id_atleta"], ""),
        nome: cells.text(&["nome", "atleta"], ""),
        posicao: cells.text(&["posicao"], POSITION_NOT_SPECIFIED),
        data: cells.text(&["data"], ""),
        peso: cells.float("peso", &["peso", "peso_kg"]).unwrap_or(0.0),
        altura: altura_cm / 100.0,
        gordura: cells.float("gordura", &["gordura", "pct"]).unwrap_or(0.0),
        cmj: cells.float("cmj", &["cmj"]).unwrap_or(0.0),
        sj: cells.float("sj", &["sj"]).unwrap_or(0.0),
    }
}

/// Build a [`GpsData`] sample from a `gps` row
pub fn gps_from_row(row: &RawRecord, row_number: usize, report: &mut CoercionReport) -> GpsData {
    let mut cells = Cells::new(row, row_number, report);
    GpsData {
        id: cells.id(),
        id_atleta: cells.text(&["id_atleta"], ""),
        nome: cells.text(&["nome"], ""),
        posicao: cells.text(&["posicao"], POSITION_NOT_SPECIFIED),
        data: cells.text(&["data"], ""),
        sessao: cells.text(&["sessao"], SESSION_NOT_SPECIFIED),
        player_load: cells
            .float("playerLoad", &["playerload", "player_load"])
            .unwrap_or(0.0),
        distancia: cells.float("distancia", &["distancia"]).unwrap_or(0.0),
        sprints: cells.int("sprints", &["sprints"]).unwrap_or(0),
    }
}

/// Build [`Statistics`] from a `statistics` row. The two ratios stay `None` when absent.
pub fn statistics_from_row(
    row: &RawRecord,
    row_number: usize,
    report: &mut CoercionReport,
) -> Statistics {
    let mut cells = Cells::new(row, row_number, report);
    let idade = cells.int("idade", &["idade"]);
    Statistics {
        id: cells.id(),
        id_atleta: cells.text(&["id_atleta"], ""),
        nome: cells.text(&["nome"], ""),
        posicao: cells.text(&["posicao"], POSITION_NOT_SPECIFIED),
        numero: cells.int("numero", &["numero"]),
        idade,
        idade_padronizada: cells.age_label(idade),
        jogos: cells.int("jogos", &["jogos"]).unwrap_or(0),
        minutos: cells
            .int("minutos", &["minutos", "minutos_jogo", "min_jogados"])
            .unwrap_or(0),
        gols: cells.int("gols", &["gols"]).unwrap_or(0),
        disponibilidade: cells.float("disponibilidade", &["disponibilidade"]),
        participacao_em_jogos: cells.float("participacao_em_jogos", &["participacao_em_jogos"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, Option<&str>)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn test_player_defaults() {
        let mut report = CoercionReport::new();
        let player = player_from_row(&row(&[("nome", Some("Souza"))]), 1, &mut report);
        assert_eq!(player.posicao, POSITION_NOT_SPECIFIED);
        assert_eq!(player.numero, None);
        assert_eq!(player.idade_padronizada, None);
        assert!(!player.id.is_empty());
        assert!(report.is_empty());
    }

    #[test]
    fn test_player_age_bracket() {
        let mut report = CoercionReport::new();
        let with_label = row(&[
            ("id", Some("7")),
            ("idade", Some("19 anos")),
            ("idade_padronizada", Some("16-21 anos")),
        ]);
        let player = player_from_row(&with_label, 1, &mut report);
        assert_eq!(player.id, "7");
        assert_eq!(player.idade, Some(19));
        assert_eq!(player.idade_padronizada.as_deref(), Some("16-21 anos"));
        assert_eq!(player.age_bracket(), Some(AgeBracket::From16To21));

        let custom_label = row(&[("idade", Some("18")), ("idade_padronizada", Some("Sub-20"))]);
        let player = player_from_row(&custom_label, 2, &mut report);
        assert_eq!(player.idade_padronizada.as_deref(), Some("Sub-20"));
        assert_eq!(player.age_bracket(), None);

        let computed = row(&[("idade", Some("35"))]);
        let player = player_from_row(&computed, 3, &mut report);
        assert_eq!(player.age_bracket(), Some(AgeBracket::Over30));
    }

    #[test]
    fn test_unparsable_numbers_are_reported() {
        let mut report = CoercionReport::new();
        let player = player_from_row(
            &row(&[("numero", Some("dez")), ("idade", Some("?"))]),
            4,
            &mut report,
        );
        assert_eq!(player.numero, None);
        assert_eq!(player.age_bracket(), Some(AgeBracket::NotInformed));
        assert_eq!(report.len(), 2);
        assert_eq!(report.warnings[0].row, 4);
        assert_eq!(report.for_field("numero").next().unwrap().value, "dez");
    }

    #[test]
    fn test_injury_header_value_wins_over_positional() {
        let mut report = CoercionReport::new();
        let injury = injury_from_row(
            &row(&[
                ("mecanismo", Some("Contato")),
                (MECANISMO_DIRETO, Some("Sem contato")),
                ("local2", None),
                (LOCAL2_DIRETO, Some("Posterior")),
            ]),
            1,
            &mut report,
        );
        assert_eq!(injury.mecanismo, "Contato");
        assert_eq!(injury.local2.as_deref(), Some("Posterior"));
    }

    #[test]
    fn test_injury_fallbacks_and_status() {
        let mut report = CoercionReport::new();
        let injury = injury_from_row(
            &row(&[
                ("entrada", Some("2024-03-01")),
                ("diagnostico_queixa", Some("Entorse")),
                ("saida", Some("2024-03-20")),
                ("dias_dm", Some("19")),
            ]),
            1,
            &mut report,
        );
        assert_eq!(injury.data, "2024-03-01");
        assert_eq!(injury.tipo, "Entorse");
        assert_eq!(injury.status, InjuryStatus::Recovered);
        assert_eq!(injury.dias_dm, 19);
        assert_eq!(injury.mecanismo, "");

        let open = injury_from_row(&row(&[("saida", None)]), 2, &mut report);
        assert_eq!(open.status, InjuryStatus::Active);
        assert_eq!(open.tipo, TYPE_NOT_SPECIFIED);
        assert_eq!(open.dias_dm, 0);
    }

    #[test]
    fn test_evaluation_aliases_and_height_in_meters() {
        let mut report = CoercionReport::new();
        let evaluation = evaluation_from_row(
            &row(&[
                ("atleta", Some("Lima")),
                ("peso_kg", Some("78,4")),
                ("altura_cm", Some("182")),
                ("pct", Some("11.5")),
                ("cmj", Some("41.2")),
            ]),
            1,
            &mut report,
        );
        assert_eq!(evaluation.nome, "Lima");
        assert_eq!(evaluation.peso, 78.0);
        assert!((evaluation.altura - 1.82).abs() < 1e-9);
        assert_eq!(evaluation.gordura, 11.5);
        assert_eq!(evaluation.cmj, 41.2);
        assert_eq!(evaluation.sj, 0.0);
    }

    #[test]
    fn test_gps_player_load_aliases() {
        let mut report = CoercionReport::new();
        let camel = gps_from_row(&row(&[("playerload", Some("512.5"))]), 1, &mut report);
        let snake = gps_from_row(&row(&[("player_load", Some("300"))]), 2, &mut report);
        assert_eq!(camel.player_load, 512.5);
        assert_eq!(snake.player_load, 300.0);
        assert_eq!(camel.sessao, SESSION_NOT_SPECIFIED);
        assert_eq!(camel.sprints, 0);
    }

    #[test]
    fn test_statistics_ratios_stay_absent() {
        let mut report = CoercionReport::new();
        let stats = statistics_from_row(
            &row(&[("jogos", Some("12")), ("min_jogados", Some("980"))]),
            1,
            &mut report,
        );
        assert_eq!(stats.jogos, 12);
        assert_eq!(stats.minutos, 980);
        assert_eq!(stats.gols, 0);
        assert_eq!(stats.disponibilidade, None);
        assert_eq!(stats.participacao_em_jogos, None);
    }

    #[test]
    fn test_synthesized_ids_are_unique() {
        let mut report = CoercionReport::new();
        let a = player_from_row(&RawRecord::new(), 1, &mut report);
        let b = player_from_row(&RawRecord::new(), 2, &mut report);
        assert_ne!(a.id, b.id);
    }
}
