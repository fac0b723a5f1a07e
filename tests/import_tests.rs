//! Import pipeline tests

use fc_analytics_sdk::import::delimiter::Delimiter;
use fc_analytics_sdk::import::headers::normalize_header;
use fc_analytics_sdk::import::tokenizer::parse_line;
use fc_analytics_sdk::import::{CSVImporter, ImportError, PositionalFallback};
use fc_analytics_sdk::models::{DatasetType, HistoryAction};

mod delimiter_tests {
    use super::*;

    #[test]
    fn test_each_candidate_detected_when_dominant() {
        for delimiter in Delimiter::CANDIDATES {
            let d = delimiter.as_char();
            // one of every other candidate, three of the dominant one
            let mut header = format!("a{d}b{d}c{d}d");
            for other in Delimiter::CANDIDATES {
                if other != delimiter {
                    header.push(other.as_char());
                    header.push('x');
                }
            }
            assert_eq!(Delimiter::detect(&header), delimiter, "header {:?}", header);
        }
    }

    #[test]
    fn test_tie_and_absence_default_to_comma() {
        assert_eq!(Delimiter::detect("a;b|c"), Delimiter::Comma);
        assert_eq!(Delimiter::detect("nome"), Delimiter::Comma);
    }

    #[test]
    fn test_header_delimiter_applies_to_every_row() {
        let text = "id;nome\n1;Silva, J.\n2,Souza";
        let parsed = CSVImporter::new().parse(text).unwrap();
        assert_eq!(parsed.delimiter, Delimiter::Semicolon);
        assert_eq!(parsed.rows[0].get("nome"), Some("Silva, J."));
        assert_eq!(parsed.rows[1].get("id"), Some("2,Souza"));
        assert_eq!(parsed.rows[1].slot("nome"), Some(None));
    }
}

mod tokenizer_tests {
    use super::*;

    #[test]
    fn test_quoted_field_round_trip() {
        let original = r#"Lesão "grau 2", coxa"#;
        let quoted = format!("\"{}\"", original.replace('"', "\"\""));
        let line = format!("1,{},fim", quoted);

        let fields = parse_line(&line, Delimiter::Comma);
        assert_eq!(fields, vec!["1", original, "fim"]);
    }

    #[test]
    fn test_tab_separated_with_quotes() {
        let fields = parse_line("7\t\"Ana\tMaria\"\t", Delimiter::Tab);
        assert_eq!(fields, vec!["7", "Ana\tMaria", ""]);
    }
}

mod header_tests {
    use super::*;

    #[test]
    fn test_export_headers() {
        assert_eq!(normalize_header("ID Atleta"), "id_atleta");
        assert_eq!(normalize_header("Diagnóstico / Queixa"), "diagnostico_queixa");
        assert_eq!(normalize_header("Participação em Jogos"), "participacao_em_jogos");
        assert_eq!(normalize_header("Dias DM"), "dias_dm");
        assert_eq!(normalize_header("\"Sessão\""), "sessao");
    }

    #[test]
    fn test_idempotent_on_keys() {
        for key in ["id_atleta", "dias_dm", "player_load", "cmj"] {
            assert_eq!(normalize_header(key), key);
        }
    }

    #[test]
    fn test_colliding_headers_last_wins() {
        let parsed = CSVImporter::new().parse("Posição,posicao\nGoleiro,Zagueiro").unwrap();
        assert_eq!(parsed.rows[0].len(), 1);
        assert_eq!(parsed.rows[0].get("posicao"), Some("Zagueiro"));
    }
}

mod pipeline_tests {
    use super::*;

    #[test]
    fn test_players_example() {
        let text = "id,nome,posicao,idade\n1,\"Silva, J.\",Atacante,19\n2,Souza,Zagueiro,35";
        let entry = CSVImporter::new()
            .import("jogadores.csv", text, DatasetType::Players)
            .unwrap();

        assert_eq!(entry.content.len(), 2);
        let silva = &entry.content[0];
        assert_eq!(silva.get("id"), Some("1"));
        assert_eq!(silva.get("nome"), Some("Silva, J."));
        assert_eq!(silva.get("posicao"), Some("Atacante"));
        assert_eq!(silva.get("idade"), Some("19"));
        assert_eq!(silva.get("idade_padronizada"), Some("16-21 anos"));

        let souza = &entry.content[1];
        assert_eq!(souza.get("id"), Some("2"));
        assert_eq!(souza.get("idade_padronizada"), Some("> 30 anos"));

        assert_eq!(entry.history.len(), 1);
        assert_eq!(entry.history[0].action, HistoryAction::Initial);
    }

    #[test]
    fn test_content_length_is_non_blank_lines_minus_header() {
        let text = "\u{feff}a,b\r\n\r\n1,2\n \n3,4\n\t\n5,6\n";
        let non_blank = text.lines().filter(|l| !l.trim().is_empty()).count();
        let entry = CSVImporter::new()
            .import("x.csv", text, DatasetType::Gps)
            .unwrap();
        assert_eq!(entry.content.len(), non_blank - 1);
    }

    #[test]
    fn test_bom_does_not_leak_into_first_key() {
        let parsed = CSVImporter::new().parse("\u{feff}Nome\nSilva").unwrap();
        assert_eq!(parsed.headers[0].as_str(), "nome");
    }

    #[test]
    fn test_oversized_age_is_over_thirty() {
        let entry = CSVImporter::new()
            .import("p.csv", "idade\n99999999999999999999", DatasetType::Players)
            .unwrap();
        assert_eq!(entry.content[0].get("idade_padronizada"), Some("> 30 anos"));
    }

    #[test]
    fn test_only_sentinels_coerce_to_null() {
        let text = "a,b,c,d,e,f,g\n,NA,N/A,-,n/a,0,--";
        let parsed = CSVImporter::new().parse(text).unwrap();
        let row = &parsed.rows[0];
        for key in ["a", "b", "c", "d"] {
            assert_eq!(row.slot(key), Some(None), "{} should be null", key);
        }
        assert_eq!(row.get("e"), Some("n/a"));
        assert_eq!(row.get("f"), Some("0"));
        assert_eq!(row.get("g"), Some("--"));
    }

    #[test]
    fn test_positional_columns_copied() {
        let header: Vec<String> = (0..19).map(|i| format!("col{}", i)).collect();
        let mut row: Vec<String> = (0..19).map(|i| i.to_string()).collect();
        row[17] = "Trauma direto".to_string();
        row[18] = "Anterior".to_string();
        let text = format!("{}\n{}", header.join(","), row.join(","));

        let parsed = CSVImporter::new().parse(&text).unwrap();
        assert_eq!(parsed.rows[0].get("mecanismo_direto"), Some("Trauma direto"));
        assert_eq!(parsed.rows[0].get("local2_direto"), Some("Anterior"));
        assert_eq!(parsed.rows[0].get("col17"), Some("Trauma direto"));
    }

    #[test]
    fn test_positional_columns_are_configurable() {
        let importer = CSVImporter::new().with_positional_fallback(Some(PositionalFallback {
            mecanismo_column: 1,
            local2_column: 2,
        }));
        let parsed = importer.parse("a,b,c\nx,Queda,Medial").unwrap();
        assert_eq!(parsed.rows[0].get("mecanismo_direto"), Some("Queda"));
        assert_eq!(parsed.rows[0].get("local2_direto"), Some("Medial"));
    }

    #[test]
    fn test_error_cases() {
        let importer = CSVImporter::new();
        assert_eq!(
            importer.import("x.csv", "", DatasetType::Players).unwrap_err(),
            ImportError::EmptyFile
        );
        assert_eq!(
            importer.import("x.csv", "\r\n \r\n", DatasetType::Players).unwrap_err(),
            ImportError::EmptyFile
        );
        assert_eq!(
            importer.import("x.csv", "id,nome", DatasetType::Players).unwrap_err(),
            ImportError::NoDataRows
        );
        assert_eq!(
            importer.import("x.csv", "%%,--\n1,2", DatasetType::Players).unwrap_err(),
            ImportError::NoDataRows
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ImportError::EmptyFile.to_string(), "CSV file is empty");
        assert!(ImportError::NoDataRows.to_string().contains("No valid data rows"));
    }
}
