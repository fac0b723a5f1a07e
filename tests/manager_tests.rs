//! Upload orchestration tests

use async_trait::async_trait;
use fc_analytics_sdk::config::IngestConfig;
use fc_analytics_sdk::import::ImportError;
use fc_analytics_sdk::manager::{CsvManager, ManagerError};
use fc_analytics_sdk::models::DatasetType;
use fc_analytics_sdk::storage::{MemoryStorageBackend, StorageBackend, StorageError};
use fc_analytics_sdk::validation::ValidationError;
use std::cell::Cell;
use std::rc::Rc;
use tokio::runtime::Runtime;

const PLAYERS_V1: &str = "id,nome,posicao,idade\n1,\"Silva, J.\",Atacante,19\n2,Souza,Zagueiro,35";
const PLAYERS_V2: &str = "id,nome,posicao\n9,Lima,Goleiro";
const INJURIES: &str = "id,id_atleta,nome,tipo,saida\nL1,1,Silva,Entorse,\nL2,2,Souza,Contusão,12/03/2024";

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn manager() -> CsvManager<MemoryStorageBackend> {
    CsvManager::new(MemoryStorageBackend::new(), &IngestConfig::default())
}

/// Memory backend whose writes to one path fail on demand
#[derive(Clone)]
struct FlakyBackend {
    inner: MemoryStorageBackend,
    failing_path: &'static str,
    fail: Rc<Cell<bool>>,
}

#[async_trait(?Send)]
impl StorageBackend for FlakyBackend {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.inner.read_file(path).await
    }

    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        if self.fail.get() && path == self.failing_path {
            return Err(StorageError::IoError("disk full".to_string()));
        }
        self.inner.write_file(path, content).await
    }

    async fn file_exists(&self, path: &str) -> Result<bool, StorageError> {
        self.inner.file_exists(path).await
    }

    async fn dir_exists(&self, path: &str) -> Result<bool, StorageError> {
        self.inner.dir_exists(path).await
    }

    async fn create_dir(&self, path: &str) -> Result<(), StorageError> {
        self.inner.create_dir(path).await
    }

    async fn list_files(&self, dir: &str) -> Result<Vec<String>, StorageError> {
        self.inner.list_files(dir).await
    }

    async fn delete_file(&self, path: &str) -> Result<(), StorageError> {
        self.inner.delete_file(path).await
    }
}

mod upload_tests {
    use super::*;

    #[test]
    fn test_upload_fills_both_stores() {
        runtime().block_on(async {
            let mut manager = manager();
            let outcome = manager
                .upload("jogadores.csv", PLAYERS_V1, DatasetType::Players)
                .await
                .unwrap();

            assert_eq!(outcome.records, 2);
            assert!(outcome.coercion_warnings.is_empty());
            assert_eq!(manager.csv_files().csv_files().len(), 1);
            assert_eq!(manager.data().players.len(), 2);
            assert_eq!(manager.data().players[0].nome, "Silva, J.");
            assert!(manager.data().last_update.is_some());
            assert_eq!(manager.storage().file_count(), 2);
        });
    }

    #[test]
    fn test_reupload_replaces_instead_of_appending() {
        runtime().block_on(async {
            let mut manager = manager();
            manager
                .upload("v1.csv", PLAYERS_V1, DatasetType::Players)
                .await
                .unwrap();
            manager
                .upload("v2.csv", PLAYERS_V2, DatasetType::Players)
                .await
                .unwrap();

            let entries = manager.csv_files().csv_files();
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].content.len(), 1);
            assert_eq!(entries[0].history.len(), 1);
            assert_eq!(entries[0].latest_file_name(), Some("v2.csv"));

            let players = &manager.data().players;
            assert_eq!(players.len(), 1);
            assert_eq!(players[0].id, "9");
        });
    }

    #[test]
    fn test_datasets_are_independent() {
        runtime().block_on(async {
            let mut manager = manager();
            manager
                .upload("p.csv", PLAYERS_V1, DatasetType::Players)
                .await
                .unwrap();
            manager
                .upload("l.csv", INJURIES, DatasetType::Injuries)
                .await
                .unwrap();

            assert_eq!(manager.csv_files().csv_files().len(), 2);
            assert_eq!(manager.data().players.len(), 2);
            assert_eq!(manager.data().injuries.len(), 2);
            assert_eq!(manager.data().active_injuries().len(), 1);
            assert_eq!(manager.data().injuries_by_player("Souza")[0].id, "L2");
        });
    }

    #[test]
    fn test_process_csv_does_not_touch_stores() {
        let manager = manager();
        let entry = manager
            .process_csv("p.csv", PLAYERS_V1, DatasetType::Players)
            .unwrap();
        assert_eq!(entry.content.len(), 2);
        assert!(manager.csv_files().csv_files().is_empty());
        assert_eq!(manager.storage().file_count(), 0);
    }
}

mod failure_tests {
    use super::*;

    #[test]
    fn test_failed_upload_keeps_previous_state() {
        runtime().block_on(async {
            let mut manager = manager();
            manager
                .upload("v1.csv", PLAYERS_V1, DatasetType::Players)
                .await
                .unwrap();
            let before_files = manager.csv_files().clone();
            let before_data = manager.data().clone();

            let err = manager
                .upload("vazio.csv", "\n\n", DatasetType::Players)
                .await
                .unwrap_err();
            assert!(matches!(err, ManagerError::Import(ImportError::EmptyFile)));

            let err = manager
                .upload("so-header.csv", "id,nome\n", DatasetType::Players)
                .await
                .unwrap_err();
            assert!(matches!(err, ManagerError::Import(ImportError::NoDataRows)));

            assert_eq!(manager.csv_files(), &before_files);
            assert_eq!(manager.data(), &before_data);
        });
    }

    #[test]
    fn test_file_name_must_end_in_csv() {
        runtime().block_on(async {
            let mut manager = manager();
            let err = manager
                .upload("jogadores.CSV", PLAYERS_V1, DatasetType::Players)
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                ManagerError::Validation(ValidationError::InvalidFormat(..))
            ));
            assert!(manager.csv_files().csv_files().is_empty());
        });
    }

    #[test]
    fn test_extension_check_can_be_disabled() {
        runtime().block_on(async {
            let mut config = IngestConfig::default();
            config.ingest.require_csv_extension = false;
            let mut manager = CsvManager::new(MemoryStorageBackend::new(), &config);
            manager
                .upload("export.txt", PLAYERS_V1, DatasetType::Players)
                .await
                .unwrap();
            assert_eq!(manager.data().players.len(), 2);
        });
    }

    #[test]
    fn test_storage_failure_rolls_back() {
        runtime().block_on(async {
            let backend = FlakyBackend {
                inner: MemoryStorageBackend::new(),
                failing_path: "football-data-store.json",
                fail: Rc::new(Cell::new(false)),
            };
            let fail = backend.fail.clone();
            let probe = backend.inner.clone();
            let mut manager = CsvManager::new(backend, &IngestConfig::default());

            manager
                .upload("v1.csv", PLAYERS_V1, DatasetType::Players)
                .await
                .unwrap();
            let persisted_before = probe.read_file("csv-files-store.json").await.unwrap();

            fail.set(true);
            let err = manager
                .upload("v2.csv", PLAYERS_V2, DatasetType::Players)
                .await
                .unwrap_err();
            assert!(matches!(err, ManagerError::Storage(StorageError::IoError(_))));

            assert_eq!(manager.data().players.len(), 2);
            assert_eq!(
                manager.csv_files().csv_files()[0].latest_file_name(),
                Some("v1.csv")
            );
            let persisted_after = probe.read_file("csv-files-store.json").await.unwrap();
            assert_eq!(persisted_after, persisted_before);
        });
    }
}

mod removal_tests {
    use super::*;

    #[test]
    fn test_remove_cascades_to_records() {
        runtime().block_on(async {
            let mut manager = manager();
            manager
                .upload("p.csv", PLAYERS_V1, DatasetType::Players)
                .await
                .unwrap();
            manager
                .upload("l.csv", INJURIES, DatasetType::Injuries)
                .await
                .unwrap();

            let removed = manager.remove_dataset(DatasetType::Players).await.unwrap();
            assert_eq!(removed.unwrap().record_count(), 2);
            assert!(manager.csv_files().get_by_name(DatasetType::Players).is_none());
            assert!(manager.data().players.is_empty());
            assert_eq!(manager.data().injuries.len(), 2);

            let again = manager.remove_dataset(DatasetType::Players).await.unwrap();
            assert!(again.is_none());
        });
    }

    #[test]
    fn test_clear_all() {
        runtime().block_on(async {
            let mut manager = manager();
            manager
                .upload("l.csv", INJURIES, DatasetType::Injuries)
                .await
                .unwrap();
            manager.clear_all().await.unwrap();
            assert!(manager.csv_files().csv_files().is_empty());
            assert!(manager.data().injuries.is_empty());
            assert!(manager.data().last_update.is_some());
        });
    }

    #[test]
    fn test_state_survives_reopen() {
        runtime().block_on(async {
            let backend = MemoryStorageBackend::new();
            let config = IngestConfig::default();
            let mut manager = CsvManager::new(backend.clone(), &config);
            manager
                .upload("p.csv", PLAYERS_V1, DatasetType::Players)
                .await
                .unwrap();
            manager.remove_dataset(DatasetType::Injuries).await.unwrap();

            let reopened = CsvManager::open(backend, &config).await.unwrap();
            assert_eq!(reopened.csv_files(), manager.csv_files());
            assert_eq!(reopened.data(), manager.data());
        });
    }
}

#[cfg(feature = "native-fs")]
mod file_upload_tests {
    use super::*;
    use fc_analytics_sdk::storage::FileSystemStorageBackend;
    use tempfile::TempDir;

    #[test]
    fn test_upload_file_reads_from_disk() {
        runtime().block_on(async {
            let temp = TempDir::new().unwrap();
            let csv_path = temp.path().join("gps semana 1.csv");
            std::fs::write(&csv_path, "nome;playerLoad;distancia;sprints\nSilva;410,5;6100;9\n")
                .unwrap();

            let backend = FileSystemStorageBackend::new(temp.path().join(".fc-analytics"));
            let mut manager = CsvManager::new(backend, &IngestConfig::default());
            let outcome = manager
                .upload_file(&csv_path, DatasetType::Gps)
                .await
                .unwrap();

            assert_eq!(outcome.entry.latest_file_name(), Some("gps semana 1.csv"));
            assert_eq!(manager.data().gps_data[0].player_load, 410.0);
            assert!(temp.path().join(".fc-analytics/football-data-store.json").exists());
        });
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        runtime().block_on(async {
            let temp = TempDir::new().unwrap();
            let mut manager = CsvManager::new(
                FileSystemStorageBackend::new(temp.path()),
                &IngestConfig::default(),
            );
            let err = manager
                .upload_file(&temp.path().join("nada.csv"), DatasetType::Gps)
                .await
                .unwrap_err();
            assert!(matches!(err, ManagerError::Import(ImportError::IoError(_))));
        });
    }
}
