use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::info;

use crate::infrastructure::jsonfile::document::Document;

/// Single owner of the persisted site document. All repositories share one
/// store, so holding its lock across a mutation is the critical section that
/// keeps payment approval and subscription activation from interleaving.
pub struct JsonFileStore {
    data_file: PathBuf,
    document: Mutex<Document>,
}

impl JsonFileStore {
    pub fn open(data_file: impl Into<PathBuf>) -> Result<Self> {
        let data_file = data_file.into();

        let document = match std::fs::read_to_string(&data_file) {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("corrupt data file {}", data_file.display()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(data_file = %data_file.display(), "store: starting with an empty document");
                Document::default()
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read {}", data_file.display()));
            }
        };

        Ok(Self {
            data_file,
            document: Mutex::new(document),
        })
    }

    pub async fn read<T>(&self, reader: impl FnOnce(&Document) -> T) -> T {
        let document = self.document.lock().await;
        reader(&document)
    }

    /// Applies `mutator` to a working copy, writes that copy to disk and only
    /// then swaps it in as the current document. A failed write leaves both
    /// memory and the data file at the prior state.
    pub async fn mutate<T>(&self, mutator: impl FnOnce(&mut Document) -> T) -> Result<T> {
        let mut document = self.document.lock().await;

        let mut draft = document.clone();
        let value = mutator(&mut draft);

        // Rejected state transitions leave the draft untouched; skip the write.
        if draft != *document {
            save_atomically(&self.data_file, &draft)?;
            *document = draft;
        }

        Ok(value)
    }
}

// Write to a temp file in the same directory, then rename over the data file.
// Readers of the path never observe a half-written document.
fn save_atomically(data_file: &Path, document: &Document) -> Result<()> {
    let dir = match data_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let json = serde_json::to_string_pretty(document).context("failed to serialize document")?;

    let mut tmp = NamedTempFile::new_in(&dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(json.as_bytes())
        .context("failed to write document")?;
    tmp.persist(data_file)
        .with_context(|| format!("failed to replace {}", data_file.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::subscriptions::InsertSubscriptionEntity;
    use crate::domain::entities::users::UserEntity;
    use chrono::{Duration, Utc};
    use tempfile::tempdir;

    fn sample_user(id: i64, email: &str) -> UserEntity {
        UserEntity {
            id,
            name: format!("User {}", id),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role: "user".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn open_on_a_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("data.json")).unwrap();

        let users = store.read(|document| document.users.len()).await;
        assert_eq!(users, 0);
    }

    #[tokio::test]
    async fn mutations_survive_a_reopen() {
        let dir = tempdir().unwrap();
        let data_file = dir.path().join("data.json");

        let store = JsonFileStore::open(&data_file).unwrap();
        store
            .mutate(|document| {
                document.users.push(sample_user(1, "student@example.com"));
            })
            .await
            .unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&data_file).unwrap();
        let email = reopened
            .read(|document| document.users[0].email.clone())
            .await;
        assert_eq!(email, "student@example.com");
    }

    #[tokio::test]
    async fn mutation_is_on_disk_before_the_call_returns() {
        let dir = tempdir().unwrap();
        let data_file = dir.path().join("data.json");

        let store = JsonFileStore::open(&data_file).unwrap();
        store
            .mutate(|document| {
                document.users.push(sample_user(1, "student@example.com"));
            })
            .await
            .unwrap();

        // Another store opened on the same path sees the committed write.
        let other = JsonFileStore::open(&data_file).unwrap();
        let users = other.read(|document| document.users.len()).await;
        assert_eq!(users, 1);
    }

    #[tokio::test]
    async fn failed_save_leaves_the_in_memory_document_untouched() {
        let dir = tempdir().unwrap();
        let data_file = dir.path().join("data.json");

        let store = JsonFileStore::open(&data_file).unwrap();
        store
            .mutate(|document| {
                document.users.push(sample_user(1, "student@example.com"));
            })
            .await
            .unwrap();

        // Replace the data file with a directory so the rename must fail.
        std::fs::remove_file(&data_file).unwrap();
        std::fs::create_dir(&data_file).unwrap();

        let result = store
            .mutate(|document| {
                document.users.push(sample_user(2, "second@example.com"));
            })
            .await;
        assert!(result.is_err());

        let users = store.read(|document| document.users.len()).await;
        assert_eq!(users, 1);
    }

    #[tokio::test]
    async fn open_rejects_a_corrupt_document() {
        let dir = tempdir().unwrap();
        let data_file = dir.path().join("data.json");
        std::fs::write(&data_file, "{ not json").unwrap();

        assert!(JsonFileStore::open(&data_file).is_err());
    }

    #[tokio::test]
    async fn activation_inside_one_mutation_keeps_a_single_active_row() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("data.json")).unwrap();

        for plan_key in ["weekly", "monthly", "daily"] {
            let now = Utc::now();
            store
                .mutate(|document| {
                    document.activate_subscription(InsertSubscriptionEntity {
                        user_id: 7,
                        plan_key: plan_key.to_string(),
                        amount: 29,
                        starts_at: now,
                        ends_at: now + Duration::days(7),
                    })
                })
                .await
                .unwrap();
        }

        let active = store
            .read(|document| {
                document
                    .subscriptions
                    .iter()
                    .filter(|subscription| subscription.status == "active")
                    .count()
            })
            .await;
        assert_eq!(active, 1);
    }
}
