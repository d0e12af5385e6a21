//! Local persistence
//!
//! Three JSON blobs under one root directory: the verdict vault, the
//! preferences blob, and the in-progress submission draft. A missing blob
//! reads as its empty default; a present but unreadable blob is an error,
//! not a silent reset. [`ArchiveStore`] layers a lock and a write-through
//! mirror over the vault so callers mutate the archive through one door.

use crate::archive::CaseArchive;
use crate::config::WorkbenchConfig;
use crate::error::{Result, WorkbenchError};
use crate::input::StockAnalysisInput;
use crate::result::AnalysisResult;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info};

const VAULT_FILE: &str = "vault.json";
const CONFIG_FILE: &str = "config.json";
const DRAFT_FILE: &str = "draft.json";

/// File-backed blob storage under one root directory
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory is created on first write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the verdict vault
    ///
    /// A missing file yields an empty archive. Legacy entries persisted
    /// without an id are assigned one here, at the read boundary, so the
    /// rest of the workbench never sees an id-less entry from disk.
    pub fn load_vault(&self) -> Result<CaseArchive> {
        let path = self.root.join(VAULT_FILE);
        if !path.exists() {
            return Ok(CaseArchive::new());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| WorkbenchError::Store(format!("failed to read vault: {e}")))?;
        let mut entries: Vec<AnalysisResult> = serde_json::from_str(&content)
            .map_err(|e| WorkbenchError::Store(format!("failed to parse vault: {e}")))?;

        let mut migrated = 0usize;
        for entry in &mut entries {
            if entry.id.is_none() {
                entry.assign_id();
                migrated += 1;
            }
        }
        if migrated > 0 {
            info!(migrated, "Assigned ids to legacy vault entries");
        }

        debug!(entries = entries.len(), "Loaded vault");
        Ok(CaseArchive::from_entries(entries))
    }

    /// Write the full vault, order preserved
    pub fn save_vault(&self, archive: &CaseArchive) -> Result<()> {
        self.write_blob(VAULT_FILE, &archive.export()?)
    }

    /// Load preferences, defaulting when the blob is absent
    pub fn load_config(&self) -> Result<WorkbenchConfig> {
        let path = self.root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(WorkbenchConfig::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| WorkbenchError::Config(format!("failed to read config: {e}")))?;
        serde_json::from_str(&content)
            .map_err(|e| WorkbenchError::Config(format!("failed to parse config: {e}")))
    }

    /// Write preferences
    pub fn save_config(&self, config: &WorkbenchConfig) -> Result<()> {
        let content = serde_json::to_string_pretty(config)
            .map_err(|e| WorkbenchError::Config(format!("failed to serialize config: {e}")))?;
        self.write_blob(CONFIG_FILE, &content)
    }

    /// Load the in-progress submission draft, if one was saved
    pub fn load_draft(&self) -> Result<Option<StockAnalysisInput>> {
        let path = self.root.join(DRAFT_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| WorkbenchError::Store(format!("failed to read draft: {e}")))?;
        let draft = serde_json::from_str(&content)
            .map_err(|e| WorkbenchError::Store(format!("failed to parse draft: {e}")))?;
        Ok(Some(draft))
    }

    /// Write the in-progress submission draft
    pub fn save_draft(&self, input: &StockAnalysisInput) -> Result<()> {
        let content = serde_json::to_string_pretty(input)
            .map_err(|e| WorkbenchError::Store(format!("failed to serialize draft: {e}")))?;
        self.write_blob(DRAFT_FILE, &content)
    }

    /// Remove the draft; no-op when none exists
    pub fn clear_draft(&self) -> Result<()> {
        let path = self.root.join(DRAFT_FILE);
        if path.exists() {
            std::fs::remove_file(&path)
                .map_err(|e| WorkbenchError::Store(format!("failed to clear draft: {e}")))?;
        }
        Ok(())
    }

    fn write_blob(&self, name: &str, content: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .map_err(|e| WorkbenchError::Store(format!("failed to create store root: {e}")))?;
        std::fs::write(self.root.join(name), content)
            .map_err(|e| WorkbenchError::Store(format!("failed to write {name}: {e}")))
    }
}

/// Shared verdict archive with a write-through persistence mirror
///
/// Every mutation happens under the write lock and is flushed to disk
/// before the lock is released, so the persisted vault never lags the
/// in-memory sequence.
pub struct ArchiveStore {
    archive: RwLock<CaseArchive>,
    blobs: BlobStore,
}

impl ArchiveStore {
    /// Open the store, loading the persisted vault
    pub fn open(blobs: BlobStore) -> Result<Self> {
        let archive = blobs.load_vault()?;
        Ok(Self {
            archive: RwLock::new(archive),
            blobs,
        })
    }

    /// Archive a verdict; returns its fresh identity key
    pub fn add(&self, result: AnalysisResult) -> Result<String> {
        let mut archive = self.write_lock()?;
        let key = archive.add(result);
        self.blobs.save_vault(&archive)?;
        Ok(key)
    }

    /// Remove an entry by identity key; returns whether one was removed
    pub fn remove(&self, key: &str) -> Result<bool> {
        let mut archive = self.write_lock()?;
        let removed = archive.remove(key);
        if removed {
            self.blobs.save_vault(&archive)?;
        }
        Ok(removed)
    }

    /// Merge a serialized snapshot; returns the number of entries merged
    pub fn import(&self, snapshot: &str) -> Result<usize> {
        let mut archive = self.write_lock()?;
        let merged = archive.import(snapshot)?;
        self.blobs.save_vault(&archive)?;
        Ok(merged)
    }

    /// Serialize the current sequence, order preserved
    pub fn export(&self) -> Result<String> {
        self.read_lock()?.export()
    }

    /// Snapshot of the current entries, newest first
    pub fn entries(&self) -> Result<Vec<AnalysisResult>> {
        Ok(self.read_lock()?.entries().to_vec())
    }

    /// Selected entries in archive order, single ticker enforced
    pub fn select_subset(&self, keys: &[String]) -> Result<Vec<AnalysisResult>> {
        self.read_lock()?.select_subset(keys)
    }

    /// Drop selection keys no longer present in the archive
    pub fn prune_selection(&self, selection: &mut Vec<String>) -> Result<()> {
        self.read_lock()?.prune_selection(selection);
        Ok(())
    }

    fn read_lock(&self) -> Result<std::sync::RwLockReadGuard<'_, CaseArchive>> {
        self.archive
            .read()
            .map_err(|e| WorkbenchError::Store(format!("archive lock poisoned: {e}")))
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, CaseArchive>> {
        self.archive
            .write()
            .map_err(|e| WorkbenchError::Store(format!("archive lock poisoned: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::tests::sample_result;

    #[test]
    fn test_missing_blobs_read_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlobStore::new(dir.path());

        assert!(store.load_vault().unwrap().is_empty());
        assert_eq!(store.load_config().unwrap(), WorkbenchConfig::default());
        assert!(store.load_draft().unwrap().is_none());
    }

    #[test]
    fn test_vault_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlobStore::new(dir.path());

        let mut archive = CaseArchive::new();
        archive.add(sample_result("BBCA"));
        archive.add(sample_result("TLKM"));
        store.save_vault(&archive).unwrap();

        let loaded = store.load_vault().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.entries()[0].ticker, "TLKM");
    }

    #[test]
    fn test_vault_load_migrates_missing_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlobStore::new(dir.path());

        let mut legacy = sample_result("BBCA");
        legacy.id = None;
        let content = serde_json::to_string_pretty(&vec![legacy]).unwrap();
        std::fs::create_dir_all(dir.path()).unwrap();
        std::fs::write(dir.path().join("vault.json"), content).unwrap();

        let loaded = store.load_vault().unwrap();
        assert!(loaded.entries()[0].id.is_some());
    }

    #[test]
    fn test_corrupt_vault_is_an_error_not_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlobStore::new(dir.path());
        std::fs::write(dir.path().join("vault.json"), "{{{").unwrap();

        assert!(matches!(
            store.load_vault().unwrap_err(),
            WorkbenchError::Store(_)
        ));
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlobStore::new(dir.path());

        let config = WorkbenchConfig {
            user_name: "Adi".to_string(),
            ..WorkbenchConfig::default()
        };
        store.save_config(&config).unwrap();

        assert_eq!(store.load_config().unwrap(), config);
    }

    #[test]
    fn test_draft_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlobStore::new(dir.path());

        let draft = StockAnalysisInput {
            ticker: "BBCA".to_string(),
            price: String::new(),
            capital: String::new(),
            capital_tier: crate::input::CapitalTier::Retail,
            risk_profile: crate::input::RiskProfile::Balanced,
            fundamentals: Default::default(),
            bandarmology: Default::default(),
            raw_intelligence: String::new(),
        };

        store.save_draft(&draft).unwrap();
        assert_eq!(store.load_draft().unwrap().unwrap().ticker, "BBCA");

        store.clear_draft().unwrap();
        assert!(store.load_draft().unwrap().is_none());
        // clearing twice is a no-op
        store.clear_draft().unwrap();
    }

    #[test]
    fn test_archive_store_mirrors_mutations_to_disk() {
        let dir = tempfile::tempdir().unwrap();

        let key = {
            let store = ArchiveStore::open(BlobStore::new(dir.path())).unwrap();
            let key = store.add(sample_result("BBCA")).unwrap();
            store.add(sample_result("TLKM")).unwrap();
            key
        };

        let reopened = ArchiveStore::open(BlobStore::new(dir.path())).unwrap();
        assert_eq!(reopened.entries().unwrap().len(), 2);

        assert!(reopened.remove(&key).unwrap());
        let reopened_again = ArchiveStore::open(BlobStore::new(dir.path())).unwrap();
        assert_eq!(reopened_again.entries().unwrap().len(), 1);
        assert_eq!(reopened_again.entries().unwrap()[0].ticker, "TLKM");
    }

    #[test]
    fn test_archive_store_import_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArchiveStore::open(BlobStore::new(dir.path())).unwrap();

        let mut source = CaseArchive::new();
        source.add(sample_result("ASII"));
        store.import(&source.export().unwrap()).unwrap();

        let reopened = ArchiveStore::open(BlobStore::new(dir.path())).unwrap();
        assert_eq!(reopened.entries().unwrap()[0].ticker, "ASII");
    }

    #[test]
    fn test_failed_import_leaves_disk_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArchiveStore::open(BlobStore::new(dir.path())).unwrap();
        store.add(sample_result("BBCA")).unwrap();

        assert!(store.import("not a snapshot").is_err());

        let reopened = ArchiveStore::open(BlobStore::new(dir.path())).unwrap();
        assert_eq!(reopened.entries().unwrap().len(), 1);
    }
}
