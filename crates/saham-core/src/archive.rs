//! Case archive
//!
//! An ordered, most-recent-first sequence of verdicts. All operations here
//! are synchronous and pure over the in-memory sequence; persistence is a
//! separate mirror owned by the store layer. Identity keys (id, falling
//! back to ticker for legacy entries) are kept unique across add and
//! import so selections never desync from the sequence.

use crate::error::{Result, WorkbenchError};
use crate::result::AnalysisResult;
use std::collections::HashSet;
use tracing::debug;

/// Ordered verdict archive, newest first
#[derive(Debug, Clone, Default)]
pub struct CaseArchive {
    entries: Vec<AnalysisResult>,
}

impl CaseArchive {
    /// Create an empty archive
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an archive from already-keyed entries, order preserved
    pub fn from_entries(entries: Vec<AnalysisResult>) -> Self {
        Self { entries }
    }

    /// Entries in archive order
    pub fn entries(&self) -> &[AnalysisResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a verdict to the front
    ///
    /// The entry is re-keyed with a fresh id and current timestamp before
    /// insertion; whatever identity it arrived with is discarded. Returns
    /// the fresh identity key.
    pub fn add(&mut self, mut result: AnalysisResult) -> String {
        result.stamp_identity();
        let key = result.identity_key().to_string();
        debug!(ticker = %result.ticker, key = %key, "Archiving verdict");
        self.entries.insert(0, result);
        key
    }

    /// Remove the entry with the given identity key
    ///
    /// No-op when the key is absent. Returns whether an entry was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.identity_key() != key);
        self.entries.len() < before
    }

    /// Serialize the full sequence, order preserved
    pub fn export(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.entries)
            .map_err(|e| WorkbenchError::Store(format!("export serialization failed: {e}")))
    }

    /// Merge a serialized snapshot into the archive
    ///
    /// The snapshot must parse as an ordered sequence of verdicts; anything
    /// else is rejected wholesale and the archive is untouched. Imported
    /// entries are appended after existing ones. An entry arriving without
    /// an id, or with an id already present, gets a fresh one. Returns the
    /// number of entries merged.
    pub fn import(&mut self, snapshot: &str) -> Result<usize> {
        let mut incoming: Vec<AnalysisResult> = serde_json::from_str(snapshot)
            .map_err(|e| WorkbenchError::Import(format!("snapshot did not parse: {e}")))?;

        let mut seen: HashSet<String> = self
            .entries
            .iter()
            .map(|entry| entry.identity_key().to_string())
            .collect();

        for entry in &mut incoming {
            if entry.id.is_none() || seen.contains(entry.identity_key()) {
                entry.assign_id();
            }
            seen.insert(entry.identity_key().to_string());
        }

        let merged = incoming.len();
        debug!(merged, total = self.entries.len() + merged, "Imported archive snapshot");
        self.entries.extend(incoming);
        Ok(merged)
    }

    /// Entries whose identity key is in `keys`, in archive order
    ///
    /// All selected entries must share one ticker; a mixed selection fails
    /// here even if the UI should have prevented it.
    pub fn select_subset(&self, keys: &[String]) -> Result<Vec<AnalysisResult>> {
        let wanted: HashSet<&str> = keys.iter().map(String::as_str).collect();
        let selected: Vec<AnalysisResult> = self
            .entries
            .iter()
            .filter(|entry| wanted.contains(entry.identity_key()))
            .cloned()
            .collect();

        if let Some(first) = selected.first() {
            if let Some(stray) = selected.iter().find(|e| e.ticker != first.ticker) {
                return Err(WorkbenchError::Selection(format!(
                    "selection mixes tickers {} and {}",
                    first.ticker, stray.ticker
                )));
            }
        }

        Ok(selected)
    }

    /// Drop selection keys that no longer resolve to an archive entry
    ///
    /// Call after any removal while a selection is open, so the selection
    /// cannot reference entries the archive no longer contains.
    pub fn prune_selection(&self, selection: &mut Vec<String>) {
        let live: HashSet<&str> = self
            .entries
            .iter()
            .map(AnalysisResult::identity_key)
            .collect();
        selection.retain(|key| live.contains(key.as_str()));
    }
}
