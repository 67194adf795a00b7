//! Clip registry: the sharing/storage collaborator boundary.
//!
//! An explicitly constructed service instance with its own lifecycle — opened
//! at startup, persisted to a JSON file, no hidden global state. Stores
//! composite artifacts under unique ids and produces shareable URLs for them.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::artifact::CompositeArtifact;
use crate::compose::CompositeSpec;
use crate::consts::CLIP_TTL_SECS;
use crate::error::Result;

/// One stored clip: the encoded artifact plus the page metadata it was
/// composed from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClipRecord {
    pub id: String,
    /// PNG data URI.
    pub image_data: String,
    pub page_info: Option<String>,
    pub page_number: Option<u32>,
    pub total_pages: Option<u32>,
    pub date: Option<String>,
    /// Unix seconds.
    pub created_at: i64,
}

pub struct ClipRegistry {
    path: PathBuf,
    base_url: String,
    ttl_secs: i64,
    clips: HashMap<String, ClipRecord>,
    seq: u64,
}

impl ClipRegistry {
    /// Open (or create) a registry persisted at `path`.
    pub fn open(path: impl Into<PathBuf>, base_url: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let clips = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            let records: Vec<ClipRecord> = serde_json::from_str(&data)?;
            records.into_iter().map(|r| (r.id.clone(), r)).collect()
        } else {
            HashMap::new()
        };
        debug!(path = %path.display(), clips = clips.len(), "clip registry opened");
        Ok(Self {
            path,
            base_url: base_url.into(),
            ttl_secs: CLIP_TTL_SECS,
            clips,
            seq: 0,
        })
    }

    /// Store a composed artifact, returning its id.
    pub fn store(&mut self, artifact: &CompositeArtifact, spec: &CompositeSpec) -> Result<String> {
        let id = self.next_id();
        let record = ClipRecord {
            id: id.clone(),
            image_data: artifact.to_data_uri(),
            page_info: Some(spec.page_line()),
            page_number: Some(spec.page_number),
            total_pages: Some(spec.total_pages),
            date: spec.date.clone(),
            created_at: Utc::now().timestamp(),
        };
        self.clips.insert(id.clone(), record);
        self.persist()?;
        info!(id = %id, "clip stored");
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Option<&ClipRecord> {
        self.clips.get(id)
    }

    /// All stored clips, newest first.
    pub fn all(&self) -> Vec<&ClipRecord> {
        let mut records: Vec<&ClipRecord> = self.clips.values().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Durable shareable URL for a stored clip.
    pub fn shareable_url(&self, id: &str) -> String {
        format!("{}/cropped/{id}", self.base_url.trim_end_matches('/'))
    }

    /// Drop clips older than the TTL. `now` is unix seconds, passed in
    /// explicitly so expiry is testable. Returns the number removed.
    pub fn cleanup_expired(&mut self, now: i64) -> Result<usize> {
        let ttl = self.ttl_secs;
        let before = self.clips.len();
        self.clips.retain(|_, record| record.created_at + ttl > now);
        let removed = before - self.clips.len();
        if removed > 0 {
            self.persist()?;
            info!(removed, "expired clips removed");
        }
        Ok(removed)
    }

    fn next_id(&mut self) -> String {
        self.seq += 1;
        format!("crop_{}_{}", Utc::now().timestamp_millis(), self.seq)
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut records: Vec<&ClipRecord> = self.clips.values().collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        let data = serde_json::to_string_pretty(&records)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}
