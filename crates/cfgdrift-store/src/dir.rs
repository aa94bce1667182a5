use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use cfgdrift_types::ConfigRow;

use crate::error::{StoreError, StoreResult};
use crate::rowset::RowSet;
use crate::session::{ConfigSession, INSTANCE_COLUMNS};

const INSTANCE_FILE: &str = "instance.json";
const LIVE_FILE: &str = "live.json";
const BASELINE_FILE: &str = "baseline.json";

#[derive(Debug, Serialize, Deserialize)]
struct InstanceFile {
    instance_id: String,
    database_name: String,
}

/// On-disk baseline table: the captured rows plus capture metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BaselineFile {
    pub captured_at: DateTime<Utc>,
    pub rows: Vec<ConfigRow>,
}

/// Configuration store session over a JSON directory.
///
/// The directory holds `instance.json` (identity), `live.json` (the exported
/// live parameter view) and `baseline.json` (the durable baseline table).
/// Baseline mutations stage in memory; `commit` writes the baseline file
/// atomically via a temp file and rename, so a crash or an early exit leaves
/// the previous baseline intact.
#[derive(Debug)]
pub struct DirSession {
    dir: PathBuf,
    staged: Option<Option<BaselineFile>>,
}

impl DirSession {
    /// Open a session on a store directory.
    ///
    /// Fails with a connectivity error when the directory or its
    /// `instance.json` is missing — the store cannot be reached.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(StoreError::Connectivity(format!(
                "store directory not found: {}",
                dir.display()
            )));
        }
        if !dir.join(INSTANCE_FILE).is_file() {
            return Err(StoreError::Connectivity(format!(
                "store has no {INSTANCE_FILE}: {}",
                dir.display()
            )));
        }
        debug!(dir = %dir.display(), "opened store session");
        Ok(Self { dir, staged: None })
    }

    fn baseline_path(&self) -> PathBuf {
        self.dir.join(BASELINE_FILE)
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, name: &str) -> StoreResult<T> {
        let path = self.dir.join(name);
        let bytes = fs::read(&path).map_err(|e| {
            StoreError::Connectivity(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Serialization(format!("{}: {e}", path.display())))
    }

    /// The baseline state reads observe: staged if present, else the file.
    fn load_baseline(&self) -> StoreResult<Option<BaselineFile>> {
        if let Some(staged) = &self.staged {
            return Ok(staged.clone());
        }
        if !self.baseline_path().is_file() {
            return Ok(None);
        }
        self.read_json::<BaselineFile>(BASELINE_FILE).map(Some)
    }

    fn stage(&mut self) -> StoreResult<&mut Option<BaselineFile>> {
        if self.staged.is_none() {
            self.staged = Some(self.load_baseline()?);
        }
        Ok(self.staged.as_mut().expect("staged state just installed"))
    }
}

impl ConfigSession for DirSession {
    fn instance_info(&mut self) -> StoreResult<RowSet> {
        let file: InstanceFile = self.read_json(INSTANCE_FILE)?;
        Ok(RowSet::new(
            INSTANCE_COLUMNS,
            vec![vec![file.instance_id.into(), file.database_name.into()]],
        ))
    }

    fn live_rows(&mut self) -> StoreResult<Vec<ConfigRow>> {
        let rows: Vec<ConfigRow> = self.read_json(LIVE_FILE)?;
        debug!(count = rows.len(), "loaded live parameter view");
        Ok(rows)
    }

    fn baseline_exists(&mut self) -> StoreResult<bool> {
        match &self.staged {
            Some(staged) => Ok(staged.is_some()),
            None => Ok(self.baseline_path().is_file()),
        }
    }

    fn create_baseline(&mut self) -> StoreResult<()> {
        let state = self.stage()?;
        if state.is_none() {
            *state = Some(BaselineFile {
                captured_at: Utc::now(),
                rows: Vec::new(),
            });
        }
        Ok(())
    }

    fn baseline_rows(&mut self) -> StoreResult<Vec<ConfigRow>> {
        Ok(self
            .load_baseline()?
            .ok_or(StoreError::BaselineMissing)?
            .rows)
    }

    fn truncate_baseline(&mut self) -> StoreResult<()> {
        match self.stage()? {
            Some(file) => {
                file.rows.clear();
                file.captured_at = Utc::now();
                Ok(())
            }
            None => Err(StoreError::BaselineMissing),
        }
    }

    fn append_baseline(&mut self, rows: &[ConfigRow]) -> StoreResult<()> {
        match self.stage()? {
            Some(file) => {
                file.rows.extend_from_slice(rows);
                file.captured_at = Utc::now();
                Ok(())
            }
            None => Err(StoreError::BaselineMissing),
        }
    }

    fn commit(&mut self) -> StoreResult<()> {
        let Some(staged) = self.staged.take() else {
            return Ok(());
        };
        match staged {
            Some(file) => {
                let tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
                serde_json::to_writer_pretty(&tmp, &file)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                tmp.persist(self.baseline_path())
                    .map_err(|e| StoreError::Io(e.error))?;
                info!(rows = file.rows.len(), "baseline committed");
            }
            None => {
                if self.baseline_path().is_file() {
                    fs::remove_file(self.baseline_path())?;
                }
            }
        }
        Ok(())
    }
}
