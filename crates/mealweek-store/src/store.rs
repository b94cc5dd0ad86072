//! File-backed persistence for the meal plan.
//!
//! The whole plan is stored as one pretty-printed JSON document. Every
//! mutation in the application is followed by a full-plan [`PlanStore::save`];
//! there is no dirty tracking and no partial write, so recovery logic is
//! unnecessary (single synchronous writer).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::config::StoreConfig;
use crate::models::MealPlan;

/// Handle to the on-disk meal plan file.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    /// Create a store for the path named in `config`. Does not touch disk.
    pub fn open(config: &StoreConfig) -> Self {
        Self {
            path: config.data_file.clone(),
        }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted plan.
    ///
    /// Fails soft: a missing file is a normal first run and a corrupt or
    /// unreadable file is treated as no data. Both yield an empty plan;
    /// this method never returns an error.
    pub fn load(&self) -> MealPlan {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return MealPlan::new(),
            Err(e) => {
                warn!("could not read {}: {e}; starting empty", self.path.display());
                return MealPlan::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(plan) => plan,
            Err(e) => {
                warn!(
                    "stored meal plan at {} is unparsable: {e}; starting empty",
                    self.path.display()
                );
                MealPlan::new()
            }
        }
    }

    /// Serialize the full plan and overwrite the file, creating parent
    /// directories as needed.
    pub fn save(&self, plan: &MealPlan) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create data directory {}", dir.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(plan).context("failed to serialize meal plan")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write meal plan to {}", self.path.display()))?;

        Ok(())
    }
}
