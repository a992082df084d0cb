//! Inventory store configuration from TOML (`[inventory]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInventoryConfig {
    /// JSON seed file; the bundled sample data is used when unset
    pub seed_file: Option<PathBuf>,
}
