//! Resolution of CLI settings from flags and environment.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use roadnet_lib::LoaderOptions;

/// Environment variable overriding the dataset location.
pub const DATASET_ENV_VAR: &str = "ROADNET_DATASET";

/// Dataset looked up in the working directory when nothing else is configured.
pub const DEFAULT_DATASET_FILENAME: &str = "export.json";

/// Settings shared by every subcommand that needs the road graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSettings {
    /// Path to the JSON export.
    pub dataset: PathBuf,
    /// Node budget for sampling; `None` keeps the full graph untouched.
    pub sample_size: Option<usize>,
    /// Seed for reproducible sampling.
    pub seed: Option<u64>,
    /// Tag key marking a way as a road.
    pub road_tag: String,
}

impl NetworkSettings {
    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions::default().with_road_tag(self.road_tag.clone())
    }
}

/// Resolve the dataset path: explicit flag, then `ROADNET_DATASET`, then
/// `export.json` in the working directory.
pub fn resolve_dataset_path(flag: Option<&Path>) -> PathBuf {
    resolve_dataset_path_from(flag, env::var_os(DATASET_ENV_VAR))
}

fn resolve_dataset_path_from(flag: Option<&Path>, env_value: Option<OsString>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    match env_value {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_DATASET_FILENAME),
    }
}
