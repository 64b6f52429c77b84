use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::selector::ReelGeometry;
use crate::storage::FileStore;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub spin: SpinConfig,
}

/// Where persisted rule lists live.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory (default: platform data dir + `ygo-shuffle`).
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolved data directory.
    pub fn data_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(FileStore::default_dir)
    }

    /// File store rooted at the resolved data directory.
    pub fn open(&self) -> FileStore {
        FileStore::new(self.data_dir())
    }
}

/// Spin timings and slot window dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinConfig {
    /// Time between spin start and reveal (default: 2000).
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Extra pause shown when the draw lands on the re-roll rule (default: 1000).
    #[serde(default = "default_reroll_pause_ms")]
    pub reroll_pause_ms: u64,
    /// Reel scroll speed (default: 800).
    #[serde(default = "default_pixels_per_second")]
    pub pixels_per_second: f64,
    /// Height of one reel row (default: 45).
    #[serde(default = "default_row_height")]
    pub row_height: f64,
    /// Rows added past the scrolled distance (default: 10).
    #[serde(default = "default_extra_rows")]
    pub extra_rows: usize,
    /// Distance short of the full scroll where the reel stops (default: 150).
    #[serde(default = "default_scroll_margin")]
    pub scroll_margin: f64,
}

impl SpinConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn reroll_pause(&self) -> Duration {
        Duration::from_millis(self.reroll_pause_ms)
    }

    pub fn geometry(&self) -> ReelGeometry {
        ReelGeometry {
            duration: self.duration(),
            pixels_per_second: self.pixels_per_second,
            row_height: self.row_height,
            extra_rows: self.extra_rows,
            scroll_margin: self.scroll_margin,
        }
    }
}

fn default_duration_ms() -> u64 {
    2000
}

fn default_reroll_pause_ms() -> u64 {
    1000
}

fn default_pixels_per_second() -> f64 {
    800.0
}

fn default_row_height() -> f64 {
    45.0
}

fn default_extra_rows() -> usize {
    10
}

fn default_scroll_margin() -> f64 {
    150.0
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            reroll_pause_ms: default_reroll_pause_ms(),
            pixels_per_second: default_pixels_per_second(),
            row_height: default_row_height(),
            extra_rows: default_extra_rows(),
            scroll_margin: default_scroll_margin(),
        }
    }
}
