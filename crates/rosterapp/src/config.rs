//! # Configuration
//!
//! Roster configuration is managed by [`confique`], which layers environment variables, TOML
//! files and compiled defaults.
//!
//! ## Resolution Order
//!
//! Highest priority first:
//! 1. **Environment variables**: `ROSTER_BREAKPOINT`, `ROSTER_DATA`, ...
//! 2. **Project Config**: `roster.toml` in the working directory.
//! 3. **Global Config**: `roster.toml` in the OS config directory (via `directories`).
//! 4. **Compiled Defaults**: `#[config(default = ...)]` below.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `breakpoint` | `768` | Viewport widths below this use the compact table |
//! | `layout_floor` | `420` | Smallest layout width ever produced |
//! | `page_size` | `10` | Rows per grid page |
//! | `skills_preview` | `2` | Skills shown in the compact table before `…` |
//! | `cell_px` | `8` | Pixels per terminal cell when the width comes from the terminal |
//! | `data` | none | JSON roster to load instead of the bundled one |

use confique::Config;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, RosterError};
use crate::view::{CellOptions, ViewConfig};

pub const CONFIG_FILE_NAME: &str = "roster.toml";

#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Viewport widths (px) below this render the compact table.
    #[config(default = 768, env = "ROSTER_BREAKPOINT")]
    pub breakpoint: u32,

    /// Lower bound (px) of the layout width.
    #[config(default = 420, env = "ROSTER_LAYOUT_FLOOR")]
    pub layout_floor: u32,

    /// Rows per page in grid mode.
    #[config(default = 10, env = "ROSTER_PAGE_SIZE")]
    pub page_size: usize,

    /// Skills shown in the compact skills column before the ellipsis.
    #[config(default = 2, env = "ROSTER_SKILLS_PREVIEW")]
    pub skills_preview: usize,

    /// Pixels per terminal cell.
    #[config(default = 8, env = "ROSTER_CELL_PX")]
    pub cell_px: u32,

    /// JSON roster file. The bundled roster is used when absent.
    #[config(env = "ROSTER_DATA")]
    pub data: Option<PathBuf>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            breakpoint: 768,
            layout_floor: 420,
            page_size: 10,
            skills_preview: 2,
            cell_px: 8,
            data: None,
        }
    }
}

impl RosterConfig {
    /// Load from the environment, `<dir>/roster.toml`, then the global config file.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut builder = Self::builder().env().file(dir.join(CONFIG_FILE_NAME));
        if let Some(global) = global_config_path() {
            builder = builder.file(global);
        }
        let config = builder
            .load()
            .map_err(|e| RosterError::Config(e.to_string()))?;
        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            breakpoint: self.breakpoint,
            layout_floor: self.layout_floor,
        }
    }

    pub fn cell_options(&self) -> CellOptions {
        CellOptions {
            skills_preview: self.skills_preview,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    pub fn cell_px(&self) -> u32 {
        self.cell_px.max(1)
    }
}

/// `roster.toml` in the OS config directory, when one can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.view_config(), ViewConfig::default());
        assert_eq!(config.cell_options(), CellOptions::default());
        assert_eq!(config.page_size(), 10);
        assert!(config.data.is_none());
    }

    #[test]
    fn test_zero_sizes_are_raised_to_one() {
        let config = RosterConfig {
            page_size: 0,
            cell_px: 0,
            ..Default::default()
        };
        assert_eq!(config.page_size(), 1);
        assert_eq!(config.cell_px(), 1);
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "breakpoint = 1000\npage_size = 5\ndata = \"people.json\"\n",
        )
        .unwrap();

        let config = RosterConfig::builder()
            .file(dir.path().join(CONFIG_FILE_NAME))
            .load()
            .unwrap();
        assert_eq!(config.breakpoint, 1000);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.layout_floor, 420);
        assert_eq!(config.data, Some(PathBuf::from("people.json")));
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RosterConfig::builder()
            .file(dir.path().join(CONFIG_FILE_NAME))
            .load()
            .unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "breakpoint = \"wide\"\n").unwrap();
        let result = RosterConfig::load(dir.path());
        assert!(matches!(result, Err(RosterError::Config(_))));
    }
}
