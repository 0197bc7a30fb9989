//! Command-line argument parsing
//!
//! Supports:
//! - An explicit config file
//! - A seed for reproducible pane colors and ids
//! - Initial window size
//! - Printing or writing the effective config

use clap::Parser;
use std::path::PathBuf;

use crate::config::PartitionConfig;
use crate::model::{ColorSource, IdGenerator, RandomHue, RandomIds, SeededIds};

/// A canvas of recursively split, colored panes
#[derive(Parser, Debug)]
#[command(name = "partition", version, about = "A canvas of recursively split panes")]
pub struct CliArgs {
    /// Config file to use instead of ~/.config/partition/config.yaml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for pane colors and ids (same seed, same canvas)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Initial window width in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 1024)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 768)]
    pub height: u32,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long, conflicts_with = "print_config")]
    pub write_config: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub config: PartitionConfig,
    /// File given with `--config`, if any
    pub config_path: Option<PathBuf>,
    /// Initial window size in logical pixels
    pub window_size: (u32, u32),
    pub seed: Option<u64>,
    pub print_config: bool,
    pub write_config: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Window size must be non-zero (got {}x{})",
                self.width, self.height
            ));
        }

        // `--write-config` may target a file that does not exist yet
        let config = match &self.config {
            Some(path) if !path.exists() && !self.write_config => {
                return Err(format!("Config file not found: {}", path.display()));
            }
            Some(path) => PartitionConfig::load_from(path),
            None => PartitionConfig::load(),
        };

        Ok(StartupConfig {
            config,
            config_path: self.config,
            window_size: (self.width, self.height),
            seed: self.seed,
            print_config: self.print_config,
            write_config: self.write_config,
        })
    }
}

impl StartupConfig {
    /// Save the effective config to the `--config` file, or to the default
    /// location when none was given. Returns the path written.
    pub fn save_config(&self) -> Result<PathBuf, String> {
        match &self.config_path {
            Some(path) => {
                self.config.save_to(path)?;
                Ok(path.clone())
            }
            None => self.config.save(),
        }
    }

    /// Id generator for new nodes: seeded when `--seed` was given
    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match self.seed {
            Some(seed) => Box::new(SeededIds::new(seed)),
            None => Box::new(RandomIds),
        }
    }

    /// Color source for new panes, using the configured saturation and lightness
    pub fn color_source(&self) -> Box<dyn ColorSource> {
        let palette = &self.config.palette;
        match self.seed {
            Some(seed) => Box::new(RandomHue::seeded(seed, palette.saturation, palette.lightness)),
            None => Box::new(RandomHue::new(palette.saturation, palette.lightness)),
        }
    }
}
