use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub corpus_dir: String,
    pub postings_path: String,
    pub write_postings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            corpus_dir: "Corpus".to_string(),
            postings_path: "posting.txt".to_string(),
            write_postings: true,
        }
    }
}

/// Loads a JSON configuration file, falling back to the defaults when the
/// file is missing or cannot be parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Config {
    let path = path.as_ref();
    if !path.exists() {
        info!(?path, "config file not found, using default configuration");
        return Config::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(config) => {
                info!(?path, "loaded configuration");
                config
            }
            Err(e) => {
                warn!(?path, error = %e, "error parsing config, using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            warn!(?path, error = %e, "error reading config, using default configuration");
            Config::default()
        }
    }
}
