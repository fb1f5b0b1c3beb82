use std::env;

use serde::{Deserialize, Serialize};

use self::store::StoreConfig;
use self::words::WordsConfig;

pub mod store;
pub mod words;

fn default_warn_unmatched() -> bool {
    true
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub words: WordsConfig,

    /// Warn about unfilled records that had no word-list entry
    #[serde(default = "default_warn_unmatched")]
    pub warn_unmatched: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            words: WordsConfig::default(),
            warn_unmatched: default_warn_unmatched(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let warn_unmatched = env::var("VOCAB_WARN_UNMATCHED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_warn_unmatched);

        Config {
            store: StoreConfig::new(),
            words: WordsConfig::new(),
            warn_unmatched,
        }
    }
}
