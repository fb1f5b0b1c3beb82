use std::env;

use serde::{Deserialize, Serialize};

fn default_vocab_path() -> String {
    "vocab.json".to_string()
}

/// Where the word document lives
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(default = "default_vocab_path")]
    pub vocab_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            vocab_path: default_vocab_path(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        let vocab_path = env::var("VOCAB_PATH").unwrap_or_else(|_| default_vocab_path());

        Self { vocab_path }
    }
}
