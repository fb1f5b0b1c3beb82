use std::env;

use serde::{Deserialize, Serialize};

/// Where vocabulary entries come from
#[derive(Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WordsConfig {
    /// External word-list file; when unset the embedded list is used
    pub data_path: Option<String>,
}

impl WordsConfig {
    pub fn new() -> Self {
        let data_path = env::var("VOCAB_WORDS_PATH").ok();

        Self { data_path }
    }
}
