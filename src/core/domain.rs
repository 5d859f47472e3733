use std::env;
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

pub const SUPPORTED_AUTHORS_ENV: &str = "LOOKUP_SUPPORTED_AUTHORS";
pub const STORE_ENV: &str = "LOOKUP_STORE";

const DEFAULT_SUPPORTED_AUTHORS: [&str; 3] = ["jane austen", "charles dickens", "mark twain"];

// Configuration abstracts config options for the lookup service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub supported_authors: Vec<String>,
    pub store: RepositoryStore,
}

impl Configuration {
    pub fn new(branch_id: &str, store: RepositoryStore) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            supported_authors: DEFAULT_SUPPORTED_AUTHORS.iter().map(|a| a.to_string()).collect(),
            store,
        }
    }

    // overrides defaults with LOOKUP_SUPPORTED_AUTHORS and LOOKUP_STORE when they are set
    pub fn from_env(branch_id: &str, default_store: RepositoryStore) -> Self {
        let mut config = Configuration::new(branch_id, default_store);
        if let Ok(authors) = env::var(SUPPORTED_AUTHORS_ENV) {
            config.supported_authors = parse_authors(authors.as_str());
        }
        if let Some(store) = env::var(STORE_ENV).ok().as_deref().and_then(RepositoryStore::parse) {
            config.store = store;
        }
        config
    }
}

fn parse_authors(value: &str) -> Vec<String> {
    value.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}
