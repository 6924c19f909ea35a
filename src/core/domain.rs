use std::env;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub listen_addr: String,
    pub seed_catalog: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            seed_catalog: true,
        }
    }

    // from_env overlays CONVENE_* variables on top of the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Self {
        let mut config = Configuration::new(
            var("CONVENE_BRANCH").unwrap_or_else(|| "dev".to_string()).as_str());
        if let Some(addr) = var("CONVENE_LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        if let Some(seed) = var("CONVENE_SEED_CATALOG") {
            config.seed_catalog = !matches!(seed.trim().to_lowercase().as_str(), "false" | "0" | "no");
        }
        config
    }
}
