//! Process configuration, read once from the environment at startup.

use std::path::PathBuf;

use anyhow::{Context, bail};

use pizzeria_catalog::Catalog;
use pizzeria_orders::QuantityPolicy;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `PIZZERIA_BIND_ADDR`
    pub bind_addr: String,
    /// `PIZZERIA_CATALOG_PATH`; the built-in menu is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// `PIZZERIA_QUANTITY_POLICY` (`any` | `positive`)
    pub quantity_policy: QuantityPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            catalog_path: None,
            quantity_policy: QuantityPolicy::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(addr) = lookup("PIZZERIA_BIND_ADDR").filter(|v| !v.trim().is_empty()) {
            config.bind_addr = addr.trim().to_string();
        }

        if let Some(path) = lookup("PIZZERIA_CATALOG_PATH").filter(|v| !v.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path.trim()));
        }

        if let Some(policy) = lookup("PIZZERIA_QUANTITY_POLICY") {
            config.quantity_policy = parse_quantity_policy(&policy)
                .context("invalid PIZZERIA_QUANTITY_POLICY")?;
        }

        Ok(config)
    }

    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("failed to load catalog from {}", path.display())),
            None => Ok(Catalog::default_menu()),
        }
    }
}

fn parse_quantity_policy(s: &str) -> anyhow::Result<QuantityPolicy> {
    match s.trim().to_lowercase().as_str() {
        "" | "any" => Ok(QuantityPolicy::AllowAny),
        "positive" => Ok(QuantityPolicy::PositiveOnly),
        other => bail!("expected one of: any, positive (got {other:?})"),
    }
}
