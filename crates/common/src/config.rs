use anyhow::Result;
use serde::Deserialize;
use std::str::FromStr;

/// Engine thresholds and caps. Every section defaults to the documented
/// heuristics, so the engine is usable without a config file; the TOML
/// file exists to tune thresholds without a rebuild.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub roles: Roles,
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub links: Links,
    #[serde(default)]
    pub style: Style,
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    pub log_level: String,
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Roles {
    /// A wallet that only ever receives: aggregator of funds.
    pub sink_min_in_degree: u32,
    /// A wallet that only ever sends: distributor of funds.
    pub source_min_out_degree: u32,
    pub mule_min_in_degree: u32,
    pub mule_min_out_degree: u32,
    /// Base render size at risk 0; risk adds up to `risk_size_span`.
    pub base_size: f64,
    pub risk_size_span: f64,
}

impl Default for Roles {
    fn default() -> Self {
        Self {
            sink_min_in_degree: 20,
            source_min_out_degree: 4,
            mule_min_in_degree: 2,
            mule_min_out_degree: 2,
            base_size: 6.0,
            risk_size_span: 18.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Selection {
    /// Hard cap on visible nodes regardless of mode.
    pub max_visible_nodes: usize,
    /// Related wallets shown around a pattern anchor (anchor excluded).
    pub pattern_related_cap: usize,
    /// Combined in+out neighbor cap around a clicked wallet.
    pub focus_neighbor_cap: usize,
    /// High-risk wallets promoted to core in the overview.
    pub overview_core_cap: usize,
    /// Neighbors collected per overview core node (shared in+out counter).
    pub overview_neighbor_cap: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            max_visible_nodes: 15,
            pattern_related_cap: 6,
            focus_neighbor_cap: 7,
            overview_core_cap: 4,
            overview_neighbor_cap: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Links {
    /// Cap on direct links shown in node-focus mode.
    pub focus_link_cap: usize,
    /// All links render at one width; emphasis is carried by node styling.
    pub link_width: f64,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            focus_link_cap: 10,
            link_width: 1.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Style {
    /// Normalized risk at or above which a wallet counts as high-risk.
    pub high_risk_threshold: f64,
    pub medium_risk_threshold: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            high_risk_threshold: 0.7,
            medium_risk_threshold: 0.4,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let content = std::fs::read_to_string("config/default.toml")?;
        Self::from_toml_str(&content)
    }

    /// Load `config/default.toml` when present, built-in defaults otherwise.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("config/default.toml not loaded ({err}); using defaults");
                Self::default()
            }
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}
