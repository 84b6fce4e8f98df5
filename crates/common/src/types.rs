use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Address/account node in the transaction graph, as supplied by the
/// upstream AML-detection/data-fetch layer. Read-only to the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct Wallet {
    /// Stable identifier used throughout the view-model.
    pub id: String,
    /// Display identifier; transactions reference wallets by this hash.
    pub hash: String,
    #[serde(rename = "riskScore")]
    pub risk_score: u8,
    pub inflow: f64,
    pub outflow: f64,
    #[serde(rename = "transactionCount")]
    pub transaction_count: u32,
}

/// Directed transfer between two wallets. Endpoints are wallet *hashes*,
/// not ids; the engine resolves them and silently drops edges it cannot.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub from_wallet: String,
    pub to_wallet: String,
    pub amount: f64,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    FanIn,
    FanOut,
    HighVolume,
    Circular,
    Layering,
    Structuring,
    PassThrough,
    PeelChain,
    Mixer,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FanIn => "fan-in",
            Self::FanOut => "fan-out",
            Self::HighVolume => "high-volume",
            Self::Circular => "circular",
            Self::Layering => "layering",
            Self::Structuring => "structuring",
            Self::PassThrough => "pass-through",
            Self::PeelChain => "peel-chain",
            Self::Mixer => "mixer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pattern kind: {0}")]
pub struct UnknownPatternKind(String);

impl FromStr for PatternKind {
    type Err = UnknownPatternKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fan-in" => Ok(Self::FanIn),
            "fan-out" => Ok(Self::FanOut),
            "high-volume" => Ok(Self::HighVolume),
            "circular" => Ok(Self::Circular),
            "layering" => Ok(Self::Layering),
            "structuring" => Ok(Self::Structuring),
            "pass-through" => Ok(Self::PassThrough),
            "peel-chain" => Ok(Self::PeelChain),
            "mixer" => Ok(Self::Mixer),
            other => Err(UnknownPatternKind(other.to_string())),
        }
    }
}

/// Evidence transaction attached to a detected pattern. Endpoints are
/// wallet hashes, matching the raw transaction feed.
#[derive(Debug, Clone, Deserialize)]
pub struct EvidenceTx {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub amount: f64,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Externally detected AML typology instance the analyst wants explained
/// visually. When present and its anchor wallet resolves, it fully
/// determines the view mode.
#[derive(Debug, Clone, Deserialize)]
pub struct FocusPattern {
    #[serde(rename = "type")]
    pub kind: PatternKind,
    /// Hash of the pattern's anchor wallet.
    #[serde(rename = "walletHash")]
    pub wallet_hash: String,
    #[serde(default)]
    pub wallets: Vec<String>,
    #[serde(default)]
    pub transactions: Vec<EvidenceTx>,
    #[serde(rename = "startTime", default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(rename = "endTime", default)]
    pub end_time: Option<DateTime<Utc>>,
}

/// Structural role inferred from full-graph degree statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Normal,
    Source,
    Sink,
    Mule,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Source => "source",
            Self::Sink => "sink",
            Self::Mule => "mule",
        }
    }

    /// Multiplier applied to the risk-derived base size.
    pub fn size_multiplier(&self) -> f64 {
        match self {
            Self::Source => 1.3,
            Self::Sink => 1.2,
            Self::Mule => 0.9,
            Self::Normal => 1.0,
        }
    }
}

/// Color token handed to the renderer. `Neutral` de-emphasizes nodes that
/// are visible only as context for the current focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeColor {
    High,
    Medium,
    Low,
    Neutral,
}

impl NodeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Neutral => "neutral",
        }
    }

    /// Risk-tier color for a normalized risk value, against fixed tier
    /// thresholds (high ≥ 0.7, medium ≥ 0.4 in the default config).
    pub fn risk_tier(risk: f64, high_threshold: f64, medium_threshold: f64) -> Self {
        if risk >= high_threshold {
            Self::High
        } else if risk >= medium_threshold {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
