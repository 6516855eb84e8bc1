use serde::Deserialize;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::path::Path;

use crate::error::{PairError, PairResult};
use crate::pool::pair::PairLayout;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_POOL_ACCOUNT: &str = "FQed3Ay883zUcGcLaubkV56JJbweiYjxPSTC84yUxqNd";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(value: Commitment) -> Self {
        match value {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

/// Именованные layout'ы вместо ручных смещений
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPreset {
    Consecutive,
    RaydiumAmmV4,
}

impl LayoutPreset {
    pub fn layout(self) -> PairLayout {
        match self {
            LayoutPreset::Consecutive => PairLayout::CONSECUTIVE,
            LayoutPreset::RaydiumAmmV4 => PairLayout::RAYDIUM_AMM_V4,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rpc_url: String,
    pub pool_account: String,
    pub commitment: Commitment,
    pub preset: Option<LayoutPreset>,
    pub layout: PairLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            pool_account: DEFAULT_POOL_ACCOUNT.to_string(),
            commitment: Commitment::default(),
            preset: None,
            layout: PairLayout::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> PairResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| PairError::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> PairResult<Self> {
        toml::from_str(content).map_err(|e| PairError::Config(e.to_string()))
    }

    /// Явно указанный путь обязан существовать.
    /// Без аргумента читается config.toml, а при его отсутствии берутся значения по умолчанию.
    pub fn from_arg(path: Option<&str>) -> PairResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load_or_default(DEFAULT_CONFIG_PATH),
        }
    }

    fn load_or_default<P: AsRef<Path>>(path: P) -> PairResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn pool_pubkey(&self) -> PairResult<Pubkey> {
        self.pool_account
            .parse()
            .map_err(|e| PairError::Config(format!("pool_account {}: {}", self.pool_account, e)))
    }

    /// preset имеет приоритет над [layout]
    pub fn pair_layout(&self) -> PairLayout {
        self.preset.map(LayoutPreset::layout).unwrap_or(self.layout)
    }

    pub fn commitment_config(&self) -> CommitmentConfig {
        self.commitment.into()
    }

    pub fn explorer_url(&self) -> String {
        format!(
            "https://explorer.solana.com/address/{}?cluster=mainnet-beta",
            self.pool_account
        )
    }
}
