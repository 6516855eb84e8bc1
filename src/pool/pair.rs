use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::common::{PUBKEY_LEN, read_pubkey};
use crate::error::{PairError, PairResult};

/// Смещения двух mint-адресов внутри данных аккаунта
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PairLayout {
    pub mint_a_offset: usize,
    pub mint_b_offset: usize,
}

impl PairLayout {
    /// Два подряд идущих поля в начале аккаунта: [0..32) и [32..64)
    pub const CONSECUTIVE: Self = Self {
        mint_a_offset: 0,
        mint_b_offset: PUBKEY_LEN,
    };

    /// coinMint/pcMint в AmmInfo Raydium AMM v4
    pub const RAYDIUM_AMM_V4: Self = Self {
        mint_a_offset: 400,
        mint_b_offset: 432,
    };

    /// Минимальная длина данных, которую покрывает layout
    pub fn required_len(&self) -> usize {
        self.mint_a_offset.max(self.mint_b_offset) + PUBKEY_LEN
    }
}

impl Default for PairLayout {
    fn default() -> Self {
        Self::CONSECUTIVE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolPair {
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
}

impl PoolPair {
    /// Разбор данных аккаунта по фиксированным смещениям.
    /// Байты за пределами layout игнорируются.
    pub fn decode(data: &[u8], layout: &PairLayout) -> PairResult<Self> {
        let expected = layout.required_len();
        if data.len() < expected {
            return Err(PairError::MalformedData {
                expected,
                actual: data.len(),
            });
        }

        // required_len покрывает оба поля, чтение дальше не выходит за границы
        Ok(Self {
            mint_a: read_pubkey(data, layout.mint_a_offset),
            mint_b: read_pubkey(data, layout.mint_b_offset),
        })
    }

    pub fn to_token_pair(&self) -> TokenPair {
        TokenPair {
            token_a: self.mint_a.to_string(),
            token_b: self.mint_b.to_string(),
        }
    }
}

/// Результат для вывода: mint-адреса в base58
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    #[serde(rename = "tokenA")]
    pub token_a: String,
    #[serde(rename = "tokenB")]
    pub token_b: String,
}
