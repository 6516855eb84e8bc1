use solana_client::client_error::ClientError;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Ошибки получения и разбора аккаунта пула
#[derive(Debug, Error)]
pub enum PairError {
    /// RPC вернул пустой ответ для аккаунта
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    /// Данных аккаунта меньше, чем требует layout
    #[error("Malformed account data: expected at least {expected} bytes, got {actual}")]
    MalformedData { expected: usize, actual: usize },

    #[error("RPC error: {0}")]
    Rpc(#[from] ClientError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

pub type PairResult<T> = Result<T, PairError>;
