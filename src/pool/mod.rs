pub mod pair;

use log::{debug, info};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;

use crate::error::{PairError, PairResult};
use crate::pool::pair::{PairLayout, PoolPair};

/// Источник сырых данных аккаунтов (RPC нода или тестовая заглушка)
#[allow(async_fn_in_trait)]
pub trait AccountSource {
    /// Возвращает данные аккаунта или `None`, если аккаунта нет
    async fn fetch_account_data(&self, account: &Pubkey) -> PairResult<Option<Vec<u8>>>;
}

impl AccountSource for RpcClient {
    async fn fetch_account_data(&self, account: &Pubkey) -> PairResult<Option<Vec<u8>>> {
        // get_account вернул бы ошибку на отсутствующий аккаунт, здесь получаем None
        let response = self
            .get_account_with_commitment(account, self.commitment())
            .await?;
        Ok(response.value.map(|acc| acc.data))
    }
}

/// Загружает аккаунт пула и читает из него пару mint-адресов
pub async fn fetch_pool_pair<S: AccountSource>(
    source: &S,
    account: &Pubkey,
    layout: &PairLayout,
) -> PairResult<PoolPair> {
    info!("Fetching pool account {}", account);

    let data = source
        .fetch_account_data(account)
        .await?
        .ok_or(PairError::AccountNotFound(*account))?;
    debug!("Account {} data length: {}", account, data.len());

    let pair = PoolPair::decode(&data, layout)?;
    debug!(
        "Parsed pool pair: \n\tmintA={}, \n\tmintB={}",
        pair.mint_a, pair.mint_b
    );
    Ok(pair)
}
