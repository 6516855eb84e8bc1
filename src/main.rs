use std::process::ExitCode;

use log::{error, info};
use solana_client::nonblocking::rpc_client::RpcClient;

mod common;
mod config;
mod error;
mod pool;

use config::Config;
use crate::error::PairResult;
use crate::pool::fetch_pool_pair;

async fn run(cfg: &Config) -> PairResult<String> {
    let pool_pubkey = cfg.pool_pubkey()?;

    info!("Using RPC endpoint {}", cfg.rpc_url);
    info!("Pool explorer: {}", cfg.explorer_url());

    // Клиент живёт только на время одного запроса
    let client = RpcClient::new_with_commitment(cfg.rpc_url.clone(), cfg.commitment_config());
    let pair = fetch_pool_pair(&client, &pool_pubkey, &cfg.pair_layout()).await?;

    Ok(serde_json::to_string(&pair.to_token_pair())?)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let config_arg = std::env::args().nth(1);
    let cfg = match Config::from_arg(config_arg.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to read config: {}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&cfg).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to get pool token pair: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
