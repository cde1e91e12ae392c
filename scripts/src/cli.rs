//! Definitions of CLI arguments for the deploy script

use std::path::PathBuf;

use clap::Parser;

use crate::{config::GasPrice, constants::DEFAULT_ARTIFACTS_DIR, types::Network};

/// Deploy the MockUSDC and DeFiEsusu contracts to an EVM chain.
///
/// The deployer's private key is read from the `PRIVATE_KEY` environment
/// variable, or from a `.env` file in the working directory
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The network to deploy to
    #[arg(short, long, value_enum, default_value_t = Network::Blockdag)]
    pub network: Network,

    /// Network RPC URL, overriding the network's declared endpoint
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// The chain ID the node must report, overriding the network's declared one
    #[arg(long, env = "CHAIN_ID")]
    pub chain_id: Option<u64>,

    /// Gas price for the deployments: "auto", an amount in wei, or an amount
    /// suffixed with "gwei"
    #[arg(short, long, env = "GAS_PRICE")]
    pub gas_price: Option<GasPrice>,

    /// Directory holding the Hardhat compilation artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Path of a JSON file in which to record the deployed addresses
    #[arg(short, long)]
    pub deployments_path: Option<PathBuf>,
}
