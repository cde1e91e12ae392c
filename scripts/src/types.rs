//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use alloy::primitives::{Address, TxHash};
use clap::ValueEnum;

use crate::constants::{BLOCKDAG_NETWORK_NAME, LOCALHOST_NETWORK_NAME};

/// The networks declared in the network config
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Network {
    /// The BlockDAG testnet
    Blockdag,
    /// A local development node
    Localhost,
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Blockdag => write!(f, "{}", BLOCKDAG_NETWORK_NAME),
            Network::Localhost => write!(f, "{}", LOCALHOST_NETWORK_NAME),
        }
    }
}

/// A contract which has been deployed and confirmed on-chain
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployedContract {
    /// The name of the deployed contract
    pub name: String,
    /// The address at which the contract was created
    pub address: Address,
    /// The hash of the contract creation transaction
    pub tx_hash: TxHash,
}

/// The outcome of a full deployment run
#[derive(Clone, Debug)]
pub struct DeploymentReport {
    /// The account which signed both deployments
    pub deployer: Address,
    /// The mock stablecoin contract
    pub mock_usdc: DeployedContract,
    /// The savings pool contract
    pub esusu: DeployedContract,
}

impl DeploymentReport {
    /// The deployed contracts, in deployment order
    pub fn contracts(&self) -> [&DeployedContract; 2] {
        [&self.mock_usdc, &self.esusu]
    }
}
