//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr};

use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use serde_json::{Map, Value};
use tracing::info;

use crate::{
    client::ChainDeployer,
    config::{Accounts, NetworkConfig},
    errors::ScriptError,
    types::DeployedContract,
};

/// The account that will sign the deployments
enum DeployerAccount {
    /// A key held by this process
    Local(PrivateKeySigner),
    /// An account unlocked in the node
    Remote,
}

/// Resolve the signing account from the configured credentials.
///
/// Only the first local key is used; an empty set fails before any network access
fn resolve_deployer_account(accounts: &Accounts) -> Result<DeployerAccount, ScriptError> {
    match accounts {
        Accounts::Local(keys) => {
            let key = keys.first().ok_or(ScriptError::MissingSigner)?;
            let signer = PrivateKeySigner::from_str(key.trim())
                .map_err(|e| ScriptError::Signer(e.to_string()))?;
            Ok(DeployerAccount::Local(signer))
        }
        Accounts::Remote => Ok(DeployerAccount::Remote),
    }
}

/// Sets up the client with which to deploy to the given network, resolving
/// the deployer account and checking the node's chain ID against the config
pub async fn setup_client(config: &NetworkConfig) -> Result<ChainDeployer, ScriptError> {
    let account = resolve_deployer_account(&config.accounts)?;
    let url = Url::parse(&config.rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(format!("{}: {}", config.rpc_url, e)))?;

    let provider = match &account {
        DeployerAccount::Local(signer) => {
            DynProvider::new(ProviderBuilder::new().wallet(signer.clone()).connect_http(url))
        }
        DeployerAccount::Remote => DynProvider::new(ProviderBuilder::new().connect_http(url)),
    };

    connect_client(provider, &account, config).await
}

/// Finish setting up the client over an already built provider: pick the
/// sending account and check the node's chain ID
async fn connect_client(
    provider: DynProvider,
    account: &DeployerAccount,
    config: &NetworkConfig,
) -> Result<ChainDeployer, ScriptError> {
    let deployer = match account {
        DeployerAccount::Local(signer) => signer.address(),
        DeployerAccount::Remote => provider
            .get_accounts()
            .await
            .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
            .first()
            .copied()
            .ok_or(ScriptError::MissingSigner)?,
    };

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    if let Some(expected) = config.chain_id {
        if expected != chain_id {
            return Err(ScriptError::ChainIdMismatch {
                expected,
                actual: chain_id,
            });
        }
    }

    info!(
        "Connected to {} ({}), chain id {}, gas price {}",
        config.network, config.rpc_url, chain_id, config.gas_price
    );

    Ok(ChainDeployer::new(provider, deployer, config.gas_price))
}

/// Record the addresses of the given contracts in the deployments file,
/// keyed by contract name.
///
/// Existing entries for other contracts are kept
pub fn write_deployments(
    file_path: &Path,
    contracts: &[&DeployedContract],
) -> Result<(), ScriptError> {
    let mut deployments = if file_path.exists() {
        let contents = fs::read_to_string(file_path)
            .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;
        match serde_json::from_str(&contents)
            .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?
        {
            Value::Object(map) => map,
            _ => {
                return Err(ScriptError::ReadDeployments(format!(
                    "{} does not hold a JSON object",
                    file_path.display()
                )))
            }
        }
    } else {
        Map::new()
    };

    for contract in contracts {
        deployments.insert(
            contract.name.clone(),
            Value::String(contract.address.to_string()),
        );
    }

    let contents = serde_json::to_string_pretty(&Value::Object(deployments))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    fs::write(file_path, contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}
