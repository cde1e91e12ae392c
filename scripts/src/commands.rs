//! The deployment pipeline for the Esusu contracts

use std::path::Path;

use alloy::dyn_abi::DynSolValue;
use tracing::info;

use crate::{
    artifacts::ContractArtifact,
    cli::Cli,
    client::ContractDeployer,
    config::NetworkConfig,
    constants::{DEFI_ESUSU_CONTRACT_NAME, MOCK_USDC_CONTRACT_NAME, SEPARATOR_LINE},
    errors::ScriptError,
    types::{DeployedContract, DeploymentReport},
    utils::{setup_client, write_deployments},
};

/// The compiled artifacts of the contracts deployed by the pipeline
pub struct EsusuArtifacts {
    /// The mock stablecoin, deployed first
    pub mock_usdc: ContractArtifact,
    /// The savings pool, deployed against the mock stablecoin
    pub esusu: ContractArtifact,
}

impl EsusuArtifacts {
    /// Load both artifacts from the artifacts directory
    pub fn load(artifacts_dir: &Path) -> Result<Self, ScriptError> {
        Ok(Self {
            mock_usdc: ContractArtifact::load(artifacts_dir, MOCK_USDC_CONTRACT_NAME)?,
            esusu: ContractArtifact::load(artifacts_dir, DEFI_ESUSU_CONTRACT_NAME)?,
        })
    }
}

/// Run the full deployment against the network selected on the command line
pub async fn deploy(cli: Cli) -> Result<DeploymentReport, ScriptError> {
    let config = NetworkConfig::load(cli.network).with_overrides(
        cli.rpc_url,
        cli.chain_id,
        cli.gas_price,
    );
    info!("Deploying to {}", config.network);

    let client = setup_client(&config).await?;
    let artifacts = EsusuArtifacts::load(&cli.artifacts)?;

    let report = deploy_esusu(&client, &artifacts).await?;

    if let Some(deployments_path) = cli.deployments_path {
        write_deployments(&deployments_path, &report.contracts())?;
        info!("Wrote deployments to {}", deployments_path.display());
    }

    Ok(report)
}

/// Deploy the mock stablecoin, then the savings pool bound to it.
///
/// Each deployment is confirmed before the next is sent, and the first failure
/// aborts the run
pub async fn deploy_esusu<D: ContractDeployer>(
    client: &D,
    artifacts: &EsusuArtifacts,
) -> Result<DeploymentReport, ScriptError> {
    let deployer = client.deployer_address();
    println!("Deploying contracts with the account: {}", deployer);

    let mock_usdc = client.deploy(&artifacts.mock_usdc, &[]).await?;
    println!("{}", SEPARATOR_LINE);
    print_deployed(&mock_usdc);
    println!("{}", SEPARATOR_LINE);

    // The deployer doubles as the pool's fee collector
    let esusu_args = [
        DynSolValue::Address(mock_usdc.address),
        DynSolValue::Address(deployer),
    ];
    let esusu = client.deploy(&artifacts.esusu, &esusu_args).await?;
    print_deployed(&esusu);
    println!("{}", SEPARATOR_LINE);
    println!("Deployment complete!");

    Ok(DeploymentReport {
        deployer,
        mock_usdc,
        esusu,
    })
}

/// Announce a deployed contract on stdout
fn print_deployed(contract: &DeployedContract) {
    println!("{} deployed to: {}", contract.name, contract.address);
    info!("`{}` created in tx {}", contract.name, contract.tx_hash);
}
