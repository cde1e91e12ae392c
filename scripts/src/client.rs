//! The chain client used to submit deployments

use alloy::{
    dyn_abi::DynSolValue,
    network::TransactionBuilder,
    primitives::Address,
    providers::{DynProvider, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use tracing::{debug, info};

use crate::{
    artifacts::ContractArtifact, config::GasPrice, constants::NUM_DEPLOY_CONFIRMATIONS,
    errors::ScriptError, types::DeployedContract,
};

/// A client which deploys contracts on behalf of a single account
#[allow(async_fn_in_trait)]
pub trait ContractDeployer {
    /// The account signing the deployments
    fn deployer_address(&self) -> Address;

    /// Deploy the given contract with the given constructor arguments,
    /// resolving once the creation transaction is confirmed
    async fn deploy(
        &self,
        artifact: &ContractArtifact,
        constructor_args: &[DynSolValue],
    ) -> Result<DeployedContract, ScriptError>;
}

/// A [`ContractDeployer`] backed by a JSON-RPC provider
pub struct ChainDeployer {
    /// The provider, with signing attached when using local credentials
    provider: DynProvider,
    /// The account from which deployments are sent
    deployer: Address,
    /// The gas price policy for deployments
    gas_price: GasPrice,
}

impl ChainDeployer {
    /// Create a deployer sending from `deployer` through `provider`
    pub fn new(provider: DynProvider, deployer: Address, gas_price: GasPrice) -> Self {
        Self {
            provider,
            deployer,
            gas_price,
        }
    }
}

impl ContractDeployer for ChainDeployer {
    fn deployer_address(&self) -> Address {
        self.deployer
    }

    async fn deploy(
        &self,
        artifact: &ContractArtifact,
        constructor_args: &[DynSolValue],
    ) -> Result<DeployedContract, ScriptError> {
        let deploy_code = artifact.deploy_code(constructor_args)?;
        debug!("`{}` init code is {} bytes", artifact.name, deploy_code.len());

        let mut tx = TransactionRequest::default()
            .with_from(self.deployer)
            .with_deploy_code(deploy_code);
        if let GasPrice::Fixed(wei) = self.gas_price {
            tx.set_gas_price(wei);
        }

        let pending_tx = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        info!("Sent `{}` deployment in tx {}", artifact.name, pending_tx.tx_hash());

        let receipt = pending_tx
            .with_required_confirmations(NUM_DEPLOY_CONFIRMATIONS)
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        deployed_contract(&artifact.name, &receipt)
    }
}

/// Check that a creation receipt succeeded and created a contract
fn deployed_contract(
    name: &str,
    receipt: &TransactionReceipt,
) -> Result<DeployedContract, ScriptError> {
    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(format!(
            "`{}` constructor reverted in tx {}",
            name, receipt.transaction_hash
        )));
    }

    let address = receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment(format!(
            "receipt for tx {} has no contract address",
            receipt.transaction_hash
        ))
    })?;

    Ok(DeployedContract {
        name: name.to_string(),
        address,
        tx_hash: receipt.transaction_hash,
    })
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, b256},
        providers::ProviderBuilder,
        transports::mock::Asserter,
    };
    use serde_json::{json, Value};

    use super::*;
    use crate::artifacts::tests::{no_args_artifact_json, two_address_artifact_json};

    /// The deployer account used in the tests
    const DEPLOYER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    /// The address of the first contract created by the deployer
    const CREATED: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

    /// A receipt for a successful contract creation, as returned by
    /// `eth_getTransactionReceipt`
    fn creation_receipt_json() -> Value {
        json!({
            "type": "0x2",
            "status": "0x1",
            "cumulativeGasUsed": "0x1d4c0",
            "logs": [],
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "transactionHash": "0x4fa1b8c6e3f0a7d2c9b5e8f1a3d6c0b7e4f2a9d5c8b1e6f3a0d7c4b9e2f5a8d1",
            "transactionIndex": "0x0",
            "blockHash": "0x8b2e5f1c4a7d0e3b6f9c2a5d8e1b4f7c0a3d6e9b2f5c8a1d4e7b0f3c6a9d2e5b",
            "blockNumber": "0x1",
            "gasUsed": "0x1d4c0",
            "effectiveGasPrice": "0x3b9aca00",
            "from": DEPLOYER,
            "to": null,
            "contractAddress": CREATED
        })
    }

    /// Parse a receipt from its JSON-RPC representation
    fn parse_receipt(json: Value) -> TransactionReceipt {
        serde_json::from_value(json).unwrap()
    }

    /// A deployer sending unsigned transactions over a mocked transport
    fn mocked_deployer(asserter: &Asserter) -> ChainDeployer {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter.clone());
        ChainDeployer::new(DynProvider::new(provider), DEPLOYER, GasPrice::Auto)
    }

    #[test]
    fn test_successful_receipt() {
        let receipt = parse_receipt(creation_receipt_json());
        let contract = deployed_contract("MockUSDC", &receipt).unwrap();

        assert_eq!(contract.name, "MockUSDC");
        assert_eq!(contract.address, CREATED);
        assert_eq!(
            contract.tx_hash,
            b256!("0x4fa1b8c6e3f0a7d2c9b5e8f1a3d6c0b7e4f2a9d5c8b1e6f3a0d7c4b9e2f5a8d1")
        );
    }

    #[test]
    fn test_reverted_receipt() {
        let mut json = creation_receipt_json();
        json["status"] = json!("0x0");
        let receipt = parse_receipt(json);

        assert!(matches!(
            deployed_contract("MockUSDC", &receipt),
            Err(ScriptError::ContractDeployment(_))
        ));
    }

    #[test]
    fn test_receipt_without_contract_address() {
        let mut json = creation_receipt_json();
        json["contractAddress"] = Value::Null;
        let receipt = parse_receipt(json);

        assert!(matches!(
            deployed_contract("MockUSDC", &receipt),
            Err(ScriptError::ContractDeployment(_))
        ));
    }

    #[tokio::test]
    async fn test_rejected_send_is_deployment_failure() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("insufficient funds for gas * price + value");
        let client = mocked_deployer(&asserter);
        let artifact = ContractArtifact::from_json(&no_args_artifact_json("MockUSDC")).unwrap();

        let res = client.deploy(&artifact, &[]).await;
        assert!(matches!(res, Err(ScriptError::ContractDeployment(_))));
    }

    #[tokio::test]
    async fn test_bad_constructor_args_send_nothing() {
        // No responses are queued, so any request would fail as a deployment error
        let asserter = Asserter::new();
        let client = mocked_deployer(&asserter);
        let artifact =
            ContractArtifact::from_json(&two_address_artifact_json("DeFiEsusu")).unwrap();

        let res = client.deploy(&artifact, &[]).await;
        assert!(matches!(res, Err(ScriptError::CalldataConstruction(_))));
    }
}
