//! Constants used in the deploy scripts

/// The name of the environment variable holding the deployer's private key
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// The name of the BlockDAG testnet in the network config
pub const BLOCKDAG_NETWORK_NAME: &str = "blockdag";

/// The RPC URL of the BlockDAG testnet
pub const BLOCKDAG_RPC_URL: &str = "https://rpc.awakening.bdagscan.com";

/// The chain ID of the BlockDAG testnet
pub const BLOCKDAG_CHAIN_ID: u64 = 1043;

/// The name of the local development node in the network config
pub const LOCALHOST_NETWORK_NAME: &str = "localhost";

/// The RPC URL of a local development node
pub const LOCALHOST_RPC_URL: &str = "http://127.0.0.1:8545";

/// The gas price policy string selecting provider-side estimation
pub const GAS_PRICE_AUTO: &str = "auto";

/// The suffix marking a gas price given in gwei
pub const GWEI_SUFFIX: &str = "gwei";

/// The number of wei in one gwei
pub const WEI_PER_GWEI: u128 = 1_000_000_000;

/// The number of confirmations to wait for on each deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The directory, relative to the artifacts root, holding per-source artifacts
pub const CONTRACTS_ARTIFACTS_SEGMENT: &str = "contracts";

/// The extension of a Solidity source file
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The extension of an artifact file
pub const ARTIFACT_EXTENSION: &str = "json";

/// The name of the mock stablecoin contract, deployed first
pub const MOCK_USDC_CONTRACT_NAME: &str = "MockUSDC";

/// The name of the savings pool contract, deployed second
pub const DEFI_ESUSU_CONTRACT_NAME: &str = "DeFiEsusu";

/// The separator line printed around deployment progress
pub const SEPARATOR_LINE: &str = "----------------------------------------------------";
