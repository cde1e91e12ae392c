//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error parsing a network configuration value
    ConfigParsing(String),
    /// No account is available to sign the deployment transactions
    MissingSigner,
    /// Error constructing the signer from the configured credentials
    Signer(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// The chain ID reported by the node differs from the configured one
    ChainIdMismatch {
        /// The chain ID declared in the network config
        expected: u64,
        /// The chain ID reported by the node
        actual: u64,
    },
    /// Error reading a contract compilation artifact
    ReadArtifact(String),
    /// Error parsing a contract compilation artifact
    ArtifactParsing(String),
    /// Error constructing calldata for a contract constructor
    CalldataConstruction(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error reading the deployments file
    ReadDeployments(String),
    /// Error writing the deployments file
    WriteDeployments(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ConfigParsing(s) => write!(f, "error parsing config: {}", s),
            ScriptError::MissingSigner => write!(f, "no signer account configured"),
            ScriptError::Signer(s) => write!(f, "error constructing signer: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ChainIdMismatch { expected, actual } => write!(
                f,
                "chain id mismatch: network config declares {}, node reports {}",
                expected, actual
            ),
            ScriptError::ReadArtifact(s) => write!(f, "error reading artifact: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
        }
    }
}

impl Error for ScriptError {}
