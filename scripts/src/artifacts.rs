//! Loading of compiled contract artifacts and construction of their init code

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::{
    dyn_abi::{DynSolValue, Specifier},
    json_abi::JsonAbi,
    primitives::Bytes,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    constants::{ARTIFACT_EXTENSION, CONTRACTS_ARTIFACTS_SEGMENT, SOLIDITY_EXTENSION},
    errors::ScriptError,
};

/// The subset of a Hardhat compilation artifact needed for deployment
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HardhatArtifact {
    /// The name of the compiled contract
    contract_name: String,
    /// The contract ABI
    abi: JsonAbi,
    /// The creation bytecode, in hex
    bytecode: String,
    /// Library placeholders left in the bytecode
    #[serde(default)]
    link_references: Map<String, Value>,
}

/// A deployable contract: its ABI and creation bytecode
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    /// The name of the contract
    pub name: String,
    /// The contract ABI
    pub abi: JsonAbi,
    /// The creation bytecode
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Load the artifact for the contract `name` from the artifacts directory.
    ///
    /// Expects the Hardhat layout, `<dir>/contracts/<name>.sol/<name>.json`
    pub fn load(artifacts_dir: &Path, name: &str) -> Result<Self, ScriptError> {
        let path = artifact_path(artifacts_dir, name);
        let contents = fs::read_to_string(&path)
            .map_err(|e| ScriptError::ReadArtifact(format!("{}: {}", path.display(), e)))?;

        let artifact = Self::from_json(&contents)?;
        if artifact.name != name {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} holds contract `{}`, expected `{}`",
                path.display(),
                artifact.name,
                name
            )));
        }

        Ok(artifact)
    }

    /// Parse an artifact from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let HardhatArtifact {
            contract_name,
            abi,
            bytecode,
            link_references,
        } = serde_json::from_str(json).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        if !link_references.is_empty() {
            let libraries = link_references.keys().cloned().collect::<Vec<_>>().join(", ");
            return Err(ScriptError::ArtifactParsing(format!(
                "`{}` has unlinked libraries from {}",
                contract_name, libraries
            )));
        }

        let bytecode =
            Bytes::from_str(&bytecode).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "`{}` has no creation bytecode, is it abstract or an interface?",
                contract_name
            )));
        }

        Ok(ContractArtifact {
            name: contract_name,
            abi,
            bytecode,
        })
    }

    /// Build the init code for a deployment: the creation bytecode followed by
    /// the ABI-encoded constructor arguments.
    ///
    /// The arguments are checked against the constructor's declared inputs
    pub fn deploy_code(&self, args: &[DynSolValue]) -> Result<Bytes, ScriptError> {
        let inputs = self
            .abi
            .constructor()
            .map(|constructor| constructor.inputs.as_slice())
            .unwrap_or_default();

        if inputs.len() != args.len() {
            return Err(ScriptError::CalldataConstruction(format!(
                "`{}` constructor takes {} argument(s), got {}",
                self.name,
                inputs.len(),
                args.len()
            )));
        }

        for (param, arg) in inputs.iter().zip(args) {
            let ty = param
                .resolve()
                .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
            if !ty.matches(arg) {
                return Err(ScriptError::CalldataConstruction(format!(
                    "`{}` constructor argument `{}` expects {}",
                    self.name, param.name, ty
                )));
            }
        }

        let mut code = self.bytecode.to_vec();
        code.extend(DynSolValue::Tuple(args.to_vec()).abi_encode_params());
        Ok(code.into())
    }
}

/// The path of the artifact for the contract `name`
pub fn artifact_path(artifacts_dir: &Path, name: &str) -> PathBuf {
    artifacts_dir
        .join(CONTRACTS_ARTIFACTS_SEGMENT)
        .join(format!("{}.{}", name, SOLIDITY_EXTENSION))
        .join(format!("{}.{}", name, ARTIFACT_EXTENSION))
}
