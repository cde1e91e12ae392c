//! The network config: the static declaration of deployment targets, and the
//! loader which fills in the deployer's credentials from the environment

use std::{env, fmt, str::FromStr};

use crate::{
    constants::{
        BLOCKDAG_CHAIN_ID, BLOCKDAG_RPC_URL, GAS_PRICE_AUTO, GWEI_SUFFIX, LOCALHOST_RPC_URL,
        PRIVATE_KEY_ENV_VAR, WEI_PER_GWEI,
    },
    errors::ScriptError,
    types::Network,
};

/// The gas price policy for deployment transactions
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GasPrice {
    /// Let the provider estimate fees from the node
    #[default]
    Auto,
    /// A fixed legacy gas price, in wei
    Fixed(u128),
}

impl FromStr for GasPrice {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(GAS_PRICE_AUTO) {
            return Ok(GasPrice::Auto);
        }

        let parse_err = |e: std::num::ParseIntError| {
            ScriptError::ConfigParsing(format!("invalid gas price `{}`: {}", s, e))
        };

        match s.strip_suffix(GWEI_SUFFIX) {
            Some(gwei) => {
                let gwei = gwei.trim().parse::<u128>().map_err(parse_err)?;
                gwei.checked_mul(WEI_PER_GWEI)
                    .map(GasPrice::Fixed)
                    .ok_or_else(|| {
                        ScriptError::ConfigParsing(format!("gas price `{}` overflows", s))
                    })
            }
            None => s.parse::<u128>().map(GasPrice::Fixed).map_err(parse_err),
        }
    }
}

impl fmt::Display for GasPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GasPrice::Auto => write!(f, "{}", GAS_PRICE_AUTO),
            GasPrice::Fixed(wei) => write!(f, "{} wei", wei),
        }
    }
}

/// The accounts with which a network signs transactions
#[derive(Clone, PartialEq, Eq)]
pub enum Accounts {
    /// Private keys held by this process. May be empty, in which case
    /// resolving a signer fails
    Local(Vec<String>),
    /// Accounts unlocked in the node itself, which signs on our behalf
    Remote,
}

impl Accounts {
    /// Build a local credential set from an optional secret; a missing or
    /// empty secret yields an empty set
    pub fn from_secret(secret: Option<String>) -> Self {
        Accounts::Local(secret.into_iter().filter(|key| !key.trim().is_empty()).collect())
    }
}

// Keys must never end up in logs
impl fmt::Debug for Accounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accounts::Local(keys) => write!(f, "Local([{} key(s)])", keys.len()),
            Accounts::Remote => write!(f, "Remote"),
        }
    }
}

/// A deployment target
#[derive(Clone, Debug)]
pub struct NetworkConfig {
    /// The network the target was declared as
    pub network: Network,
    /// The JSON-RPC endpoint of the node
    pub rpc_url: String,
    /// The chain ID the node must report, if declared
    pub chain_id: Option<u64>,
    /// The accounts used to sign deployments
    pub accounts: Accounts,
    /// The gas price policy for deployments
    pub gas_price: GasPrice,
}

impl NetworkConfig {
    /// The declared config for the given network, with local credentials
    /// taken from `secret`
    pub fn declared(network: Network, secret: Option<String>) -> Self {
        match network {
            Network::Blockdag => NetworkConfig {
                network,
                rpc_url: BLOCKDAG_RPC_URL.to_string(),
                chain_id: Some(BLOCKDAG_CHAIN_ID),
                accounts: Accounts::from_secret(secret),
                gas_price: GasPrice::Auto,
            },
            Network::Localhost => NetworkConfig {
                network,
                rpc_url: LOCALHOST_RPC_URL.to_string(),
                chain_id: None,
                accounts: Accounts::Remote,
                gas_price: GasPrice::Auto,
            },
        }
    }

    /// Load the config for the given network, reading credentials from the
    /// process environment
    pub fn load(network: Network) -> Self {
        Self::declared(network, env::var(PRIVATE_KEY_ENV_VAR).ok())
    }

    /// Apply operator overrides on top of the declared values
    pub fn with_overrides(
        mut self,
        rpc_url: Option<String>,
        chain_id: Option<u64>,
        gas_price: Option<GasPrice>,
    ) -> Self {
        if let Some(rpc_url) = rpc_url {
            self.rpc_url = rpc_url;
        }
        if chain_id.is_some() {
            self.chain_id = chain_id;
        }
        if let Some(gas_price) = gas_price {
            self.gas_price = gas_price;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gas_price() {
        assert_eq!("auto".parse::<GasPrice>().unwrap(), GasPrice::Auto);
        assert_eq!("AUTO".parse::<GasPrice>().unwrap(), GasPrice::Auto);
        assert_eq!("1000".parse::<GasPrice>().unwrap(), GasPrice::Fixed(1000));
        assert_eq!(
            "2gwei".parse::<GasPrice>().unwrap(),
            GasPrice::Fixed(2 * WEI_PER_GWEI)
        );
        assert_eq!(
            "3 gwei".parse::<GasPrice>().unwrap(),
            GasPrice::Fixed(3 * WEI_PER_GWEI)
        );
    }

    #[test]
    fn test_parse_invalid_gas_price() {
        assert!(matches!(
            "fast".parse::<GasPrice>(),
            Err(ScriptError::ConfigParsing(_))
        ));
        assert!(matches!(
            "-1".parse::<GasPrice>(),
            Err(ScriptError::ConfigParsing(_))
        ));
        assert!(matches!(
            format!("{}gwei", u128::MAX).parse::<GasPrice>(),
            Err(ScriptError::ConfigParsing(_))
        ));
    }

    #[test]
    fn test_missing_secret_yields_empty_credentials() {
        assert_eq!(Accounts::from_secret(None), Accounts::Local(vec![]));
        assert_eq!(
            Accounts::from_secret(Some(String::new())),
            Accounts::Local(vec![])
        );
    }

    #[test]
    fn test_secret_is_not_validated() {
        let accounts = Accounts::from_secret(Some("not-a-key".to_string()));
        assert_eq!(accounts, Accounts::Local(vec!["not-a-key".to_string()]));
    }

    #[test]
    fn test_debug_hides_keys() {
        let accounts = Accounts::from_secret(Some("deadbeef".to_string()));
        let debug = format!("{:?}", accounts);
        assert!(!debug.contains("deadbeef"));
    }

    #[test]
    fn test_declared_networks() {
        let blockdag = NetworkConfig::declared(Network::Blockdag, Some("0x01".to_string()));
        assert_eq!(blockdag.rpc_url, BLOCKDAG_RPC_URL);
        assert_eq!(blockdag.chain_id, Some(1043));
        assert_eq!(blockdag.gas_price, GasPrice::Auto);
        assert_eq!(blockdag.accounts, Accounts::Local(vec!["0x01".to_string()]));

        let localhost = NetworkConfig::declared(Network::Localhost, Some("0x01".to_string()));
        assert_eq!(localhost.rpc_url, LOCALHOST_RPC_URL);
        assert_eq!(localhost.chain_id, None);
        assert_eq!(localhost.accounts, Accounts::Remote);
    }

    #[test]
    fn test_overrides() {
        let config = NetworkConfig::declared(Network::Blockdag, None).with_overrides(
            Some("http://10.0.0.1:8545".to_string()),
            None,
            Some(GasPrice::Fixed(7)),
        );
        assert_eq!(config.rpc_url, "http://10.0.0.1:8545");
        assert_eq!(config.chain_id, Some(BLOCKDAG_CHAIN_ID));
        assert_eq!(config.gas_price, GasPrice::Fixed(7));
    }
}
