//! # Solana Connection Scaffold
//!
//! Fixed network selection for the wallet connection scaffold. The terminal
//! only displays which cluster it is pointed at; it does not open an RPC
//! connection, hold keys or sign anything.

use std::fmt;
use std::str::FromStr;

/// Solana cluster, mirroring `clusterApiUrl` monikers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
}

impl Cluster {
    /// Public RPC endpoint for the cluster
    pub fn api_url(&self) -> &'static str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
        }
    }

    pub fn moniker(&self) -> &'static str {
        match self {
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.moniker())
    }
}

impl FromStr for Cluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            "mainnet" | "mainnet-beta" => Ok(Cluster::MainnetBeta),
            other => Err(format!("unknown cluster: {}", other)),
        }
    }
}

/// Transaction confirmation level requested from the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

/// Connection settings shown in the header badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectionConfig {
    pub cluster: Cluster,
    pub commitment: Commitment,
}

impl ConnectionConfig {
    /// Short badge text, e.g. `devnet · confirmed`
    pub fn badge(&self) -> String {
        format!("{} · {}", self.cluster, self.commitment.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_devnet_confirmed() {
        let config = ConnectionConfig::default();
        assert_eq!(config.cluster, Cluster::Devnet);
        assert_eq!(config.commitment, Commitment::Confirmed);
        assert_eq!(config.cluster.api_url(), "https://api.devnet.solana.com");
        assert_eq!(config.badge(), "devnet · confirmed");
    }

    #[test]
    fn test_cluster_parsing() {
        assert_eq!("Devnet".parse::<Cluster>().unwrap(), Cluster::Devnet);
        assert_eq!("mainnet".parse::<Cluster>().unwrap(), Cluster::MainnetBeta);
        assert_eq!("mainnet-beta".parse::<Cluster>().unwrap(), Cluster::MainnetBeta);
        assert!("localnet".parse::<Cluster>().is_err());
    }
}
