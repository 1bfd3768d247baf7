//! Network prefix registry.
//!
//! All networks share one key space; the prefix byte only selects how an
//! account is displayed.

/// Prefix of the primary network (Polkadot).
pub const POLKADOT_PREFIX: u8 = 0;

/// Prefix of the secondary network (Kusama).
pub const KUSAMA_PREFIX: u8 = 2;

/// Generic Substrate prefix, used as the canonical storage form.
pub const GENERIC_PREFIX: u8 = 42;

/// Known network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Primary network, prefix 0.
    Polkadot,
    /// Secondary network, prefix 2.
    Kusama,
    /// Generic Substrate format, prefix 42.
    Generic,
}

impl Network {
    /// Get the SS58 prefix byte for this network.
    pub fn prefix(&self) -> u8 {
        match self {
            Network::Polkadot => POLKADOT_PREFIX,
            Network::Kusama => KUSAMA_PREFIX,
            Network::Generic => GENERIC_PREFIX,
        }
    }

    /// Look up a network by prefix byte.
    pub fn from_prefix(prefix: u8) -> Option<Self> {
        match prefix {
            POLKADOT_PREFIX => Some(Network::Polkadot),
            KUSAMA_PREFIX => Some(Network::Kusama),
            GENERIC_PREFIX => Some(Network::Generic),
            _ => None,
        }
    }

    /// Parse network from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "polkadot" | "dot" | "primary" => Some(Network::Polkadot),
            "kusama" | "ksm" | "secondary" => Some(Network::Kusama),
            "generic" | "substrate" => Some(Network::Generic),
            _ => None,
        }
    }

    /// Get network name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Polkadot => "polkadot",
            Network::Kusama => "kusama",
            Network::Generic => "generic",
        }
    }

    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Polkadot => "Polkadot",
            Network::Kusama => "Kusama",
            Network::Generic => "Generic Substrate",
        }
    }
}

impl core::fmt::Display for Network {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Polkadot
    }
}

/// Classification of an arbitrary prefix byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixClass {
    /// A registered prefix.
    Known(Network),
    /// A decoded prefix that is not registered.
    Unknown(u8),
    /// Nothing decoded and the leading character matched no network.
    Unrecognized,
}

impl PrefixClass {
    /// Human label for UI hints.
    pub fn label(&self) -> &'static str {
        match self {
            PrefixClass::Known(Network::Polkadot) => "primary network",
            PrefixClass::Known(Network::Kusama) => "secondary network",
            PrefixClass::Known(Network::Generic) => "generic",
            PrefixClass::Unknown(_) | PrefixClass::Unrecognized => "unknown",
        }
    }

    /// The registered network, if any.
    pub fn network(&self) -> Option<Network> {
        match self {
            PrefixClass::Known(network) => Some(*network),
            PrefixClass::Unknown(_) | PrefixClass::Unrecognized => None,
        }
    }
}

/// Classify a prefix byte against the registry.
pub fn classify_prefix(prefix: u8) -> PrefixClass {
    match Network::from_prefix(prefix) {
        Some(network) => PrefixClass::Known(network),
        None => PrefixClass::Unknown(prefix),
    }
}

/// Guess the network from the first character of an address.
///
/// This holds for 32-byte keys under the three known prefixes only: Base58
/// does not map prefix bytes to leading characters one-to-one in general.
/// Use it for UI hints; a full decode is the only authoritative answer.
pub fn guess_network(address: &str) -> Option<Network> {
    match address.trim().chars().next()? {
        '5' => Some(Network::Generic),
        '1' => Some(Network::Polkadot),
        'C'..='H' | 'J' => Some(Network::Kusama),
        _ => None,
    }
}
