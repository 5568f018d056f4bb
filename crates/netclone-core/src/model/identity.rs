// ── Identity normalization ──
//
// Datapath ids and MAC addresses arrive delimiter-separated and in mixed
// case. Every identifier is keyed through `Identity`, whose only
// constructor normalizes, so raw and normalized strings never meet in a
// comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical key for a hex identifier: surrounding whitespace trimmed,
/// every `:` removed, lowercased.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != ':')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalized identity of a switch (datapath id) or host (canonical MAC).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(normalize(raw.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Identity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<Identity> for String {
    fn from(id: Identity) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_delimiters() {
        assert_eq!(normalize("00:00:00:00:00:00:00:01"), "0000000000000001");
    }

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize("AA:BB:CC:DD:EE:FF"), "aabbccddeeff");
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize("  aa:bb:cc:dd:ee:ff\n"), "aabbccddeeff");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in [
            "00:00:00:00:00:00:00:01",
            "AA:BB:CC:DD:EE:FF",
            "aabbccddeeff",
            "",
            "::",
            "De:Ad:Be:Ef",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn identity_equal_regardless_of_formatting() {
        assert_eq!(
            Identity::new("AA:BB:CC:DD:EE:FF"),
            Identity::new("aabbccddeeff")
        );
    }

    #[test]
    fn identity_from_str() {
        let id: Identity = "00:00:00:00:00:00:00:0A".parse().unwrap();
        assert_eq!(id.to_string(), "000000000000000a");
    }

    #[test]
    fn identity_deserialize_normalizes() {
        let id: Identity = serde_json::from_str("\"AA:BB:CC:DD:EE:FF\"").unwrap();
        assert_eq!(id.as_str(), "aabbccddeeff");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"aabbccddeeff\"");
    }
}
