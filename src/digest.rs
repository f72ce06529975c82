use crate::{
    error::{ReferenceError, Result},
    grammar,
};
use std::{fmt, str::FromStr};

pub const SHA256: &str = "sha256";
pub const SHA512: &str = "sha512";

/// A content digest of the form `algorithm:hex`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: String,
    encoded: String,
}

impl Digest {
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Hex length the OCI image spec registers for the algorithm, if any
    pub fn registered_len(algorithm: &str) -> Option<usize> {
        match algorithm {
            SHA256 => Some(64),
            SHA512 => Some(128),
            _ => None,
        }
    }

    /// Check the digest against the algorithms registered in the OCI image spec
    pub fn ensure_registered(&self) -> Result<()> {
        match Self::registered_len(&self.algorithm) {
            Some(len) if len == self.encoded.len() => Ok(()),
            _ => Err(ReferenceError::UnregisteredDigest(self.to_string())),
        }
    }
}

impl FromStr for Digest {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self> {
        if !grammar::is_digest(s) {
            return Err(ReferenceError::MalformedDigest(s.to_string()));
        }

        // The pattern guarantees exactly one ':'
        let (algorithm, encoded) = s
            .split_once(':')
            .ok_or_else(|| ReferenceError::MalformedDigest(s.to_string()))?;

        Ok(Self {
            algorithm: algorithm.to_string(),
            encoded: encoded.to_string(),
        })
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const FAKE_DIGEST: &str =
        "sha256:b330d9e6aa681d5fe2b11fcfe0ca51e1801d837dd26804b0ead9a09ca8246c40";

    #[test]
    fn test_parse() -> Result<()> {
        let digest: Digest = FAKE_DIGEST.parse()?;
        assert_eq!(digest.algorithm(), SHA256);
        assert_eq!(digest.encoded().len(), 64);
        assert_eq!(digest.to_string(), FAKE_DIGEST);
        Ok(())
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            "sha:XYZ".parse::<Digest>(),
            Err(ReferenceError::MalformedDigest("sha:XYZ".to_string()))
        );
        assert!("sha256".parse::<Digest>().is_err());
    }

    #[test]
    fn test_ensure_registered() -> Result<()> {
        FAKE_DIGEST.parse::<Digest>()?.ensure_registered()?;

        let sha512 = format!("sha512:{}", "0".repeat(128));
        sha512.parse::<Digest>()?.ensure_registered()?;
        Ok(())
    }

    #[test]
    fn test_ensure_registered_rejects_short_and_unknown() -> Result<()> {
        let short: Digest = "sha256:1234afe3".parse()?;
        assert_eq!(
            short.ensure_registered(),
            Err(ReferenceError::UnregisteredDigest("sha256:1234afe3".to_string()))
        );

        let unknown: Digest = "md5:123".parse()?;
        assert!(unknown.ensure_registered().is_err());
        Ok(())
    }
}
