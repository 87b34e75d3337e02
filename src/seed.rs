use serde::{Deserialize, Serialize};

use crate::error::DeriveError;

/// Seed pair plus round counter for one derivation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedMaterial {
    pub server_seed: String,
    pub client_seed: String,
    #[serde(default)]
    pub nonce: u64,
}

impl SeedMaterial {
    #[inline]
    pub fn new(server_seed: impl Into<String>, client_seed: impl Into<String>, nonce: u64) -> Self {
        Self {
            server_seed: server_seed.into(),
            client_seed: client_seed.into(),
            nonce,
        }
    }

    /// Same seeds, different round.
    #[inline]
    #[must_use]
    pub fn with_nonce(&self, nonce: u64) -> Self {
        Self {
            server_seed: self.server_seed.clone(),
            client_seed: self.client_seed.clone(),
            nonce,
        }
    }

    pub fn validate(&self) -> Result<(), DeriveError> {
        if self.server_seed.is_empty() {
            return Err(DeriveError::MissingServerSeed);
        }
        if self.client_seed.is_empty() {
            return Err(DeriveError::MissingClientSeed);
        }
        Ok(())
    }

    /// Canonical hash input: `serverSeed + clientSeed + ":" + nonce`.
    ///
    /// There is no delimiter between the two seeds, so ("ab", "c") and
    /// ("a", "bc") combine to the same string. Verifiers of existing rounds
    /// rely on this exact rule.
    pub fn combine(&self) -> Result<String, DeriveError> {
        self.validate()?;
        Ok(combine_unchecked(&self.server_seed, &self.client_seed, self.nonce))
    }
}

#[inline]
fn combine_unchecked(server_seed: &str, client_seed: &str, nonce: u64) -> String {
    let mut out = String::with_capacity(server_seed.len() + client_seed.len() + 21);
    out.push_str(server_seed);
    out.push_str(client_seed);
    out.push(':');
    out.push_str(&nonce.to_string());
    out
}

/// Free-function form of [`SeedMaterial::combine`].
#[inline]
pub fn combine(server_seed: &str, client_seed: &str, nonce: u64) -> Result<String, DeriveError> {
    SeedMaterial::new(server_seed, client_seed, nonce).combine()
}
