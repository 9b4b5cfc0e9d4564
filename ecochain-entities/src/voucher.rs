use std::{fmt, str::FromStr};

use uuid::Uuid;

/// Opaque voucher token handed out for a redemption.
///
/// The string form is the bs58 encoding of a random UUID. It is what the
/// partner store scans and resolves back to the redemption record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoucherCode(Uuid);

impl VoucherCode {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn encode_to_string(&self) -> String {
        bs58::encode(self.0.as_bytes()).into_string()
    }
}

impl From<Uuid> for VoucherCode {
    fn from(from: Uuid) -> Self {
        Self(from)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VoucherDecodingError {
    #[error(transparent)]
    Bs58(#[from] bs58::decode::Error),
    #[error("Invalid voucher length")]
    InvalidLength,
}

impl FromStr for VoucherCode {
    type Err = VoucherDecodingError;

    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(encoded).into_vec()?;
        let bytes: [u8; 16] = decoded
            .try_into()
            .map_err(|_| VoucherDecodingError::InvalidLength)?;
        Ok(Self(Uuid::from_bytes(bytes)))
    }
}

impl fmt::Display for VoucherCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.encode_to_string())
    }
}
