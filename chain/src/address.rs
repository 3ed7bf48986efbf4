//! Base58 address and signature parsing

use crate::error::{ChainError, ChainResult};

/// Ed25519 public key length
pub const PUBKEY_LEN: usize = 32;

/// Ed25519 signature length
pub const SIGNATURE_LEN: usize = 64;

fn decode_exact(value: &str, len: usize) -> Option<Vec<u8>> {
    let bytes = bs58::decode(value).into_vec().ok()?;
    (bytes.len() == len).then_some(bytes)
}

/// Validate a base58 account address (32 bytes decoded)
pub fn parse_address(address: &str) -> ChainResult<[u8; PUBKEY_LEN]> {
    let bytes = decode_exact(address, PUBKEY_LEN)
        .ok_or_else(|| ChainError::InvalidAddress(address.to_string()))?;

    let mut key = [0u8; PUBKEY_LEN];
    key.copy_from_slice(&bytes);
    Ok(key)
}

/// Validate a base58 transaction signature (64 bytes decoded)
pub fn parse_signature(signature: &str) -> ChainResult<[u8; SIGNATURE_LEN]> {
    let bytes = decode_exact(signature, SIGNATURE_LEN)
        .ok_or_else(|| ChainError::InvalidSignature(signature.to_string()))?;

    let mut sig = [0u8; SIGNATURE_LEN];
    sig.copy_from_slice(&bytes);
    Ok(sig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        let encoded = bs58::encode([7u8; PUBKEY_LEN]).into_string();
        assert_eq!(parse_address(&encoded).unwrap(), [7u8; PUBKEY_LEN]);

        // System program id
        assert_eq!(
            parse_address("11111111111111111111111111111111").unwrap(),
            [0u8; PUBKEY_LEN]
        );
    }

    #[test]
    fn test_parse_address_rejects_garbage() {
        assert!(matches!(
            parse_address(""),
            Err(ChainError::InvalidAddress(_))
        ));
        assert!(matches!(
            parse_address("0OIl"),
            Err(ChainError::InvalidAddress(_))
        ));

        let short = bs58::encode([1u8; 20]).into_string();
        assert!(parse_address(&short).is_err());
    }

    #[test]
    fn test_parse_signature() {
        let encoded = bs58::encode([9u8; SIGNATURE_LEN]).into_string();
        assert!(parse_signature(&encoded).is_ok());

        let address = bs58::encode([9u8; PUBKEY_LEN]).into_string();
        assert!(matches!(
            parse_signature(&address),
            Err(ChainError::InvalidSignature(_))
        ));
    }
}
