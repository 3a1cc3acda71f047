///////////////////////////////////////////////////////////////////////////////
//
//  Copyright 2025-2026 Hubmap Developers
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
//
///////////////////////////////////////////////////////////////////////////////
//! SS58 text encoding for 32-byte account identifiers.
//!
//! An SS58 string is the Base58 encoding of `prefix ++ account ++ checksum`,
//! where `prefix` is the single network prefix byte and `checksum` is the
//! first two bytes of Blake2b-512 over `b"SS58PRE" ++ prefix ++ account`.
//! The prefix changes the human-readable form without changing the account.

use blake2::{Blake2b512, Digest};

use crate::error::{Error, Result};

/// Domain separator hashed in front of the checksum input.
const CHECKSUM_SEED: &[u8] = b"SS58PRE";

/// Length of the SS58 checksum in bytes.
const CHECKSUM_LEN: usize = 2;

/// Account identifier length handled by this codec.
const ACCOUNT_LEN: usize = 32;

/// Encodes an account under the given network prefix.
pub(crate) fn encode(account: &[u8; ACCOUNT_LEN], prefix: u8) -> String {
    let mut data = Vec::with_capacity(1 + ACCOUNT_LEN + CHECKSUM_LEN);
    data.push(prefix);
    data.extend_from_slice(account);
    let check = checksum(&data);
    data.extend_from_slice(&check);
    bs58::encode(data).into_string()
}

/// Decodes an SS58 string, verifying the checksum.
///
/// Returns the account bytes together with the network prefix byte the
/// string was encoded under.
pub(crate) fn decode(s: &str) -> Result<([u8; ACCOUNT_LEN], u8)> {
    let decoded = bs58::decode(s)
        .into_vec()
        .map_err(|_| Error::InvalidInput("bad base58 character"))?;

    if decoded.len() != 1 + ACCOUNT_LEN + CHECKSUM_LEN {
        return Err(Error::InvalidInput("unexpected SS58 payload length"));
    }

    let (data, check) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if checksum(data).as_slice() != check {
        return Err(Error::InvalidInput("SS58 checksum mismatch"));
    }

    let mut account = [0u8; ACCOUNT_LEN];
    account.copy_from_slice(&data[1..]);
    Ok((account, data[0]))
}

fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut hasher = Blake2b512::new();
    hasher.update(CHECKSUM_SEED);
    hasher.update(data);
    let digest = hasher.finalize();
    [digest[0], digest[1]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // Public key of the well-known `//Alice` development account.
    const ALICE: [u8; 32] =
        hex!["d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d"];

    #[test]
    fn known_dev_account() {
        assert_eq!(
            encode(&ALICE, 42),
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY"
        );
        assert_eq!(
            encode(&ALICE, 0),
            "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5"
        );
    }

    #[test]
    fn encode_decode_roundtrip() {
        let accounts: &[[u8; 32]] = &[[0u8; 32], [0xff; 32], ALICE];
        for account in accounts {
            for prefix in [0u8, 2, 42, 137, 255] {
                let encoded = encode(account, prefix);
                let (decoded, decoded_prefix) = decode(&encoded).unwrap();
                assert_eq!(decoded, *account);
                assert_eq!(decoded_prefix, prefix);
            }
        }
    }

    #[test]
    fn prefix_changes_encoding() {
        assert_ne!(encode(&ALICE, 0), encode(&ALICE, 42));
        assert_ne!(encode(&[0u8; 32], 0), encode(&[0u8; 32], 42));
    }

    #[test]
    fn decode_bad_checksum() {
        let encoded = encode(&ALICE, 42);

        // Decode to raw bytes, corrupt the checksum, re-encode.
        let mut raw = bs58::decode(&encoded).into_vec().unwrap();
        *raw.last_mut().unwrap() ^= 0xff;
        let corrupted = bs58::encode(raw).into_string();

        assert_eq!(
            decode(&corrupted),
            Err(Error::InvalidInput("SS58 checksum mismatch"))
        );
    }

    #[test]
    fn decode_bad_alphabet() {
        // '0', 'O', 'I', 'l' are not valid Base58 characters.
        assert_eq!(
            decode("0OIl"),
            Err(Error::InvalidInput("bad base58 character"))
        );
    }

    #[test]
    fn decode_bad_payload_length() {
        let short = bs58::encode([42u8; 10]).into_string();
        assert_eq!(
            decode(&short),
            Err(Error::InvalidInput("unexpected SS58 payload length"))
        );
    }
}
