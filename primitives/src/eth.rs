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
//! Hex parsing and EIP-55 checksum encoding for 20-byte EVM addresses.

use sha3::{Digest, Keccak256};

use crate::error::{Error, Result};

/// Strips an optional `0x`/`0X` prefix.
pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decodes a fixed-size byte array from hex digits.
fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N]> {
    let digits = strip_hex_prefix(s);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidInput("non-hex character"));
    }
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidInput("odd number of hex digits"));
    }
    if digits.len() / 2 != N {
        return Err(Error::InvalidLength {
            expected: N,
            actual: digits.len() / 2,
        });
    }
    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out)
        .map_err(|_| Error::InvalidInput("non-hex character"))?;
    Ok(out)
}

/// Decodes a 20-byte EVM address from its hex form.
///
/// All-lowercase and all-uppercase digits are accepted as-is; mixed-case
/// input must carry a valid EIP-55 checksum.
pub(crate) fn decode_h160(s: &str) -> Result<[u8; 20]> {
    let digits = strip_hex_prefix(s);
    let bytes = decode_fixed::<20>(digits)?;

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && &checksum_string(&bytes)[2..] != digits {
        return Err(Error::InvalidInput("EIP-55 checksum mismatch"));
    }
    Ok(bytes)
}

/// Decodes a 32-byte account identifier from its hex form.
pub(crate) fn decode_account(s: &str) -> Result<[u8; 32]> {
    decode_fixed::<32>(s)
}

/// EIP-55 mixed-case encoding.
///
/// Each alphabetic hex digit is uppercased when the corresponding nibble of
/// Keccak-256 over the lowercase hex string is 8 or above.
pub(crate) fn checksum_string(bytes: &[u8; 20]) -> String {
    let lower = hex::encode(bytes);
    let digest = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn checksum_known_vectors() {
        // Reference vectors from the EIP-55 test set.
        let vectors = [
            (
                hex!["5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"],
                "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            ),
            (
                hex!["fb6916095ca1df60bb79ce92ce3ea74c37c5d359"],
                "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            ),
            (
                hex!["dbf03b407c01e7cd3cbea99509d93f8dddc8c6fb"],
                "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            ),
            (
                hex!["d1220a0cf47c7b9be7a2e6ba89f429762e7b9adb"],
                "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
            ),
        ];
        for (bytes, encoded) in vectors {
            assert_eq!(checksum_string(&bytes), encoded);
            assert_eq!(decode_h160(encoded).unwrap(), bytes);
        }
    }

    #[test]
    fn accepts_uniform_case() {
        let bytes = hex!["5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"];
        assert_eq!(
            decode_h160("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap(),
            bytes
        );
        assert_eq!(
            decode_h160("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").unwrap(),
            bytes
        );
        // The prefix is optional, in either case.
        assert_eq!(
            decode_h160("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap(),
            bytes
        );
        assert_eq!(
            decode_h160("0X5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap(),
            bytes
        );
    }

    #[test]
    fn rejects_miscased_checksum() {
        // Lowercasing a single checksummed digit invalidates the string.
        assert_eq!(
            decode_h160("0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
            Err(Error::InvalidInput("EIP-55 checksum mismatch"))
        );
    }

    #[test]
    fn rejects_bad_digits() {
        assert_eq!(
            decode_h160("0xgg6916095ca1df60bb79ce92ce3ea74c37c5d359"),
            Err(Error::InvalidInput("non-hex character"))
        );
        assert_eq!(
            decode_h160("not-an-address"),
            Err(Error::InvalidInput("non-hex character"))
        );
        assert_eq!(
            decode_h160("0xabc"),
            Err(Error::InvalidInput("odd number of hex digits"))
        );
    }

    #[test]
    fn rejects_wrong_length() {
        // 19 and 21 bytes around the expected 20.
        assert_eq!(
            decode_h160("0x5aaeb6053f3e94c9b9a09f33669435e7ef1bea"),
            Err(Error::InvalidLength {
                expected: 20,
                actual: 19
            })
        );
        assert_eq!(
            decode_h160("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed00"),
            Err(Error::InvalidLength {
                expected: 20,
                actual: 21
            })
        );
    }

    #[test]
    fn account_hex_roundtrip() {
        let account =
            hex!["d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d"];
        let encoded = format!("0x{}", hex::encode(account));
        assert_eq!(decode_account(&encoded).unwrap(), account);
        assert_eq!(
            decode_account("0xd43593c715fdd31c61141abd04a99fd6"),
            Err(Error::InvalidLength {
                expected: 32,
                actual: 16
            })
        );
    }
}
