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
//! Account identifier types for EVM-compatible Polkadot Hub chains.
//!
//! A chain account lives in one of two identifier spaces: the 20-byte
//! EVM-style [`H160`] and the 32-byte Substrate-native [`AccountId32`].
//! This crate provides the deterministic mapping between the two, plus the
//! canonical textual form of each space (EIP-55 mixed-case hex for H160,
//! SS58 for AccountId32).
//!
//! An H160 maps into the 32-byte space by filling the twelve trailing bytes
//! with `0xEE`; such accounts map back losslessly. Any other 32-byte value
//! is a native account (a real keypair's public key) and maps to the last
//! 20 bytes of its Keccak-256 hash, a deterministic but one-way derivation.
//!
//! All operations are pure and synchronous; the types are `Copy` values and
//! safe to share across threads without coordination.

#![warn(missing_docs)]

pub mod error;
mod eth;
mod ss58;

pub use error::{Error, Result};

use std::fmt;
use std::str::FromStr;

use sha3::{Digest, Keccak256};

/// Fill byte marking an [`AccountId32`] as mechanically derived from an H160.
pub const EVM_FILL_BYTE: u8 = 0xEE;

/// 20-byte EVM-style account identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct H160([u8; 20]);

impl H160 {
    /// Length of the identifier in bytes.
    pub const LEN: usize = 20;

    /// Constructs from a 20-byte array (canonical form).
    #[inline]
    pub fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        H160(bytes)
    }

    /// Constructs from a byte slice of exactly 20 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes = slice.try_into().map_err(|_| Error::InvalidLength {
            expected: Self::LEN,
            actual: slice.len(),
        })?;
        Ok(H160(bytes))
    }

    /// Parses from hex, with or without a `0x` prefix.
    ///
    /// All-lowercase and all-uppercase digits are accepted as-is;
    /// mixed-case input must carry a valid EIP-55 checksum.
    pub fn from_hex(s: &str) -> Result<Self> {
        eth::decode_h160(s).map(H160)
    }

    /// Borrows the underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// EIP-55 mixed-case string form, `0x`-prefixed.
    pub fn to_checksum_string(&self) -> String {
        eth::checksum_string(&self.0)
    }
}

impl AsRef<[u8]> for H160 {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 20]> for H160 {
    fn from(bytes: [u8; 20]) -> Self {
        H160(bytes)
    }
}

impl fmt::Display for H160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum_string())
    }
}

impl FromStr for H160 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// 32-byte Substrate-native account identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AccountId32([u8; 32]);

impl AccountId32 {
    /// Length of the identifier in bytes.
    pub const LEN: usize = 32;

    /// Constructs from a 32-byte array (canonical form).
    #[inline]
    pub fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        AccountId32(bytes)
    }

    /// Constructs from a byte slice of exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes = slice.try_into().map_err(|_| Error::InvalidLength {
            expected: Self::LEN,
            actual: slice.len(),
        })?;
        Ok(AccountId32(bytes))
    }

    /// Parses from hex (64 digits, optional `0x` prefix).
    pub fn from_hex(s: &str) -> Result<Self> {
        eth::decode_account(s).map(AccountId32)
    }

    /// Parses from an SS58 string, verifying the checksum.
    ///
    /// Returns the account together with the network prefix byte the
    /// string was encoded under.
    pub fn from_ss58(s: &str) -> Result<(Self, u8)> {
        ss58::decode(s).map(|(bytes, prefix)| (AccountId32(bytes), prefix))
    }

    /// Borrows the underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Whether this account was mechanically derived from an H160.
    ///
    /// True iff the twelve trailing bytes all equal [`EVM_FILL_BYTE`].
    /// This is a byte-pattern heuristic: a native public key could match
    /// it, although that is astronomically unlikely.
    pub fn is_evm_derived(&self) -> bool {
        self.0[H160::LEN..].iter().all(|b| *b == EVM_FILL_BYTE)
    }

    /// Maps this account into the 20-byte EVM space.
    ///
    /// EVM-derived accounts return their leading 20 bytes, inverting the
    /// `From<H160>` conversion exactly. Native accounts return the last
    /// 20 bytes of Keccak-256 over the full 32 bytes; that derivation is
    /// deterministic but cannot be inverted.
    pub fn to_h160(&self) -> H160 {
        let mut out = [0u8; H160::LEN];
        if self.is_evm_derived() {
            out.copy_from_slice(&self.0[..H160::LEN]);
        } else {
            let digest = Keccak256::digest(self.0);
            out.copy_from_slice(&digest[AccountId32::LEN - H160::LEN..]);
        }
        H160(out)
    }

    /// SS58 string form under the given network prefix.
    pub fn to_ss58(&self, prefix: u8) -> String {
        ss58::encode(&self.0, prefix)
    }
}

impl AsRef<[u8]> for AccountId32 {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for AccountId32 {
    fn from(bytes: [u8; 32]) -> Self {
        AccountId32(bytes)
    }
}

impl From<H160> for AccountId32 {
    fn from(address: H160) -> Self {
        let mut bytes = [EVM_FILL_BYTE; AccountId32::LEN];
        bytes[..H160::LEN].copy_from_slice(address.as_bytes());
        AccountId32(bytes)
    }
}

impl fmt::Display for AccountId32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Textual address form recognized by [`parse_account`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsedAddress {
    /// A 20-byte EVM address in hex form.
    Evm(H160),
    /// A 32-byte account in hex form.
    AccountHex(AccountId32),
    /// An SS58-encoded account, with the network prefix it carried.
    Ss58(AccountId32, u8),
}

/// Parses a caller-supplied address string in any supported form.
///
/// `0x`-prefixed input is always treated as hex; bare input is treated as
/// hex when it is exactly 40 or 64 hex digits, and as SS58 otherwise.
pub fn parse_account(s: &str) -> Result<ParsedAddress> {
    let s = s.trim();
    let digits = eth::strip_hex_prefix(s);
    let prefixed = digits.len() != s.len();
    let hex_like = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit());

    if prefixed || (hex_like && digits.len() == 2 * H160::LEN) {
        if prefixed && digits.len() == 2 * AccountId32::LEN {
            return AccountId32::from_hex(digits).map(ParsedAddress::AccountHex);
        }
        return H160::from_hex(s).map(ParsedAddress::Evm);
    }
    if hex_like && digits.len() == 2 * AccountId32::LEN {
        return AccountId32::from_hex(digits).map(ParsedAddress::AccountHex);
    }

    AccountId32::from_ss58(s).map(|(account, prefix)| ParsedAddress::Ss58(account, prefix))
}
