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
//! Errors that can occur during address conversion and decoding.

/// Address mapping Result typedef.
pub type Result<T> = std::result::Result<T, Error>;

/// Address mapping errors.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Raw input length does not match the expected fixed size.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Expected byte length: 20 for an EVM address, 32 for an account.
        expected: usize,
        /// Byte length of the supplied input.
        actual: usize,
    },

    /// Malformed textual encoding.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
