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
//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "hubmap")]
#[command(about = "EVM <-> Substrate account mapping utility", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// SS58 network prefix used when rendering accounts
    #[arg(short, long, value_name = "PREFIX", default_value = "42", global = true)]
    pub prefix: u8,

    /// Output format (text or json)
    #[arg(short, long, value_name = "FORMAT", default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Verbose output (-v, -vv for increasing verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Map an EVM address into the 32-byte account space
    ToAccount {
        /// EVM address, hex with optional 0x prefix
        address: String,
    },

    /// Map a 32-byte account into the EVM address space
    ToEvm {
        /// Account, as SS58 or 64 hex digits
        account: String,
    },

    /// Show both identifier spaces for any supported address form
    Inspect {
        /// EVM hex, account hex or SS58 string
        address: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Machine-readable JSON
    Json,
}
