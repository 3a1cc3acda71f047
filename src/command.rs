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
//! Command handlers and output rendering.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::Serialize;

use hubmap_primitives::{parse_account, AccountId32, ParsedAddress, H160};

use crate::cli::OutputFormat;

/// Both identifier spaces of one account, ready for rendering.
#[derive(Serialize, Debug)]
struct MappingReport {
    evm: String,
    account: String,
    ss58: String,
    prefix: u8,
    derivation: Derivation,
}

#[derive(Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "kebab-case")]
enum Derivation {
    /// Mechanically derived from an H160; maps back losslessly.
    EvmDerived,
    /// A real keypair's public key; the EVM form is a one-way hash.
    Native,
}

impl Derivation {
    fn label(&self) -> &'static str {
        match self {
            Derivation::EvmDerived => "evm-derived",
            Derivation::Native => "native",
        }
    }
}

impl MappingReport {
    fn new(evm: H160, account: AccountId32, prefix: u8) -> Self {
        let derivation = if account.is_evm_derived() {
            Derivation::EvmDerived
        } else {
            Derivation::Native
        };
        MappingReport {
            evm: evm.to_checksum_string(),
            account: account.to_string(),
            ss58: account.to_ss58(prefix),
            prefix,
            derivation,
        }
    }
}

/// `to-account` handler: H160 into the 32-byte account space.
pub fn to_account(address: &str, prefix: u8, format: &OutputFormat) -> Result<()> {
    let address = H160::from_hex(address.trim()).context("failed to parse EVM address")?;
    let account = AccountId32::from(address);
    log::info!("mapped {} into the account space", address);

    emit(&MappingReport::new(address, account, prefix), format)
}

/// `to-evm` handler: 32-byte account into the EVM address space.
pub fn to_evm(account: &str, prefix: u8, format: &OutputFormat) -> Result<()> {
    let account = match parse_account(account)? {
        ParsedAddress::Evm(_) => bail!("input is already an EVM address, try `inspect`"),
        ParsedAddress::AccountHex(account) => account,
        ParsedAddress::Ss58(account, carried) => {
            log::debug!("input was SS58-encoded under prefix {carried}");
            account
        }
    };
    let address = account.to_h160();
    if account.is_evm_derived() {
        log::info!("account is EVM-derived, recovered {} losslessly", address);
    } else {
        log::info!("native account, derived {} by hashing", address);
    }

    emit(&MappingReport::new(address, account, prefix), format)
}

/// `inspect` handler: both spaces for any supported address form.
pub fn inspect(address: &str, prefix: u8, format: &OutputFormat) -> Result<()> {
    let report = match parse_account(address)? {
        ParsedAddress::Evm(evm) => MappingReport::new(evm, AccountId32::from(evm), prefix),
        ParsedAddress::AccountHex(account) | ParsedAddress::Ss58(account, _) => {
            MappingReport::new(account.to_h160(), account, prefix)
        }
    };

    emit(&report, format)
}

fn emit(report: &MappingReport, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Text => {
            println!("{}  {}", "EVM:       ".bold(), report.evm);
            println!("{}  {}", "Account:   ".bold(), report.account);
            println!(
                "{}  {}  {}",
                "SS58:      ".bold(),
                report.ss58,
                format!("(prefix {})", report.prefix).bright_black()
            );
            println!("{}  {}", "Derivation:".bold(), report.derivation.label());
        }
    }
    Ok(())
}
