//! Helper service handed to every page builder.

use super::{format_number, get_total_available, sats_to_bitcoin, sats_to_bitcoin_with_decimals};
use crate::config::Config;
use num_bigint::BigInt;
use std::fmt::Display;

/// Formatting helpers and the local flag, built once at startup.
#[derive(Debug, Clone, Copy)]
pub struct Helpers<'a> {
    config: &'a Config,
}

impl<'a> Helpers<'a> {
    /// Create helpers bound to the startup configuration.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Whether the app runs in local/dev mode.
    pub fn is_local(&self) -> bool {
        self.config.is_local()
    }

    /// See [`format_number`].
    pub fn format_number<N: Display>(&self, n: N) -> String {
        format_number(n)
    }

    /// See [`get_total_available`].
    pub fn total_available(&self, max: &BigInt, left: &BigInt) -> String {
        get_total_available(max.clone(), left.clone())
    }

    /// See [`sats_to_bitcoin`].
    pub fn sats_to_bitcoin(&self, sats: u64) -> String {
        sats_to_bitcoin(sats)
    }

    /// See [`sats_to_bitcoin_with_decimals`].
    pub fn sats_to_bitcoin_with_decimals(&self, sats: u64, decimals: u32) -> String {
        sats_to_bitcoin_with_decimals(sats, decimals)
    }
}
