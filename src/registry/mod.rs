// Copyright (C) 2025 The rphonecheck Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod country_entry;
mod country_table;

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

pub use country_entry::{CountryEntry, Region};
pub use country_table::RawCountryEntry;
use country_table::COUNTRY_TABLE;

use crate::errors::RegistryError;

/// The maximum length of a dialing code.
pub const MAX_DIALING_CODE_LENGTH: usize = 3;

pub static COUNTRY_REGISTRY: LazyLock<CountryRegistry> = LazyLock::new(|| {
    CountryRegistry::new()
});

/// Immutable dialing-code table, bucketed by code length so lookups can
/// go longest-first.
#[derive(Debug)]
pub struct CountryRegistry {
    /// `buckets[n - 1]` holds every entry with an `n` digit dialing code.
    buckets: [Vec<CountryEntry>; MAX_DIALING_CODE_LENGTH],
}

impl CountryRegistry {
    /// Builds the registry from the compiled-in table.
    ///
    /// The table is static data, so a failure here is a bug in this crate.
    pub(crate) fn new() -> Self {
        match Self::from_raw_entries(COUNTRY_TABLE) {
            Ok(registry) => registry,
            Err(err) => {
                let err_message = format!("Could not build compiled-in country table: {}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    /// Builds a registry from an arbitrary table.
    ///
    /// Rejects dialing codes that are not 1 to 3 ASCII digits, duplicated
    /// codes, and mobile patterns that do not compile.
    pub fn from_raw_entries(entries: &[RawCountryEntry]) -> Result<Self, RegistryError> {
        let mut buckets: [Vec<CountryEntry>; MAX_DIALING_CODE_LENGTH] = Default::default();

        for &(dialing_code, name, region, pattern) in entries {
            let len = dialing_code.len();
            if len == 0
                || len > MAX_DIALING_CODE_LENGTH
                || !dialing_code.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(RegistryError::InvalidDialingCode(dialing_code.to_owned()));
            }
            let bucket = &mut buckets[len - 1];
            if bucket.iter().any(|entry| entry.dialing_code == dialing_code) {
                return Err(RegistryError::DuplicateDialingCode(dialing_code.to_owned()));
            }
            let mobile_pattern = Regex::new(pattern)?;
            bucket.push(CountryEntry::new(dialing_code, name, region, mobile_pattern));
        }

        Ok(Self { buckets })
    }

    /// Returns the entry whose dialing code is the longest prefix of
    /// `digits`. Three digit codes are tried first, then two, then one.
    pub fn lookup(&self, digits: &str) -> Option<&CountryEntry> {
        for len in (1..=MAX_DIALING_CODE_LENGTH).rev() {
            // `get` also refuses to split a multi-byte char
            let Some(candidate) = digits.get(..len) else {
                continue;
            };
            if let Some(entry) = self.buckets[len - 1]
                .iter()
                .find(|entry| entry.dialing_code == candidate)
            {
                trace!("Matched dialing code {} ({}) for {}", entry.dialing_code, entry.name, digits);
                return Some(entry);
            }
        }
        trace!("No dialing code matched {}", digits);
        None
    }

    /// Returns the entry registered for exactly this dialing code.
    pub fn get(&self, dialing_code: &str) -> Option<&CountryEntry> {
        let len = dialing_code.len();
        if len == 0 || len > MAX_DIALING_CODE_LENGTH {
            return None;
        }
        self.buckets[len - 1]
            .iter()
            .find(|entry| entry.dialing_code == dialing_code)
    }

    /// Iterates all entries, longest dialing codes first.
    pub fn entries(&self) -> impl Iterator<Item = &CountryEntry> {
        self.buckets.iter().rev().flatten()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
