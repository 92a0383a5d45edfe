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

use regex::Regex;
use strum::{AsRefStr, Display};

/// Broad geographic area a dialing code belongs to.
///
/// Rendered as the human readable name, e.g. `North America`, which is what
/// ends up in the `location` field of a basic validation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
pub enum Region {
    #[strum(serialize = "Europe")]
    Europe,
    #[strum(serialize = "North America")]
    NorthAmerica,
    #[strum(serialize = "Central America")]
    CentralAmerica,
    #[strum(serialize = "South America")]
    SouthAmerica,
}

/// A single row of the dialing-code table.
#[derive(Debug, Clone)]
pub struct CountryEntry {
    /// International calling prefix without the leading `+`, 1 to 3 digits.
    pub dialing_code: &'static str,
    pub name: &'static str,
    pub region: Region,
    /// Tested against the national number (the digits after
    /// `dialing_code`) to guess whether the line is mobile.
    pub mobile_pattern: Regex,
}

impl CountryEntry {
    pub fn new(
        dialing_code: &'static str,
        name: &'static str,
        region: Region,
        mobile_pattern: Regex,
    ) -> Self {
        Self { dialing_code, name, region, mobile_pattern }
    }

    /// Returns whether the national number looks like a mobile line.
    pub fn is_mobile(&self, national_number: &str) -> bool {
        self.mobile_pattern.is_match(national_number)
    }
}
