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

use super::country_entry::Region::{self, *};

/// Raw table row: dialing code, country name, region, mobile prefix pattern.
pub type RawCountryEntry = (&'static str, &'static str, Region, &'static str);

pub(super) const COUNTRY_TABLE: &[RawCountryEntry] = &[
    // Europe
    ("34", "Spain", Europe, "^[67]"),
    ("33", "France", Europe, "^[67]"),
    ("49", "Germany", Europe, "^1[567]"),
    ("44", "United Kingdom", Europe, "^7"),
    ("39", "Italy", Europe, "^3"),
    ("351", "Portugal", Europe, "^9"),
    ("31", "Netherlands", Europe, "^6"),
    ("32", "Belgium", Europe, "^4"),
    ("41", "Switzerland", Europe, "^7"),
    ("43", "Austria", Europe, "^6"),
    ("48", "Poland", Europe, "^[5-8]"),

    // North America
    ("1", "USA/Canada", NorthAmerica, "^[2-9]"),

    // Central America
    ("52", "Mexico", CentralAmerica, "^[1-9]"),
    ("502", "Guatemala", CentralAmerica, "^[3-5]"),
    ("503", "El Salvador", CentralAmerica, "^[67]"),
    ("504", "Honduras", CentralAmerica, "^[389]"),
    ("505", "Nicaragua", CentralAmerica, "^[578]"),
    ("506", "Costa Rica", CentralAmerica, "^[5-8]"),
    ("507", "Panama", CentralAmerica, "^6"),

    // South America
    ("54", "Argentina", SouthAmerica, "^9?[1-3]"),
    ("55", "Brazil", SouthAmerica, "^[1-9]"),
    ("56", "Chile", SouthAmerica, "^9"),
    ("57", "Colombia", SouthAmerica, "^3"),
    ("58", "Venezuela", SouthAmerica, "^4"),
    ("51", "Peru", SouthAmerica, "^9"),
    ("593", "Ecuador", SouthAmerica, "^9"),
    ("591", "Bolivia", SouthAmerica, "^[67]"),
    ("595", "Paraguay", SouthAmerica, "^9"),
    ("598", "Uruguay", SouthAmerica, "^9"),
];
