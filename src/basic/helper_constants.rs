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

// The minimum and maximum length of a cleaned number, dialing code included.
pub const MIN_LENGTH_FOR_NUMBER: usize = 8;
// E.164 caps numbers at 15 digits.
pub const MAX_LENGTH_FOR_NUMBER: usize = 15;

pub const PLUS_SIGN: &'static str = "+";

pub const LINE_TYPE_MOBILE: &'static str = "mobile";
pub const LINE_TYPE_UNKNOWN: &'static str = "unknown";

/// Punctuation people put into numbers when writing them down. Whitespace
/// is matched separately.
pub const FORMATTING_PUNCTUATION: &[char] = &['-', '(', ')', '.'];

/// Stripped as whitespace even though Unicode does not list it.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';
/// Unicode whitespace that is kept in the number.
pub const NEXT_LINE: char = '\u{0085}';
