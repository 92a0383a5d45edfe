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

use std::borrow::Cow;

/// Strips prefix of given string Cow. Returns `Ok` with the stripped
/// string if prefix found, otherwise gives the untouched string back as `Err`.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> Result<Cow<'a, str>, Cow<'a, str>> {
    match cow {
        Cow::Borrowed(s) => match s.strip_prefix(prefix) {
            Some(stripped) => Ok(Cow::Borrowed(stripped)),
            None => Err(Cow::Borrowed(s)),
        },
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
                return Ok(Cow::Owned(s));
            }
            Err(Cow::Owned(s))
        }
    }
}

/// Removes every char for which `is_separator` returns true.
///
/// Returns `Cow::Borrowed` if nothing had to be removed, so clean input
/// is never copied.
pub fn strip_chars<'a>(s: &'a str, is_separator: impl Fn(char) -> bool) -> Cow<'a, str> {
    match s.find(|c: char| is_separator(c)) {
        None => Cow::Borrowed(s),
        Some(first) => {
            let mut cleaned = String::with_capacity(s.len());
            cleaned.push_str(&s[..first]);
            cleaned.extend(s[first..].chars().filter(|c| !is_separator(*c)));
            Cow::Owned(cleaned)
        }
    }
}
