// Copyright 2025 The Logfan Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

//! ANSI color escapes and per-level tags.
//!
//! All escapes reset the foreground to the terminal default (`CSI 39`)
//! rather than resetting all attributes, so they compose with whatever
//! styling the host terminal applies.  Everything here collapses to plain
//! text when the `color` feature is disabled.

use crate::Level;

/// Red foreground.
pub const RED: &str = "\x1b[31m";
/// Green foreground.
pub const GREEN: &str = "\x1b[32m";
/// Yellow foreground.
pub const YELLOW: &str = "\x1b[33m";
/// Blue foreground.
pub const BLUE: &str = "\x1b[34m";
/// Cyan foreground.
pub const CYAN: &str = "\x1b[36m";
/// Default foreground.
pub const DEFAULT: &str = "\x1b[39m";

/// Returns the single-letter tag the convenience macros prefix messages
/// of `level` with.
///
/// [`Level::None`] and [`Level::All`] have no tag; they are dispatch
/// filters, not message severities.
#[must_use]
pub const fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "E",
        Level::Warning => "W",
        Level::Info => "I",
        Level::Debug => "D",
        Level::Verbose => "V",
        Level::None | Level::All => "",
    }
}

/// Returns the foreground escape tinting the whole message prefix (tag,
/// timestamp, and module path) of `level`, or `""` when the `color`
/// feature is disabled or `level` has no tag.
#[must_use]
pub const fn level_color(level: Level) -> &'static str {
    if !cfg!(feature = "color") {
        return "";
    }
    match level {
        Level::Error => RED,
        Level::Warning => YELLOW,
        Level::Info => GREEN,
        Level::Debug => BLUE,
        Level::Verbose => CYAN,
        Level::None | Level::All => "",
    }
}
