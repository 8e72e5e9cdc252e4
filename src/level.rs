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

use crate::sink::Sink;

/// Log severity, ordered by increasing verbosity.
///
/// A sink with threshold `T` accepts a message of severity `S` iff
/// `T >= S`.  [`Level::None`] therefore accepts nothing except messages
/// explicitly tagged `None` (useful for "always log" call sites, since
/// every threshold is `>= None`), and a threshold of [`Level::All`]
/// accepts everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// No severity.  As a threshold, drops everything but `None` messages.
    None = 0,
    /// Errors.
    Error = 1,
    /// Warnings.
    Warning = 2,
    /// Informational messages.
    Info = 3,
    /// Debugging output.
    Debug = 4,
    /// Verbose debugging output.
    Verbose = 5,
    /// All messages.  As a threshold, accepts everything.
    All = 6,
}

impl Level {
    /// Recovers a `Level` from its `u8` representation.
    ///
    /// Out-of-range values map to [`Level::All`].
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Level::None,
            1 => Level::Error,
            2 => Level::Warning,
            3 => Level::Info,
            4 => Level::Debug,
            5 => Level::Verbose,
            _ => Level::All,
        }
    }
}

/// Destination of a dispatch operation.
///
/// The broadcast case is a distinct variant rather than a reserved sink
/// reference, so it can never be confused with a real sink.
#[derive(Clone, Copy)]
pub enum Target<'a> {
    /// One specific sink.  The sink does not have to be registered; its
    /// own activation flag and threshold still apply.
    Sink(&'a Sink<'a>),
    /// Every registered, active sink whose threshold permits the message.
    All,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_verbosity() {
        assert!(Level::None < Level::Error);
        assert!(Level::Error < Level::Warning);
        assert!(Level::Warning < Level::Info);
        assert!(Level::Info < Level::Debug);
        assert!(Level::Debug < Level::Verbose);
        assert!(Level::Verbose < Level::All);
    }

    #[test]
    fn from_u8_round_trips() {
        for level in [
            Level::None,
            Level::Error,
            Level::Warning,
            Level::Info,
            Level::Debug,
            Level::Verbose,
            Level::All,
        ] {
            assert_eq!(Level::from_u8(level as u8), level);
        }
    }

    #[test]
    fn from_u8_saturates_out_of_range_values() {
        assert_eq!(Level::from_u8(7), Level::All);
        assert_eq!(Level::from_u8(255), Level::All);
    }
}
