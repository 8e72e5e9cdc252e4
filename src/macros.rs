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

//! Convenience macros over [`Logger::write`] and [`Logger::hex_dump`].
//!
//! The severity-tagged macros broadcast a message prefixed with the level
//! tag, a timestamp from the logger's tick source, and the caller's module
//! path, and append [`EOL`](crate::EOL).  Building the crate with the
//! `off` feature compiles them down to nothing.

use core::fmt;

use crate::level::{Level, Target};
use crate::logger::Logger;
use crate::{EOL, colors};

/// Broadcasts `args` at `level` prefixed with the level tag, timestamp,
/// and `tag`, terminated by [`EOL`].  The whole prefix is tinted in the
/// level's color.  Support function for the tagged macros.
pub fn write_tagged<const N: usize, const BUF: usize>(
    logger: &mut Logger<'_, N, BUF>,
    level: Level,
    tag: &str,
    args: fmt::Arguments<'_>,
) {
    if !crate::ENABLED {
        return;
    }
    let timestamp = logger.timestamp();
    let color = colors::level_color(level);
    let reset = if color.is_empty() { "" } else { colors::DEFAULT };
    logger.write(
        Target::All,
        level,
        format_args!(
            "{color}{}({timestamp}) {tag}:{reset} {args}{EOL}",
            colors::level_tag(level)
        ),
    );
}

/// Broadcasts `args` untagged at [`Level::None`], terminated by [`EOL`].
/// Support function for [`log_println!`](crate::log_println).
pub fn write_line<const N: usize, const BUF: usize>(
    logger: &mut Logger<'_, N, BUF>,
    args: fmt::Arguments<'_>,
) {
    logger.write(Target::All, Level::None, format_args!("{args}{EOL}"));
}

/// Broadcasts a plain line to every registered sink, regardless of
/// configured thresholds (every threshold is `>=` [`Level::None`]).
///
/// ```
/// # use logfan::{Logger, Sink, Transport};
/// # struct Null;
/// # impl Transport for Null { fn write_all(&self, _: &[u8]) {} }
/// # let null = Null;
/// # let sink = Sink::new(&null);
/// # let mut logger: Logger = Logger::new();
/// # logger.register(&sink);
/// logfan::log_println!(&mut logger, "booting {}", "logfan");
/// ```
#[macro_export]
macro_rules! log_println {
    ($logger:expr, $($arg:tt)*) => {
        $crate::__private::write_line($logger, ::core::format_args!($($arg)*))
    };
}

/// Broadcasts an error-tagged message.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::__private::write_tagged(
            $logger,
            $crate::Level::Error,
            ::core::module_path!(),
            ::core::format_args!($($arg)*),
        )
    };
}

/// Broadcasts a warning-tagged message.
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $crate::__private::write_tagged(
            $logger,
            $crate::Level::Warning,
            ::core::module_path!(),
            ::core::format_args!($($arg)*),
        )
    };
}

/// Broadcasts an info-tagged message.
///
/// ```
/// # use logfan::{Logger, Sink, Transport};
/// # struct Null;
/// # impl Transport for Null { fn write_all(&self, _: &[u8]) {} }
/// # let null = Null;
/// # let sink = Sink::new(&null);
/// # let mut logger: Logger = Logger::new();
/// # logger.register(&sink);
/// logfan::log_info!(&mut logger, "link up after {} ms", 42);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::__private::write_tagged(
            $logger,
            $crate::Level::Info,
            ::core::module_path!(),
            ::core::format_args!($($arg)*),
        )
    };
}

/// Broadcasts a debug-tagged message.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::__private::write_tagged(
            $logger,
            $crate::Level::Debug,
            ::core::module_path!(),
            ::core::format_args!($($arg)*),
        )
    };
}

/// Broadcasts a verbose-tagged message.
#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($arg:tt)*) => {
        $crate::__private::write_tagged(
            $logger,
            $crate::Level::Verbose,
            ::core::module_path!(),
            ::core::format_args!($($arg)*),
        )
    };
}

/// Broadcasts a hex dump of `bytes` at [`Level::All`], so only sinks
/// accepting everything receive it.
#[macro_export]
macro_rules! log_hex_dump_all {
    ($logger:expr, $bytes:expr) => {
        $logger.hex_dump($crate::Target::All, $crate::Level::All, $bytes)
    };
}

/// Logs an error naming the failed expression, file, and line, then runs
/// `action` (commonly a safe early `return`).
///
/// The message goes through the ordinary dispatch path, so a failing
/// assertion can never recurse into another failure.
///
/// ```
/// # use logfan::{Logger, Sink, Transport};
/// # struct Null;
/// # impl Transport for Null { fn write_all(&self, _: &[u8]) {} }
/// # fn configure(dma_ready: bool) {
/// #     let null = Null;
/// #     let sink = Sink::new(&null);
/// #     let mut logger: Logger = Logger::new();
/// #     logger.register(&sink);
/// logfan::log_assert!(&mut logger, dma_ready, return);
/// # }
/// # configure(false);
/// ```
#[macro_export]
macro_rules! log_assert {
    ($logger:expr, $condition:expr, $action:expr) => {
        if !$condition {
            $crate::log_error!(
                $logger,
                "\"{}\" assert failed at file: {}, line: {}",
                ::core::stringify!($condition),
                ::core::file!(),
                ::core::line!(),
            );
            $action;
        }
    };
}
