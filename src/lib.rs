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

//! `logfan` is a severity-gated fan-out logging facility for
//! resource-constrained embedded targets.
//!
//! Multiple [`Sink`]s (a UART, a memory buffer, ...) register with a
//! fixed-capacity [`Logger`].  A message is rendered once into the logger's
//! staging buffer and flushed to every registered, active sink whose
//! severity threshold permits it.  The crate is heap-free: sinks live in
//! caller-owned (typically `static`) storage and the registry only holds
//! references to them.
//!
//! ```
//! use logfan::{Level, Logger, Sink, Target, Transport};
//!
//! struct Stdout;
//!
//! impl Transport for Stdout {
//!     fn write_all(&self, bytes: &[u8]) {
//!         print!("{}", String::from_utf8_lossy(bytes));
//!     }
//! }
//!
//! let stdout = Stdout;
//! let sink = Sink::new(&stdout);
//! sink.set_level(Level::Info);
//!
//! let mut logger: Logger = Logger::new();
//! logger.register(&sink);
//!
//! // Broadcast to every eligible sink.
//! logger.write(Target::All, Level::Info, format_args!("{} sinks up\n", 1));
//! // Or address one sink directly.
//! logger.write(Target::Sink(&sink), Level::Error, format_args!("oops\n"));
//! ```
//!
//! The [`log_error!`], [`log_warning!`], [`log_info!`], [`log_debug!`] and
//! [`log_verbose!`] macros prefix messages with a level tag, a timestamp
//! from the logger's tick source, and the caller's module path.
//! [`Logger::hex_dump`] renders a canonical 16-column hex+ASCII dump of a
//! memory range through the same dispatch path.
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

pub mod colors;
mod hexdump;
mod level;
mod logger;
mod macros;
mod sink;

pub use level::{Level, Target};
pub use logger::Logger;
pub use sink::{BareLock, IoTransport, Sink, SpinLock, Transport};

/// Default number of registry slots in a [`Logger`].
pub const DEFAULT_MAX_SINKS: usize = 2;

/// Default capacity of the staging buffer in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Line terminator appended by the convenience macros and the hex dump
/// renderer.
pub const EOL: &str = "\r\n";

/// Whether the tagged convenience macros produce output.
///
/// Building with the `off` feature turns them into no-ops; direct calls to
/// [`Logger::write`] and [`Logger::hex_dump`] are unaffected.
pub const ENABLED: bool = cfg!(not(feature = "off"));

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export dependencies of the convenience macros to be accessed via
// `$crate::__private`.
#[doc(hidden)]
pub mod __private {
    pub use crate::macros::{write_line, write_tagged};
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;
    use std::vec::Vec;

    use crate::Transport;

    /// Transport that records every flush it receives.
    pub struct Recorder {
        writes: Mutex<Vec<Vec<u8>>>,
    }

    impl Recorder {
        pub fn new() -> Self {
            Self {
                writes: Mutex::new(Vec::new()),
            }
        }

        pub fn count(&self) -> usize {
            self.writes.lock().unwrap().len()
        }

        pub fn writes(&self) -> Vec<Vec<u8>> {
            self.writes.lock().unwrap().clone()
        }

        pub fn concat(&self) -> String {
            let bytes: Vec<u8> = self.writes.lock().unwrap().concat();
            String::from_utf8(bytes).unwrap()
        }
    }

    impl Transport for Recorder {
        fn write_all(&self, bytes: &[u8]) {
            self.writes.lock().unwrap().push(bytes.to_vec());
        }
    }
}
