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

//! The sink registry and the dispatcher.

use core::fmt;
use core::ptr;

use crate::level::{Level, Target};
use crate::sink::Sink;
use crate::{DEFAULT_BUFFER_CAPACITY, DEFAULT_MAX_SINKS};

/// Sink registry, staging buffer, and dispatcher in one object.
///
/// The logger is owned by the application's composition root and passed to
/// call sites as `&mut Logger`; exclusive access to the staging buffer is
/// therefore guaranteed by the borrow rules rather than by convention.
/// The per-sink locks still matter: they serialize transport access
/// against other preemptive contexts that share a sink.
///
/// `N` is the registry capacity, `BUF` the staging buffer capacity in
/// bytes (at least 16).  [`Logger::write`] and [`Logger::hex_dump`]
/// return nothing and report nothing, matching the no-error discipline of
/// the transports underneath.
pub struct Logger<'a, const N: usize = DEFAULT_MAX_SINKS, const BUF: usize = DEFAULT_BUFFER_CAPACITY>
{
    slots: [Option<&'a Sink<'a>>; N],
    staging: [u8; BUF],
    timestamp: Option<fn() -> u32>,
}

impl<'a, const N: usize, const BUF: usize> Logger<'a, N, BUF> {
    /// Creates a logger with an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        assert!(BUF >= 16, "staging buffer too small for the flush discipline");
        Self {
            slots: [None; N],
            staging: [0; BUF],
            timestamp: None,
        }
    }

    /// Installs the tick source the convenience macros read timestamps
    /// from.  Without one, timestamps render as `0`.
    pub fn set_timestamp_source(&mut self, source: fn() -> u32) {
        self.timestamp = Some(source);
    }

    /// Returns the current timestamp, or `0` if no tick source is set.
    #[must_use]
    pub fn timestamp(&self) -> u32 {
        self.timestamp.map_or(0, |source| source())
    }

    /// Inserts `sink` into the first empty registry slot.
    ///
    /// Silently does nothing when the registry is full (fixed-capacity
    /// policy for static embedded allocation) or when `sink` is already
    /// registered, so a sink occupies at most one slot.
    pub fn register(&mut self, sink: &'a Sink<'a>) {
        if self.slots.iter().flatten().any(|s| ptr::eq(*s, sink)) {
            return;
        }
        for slot in self.slots.iter_mut() {
            if slot.is_none() {
                *slot = Some(sink);
                return;
            }
        }
    }

    /// Clears the slot holding `sink`, matched by identity.  Silently
    /// does nothing when `sink` is not registered.
    pub fn unregister(&mut self, sink: &'a Sink<'a>) {
        for slot in self.slots.iter_mut() {
            if slot.is_some_and(|s| ptr::eq(s, sink)) {
                *slot = None;
                return;
            }
        }
    }

    /// Number of registered sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Formats `args` into the staging buffer and flushes completed lines
    /// or near-full buffers to `target`.
    ///
    /// With an empty registry this is a no-op.  For [`Target::All`], each
    /// flushed segment goes to every registered, active sink whose
    /// threshold is `>= level`; for a specific sink, the same activation
    /// and threshold test applies to it alone.  A message longer than the
    /// staging buffer arrives at the transports as multiple contiguous
    /// segments rather than being truncated.
    pub fn write(&mut self, target: Target<'_>, level: Level, args: fmt::Arguments<'_>) {
        if self.sink_count() == 0 {
            return;
        }

        self.lock_target(target);
        let (staging, slots) = self.split_staging();
        let mut writer = StagingWriter::new(staging, slots, target, level, true);
        let _ = fmt::write(&mut writer, args);
        writer.flush_staged();
        self.unlock_target(target);
    }

    // The activation flag is not part of the locking protocol: it can
    // change from another context between acquire and release, and the
    // release must cover exactly the locks that were acquired.  The
    // registry cannot change mid-dispatch (callers hold `&mut self`).
    pub(crate) fn lock_target(&self, target: Target<'_>) {
        match target {
            Target::All => {
                for sink in self.slots.iter().flatten() {
                    sink.acquire();
                }
            }
            Target::Sink(sink) => sink.acquire(),
        }
    }

    pub(crate) fn unlock_target(&self, target: Target<'_>) {
        match target {
            Target::All => {
                for sink in self.slots.iter().rev().flatten() {
                    sink.release();
                }
            }
            Target::Sink(sink) => sink.release(),
        }
    }

    pub(crate) fn split_staging(&mut self) -> (&mut [u8], &[Option<&'a Sink<'a>>]) {
        let Self { slots, staging, .. } = self;
        (&mut staging[..], &slots[..])
    }
}

impl<const N: usize, const BUF: usize> Default for Logger<'_, N, BUF> {
    fn default() -> Self {
        Self::new()
    }
}

/// Staging context for one dispatch operation: the staging buffer, its
/// write cursor, and the flush mode.  All per-dispatch state lives here,
/// never in the sinks themselves.
pub(crate) struct StagingWriter<'s, 'a, 't> {
    buf: &'s mut [u8],
    slots: &'s [Option<&'a Sink<'a>>],
    target: Target<'t>,
    level: Level,
    cursor: usize,
    /// Flush on `\n` in addition to the near-capacity flush.  The
    /// formatted write path wants it; the hex dump renderer flushes whole
    /// lines itself.
    auto_flush: bool,
}

impl<'s, 'a, 't> StagingWriter<'s, 'a, 't> {
    pub(crate) fn new(
        buf: &'s mut [u8],
        slots: &'s [Option<&'a Sink<'a>>],
        target: Target<'t>,
        level: Level,
        auto_flush: bool,
    ) -> Self {
        Self {
            buf,
            slots,
            target,
            level,
            cursor: 0,
            auto_flush,
        }
    }

    fn push(&mut self, byte: u8) {
        self.buf[self.cursor] = byte;
        self.cursor += 1;
        // Flushing no later than two bytes short of capacity keeps the
        // cursor in bounds for the next append.
        if self.cursor >= self.buf.len() - 2 || (self.auto_flush && byte == b'\n') {
            self.flush_staged();
        }
    }

    /// Hands the staged prefix to every eligible transport and resets the
    /// cursor.  No-op when nothing is staged, so empty messages cause no
    /// transport calls.
    pub(crate) fn flush_staged(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let staged = &self.buf[..self.cursor];
        match self.target {
            Target::All => {
                for sink in self.slots.iter().flatten() {
                    if sink.is_active() && sink.level() >= self.level {
                        sink.write_all(staged);
                    }
                }
            }
            Target::Sink(sink) => {
                if sink.is_active() && sink.level() >= self.level {
                    sink.write_all(staged);
                }
            }
        }
        self.cursor = 0;
    }
}

impl fmt::Write for StagingWriter<'_, '_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &byte in s.as_bytes() {
            self.push(byte);
        }
        Ok(())
    }
}
