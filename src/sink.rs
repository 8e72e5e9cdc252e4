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

//! Sinks and the capabilities they are composed from.

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::Level;

/// Character-output capability of a sink.
///
/// Implementations perform the actual I/O (write to a UART, append to a
/// memory buffer, ...) and never fail observably: the logger hands bytes
/// over and moves on.  `write_all` is called with a contiguous prefix of
/// the staged message and may be called several times per dispatch when a
/// long message is flushed in segments.
pub trait Transport: Sync {
    /// Writes all of `bytes` to the underlying output.
    fn write_all(&self, bytes: &[u8]);
}

/// Minimal mutual-exclusion capability guarding a sink shared across
/// preemptive execution contexts.
///
/// `acquire` blocks until the lock is held; `release` hands it back.
/// Sinks without a lock are treated as lock-free and acquire/release are
/// no-ops for them.
pub trait BareLock: Sync {
    /// Blocks until the lock is held.
    fn acquire(&self);
    /// Releases the lock.
    fn release(&self);
}

/// Test-and-set spin lock, the default [`BareLock`] implementation.
pub struct SpinLock {
    locked: AtomicBool,
}

impl SpinLock {
    /// Creates a new, unlocked `SpinLock`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
        }
    }
}

impl Default for SpinLock {
    fn default() -> Self {
        Self::new()
    }
}

impl BareLock for SpinLock {
    fn acquire(&self) {
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            core::hint::spin_loop();
        }
    }

    fn release(&self) {
        self.locked.store(false, Ordering::Release);
    }
}

/// Adapts any [`embedded_io::Write`] into a [`Transport`].
///
/// The writer is kept behind a [`critical_section::Mutex`] so a single
/// adapter can back a sink shared between thread and interrupt context.
/// Write errors are swallowed, preserving the fire-and-forget transport
/// contract.
pub struct IoTransport<W> {
    inner: critical_section::Mutex<RefCell<W>>,
}

impl<W: embedded_io::Write> IoTransport<W> {
    /// Wraps `writer` in a transport.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            inner: critical_section::Mutex::new(RefCell::new(writer)),
        }
    }

    /// Consumes the transport and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner.into_inner().into_inner()
    }
}

impl<W: embedded_io::Write + Send> Transport for IoTransport<W> {
    fn write_all(&self, bytes: &[u8]) {
        critical_section::with(|cs| {
            let _ = self.inner.borrow_ref_mut(cs).write_all(bytes);
        });
    }
}

/// One registered output destination.
///
/// A sink bundles an activation flag, a severity threshold, a transport,
/// and an optional lock.  The flag and threshold are atomics so a sink can
/// be reconfigured through the shared references the registry hands out;
/// the sink's storage itself belongs to the caller (typically a `static`).
///
/// New sinks start active with a threshold of [`Level::All`].
pub struct Sink<'a> {
    active: AtomicBool,
    threshold: AtomicU8,
    transport: &'a dyn Transport,
    lock: Option<&'a dyn BareLock>,
}

impl<'a> Sink<'a> {
    /// Creates a lock-free sink writing through `transport`.
    #[must_use]
    pub const fn new(transport: &'a dyn Transport) -> Self {
        Self {
            active: AtomicBool::new(true),
            threshold: AtomicU8::new(Level::All as u8),
            transport,
            lock: None,
        }
    }

    /// Creates a sink whose dispatches are serialized by `lock`.
    #[must_use]
    pub const fn with_lock(transport: &'a dyn Transport, lock: &'a dyn BareLock) -> Self {
        Self {
            active: AtomicBool::new(true),
            threshold: AtomicU8::new(Level::All as u8),
            transport,
            lock: Some(lock),
        }
    }

    /// Sets the severity threshold.
    pub fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    /// Returns the current severity threshold.
    #[must_use]
    pub fn level(&self) -> Level {
        Level::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Activates or deactivates the sink.  Inactive sinks receive no
    /// output; a registered sink's lock keeps participating in dispatch
    /// locking regardless of this flag, so the flag may be toggled from
    /// another context at any time.
    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }

    /// Returns whether the sink is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Acquires the sink's lock, if it has one.
    pub fn acquire(&self) {
        if let Some(lock) = self.lock {
            lock.acquire();
        }
    }

    /// Releases the sink's lock, if it has one.
    pub fn release(&self) {
        if let Some(lock) = self.lock {
            lock.release();
        }
    }

    pub(crate) fn write_all(&self, bytes: &[u8]) {
        self.transport.write_all(bytes);
    }
}
