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

//! Canonical 16-column hex+ASCII memory dump, rendered through the
//! dispatcher's staging buffer and flush path.

use core::fmt::Write as _;
use core::fmt::write;

use crate::EOL;
use crate::level::{Level, Target};
use crate::logger::{Logger, StagingWriter};

/// Column legend emitted above every dump.
const LEGEND: &str = if cfg!(feature = "color") {
    "\x1b[31m    Offset: 00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F\x1b[39m"
} else {
    "    Offset: 00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F"
};

impl<'a, const N: usize, const BUF: usize> Logger<'a, N, BUF> {
    /// Dumps `data` as 16-byte rows of hex and ASCII, labelling rows with
    /// the slice's own memory address.
    pub fn hex_dump(&mut self, target: Target<'_>, level: Level, data: &[u8]) {
        self.hex_dump_at(target, level, data.as_ptr() as usize, data);
    }

    /// Like [`Logger::hex_dump`], but rows are labelled as if `data`
    /// started at address `base` — useful when dumping a copy of memory
    /// that lives elsewhere (a flash page, a peripheral snapshot).
    ///
    /// A header naming `base` and the byte length flushes first, then one
    /// flush per row.  The row range is widened to whole 16-byte lines;
    /// columns outside `base..base + data.len()` render as blanks so every
    /// row keeps the same shape.  Empty `data` or an empty registry
    /// produces no output at all, and a specific target below `level` is
    /// skipped outright (the broadcast case leaves filtering to the
    /// per-sink check at flush time).
    pub fn hex_dump_at(&mut self, target: Target<'_>, level: Level, base: usize, data: &[u8]) {
        if data.is_empty() || self.sink_count() == 0 {
            return;
        }
        if let Target::Sink(sink) = target
            && sink.level() < level
        {
            return;
        }

        self.lock_target(target);
        let (staging, slots) = self.split_staging();
        let mut writer = StagingWriter::new(staging, slots, target, level, false);

        let _ = write(
            &mut writer,
            format_args!("memory of 0x{base:08x}, size: {}:{EOL}", data.len()),
        );
        let _ = writer.write_str(LEGEND);
        let _ = writer.write_str(EOL);
        writer.flush_staged();

        // Row count is derived from the length so the arithmetic stays in
        // bounds even when the range ends at the top of the address space.
        let first = base & !0xf;
        let rows = (base - first + data.len()).next_multiple_of(16) / 16;
        for index in 0..rows {
            let row = first + index * 16;
            if cfg!(feature = "color") {
                let _ = write(
                    &mut writer,
                    format_args!("\x1b[31m0x{row:08x}: \x1b[39m"),
                );
            } else {
                let _ = write(&mut writer, format_args!("0x{row:08x}: "));
            }
            for column in row..=row + 15 {
                match column.checked_sub(base).and_then(|i| data.get(i)) {
                    Some(byte) => {
                        let _ = write(&mut writer, format_args!("{byte:02x} "));
                    }
                    None => {
                        let _ = writer.write_str("   ");
                    }
                }
            }
            let _ = writer.write_str("| ");
            for column in row..=row + 15 {
                match column.checked_sub(base).and_then(|i| data.get(i)) {
                    Some(&byte) if (32..=126).contains(&byte) => {
                        let _ = write(&mut writer, format_args!("{}", byte as char));
                    }
                    Some(_) => {
                        let _ = writer.write_str(".");
                    }
                    None => {
                        let _ = writer.write_str(" ");
                    }
                }
            }
            let _ = writer.write_str(" |");
            let _ = writer.write_str(EOL);
            writer.flush_staged();
        }

        self.unlock_target(target);
    }
}
