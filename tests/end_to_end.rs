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

//! End-to-end scenarios exercising the public surface the way an
//! application's composition root would.

use std::sync::Mutex;

use logfan::{Level, Logger, Sink, SpinLock, Target, Transport};
use pretty_assertions::assert_eq;

/// Transport that records every flush it receives.
struct Recorder {
    writes: Mutex<Vec<Vec<u8>>>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
        }
    }

    fn count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    fn writes(&self) -> Vec<Vec<u8>> {
        self.writes.lock().unwrap().clone()
    }

    fn concat(&self) -> String {
        String::from_utf8(self.writes.lock().unwrap().concat()).unwrap()
    }
}

impl Transport for Recorder {
    fn write_all(&self, bytes: &[u8]) {
        self.writes.lock().unwrap().push(bytes.to_vec());
    }
}

#[test]
fn info_sink_drops_debug_and_renders_errors() {
    let recorder = Recorder::new();
    let sink = Sink::new(&recorder);
    sink.set_level(Level::Info);

    let mut logger: Logger = Logger::new();
    logger.register(&sink);
    logger.set_timestamp_source(|| 99);

    logfan::log_debug!(&mut logger, "state {}", 3);
    assert_eq!(recorder.count(), 0);

    logfan::log_error!(&mut logger, "boom");
    assert_eq!(recorder.count(), 1);
    let prefix = if cfg!(feature = "color") {
        "\x1b[31mE(99) end_to_end:\x1b[39m"
    } else {
        "E(99) end_to_end:"
    };
    assert_eq!(recorder.concat(), format!("{prefix} boom\r\n"));
}

#[test]
fn one_byte_dump_at_unaligned_address() {
    let recorder = Recorder::new();
    let sink = Sink::new(&recorder);

    let mut logger: Logger = Logger::new();
    logger.register(&sink);
    logger.hex_dump_at(Target::All, Level::All, 0x2000_0005, b"A");

    let writes = recorder.writes();
    assert_eq!(writes.len(), 2);

    let addr = |text: &str| {
        if cfg!(feature = "color") {
            format!("\x1b[31m{text}\x1b[39m")
        } else {
            text.to_string()
        }
    };

    let header = String::from_utf8(writes[0].clone()).unwrap();
    assert_eq!(
        header,
        format!(
            "memory of 0x20000005, size: 1:\r\n{}\r\n",
            addr("    Offset: 00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F")
        )
    );

    let row = String::from_utf8(writes[1].clone()).unwrap();
    assert_eq!(
        row,
        format!(
            "{}{}41 {}| {}A{} |\r\n",
            addr("0x20000000: "),
            "   ".repeat(5),
            "   ".repeat(10),
            " ".repeat(5),
            " ".repeat(10),
        )
    );
}

#[test]
fn broadcast_respects_each_sink_threshold() {
    let recorder_err = Recorder::new();
    let recorder_verbose = Recorder::new();
    let sink_err = Sink::new(&recorder_err);
    let sink_verbose = Sink::new(&recorder_verbose);
    sink_err.set_level(Level::Error);
    sink_verbose.set_level(Level::Verbose);

    let mut logger: Logger = Logger::new();
    logger.register(&sink_err);
    logger.register(&sink_verbose);

    logfan::log_warning!(&mut logger, "weather balloon");
    assert_eq!(recorder_err.count(), 0);
    assert_eq!(recorder_verbose.count(), 1);
}

#[test]
fn locked_sink_round_trips_through_its_lock() {
    let lock = SpinLock::new();
    let recorder = Recorder::new();
    let sink = Sink::with_lock(&recorder, &lock);

    let mut logger: Logger = Logger::new();
    logger.register(&sink);

    // Two dispatches: if a release were ever skipped the second acquire
    // would spin forever.
    logfan::log_info!(&mut logger, "first");
    logfan::log_info!(&mut logger, "second");
    assert_eq!(recorder.count(), 2);
}

#[test]
fn unregistered_logger_stays_silent() {
    let recorder = Recorder::new();
    let sink = Sink::new(&recorder);

    let mut logger: Logger = Logger::new();
    logfan::log_error!(&mut logger, "into the void");
    logger.write(Target::Sink(&sink), Level::Error, format_args!("direct\n"));
    assert_eq!(recorder.count(), 0);
}

#[test]
fn hex_dump_all_macro_reaches_only_accept_all_sinks() {
    let recorder_all = Recorder::new();
    let recorder_info = Recorder::new();
    let sink_all = Sink::new(&recorder_all);
    let sink_info = Sink::new(&recorder_info);
    sink_info.set_level(Level::Info);

    let mut logger: Logger = Logger::new();
    logger.register(&sink_all);
    logger.register(&sink_info);

    logfan::log_hex_dump_all!(&mut logger, &[0xde, 0xad, 0xbe, 0xef]);
    assert!(recorder_all.count() >= 2);
    assert_eq!(recorder_info.count(), 0);
}

#[test]
fn println_reaches_every_sink_and_appends_the_terminator() {
    let recorder_a = Recorder::new();
    let recorder_b = Recorder::new();
    let sink_a = Sink::new(&recorder_a);
    let sink_b = Sink::new(&recorder_b);
    sink_a.set_level(Level::None);
    sink_b.set_level(Level::Error);

    let mut logger: Logger = Logger::new();
    logger.register(&sink_a);
    logger.register(&sink_b);

    logfan::log_println!(&mut logger, "version {}", logfan::VERSION);
    let expected = format!("version {}\r\n", logfan::VERSION);
    assert_eq!(recorder_a.concat(), expected);
    assert_eq!(recorder_b.concat(), expected);
}
