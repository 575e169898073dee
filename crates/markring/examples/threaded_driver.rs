//! A writer thread and a polling reader thread sharing one ring.
//!
//! The writer emits one byte per millisecond into a 100-slot ring; the reader
//! polls at the same pace until the writer is finished and the ring is
//! drained. Both sides report the last byte they handled.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=markring=trace cargo run -p markring --example threaded_driver
//! ```
#![allow(missing_docs)]

use std::{
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::Duration,
};

use markring::StdRingBuffer;
use tracing::info;
use tracing_subscriber::EnvFilter;

const REGION: usize = 100;
const BYTES: usize = 100;
const TICK: Duration = Duration::from_millis(1);

fn main() -> Result<(), markring::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let ring: StdRingBuffer<[u8; REGION]> = StdRingBuffer::new([0; REGION])?;
    let still_writing = AtomicBool::new(true);

    thread::scope(|s| {
        s.spawn(|| {
            let mut last = None;
            let mut dropped = 0usize;
            for i in 0..BYTES {
                #[allow(clippy::cast_possible_truncation)]
                let byte = (i % 256) as u8;
                if ring.write_byte(byte).is_overwrite() {
                    dropped += 1;
                }
                last = Some(byte);
                thread::sleep(TICK);
            }
            info!(last_written = ?last, dropped, "writer finished");
            still_writing.store(false, Ordering::Release);
        });

        s.spawn(|| {
            let mut last = None;
            let mut received = 0usize;
            loop {
                let writing = still_writing.load(Ordering::Acquire);
                if let Some(byte) = ring.read_byte() {
                    last = Some(byte);
                    received += 1;
                } else if !writing {
                    break;
                }
                thread::sleep(TICK);
            }
            info!(last_read = ?last, received, "reader finished");
        });
    });

    Ok(())
}
