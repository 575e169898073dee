#![no_main]
//! Drives random operation sequences through a ring and its history model.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use markring::{BatchStatus, RingBuffer, model::Model};

#[derive(Debug, Arbitrary)]
enum Op {
    Write(u8),
    WriteBatch(Vec<u8>),
    Read,
    ReadInto(u8),
    Mark,
    Rewind,
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let capacity = usize::from(input.capacity) + 1;
    let mut ring = RingBuffer::new(vec![0u8; capacity]).unwrap();
    let mut model = Model::new(capacity);

    for op in input.ops {
        match op {
            Op::Write(byte) => assert_eq!(ring.write_byte(byte), model.write_byte(byte)),
            Op::WriteBatch(bytes) => {
                let expected: BatchStatus = bytes.iter().map(|&b| model.write_byte(b)).collect();
                assert_eq!(ring.write_bytes(&bytes), expected);
            }
            Op::Read => assert_eq!(ring.read_byte(), model.read_byte()),
            Op::ReadInto(len) => {
                let mut dst = vec![0; usize::from(len)];
                let copied = ring.read_into(&mut dst);
                let expected: Vec<u8> = std::iter::from_fn(|| model.read_byte())
                    .take(dst.len())
                    .collect();
                assert_eq!(&dst[..copied], &expected[..]);
            }
            Op::Mark => {
                ring.set_marker();
                model.set_marker();
            }
            Op::Rewind => {
                ring.rewind();
                model.rewind();
            }
        }

        assert_eq!(ring.cursors(), model.cursors());
        assert_eq!(ring.free_space(), model.free_space());
        assert_eq!(ring.pending_replay(), model.pending_replay());
    }
});
