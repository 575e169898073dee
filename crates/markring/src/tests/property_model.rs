use alloc::{vec, vec::Vec};

use quickcheck::{Arbitrary, Gen, QuickCheck};
use quickcheck_macros::quickcheck;

use crate::{BatchStatus, RingBuffer, model::Model};

#[derive(Debug, Clone)]
enum Op {
    Write(u8),
    WriteBatch(Vec<u8>),
    Read,
    ReadInto(u8),
    Mark,
    Rewind,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0u8, 1, 2, 3, 4, 5]).copied().unwrap_or_default() {
            0 => Op::Write(u8::arbitrary(g)),
            1 => Op::WriteBatch(Vec::arbitrary(g)),
            2 => Op::Read,
            3 => Op::ReadInto(u8::arbitrary(g) % 8),
            4 => Op::Mark,
            _ => Op::Rewind,
        }
    }
}

fn apply<S>(ring: &mut RingBuffer<S>, model: &mut Model, op: Op) -> bool
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    match op {
        Op::Write(byte) => ring.write_byte(byte) == model.write_byte(byte),
        Op::WriteBatch(bytes) => {
            let expected: BatchStatus =
                bytes.iter().map(|&byte| model.write_byte(byte)).collect();
            ring.write_bytes(&bytes) == expected
        }
        Op::Read => ring.read_byte() == model.read_byte(),
        Op::ReadInto(len) => {
            let len = usize::from(len);
            let mut got = vec![0; len];
            let copied = ring.read_into(&mut got);
            let expected: Vec<u8> = core::iter::from_fn(|| model.read_byte())
                .take(len)
                .collect();
            got[..copied] == expected[..]
        }
        Op::Mark => {
            ring.set_marker();
            model.set_marker();
            true
        }
        Op::Rewind => {
            ring.rewind();
            model.rewind();
            true
        }
    }
}

/// Property: every operation sequence leaves the ring agreeing with a model
/// that keeps the full write history, so a replay after rewind can only
/// ever return bytes that are still physically in storage.
#[test]
fn ring_tracks_history_model_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(capacity: u8, ops: Vec<Op>) -> bool {
        let capacity = usize::from(capacity % 16) + 1;
        let mut ring = RingBuffer::new(vec![0u8; capacity]).unwrap();
        let mut model = Model::new(capacity);

        ops.into_iter().all(|op| {
            apply(&mut ring, &mut model, op)
                && ring.cursors() == model.cursors()
                && ring.is_empty() == model.is_empty()
                && ring.len() == model.len()
                && ring.free_space() == model.free_space()
                && ring.pending_replay() == model.pending_replay()
        })
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(u8, Vec<Op>) -> bool);
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn short_writes_read_back_in_order(bytes: Vec<u8>) -> bool {
    let mut ring = RingBuffer::new(vec![0u8; bytes.len() + 1]).unwrap();
    let status = ring.write_bytes(&bytes);

    status.code() == 0
        && ring.is_empty() == bytes.is_empty()
        && ring.free_space() == 0
        && ring.by_ref().collect::<Vec<u8>>() == bytes
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn one_extra_byte_loses_exactly_the_first(bytes: Vec<u8>) -> bool {
    let Some((_, kept)) = bytes.split_first() else {
        return true;
    };
    let mut ring = RingBuffer::new(vec![0u8; bytes.len()]).unwrap();
    let status = ring.write_bytes(&bytes);

    status.overwritten() == 1 && ring.by_ref().collect::<Vec<u8>>() == kept
}
