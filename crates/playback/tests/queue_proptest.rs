//! Property-based tests for the note queue and the scheduler.
//! Verifies invariants hold for ALL operation sequences, not just fixed examples.
#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

use std::collections::VecDeque;

use platform::mocks::MockToneChannel;
use platform::{Channel, ChannelPair, Frequency, Target, Ticks};
use playback::{Instrument, MusicPlayer, Note, NotePair, NoteQueue, Voice};
use proptest::prelude::*;

const CAP: usize = 8;

#[derive(Debug, Clone)]
enum Op {
    Push(u32),
    Pull,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u32..1_000).prop_map(Op::Push),
        3 => Just(Op::Pull),
        1 => Just(Op::Clear),
    ]
}

fn pair(n: u32) -> NotePair {
    NotePair {
        duration_a: Ticks::new(n),
        frequency_a: Frequency::new(440),
        duration_b: Ticks::new(n + 1),
        frequency_b: Frequency::REST,
    }
}

fn instrument() -> impl Strategy<Value = Instrument> {
    prop_oneof![
        Just(Instrument::Hat),
        Just(Instrument::Keys),
        Just(Instrument::Kick),
        Just(Instrument::None),
        Just(Instrument::Rest),
        Just(Instrument::Snare),
    ]
}

fn voice() -> impl Strategy<Value = Voice> {
    (instrument(), 0u32..5_000, 0u32..20_000).prop_map(|(instrument, ms, hz)| Voice {
        instrument,
        duration: Ticks::new(ms),
        frequency: Frequency::new(hz),
    })
}

proptest! {
    /// The queue behaves like a bounded FIFO and its flags never contradict.
    #[test]
    fn queue_matches_bounded_fifo_model(ops in proptest::collection::vec(op(), 0..200)) {
        let mut q: NoteQueue<CAP> = NoteQueue::new();
        let mut model: VecDeque<NotePair> = VecDeque::new();
        for op in ops {
            match op {
                Op::Push(n) => {
                    let accepted = q.push(pair(n));
                    prop_assert_eq!(accepted, model.len() < CAP);
                    if accepted {
                        model.push_back(pair(n));
                    }
                }
                Op::Pull => prop_assert_eq!(q.pull(), model.pop_front()),
                Op::Clear => {
                    q.clear();
                    model.clear();
                }
            }
            prop_assert!(!(q.is_empty() && q.is_full()));
            prop_assert_eq!(q.is_empty(), model.is_empty());
            prop_assert_eq!(q.is_full(), model.len() == CAP);
            prop_assert_eq!(q.len(), model.len());
        }
    }

    /// Normalizing a note already made of `Keys` voices changes nothing.
    #[test]
    fn to_keys_is_idempotent(main in voice(), dual in voice()) {
        let note = Note::new(main, dual);
        let once = note.to_keys();
        prop_assert_eq!(once.to_keys(), once);
        prop_assert_eq!(once.to_pair(), note.to_pair());
    }

    /// Every queued pair plays for exactly the length of its longer voice.
    #[test]
    fn playback_length_is_sum_of_longest_voices(
        lengths in proptest::collection::vec((0u32..40, 0u32..40), 1..16)
    ) {
        let mut player: MusicPlayer<MockToneChannel, 16> = MusicPlayer::new(ChannelPair::new(
            MockToneChannel::new(),
            MockToneChannel::new(),
        ));
        for &(a, b) in &lengths {
            prop_assert!(player.add_note(Note::new(
                Voice::keys(Ticks::new(a), Frequency::new(440)),
                Voice::keys(Ticks::new(b), Frequency::new(220)),
            )));
        }
        let expected: u32 = lengths.iter().map(|&(a, b)| a.max(b)).sum();

        player.play();
        let mut now = 0u32;
        while player.is_busy(Target::All) {
            prop_assert!(now <= expected, "still busy after {} ticks", now);
            now += 1;
            let channels = player.scheduler_mut().channels_mut();
            let fired_a = channels.channel_mut(Channel::A).tick();
            let fired_b = channels.channel_mut(Channel::B).tick();
            if fired_a {
                player.on_expiry(Channel::A);
            }
            if fired_b {
                player.on_expiry(Channel::B);
            }
        }
        prop_assert_eq!(now, expected);
        prop_assert!(player.queue().is_empty());
    }
}
