#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system mapping world events to fire-and-forget sound cues.

use warehouse_core::Event;

/// Distinct audio cues the presentation layer may render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// The player stepped onto an empty cell.
    Step,
    /// The player pushed a box.
    Push,
    /// Every box reached a goal slot.
    Victory,
    /// The session rewound one move.
    Undo,
    /// A move was rejected.
    Blocked,
}

/// Pure sound system that derives cues from the event stream.
///
/// Cues are advisory: the engine never waits on their delivery, and an
/// adapter without an audio device may drop them freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sound;

impl Sound {
    /// Creates a new sound system instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Consumes world events and appends the cues they imply, in order.
    pub fn handle(&self, events: &[Event], out: &mut Vec<SoundCue>) {
        for event in events {
            match event {
                Event::PlayerMoved { pushed: true, .. } => out.push(SoundCue::Push),
                Event::PlayerMoved { pushed: false, .. } => out.push(SoundCue::Step),
                Event::LevelCompleted { .. } => out.push(SoundCue::Victory),
                Event::MoveUndone { .. } => out.push(SoundCue::Undo),
                Event::MoveRejected { .. } => out.push(SoundCue::Blocked),
                _ => {}
            }
        }
    }
}
