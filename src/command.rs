//! Side-effect commands produced by indicator transitions.

use crate::state::BoardState;
use crate::time::TimeDuration;
use heapless::Vec;

/// Upper bound on effects emitted by a single transition.
pub const MAX_EFFECTS: usize = 4;

/// A single side effect to apply to the LED or the timer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect<D: TimeDuration> {
    /// Turn the LED on.
    LedOn,
    /// Turn the LED off.
    LedOff,
    /// Arm the timer slot, replacing any pending fire.
    Schedule(D),
    /// Disarm the timer slot.
    Cancel,
}

/// Effects of one transition, in the order they must be applied.
pub type Effects<D> = Vec<Effect<D>, MAX_EFFECTS>;

/// The outcome of feeding one trigger to a [`BoardState`].
#[derive(Debug, Clone)]
pub struct Transition<D: TimeDuration> {
    /// State after the trigger.
    pub state: BoardState,
    /// Commands to apply, in order.
    pub effects: Effects<D>,
}

impl<D: TimeDuration> Transition<D> {
    /// A transition to `state` with no effects yet.
    pub fn to(state: BoardState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    /// Appends an effect.
    ///
    /// A transition never emits more than [`MAX_EFFECTS`] effects. Overflow
    /// panics in debug builds and drops the effect in release builds.
    pub(crate) fn push(&mut self, effect: Effect<D>) {
        let pushed = self.effects.push(effect).is_ok();
        debug_assert!(pushed, "transition exceeded MAX_EFFECTS");
    }

    /// Returns true if the transition changes nothing.
    pub fn is_noop(&self, from: BoardState) -> bool {
        self.state == from && self.effects.is_empty()
    }
}
