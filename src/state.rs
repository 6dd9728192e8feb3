//! Board state and the pure transition function of the status LED.
//!
//! The LED arbitrates three concerns with a fixed priority: the boot flash,
//! then the pairing blink, then the Caps-Lock indicator. Priority is enforced
//! only by ordering guards on [`BoardState`]: a trigger belonging to a lower
//! priority concern is a no-op until every higher one has finished.

use crate::command::{Effect, Transition};
use crate::config::IndicatorConfig;
use crate::time::TimeDuration;
use crate::types::HidIndicators;

/// Phase of the status LED. Variants are ordered by boot progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardState {
    /// Waiting for the first boot tick. LED off.
    Booting1,
    /// Boot flash in progress. LED on.
    Booting2,
    /// Pairing blink, off phase.
    Pairing1,
    /// Pairing blink, on phase.
    Pairing2,
    /// LED mirrors the Caps-Lock indicator.
    Ready,
}

/// Something that can move the board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    /// The delayed-work slot fired.
    TimerFired,
    /// The active BLE profile or its pairing status changed.
    PairingChanged,
    /// The host changed the HID indicators.
    IndicatorsChanged,
}

/// Host status read right before a transition is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Inputs {
    /// The active BLE profile is open and waiting for a pairing.
    pub profile_open: bool,
    /// Indicator bits of the active profile.
    pub indicators: HidIndicators,
}

impl BoardState {
    pub fn is_booting(self) -> bool {
        self < BoardState::Pairing1
    }

    pub fn is_ready(self) -> bool {
        self == BoardState::Ready
    }

    /// Decides the next state and the effects for `trigger`.
    ///
    /// Pure: nothing is applied, the caller owns the LED and the timer slot.
    pub fn transition<D: TimeDuration>(
        self,
        trigger: Trigger,
        inputs: Inputs,
        config: &IndicatorConfig<D>,
    ) -> Transition<D> {
        match trigger {
            Trigger::TimerFired => self.on_timer(inputs, config),
            Trigger::PairingChanged => self.on_pairing(inputs, config),
            Trigger::IndicatorsChanged => self.on_indicators(inputs, config),
        }
    }

    fn on_timer<D: TimeDuration>(
        self,
        inputs: Inputs,
        config: &IndicatorConfig<D>,
    ) -> Transition<D> {
        let blink = Effect::Schedule(config.blink_interval);

        match self {
            BoardState::Booting1 => {
                let mut t = Transition::to(BoardState::Booting2);
                t.push(Effect::LedOn);
                t.push(blink);
                t
            }
            BoardState::Booting2 => {
                let mut t = Transition::to(BoardState::Ready);
                t.push(Effect::LedOff);
                if config.deferred_ready_check {
                    t.push(blink);
                } else {
                    evaluate_pairing(&mut t, inputs, config);
                }
                t
            }
            BoardState::Pairing1 => {
                let mut t = Transition::to(BoardState::Pairing2);
                t.push(Effect::LedOn);
                t.push(blink);
                t
            }
            BoardState::Pairing2 => {
                let mut t = Transition::to(BoardState::Pairing1);
                t.push(Effect::LedOff);
                t.push(blink);
                t
            }
            BoardState::Ready => self.on_pairing(inputs, config),
        }
    }

    fn on_pairing<D: TimeDuration>(
        self,
        inputs: Inputs,
        config: &IndicatorConfig<D>,
    ) -> Transition<D> {
        let mut t = Transition::to(self);
        if !self.is_booting() {
            evaluate_pairing(&mut t, inputs, config);
        }
        t
    }

    fn on_indicators<D: TimeDuration>(
        self,
        inputs: Inputs,
        config: &IndicatorConfig<D>,
    ) -> Transition<D> {
        let mut t = Transition::to(self);
        if self.is_ready() {
            show_indicators(&mut t, inputs, config);
        }
        t
    }
}

// An open profile (re)starts the blink from its off phase; otherwise the
// blink stops and the LED falls back to the lock indicator.
fn evaluate_pairing<D: TimeDuration>(
    t: &mut Transition<D>,
    inputs: Inputs,
    config: &IndicatorConfig<D>,
) {
    if inputs.profile_open {
        t.state = BoardState::Pairing1;
        t.push(Effect::LedOff);
        t.push(Effect::Schedule(config.blink_interval));
    } else {
        t.push(Effect::Cancel);
        t.state = BoardState::Ready;
        show_indicators(t, inputs, config);
    }
}

fn show_indicators<D: TimeDuration>(
    t: &mut Transition<D>,
    inputs: Inputs,
    config: &IndicatorConfig<D>,
) {
    if inputs.indicators.contains(config.caps_lock_mask) {
        t.push(Effect::LedOn);
    } else {
        t.push(Effect::LedOff);
    }
}
