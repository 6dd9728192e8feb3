//! Status LED indicator with boot, pairing and Caps-Lock phases.
//!
//! Provides [`LedIndicator`], which owns the LED and the delayed-work slot and
//! applies the effects decided by [`BoardState::transition`]. Also defines the
//! [`LedDriver`] and [`HostStatus`] traits for hardware and host abstraction.

use crate::command::Effect;
use crate::config::IndicatorConfig;
use crate::event::{Event, EventResponse, Listener};
use crate::state::{BoardState, Inputs, Trigger};
use crate::time::{DelayedWork, TimeDuration};
use crate::types::{Error, HidIndicators};

/// Trait for abstracting a single on/off LED.
///
/// Implement this for your LED hardware (GPIO, PWM controller, LED driver IC).
/// Handle hardware errors internally: switching the LED cannot fail.
pub trait LedDriver {
    /// Returns true once the device can be driven.
    fn is_ready(&self) -> bool;

    /// Turns the given channel on.
    fn on(&mut self, channel: u8);

    /// Turns the given channel off.
    fn off(&mut self, channel: u8);
}

/// Read-only queries into the host's BLE and HID state.
pub trait HostStatus {
    /// Returns true if the active BLE profile is open, i.e. waiting for a new
    /// device to pair.
    fn active_profile_is_open(&self) -> bool;

    /// Returns the indicator bitmask of the active keyboard profile.
    fn active_indicators(&self) -> HidIndicators;
}

/// Drives one status LED through the boot flash, the pairing blink and the
/// Caps-Lock indicator.
///
/// All handlers take `&mut self` and must be called from a single serialized
/// context, e.g. the work queue that also runs the timer callback. On a
/// multi-threaded dispatcher wrap the indicator in a mutex.
///
/// # Type Parameters
/// * `'s` - Lifetime of the host status reference
/// * `D` - Duration type of the timer slot
/// * `L` - LED implementation type
/// * `W` - Delayed-work implementation type
/// * `S` - Host status implementation type
pub struct LedIndicator<'s, D, L, W, S>
where
    D: TimeDuration,
    L: LedDriver,
    W: DelayedWork<D>,
    S: HostStatus,
{
    led: L,
    timer: W,
    status: &'s S,
    state: BoardState,
    config: IndicatorConfig<D>,
}

impl<'s, D, L, W, S> LedIndicator<'s, D, L, W, S>
where
    D: TimeDuration,
    L: LedDriver,
    W: DelayedWork<D>,
    S: HostStatus,
{
    /// Initializes the indicator in `Booting1` with the LED off and the first
    /// boot tick scheduled after `config.initial_delay`.
    ///
    /// # Errors
    /// * `Error::DeviceNotReady` - the LED device is not ready
    pub fn new(
        led: L,
        timer: W,
        status: &'s S,
        config: IndicatorConfig<D>,
    ) -> Result<Self, Error> {
        if !led.is_ready() {
            error!("Caps Lock device is not ready");
            return Err(Error::DeviceNotReady);
        }

        let mut indicator = Self {
            led,
            timer,
            status,
            state: BoardState::Booting1,
            config,
        };

        indicator.led.off(indicator.config.led_channel);
        indicator.timer.schedule(indicator.config.initial_delay);

        Ok(indicator)
    }

    /// Feeds one trigger through the state machine and applies its effects.
    pub fn handle(&mut self, trigger: Trigger) {
        let inputs = Inputs {
            profile_open: self.status.active_profile_is_open(),
            indicators: self.status.active_indicators(),
        };
        let transition = self.state.transition(trigger, inputs, &self.config);

        if transition.state != self.state {
            debug!("Indicator: {} -> {}", self.state, transition.state);
            self.state = transition.state;
        }

        for effect in transition.effects.iter() {
            self.apply(*effect);
        }
    }

    /// Called by the host when the delayed-work slot fires.
    pub fn on_timer(&mut self) {
        self.handle(Trigger::TimerFired);
    }

    /// Called when the active BLE profile or its pairing status changes.
    ///
    /// Ignored until the boot flash has finished.
    pub fn on_pairing_changed(&mut self) -> EventResponse {
        self.handle(Trigger::PairingChanged);
        EventResponse::Bubble
    }

    /// Called when the host changes the HID indicators.
    ///
    /// Ignored until the board is ready. Always bubbles.
    pub fn on_indicators_changed(&mut self) -> EventResponse {
        self.handle(Trigger::IndicatorsChanged);
        EventResponse::Bubble
    }

    fn apply(&mut self, effect: Effect<D>) {
        match effect {
            Effect::LedOn => self.led.on(self.config.led_channel),
            Effect::LedOff => self.led.off(self.config.led_channel),
            Effect::Schedule(delay) => {
                trace!("Next indicator tick in {=u64} ms", delay.as_millis());
                self.timer.schedule(delay);
            }
            Effect::Cancel => self.timer.cancel(),
        }
    }

    /// Returns the current board state.
    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn config(&self) -> &IndicatorConfig<D> {
        &self.config
    }

    /// Returns a reference to the LED driver.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Returns a reference to the delayed-work slot.
    pub fn timer(&self) -> &W {
        &self.timer
    }
}

impl<'s, D, L, W, S> Listener for LedIndicator<'s, D, L, W, S>
where
    D: TimeDuration,
    L: LedDriver,
    W: DelayedWork<D>,
    S: HostStatus,
{
    // The indicator reads the active profile's indicators rather than the
    // payload, which may belong to another profile.
    fn on_event(&mut self, event: &Event) -> Result<EventResponse, Error> {
        let response = match event {
            Event::BleActiveProfileChanged => self.on_pairing_changed(),
            Event::HidIndicatorsChanged(_) => self.on_indicators_changed(),
            Event::ActivityStateChanged(_) => EventResponse::Bubble,
        };
        Ok(response)
    }
}
