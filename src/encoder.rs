//! Rotary-encoder pull-up power gating.
//!
//! Provides [`EncoderPowerGate`], which removes the pull-up resistors of every
//! registered encoder when the keyboard goes to sleep and restores them when it
//! becomes active again. Also defines the [`EncoderPin`] trait for hardware
//! abstraction.

use crate::config::EncoderSleepConfig;
use crate::event::{Event, EventResponse, Listener};
use crate::types::{ActivityState, Error, PinId, PinMode};
use heapless::Vec;

/// Trait for abstracting one quadrature input pin of an encoder.
///
/// Implement this for your GPIO driver to let the gate reconfigure the pin's
/// bias at runtime.
pub trait EncoderPin {
    /// Driver error returned by [`configure`](EncoderPin::configure).
    type Error;

    /// Applies an input configuration to the pin.
    fn configure(&mut self, mode: PinMode) -> Result<(), Self::Error>;

    /// Reads the current logic level of the pin.
    fn is_high(&mut self) -> bool;
}

/// The two quadrature pins of one physical encoder.
#[derive(Debug)]
pub struct Encoder<P: EncoderPin> {
    pub a: P,
    pub b: P,
}

impl<P: EncoderPin> Encoder<P> {
    pub fn new(a: P, b: P) -> Self {
        Self { a, b }
    }

    /// Returns the pin for the given channel.
    pub fn pin(&self, id: PinId) -> &P {
        match id {
            PinId::A => &self.a,
            PinId::B => &self.b,
        }
    }
}

/// Enables or disables encoder pull-ups on activity-state changes.
///
/// The encoder list is filled once at startup and is not changed afterwards.
/// Apart from that the gate is stateless: each activity state is translated
/// directly into pin reconfigurations.
///
/// # Type Parameters
/// * `P` - Encoder pin implementation type
/// * `MAX_ENCODERS` - Maximum number of encoders the gate can hold
pub struct EncoderPowerGate<P: EncoderPin, const MAX_ENCODERS: usize> {
    encoders: Vec<Encoder<P>, MAX_ENCODERS>,
    config: EncoderSleepConfig,
}

impl<P: EncoderPin, const MAX_ENCODERS: usize> EncoderPowerGate<P, MAX_ENCODERS> {
    /// Creates a gate with no encoders registered.
    pub fn new(config: EncoderSleepConfig) -> Self {
        Self {
            encoders: Vec::new(),
            config,
        }
    }

    /// Registers an encoder.
    ///
    /// # Errors
    /// * `Error::CapacityExceeded` - `MAX_ENCODERS` encoders are already registered
    pub fn add(&mut self, encoder: Encoder<P>) -> Result<(), Error> {
        self.encoders
            .push(encoder)
            .map_err(|_| Error::CapacityExceeded)
    }

    /// Returns the registered encoders in registration order.
    pub fn encoders(&self) -> &[Encoder<P>] {
        &self.encoders
    }

    pub fn config(&self) -> &EncoderSleepConfig {
        &self.config
    }

    /// Applies the pin configuration for a raw activity-state value.
    ///
    /// # Errors
    /// * `Error::InvalidArgument` - `raw` is not a known activity state
    /// * anything [`on_activity_state`](Self::on_activity_state) returns
    pub fn on_raw_activity_state(&mut self, raw: u8) -> Result<(), Error> {
        let state = ActivityState::try_from(raw)?;
        self.on_activity_state(state)
    }

    /// Applies the pin configuration for `state` to every registered encoder.
    ///
    /// - `Active` pulls both pins of every encoder up.
    /// - A power-down state (see [`EncoderSleepConfig::powers_down`]) removes
    ///   the pull-up from each pin that currently reads low. Pins reading high
    ///   are left alone for this cycle so a rotation in progress is not masked.
    ///
    /// The first failing pin aborts the event. Pins reconfigured before it keep
    /// their new mode.
    ///
    /// # Errors
    /// * `Error::InvalidArgument` - `state` is a power-down state this build
    ///   does not act on. No pin is touched.
    /// * `Error::Io` - a pin could not be reconfigured
    pub fn on_activity_state(&mut self, state: ActivityState) -> Result<(), Error> {
        if state == ActivityState::Active {
            debug!("Entering active mode. Re-enabling encoders.");
            for (index, encoder) in self.encoders.iter_mut().enumerate() {
                configure(&mut encoder.a, PinMode::PulledUpInput, index, PinId::A)?;
                configure(&mut encoder.b, PinMode::PulledUpInput, index, PinId::B)?;
            }
            return Ok(());
        }

        if !self.config.powers_down(state) {
            warn!("Unhandled activity state: {}", state);
            return Err(Error::InvalidArgument);
        }

        debug!("Disabling encoders.");
        for (index, encoder) in self.encoders.iter_mut().enumerate() {
            release_if_low(&mut encoder.a, index, PinId::A)?;
            release_if_low(&mut encoder.b, index, PinId::B)?;
        }
        Ok(())
    }
}

impl<P: EncoderPin, const MAX_ENCODERS: usize> Listener for EncoderPowerGate<P, MAX_ENCODERS> {
    fn on_event(&mut self, event: &Event) -> Result<EventResponse, Error> {
        if let Event::ActivityStateChanged(state) = event {
            self.on_activity_state(*state)?;
        }
        Ok(EventResponse::Bubble)
    }
}

fn configure<P: EncoderPin>(
    pin: &mut P,
    mode: PinMode,
    encoder: usize,
    id: PinId,
) -> Result<(), Error> {
    pin.configure(mode).map_err(|_| {
        error!("Failed to configure pin {} of encoder {=usize}.", id, encoder);
        Error::Io { encoder, pin: id }
    })
}

fn release_if_low<P: EncoderPin>(pin: &mut P, encoder: usize, id: PinId) -> Result<(), Error> {
    if pin.is_high() {
        debug!("Pin {} of encoder {=usize} is high, skipping.", id, encoder);
        return Ok(());
    }

    configure(pin, PinMode::PlainInput, encoder, id)?;
    debug!("Disabled pin {} of encoder {=usize}.", id, encoder);
    Ok(())
}
