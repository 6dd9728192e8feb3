#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`EncoderPowerGate`**: Removes and restores rotary-encoder pull-ups on activity-state changes
//! - **`EncoderPin`**: Trait to implement for your encoder GPIO pins
//! - **`LedIndicator`**: Drives one status LED through boot flash, pairing blink and Caps Lock
//! - **`BoardState`**: The indicator's phase, with a pure `transition` function returning `Effect`s
//! - **`LedDriver`**: Trait to implement for your LED hardware
//! - **`DelayedWork`**: Trait to implement for your single-slot delayed-work timer
//! - **`HostStatus`**: Trait to implement for BLE pairing and HID indicator queries
//! - **`Event`** / **`Listener`**: Payloads and handler contract of the host's event bus
//!
//! Everything runs on the caller's context: the crate spawns nothing and owns
//! no timers. Enable the `defmt` feature for on-target logging.

#[macro_use]
mod fmt;

pub mod command;
pub mod config;
pub mod encoder;
pub mod event;
pub mod indicator;
pub mod state;
pub mod time;
pub mod types;

pub use command::{Effect, Effects, Transition};
pub use config::{
    BLINK_INTERVAL_MS, CAPS_LOCK_MASK, EncoderSleepConfig, INITIAL_DELAY_MS, IndicatorConfig,
};
pub use encoder::{Encoder, EncoderPin, EncoderPowerGate};
pub use event::{Event, EventResponse, Listener, dispatch};
pub use indicator::{HostStatus, LedDriver, LedIndicator};
pub use state::{BoardState, Inputs, Trigger};
pub use time::{DelayedWork, TimeDuration};
pub use types::{ActivityState, Error, HidIndicators, PinId, PinMode};
