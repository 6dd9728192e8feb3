//! Compile-time defaults and runtime configuration.

use crate::time::TimeDuration;
use crate::types::{ActivityState, HidIndicators};

/// Delay between initialization and the first boot-animation step.
pub const INITIAL_DELAY_MS: u64 = 100;

/// Half-period of the boot flash and the pairing blink.
pub const BLINK_INTERVAL_MS: u64 = 300;

/// Indicator bit shown on the status LED once the board is ready.
pub const CAPS_LOCK_MASK: u8 = HidIndicators::CAPS_LOCK;

/// Which activity states remove the encoder pull-ups.
///
/// `Default` follows the `auto-off-idle` and `auto-off-sleep` cargo features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderSleepConfig {
    /// Power down on `Idle`. Also powers down on `Sleep`.
    pub auto_off_idle: bool,

    /// Power down on `Sleep`.
    pub auto_off_sleep: bool,
}

impl EncoderSleepConfig {
    pub const fn new() -> Self {
        Self {
            auto_off_idle: cfg!(feature = "auto-off-idle"),
            auto_off_sleep: cfg!(feature = "auto-off-sleep"),
        }
    }

    pub const fn with_auto_off_idle(mut self, enabled: bool) -> Self {
        self.auto_off_idle = enabled;
        self
    }

    pub const fn with_auto_off_sleep(mut self, enabled: bool) -> Self {
        self.auto_off_sleep = enabled;
        self
    }

    /// Returns true if `state` should remove the encoder pull-ups.
    pub const fn powers_down(&self, state: ActivityState) -> bool {
        match state {
            ActivityState::Active => false,
            ActivityState::Idle => self.auto_off_idle,
            ActivityState::Sleep => self.auto_off_idle || self.auto_off_sleep,
        }
    }
}

impl Default for EncoderSleepConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing and wiring of the status LED indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorConfig<D: TimeDuration> {
    /// Delay before the boot flash starts.
    pub initial_delay: D,

    /// Duration of each on or off phase of the boot flash and pairing blink.
    pub blink_interval: D,

    /// LED driver channel the indicator drives.
    pub led_channel: u8,

    /// Indicator bits that light the LED once the board is ready.
    pub caps_lock_mask: u8,

    /// Keep the legacy extra tick after the boot flash.
    ///
    /// When set, leaving `Booting2` only turns the LED off and reschedules; the
    /// pairing status is evaluated one `blink_interval` later. When clear, it
    /// is evaluated right away.
    pub deferred_ready_check: bool,
}

impl<D: TimeDuration> IndicatorConfig<D> {
    pub fn new() -> Self {
        Self {
            initial_delay: D::from_millis(INITIAL_DELAY_MS),
            blink_interval: D::from_millis(BLINK_INTERVAL_MS),
            led_channel: 0,
            caps_lock_mask: CAPS_LOCK_MASK,
            deferred_ready_check: false,
        }
    }

    pub fn with_initial_delay(mut self, delay: D) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_blink_interval(mut self, interval: D) -> Self {
        self.blink_interval = interval;
        self
    }

    pub fn with_led_channel(mut self, channel: u8) -> Self {
        self.led_channel = channel;
        self
    }

    pub fn with_caps_lock_mask(mut self, mask: u8) -> Self {
        self.caps_lock_mask = mask;
        self
    }

    pub fn with_deferred_ready_check(mut self, deferred: bool) -> Self {
        self.deferred_ready_check = deferred;
        self
    }
}

impl<D: TimeDuration> Default for IndicatorConfig<D> {
    fn default() -> Self {
        Self::new()
    }
}
