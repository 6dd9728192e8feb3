//! Shared test infrastructure for board-indicators integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use board_indicators::{
    DelayedWork, EncoderPin, HidIndicators, HostStatus, IndicatorConfig, LedDriver, LedIndicator,
    PinMode, TimeDuration,
};
use core::cell::Cell;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Virtual millisecond clock shared by the mocks
pub struct MockClock {
    now: Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn set(&self, millis: u64) {
        self.now.set(millis);
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records every on/off call with its timestamp
pub struct MockLed<'c> {
    clock: &'c MockClock,
    ready: bool,
    lit: bool,
    history: heapless::Vec<(u64, bool), 128>,
}

impl<'c> MockLed<'c> {
    pub fn new(clock: &'c MockClock) -> Self {
        Self {
            clock,
            ready: true,
            lit: false,
            history: heapless::Vec::new(),
        }
    }

    pub fn not_ready(clock: &'c MockClock) -> Self {
        Self {
            ready: false,
            ..Self::new(clock)
        }
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Every call, including repeats of the current state
    pub fn history(&self) -> &[(u64, bool)] {
        &self.history
    }

    /// Calls that changed what the LED shows
    pub fn visible_changes(&self) -> heapless::Vec<(u64, bool), 128> {
        let mut changes = heapless::Vec::new();
        for &(at, lit) in self.history.iter() {
            if changes.last().map(|&(_, prev)| prev) != Some(lit) {
                let _ = changes.push((at, lit));
            }
        }
        changes
    }
}

impl LedDriver for MockLed<'_> {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn on(&mut self, _channel: u8) {
        self.lit = true;
        let _ = self.history.push((self.clock.now(), true));
    }

    fn off(&mut self, _channel: u8) {
        self.lit = false;
        let _ = self.history.push((self.clock.now(), false));
    }
}

// ============================================================================
// Mock Delayed Work
// ============================================================================

/// Single-slot timer tracking the absolute fire time on the shared clock
pub struct MockTimer<'c> {
    clock: &'c MockClock,
    deadline: Option<u64>,
    cancels: usize,
}

impl<'c> MockTimer<'c> {
    pub fn new(clock: &'c MockClock) -> Self {
        Self {
            clock,
            deadline: None,
            cancels: 0,
        }
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    pub fn cancels(&self) -> usize {
        self.cancels
    }
}

impl DelayedWork<TestDuration> for MockTimer<'_> {
    fn schedule(&mut self, delay: TestDuration) {
        self.deadline = Some(self.clock.now() + delay.0);
    }

    fn cancel(&mut self) {
        self.deadline = None;
        self.cancels += 1;
    }
}

// ============================================================================
// Mock Host Status
// ============================================================================

/// Mock BLE/HID state with interior mutability so tests can change it while
/// the indicator holds a shared reference
#[derive(Default)]
pub struct MockStatus {
    open: Cell<bool>,
    indicators: Cell<u8>,
}

impl MockStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_profile_open(&self, open: bool) {
        self.open.set(open);
    }

    pub fn set_indicators(&self, bits: u8) {
        self.indicators.set(bits);
    }
}

impl HostStatus for MockStatus {
    fn active_profile_is_open(&self) -> bool {
        self.open.get()
    }

    fn active_indicators(&self) -> HidIndicators {
        HidIndicators(self.indicators.get())
    }
}

// ============================================================================
// Indicator Helpers
// ============================================================================

pub type TestIndicator<'s, 'c> =
    LedIndicator<'s, TestDuration, MockLed<'c>, MockTimer<'c>, MockStatus>;

pub fn new_indicator<'s, 'c>(
    clock: &'c MockClock,
    status: &'s MockStatus,
    config: IndicatorConfig<TestDuration>,
) -> TestIndicator<'s, 'c> {
    LedIndicator::new(MockLed::new(clock), MockTimer::new(clock), status, config).unwrap()
}

/// Runs the clock forward to `until`, firing the timer slot at each deadline
/// that falls inside the window
pub fn run_until(indicator: &mut TestIndicator<'_, '_>, clock: &MockClock, until: u64) {
    while let Some(deadline) = indicator.timer().deadline() {
        if deadline > until {
            break;
        }
        clock.set(deadline);
        indicator.on_timer();
    }
    clock.set(until);
}

// ============================================================================
// Mock Encoder Pin
// ============================================================================

/// Mock GPIO pin; every configure call is counted on a shared counter
pub struct MockPin<'g> {
    high: bool,
    mode: PinMode,
    fail: bool,
    gpio_calls: &'g Cell<usize>,
}

impl<'g> MockPin<'g> {
    pub fn new(high: bool, gpio_calls: &'g Cell<usize>) -> Self {
        Self {
            high,
            mode: PinMode::PulledUpInput,
            fail: false,
            gpio_calls,
        }
    }

    pub fn failing(gpio_calls: &'g Cell<usize>) -> Self {
        Self {
            fail: true,
            ..Self::new(false, gpio_calls)
        }
    }

    pub fn mode(&self) -> PinMode {
        self.mode
    }
}

impl EncoderPin for MockPin<'_> {
    type Error = ();

    fn configure(&mut self, mode: PinMode) -> Result<(), Self::Error> {
        self.gpio_calls.set(self.gpio_calls.get() + 1);
        if self.fail {
            return Err(());
        }
        self.mode = mode;
        Ok(())
    }

    fn is_high(&mut self) -> bool {
        self.high
    }
}
