//! Core types shared by the encoder gate and the LED indicator.

/// Host-reported power state of the whole keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActivityState {
    /// Keys are being pressed.
    Active,

    /// No input for the idle timeout.
    Idle,

    /// No input for the sleep timeout; the host is about to power down.
    Sleep,
}

impl TryFrom<u8> for ActivityState {
    type Error = Error;

    /// Decodes the raw state value carried by bus events.
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(ActivityState::Active),
            1 => Ok(ActivityState::Idle),
            2 => Ok(ActivityState::Sleep),
            _ => {
                warn!("Unhandled activity state: {=u8}", raw);
                Err(Error::InvalidArgument)
            }
        }
    }
}

/// Electrical input configuration applied to an encoder pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Input with the internal pull-up enabled. Rotation edges are detected.
    PulledUpInput,

    /// Input with no bias resistor. Draws no current through the pull-up.
    PlainInput,
}

/// One of the two quadrature channels of an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinId {
    A,
    B,
}

/// HID keyboard LED indicator bitmask as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HidIndicators(pub u8);

impl HidIndicators {
    pub const NONE: Self = HidIndicators(0);
    pub const NUM_LOCK: u8 = 0x01;
    pub const CAPS_LOCK: u8 = 0x02;
    pub const SCROLL_LOCK: u8 = 0x04;
    pub const COMPOSE: u8 = 0x08;
    pub const KANA: u8 = 0x10;

    /// Returns true if any bit of `mask` is set.
    #[inline]
    pub const fn contains(self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    #[inline]
    pub const fn caps_lock(self) -> bool {
        self.contains(Self::CAPS_LOCK)
    }

    #[inline]
    pub const fn num_lock(self) -> bool {
        self.contains(Self::NUM_LOCK)
    }

    #[inline]
    pub const fn scroll_lock(self) -> bool {
        self.contains(Self::SCROLL_LOCK)
    }
}

impl From<u8> for HidIndicators {
    fn from(bits: u8) -> Self {
        HidIndicators(bits)
    }
}

/// Errors reported to the dispatching framework.
///
/// None of these are retried. Each one is terminal for the call that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Reconfiguring an encoder pin failed.
    ///
    /// Pins handled earlier in the same event keep their new configuration.
    Io {
        /// Index of the encoder in registration order.
        encoder: usize,
        /// Which of its pins failed.
        pin: PinId,
    },

    /// Unrecognized activity state, or one this build does not act on.
    InvalidArgument,

    /// The LED device was not ready at initialization.
    DeviceNotReady,

    /// More encoders were registered than the gate can hold.
    CapacityExceeded,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Io { encoder, pin } => {
                write!(f, "failed to configure pin {:?} of encoder {}", pin, encoder)
            }
            Error::InvalidArgument => write!(f, "invalid argument"),
            Error::DeviceNotReady => write!(f, "LED device is not ready"),
            Error::CapacityExceeded => write!(f, "encoder capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
