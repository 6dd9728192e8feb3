//! Event payloads and listener dispatch.

use crate::types::{ActivityState, Error, HidIndicators};

/// Events delivered by the host's event bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// The keyboard moved to a new activity state.
    ActivityStateChanged(ActivityState),
    /// The active BLE profile changed, or its pairing status did.
    BleActiveProfileChanged,
    /// The host updated the keyboard LED indicators of some profile.
    HidIndicatorsChanged(HidIndicators),
}

/// What a listener tells the bus after seeing an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventResponse {
    /// Stop propagation; later listeners do not see the event.
    Handled,
    /// Pass the event on to the next listener.
    Bubble,
}

/// A subscriber on the event bus.
pub trait Listener {
    /// Reacts to one event.
    ///
    /// Listeners ignore event types they are not subscribed to by returning
    /// `Ok(EventResponse::Bubble)`.
    fn on_event(&mut self, event: &Event) -> Result<EventResponse, Error>;
}

/// Delivers `event` to each listener in order.
///
/// Stops at the first listener that returns [`EventResponse::Handled`]. A
/// listener error is logged and dispatch continues with the next listener.
pub fn dispatch(event: &Event, listeners: &mut [&mut dyn Listener]) -> EventResponse {
    for (index, listener) in listeners.iter_mut().enumerate() {
        match listener.on_event(event) {
            Ok(EventResponse::Handled) => {
                trace!("{} handled by listener {=usize}", event, index);
                return EventResponse::Handled;
            }
            Ok(EventResponse::Bubble) => {}
            Err(err) => {
                warn!("Listener {=usize} failed: {}", index, err);
            }
        }
    }

    EventResponse::Bubble
}
