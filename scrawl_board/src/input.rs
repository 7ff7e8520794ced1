// Copyright 2025 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events consumed by the whiteboard controller.
//!
//! The host environment (DOM listeners, winit, a test script) translates its
//! native pointer/touch callbacks into [`InputEvent`] values and feeds them
//! to the controller, decoupling event sourcing from the state machine. The
//! controller assumes only that events for a given contact arrive in
//! chronological order and that every contact eventually ends.
//!
//! Mapping guidance for hosts:
//! - Mouse/pen down/move/up become single-contact events.
//! - `pointerleave` while a button is held becomes [`InputEvent::pointer_up`]
//!   with no remaining contacts.
//! - `touchstart`/`touchmove`/`touchend` carry the full current touch list;
//!   `touchcancel` becomes [`InputEvent::Cancel`].

use kurbo::Point;
use smallvec::SmallVec;

/// Contact positions carried by one event, in screen space.
///
/// Inline capacity covers the two contacts the gesture machine cares about;
/// events with more contacts still work (the extras are ignored).
pub type Contacts = SmallVec<[Point; 2]>;

/// One pointer/touch event, carrying the contact list *after* the change it
/// reports.
#[derive(Clone, Debug)]
pub enum InputEvent {
    /// A contact landed. The list holds every contact now down.
    PointerDown {
        /// All current contact positions, in screen space.
        contacts: Contacts,
    },
    /// One or more contacts moved. The list holds every contact down.
    PointerMove {
        /// All current contact positions, in screen space.
        contacts: Contacts,
    },
    /// A contact lifted. The list holds the contacts *remaining* down.
    PointerUp {
        /// Remaining contact positions, in screen space.
        contacts: Contacts,
    },
    /// The host lost the interaction (e.g. `touchcancel`); all contacts are
    /// gone. Handled identically to every contact lifting.
    Cancel,
}

impl InputEvent {
    /// Builds a down event from the current contact positions.
    #[must_use]
    pub fn pointer_down(contacts: &[Point]) -> Self {
        Self::PointerDown {
            contacts: SmallVec::from_slice(contacts),
        }
    }

    /// Builds a move event from the current contact positions.
    #[must_use]
    pub fn pointer_move(contacts: &[Point]) -> Self {
        Self::PointerMove {
            contacts: SmallVec::from_slice(contacts),
        }
    }

    /// Builds an up event from the contact positions remaining down.
    #[must_use]
    pub fn pointer_up(contacts: &[Point]) -> Self {
        Self::PointerUp {
            contacts: SmallVec::from_slice(contacts),
        }
    }
}
