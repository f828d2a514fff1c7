// Copyright 2026 the Slide Switch Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer events dispatched to the widget by its host.

use vello::kurbo::Point;

/// An indicator of which pointer button was pressed.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum PointerButton {
    /// Primary button, commonly the left mouse button, touch contact, pen contact.
    Primary,
    /// Secondary button, commonly the right mouse button, pen barrel button.
    Secondary,
    /// Auxiliary button, commonly the middle mouse button.
    Auxiliary,
}

/// A pointer event.
///
/// Positions are in the widget's local coordinate space; only the primary
/// pointer is reported, and the widget only reads the horizontal component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A pointer was pressed over the widget.
    Down {
        /// The button that went down.
        button: PointerButton,
        /// Pointer position, local to the widget.
        position: Point,
    },
    /// A pointer moved.
    Move {
        /// Pointer position, local to the widget.
        position: Point,
    },
    /// A pointer was released.
    Up {
        /// The button that was released.
        button: PointerButton,
        /// Pointer position, local to the widget.
        position: Point,
    },
}

impl PointerEvent {
    /// The position carried by this event.
    pub fn position(&self) -> Point {
        match self {
            Self::Down { position, .. } | Self::Move { position } | Self::Up { position, .. } => {
                *position
            }
        }
    }
}
