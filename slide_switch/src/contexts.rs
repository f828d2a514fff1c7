// Copyright 2026 the Slide Switch Authors
// SPDX-License-Identifier: Apache-2.0

//! The context passed to the widget during event handling.

/// Collects the widget's reactions to a single dispatched event.
///
/// The host creates a fresh context per event, passes it to
/// [`on_pointer_event`](crate::SlideSwitch::on_pointer_event), and reads the
/// flags afterwards. A repaint request is fire-and-forget: the widget only
/// signals that one is wanted, the host decides when the paint runs.
#[derive(Debug, Default)]
pub struct EventCtx {
    handled: bool,
    render_requested: bool,
}

impl EventCtx {
    /// Creates a fresh context for dispatching one event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the current event as handled.
    pub fn set_handled(&mut self) {
        self.handled = true;
    }

    /// Returns whether the widget handled the current event.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Requests that the widget is repainted.
    pub fn request_render(&mut self) {
        self.render_requested = true;
    }

    /// Returns whether a repaint was requested while handling this event.
    pub fn render_requested(&self) -> bool {
        self.render_requested
    }
}
