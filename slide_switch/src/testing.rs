// Copyright 2026 the Slide Switch Authors
// SPDX-License-Identifier: Apache-2.0

//! Helper tools for driving the switch without a windowing shell.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use vello::Scene;
use vello::kurbo::Point;
use vello::peniko::{ImageAlphaType, ImageBrush, ImageData, ImageFormat};

use crate::contexts::EventCtx;
use crate::event::{PointerButton, PointerEvent};
use crate::switch::SlideSwitch;

/// Creates a solid-color RGBA8 bitmap of the given pixel size.
///
/// Useful for building switches in tests and examples without bundling
/// encoded assets.
pub fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> ImageBrush {
    let len = width as usize * height as usize * 4;
    let data: Vec<u8> = rgba.into_iter().cycle().take(len).collect();
    ImageData {
        data: data.into(),
        format: ImageFormat::Rgba8,
        alpha_type: ImageAlphaType::Alpha,
        width,
        height,
    }
    .into()
}

/// A harness for driving a [`SlideSwitch`] through scripted pointer
/// interactions.
///
/// The harness registers its own recording callback on the switch (replacing
/// any callback already set); every invocation is queued and can be
/// inspected with [`pop_toggle`](Self::pop_toggle). Each dispatch method
/// returns the [`EventCtx`] so tests can assert on the handled and repaint
/// flags.
#[derive(Debug)]
pub struct TestHarness {
    switch: SlideSwitch,
    toggles: Rc<RefCell<VecDeque<bool>>>,
}

impl TestHarness {
    /// Creates a harness around `switch`.
    pub fn create(mut switch: SlideSwitch) -> Self {
        let toggles = Rc::new(RefCell::new(VecDeque::new()));
        let record = toggles.clone();
        switch.set_on_toggle(move |on| record.borrow_mut().push_back(on));
        Self { switch, toggles }
    }

    /// Dispatches a primary-button pointer-down at `(x, 0)`.
    pub fn pointer_down(&mut self, x: f64) -> EventCtx {
        self.dispatch(PointerEvent::Down {
            button: PointerButton::Primary,
            position: Point::new(x, 0.0),
        })
    }

    /// Dispatches a pointer-move to `(x, 0)`.
    pub fn pointer_move(&mut self, x: f64) -> EventCtx {
        self.dispatch(PointerEvent::Move {
            position: Point::new(x, 0.0),
        })
    }

    /// Dispatches a primary-button pointer-up at `(x, 0)`.
    pub fn pointer_up(&mut self, x: f64) -> EventCtx {
        self.dispatch(PointerEvent::Up {
            button: PointerButton::Primary,
            position: Point::new(x, 0.0),
        })
    }

    /// Dispatches an arbitrary pointer event and returns the context.
    pub fn dispatch(&mut self, event: PointerEvent) -> EventCtx {
        let mut ctx = EventCtx::new();
        self.switch.on_pointer_event(&mut ctx, &event);
        ctx
    }

    /// Pops the oldest recorded callback invocation, if any.
    pub fn pop_toggle(&mut self) -> Option<bool> {
        self.toggles.borrow_mut().pop_front()
    }

    /// Paints the switch into a fresh scene and returns it.
    pub fn render(&mut self) -> Scene {
        let mut scene = Scene::new();
        self.switch.paint(&mut scene);
        scene
    }

    /// The switch under test.
    pub fn switch(&self) -> &SlideSwitch {
        &self.switch
    }

    /// Mutable access to the switch under test.
    pub fn switch_mut(&mut self) -> &mut SlideSwitch {
        &mut self.switch
    }
}
