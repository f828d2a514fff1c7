// Copyright 2026 the Slide Switch Authors
// SPDX-License-Identifier: Apache-2.0

//! A two-state toggle switch widget rendered from two bitmap images.
//!
//! The switch owns a fixed *track* image (which defines its measured size)
//! and a narrower *thumb* image whose horizontal offset encodes the switch
//! position: the left edge when off, the rightmost legal offset when on.
//! While the user drags, the thumb follows the pointer, clamped to the
//! track. Releasing the pointer commits a state and invokes the registered
//! callback once per actual transition.
//!
//! The crate does not own an event loop or a window. A host dispatches
//! [`PointerEvent`]s through [`SlideSwitch::on_pointer_event`] together with
//! an [`EventCtx`] that collects the widget's reactions (handled flag,
//! repaint request), and calls [`SlideSwitch::paint`] to produce draw
//! commands into a [`vello::Scene`] whenever the surface repaints.
//!
//! # Example
//!
//! ```
//! use slide_switch::kurbo::Point;
//! use slide_switch::testing::solid_image;
//! use slide_switch::{EventCtx, PointerButton, PointerEvent, SlideSwitch};
//!
//! let track = solid_image(200, 60, [96, 96, 96, 255]);
//! let thumb = solid_image(40, 60, [230, 230, 230, 255]);
//! let mut switch = SlideSwitch::from_images(track, thumb)?;
//! switch.set_on_toggle(|on| eprintln!("switch is now {}", if on { "on" } else { "off" }));
//!
//! // Press and release left of the track's midpoint: the switch turns on.
//! let mut ctx = EventCtx::new();
//! switch.on_pointer_event(
//!     &mut ctx,
//!     &PointerEvent::Down {
//!         button: PointerButton::Primary,
//!         position: Point::new(40.0, 30.0),
//!     },
//! );
//! switch.on_pointer_event(
//!     &mut ctx,
//!     &PointerEvent::Up {
//!         button: PointerButton::Primary,
//!         position: Point::new(40.0, 30.0),
//!     },
//! );
//! assert!(switch.is_on());
//! # Ok::<(), slide_switch::SwitchError>(())
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(
    test,
    expect(
        unused_crate_dependencies,
        reason = "False-positive with dev-dependencies only used in examples"
    )
)]

pub use vello::{kurbo, peniko};
pub use {accesskit, vello};

pub mod bitmap;
pub mod testing;

mod contexts;
mod event;
mod switch;

pub use contexts::EventCtx;
pub use event::{PointerButton, PointerEvent};
pub use switch::{Layer, SlideSwitch, SwitchConfig, SwitchError};
