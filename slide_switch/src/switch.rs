// Copyright 2026 the Slide Switch Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use accesskit::{Node, Role, Toggled};
use tracing::trace;
use vello::Scene;
use vello::kurbo::{Affine, Size};
use vello::peniko::ImageBrush;

use crate::bitmap;
use crate::contexts::EventCtx;
use crate::event::{PointerButton, PointerEvent};

/// Construction-time configuration for a [`SlideSwitch`].
///
/// The declarative equivalent of the programmatic setters: two required
/// image references (encoded bytes) and the initial state, which defaults
/// to off.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchConfig<'a> {
    /// Encoded bytes of the track (background) image.
    pub track: &'a [u8],
    /// Encoded bytes of the thumb (foreground) image.
    pub thumb: &'a [u8],
    /// Initial switch state.
    pub on: bool,
}

/// Identifies which of the switch's two images an error concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// The fixed background image.
    Track,
    /// The movable foreground image.
    Thumb,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Track => write!(f, "track"),
            Self::Thumb => write!(f, "thumb"),
        }
    }
}

/// Errors from constructing a [`SlideSwitch`] or replacing its images.
#[derive(Debug)]
pub enum SwitchError {
    /// An image asset could not be decoded.
    Decode {
        /// Which image failed to decode.
        layer: Layer,
        /// The underlying decoder error.
        source: image::ImageError,
    },
    /// The thumb image is wider than the track image.
    ThumbTooWide {
        /// Width of the rejected thumb image in pixels.
        thumb: u32,
        /// Width of the track image in pixels.
        track: u32,
    },
}

impl fmt::Display for SwitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { layer, .. } => write!(f, "failed to decode the {layer} image"),
            Self::ThumbTooWide { thumb, track } => write!(
                f,
                "thumb image ({thumb}px) is wider than the track image ({track}px)"
            ),
        }
    }
}

impl std::error::Error for SwitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            Self::ThumbTooWide { .. } => None,
        }
    }
}

/// Whether a drag is in progress.
///
/// The live pointer coordinate is only meaningful during a drag, so it
/// lives inside the `Dragging` variant.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { pointer_x: f64 },
}

/// A two-state toggle switch rendered from two bitmap images.
///
/// The fixed *track* image defines the widget's measured size; the *thumb*
/// image slides along it. The thumb sits at the track's left edge when the
/// switch is off and at the rightmost legal offset when it is on. While the
/// user drags, the thumb follows the pointer, clamped to the track.
///
/// Releasing the pointer commits a state: strictly past the track's
/// midpoint the switch turns off, at or left of the midpoint it turns on.
/// When the committed state differs from the previous one, the registered
/// callback is invoked with the new state, exactly once.
pub struct SlideSwitch {
    track: ImageBrush,
    thumb: ImageBrush,
    on: bool,
    drag: DragState,
    on_toggle: Option<Box<dyn FnMut(bool)>>,
}

impl fmt::Debug for SlideSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideSwitch")
            .field("on", &self.on)
            .field("drag", &self.drag)
            .field("has_on_toggle", &self.on_toggle.is_some())
            .finish_non_exhaustive()
    }
}

fn check_widths(track: &ImageBrush, thumb: &ImageBrush) -> Result<(), SwitchError> {
    if thumb.image.width > track.image.width {
        return Err(SwitchError::ThumbTooWide {
            thumb: thumb.image.width,
            track: track.image.width,
        });
    }
    Ok(())
}

// --- MARK: BUILDERS
impl SlideSwitch {
    /// Creates a switch from already-decoded track and thumb images.
    ///
    /// The initial state is off; use [`with_on`](Self::with_on) to change
    /// it. Fails if the thumb is wider than the track.
    pub fn from_images(
        track: impl Into<ImageBrush>,
        thumb: impl Into<ImageBrush>,
    ) -> Result<Self, SwitchError> {
        let track = track.into();
        let thumb = thumb.into();
        check_widths(&track, &thumb)?;
        Ok(Self {
            track,
            thumb,
            on: false,
            drag: DragState::Idle,
            on_toggle: None,
        })
    }

    /// Creates a switch by decoding the image references in `config`.
    pub fn from_config(config: SwitchConfig<'_>) -> Result<Self, SwitchError> {
        let track = bitmap::decode(config.track).map_err(|source| SwitchError::Decode {
            layer: Layer::Track,
            source,
        })?;
        let thumb = bitmap::decode(config.thumb).map_err(|source| SwitchError::Decode {
            layer: Layer::Thumb,
            source,
        })?;
        Ok(Self::from_images(track, thumb)?.with_on(config.on))
    }

    /// Builder-style method to set the initial state.
    pub fn with_on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }
}

// --- MARK: MUTATE
impl SlideSwitch {
    /// Decodes `bytes` and replaces the track image.
    ///
    /// On error the previous image is kept.
    pub fn set_track(&mut self, bytes: &[u8]) -> Result<(), SwitchError> {
        let track = bitmap::decode(bytes).map_err(|source| SwitchError::Decode {
            layer: Layer::Track,
            source,
        })?;
        check_widths(&track, &self.thumb)?;
        self.track = track;
        Ok(())
    }

    /// Decodes `bytes` and replaces the thumb image.
    ///
    /// On error the previous image is kept.
    pub fn set_thumb(&mut self, bytes: &[u8]) -> Result<(), SwitchError> {
        let thumb = bitmap::decode(bytes).map_err(|source| SwitchError::Decode {
            layer: Layer::Thumb,
            source,
        })?;
        check_widths(&self.track, &thumb)?;
        self.thumb = thumb;
        Ok(())
    }

    /// Sets the switch state directly.
    ///
    /// Does not invoke the state-change callback; only a pointer release
    /// does that.
    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    /// Registers the state-change callback, replacing any previous one.
    ///
    /// At most one callback is stored; a replaced callback is dropped
    /// silently and never invoked again. The callback runs synchronously on
    /// the pointer-up that commits a transition, exactly once per actual
    /// state change.
    pub fn set_on_toggle(&mut self, on_toggle: impl FnMut(bool) + 'static) {
        self.on_toggle = Some(Box::new(on_toggle));
    }
}

// --- MARK: GETTERS
impl SlideSwitch {
    /// Returns whether the switch is currently on.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Returns whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// The widget's preferred size: exactly the track image's pixel size.
    pub fn preferred_size(&self) -> Size {
        Size::new(
            f64::from(self.track.image.width),
            f64::from(self.track.image.height),
        )
    }

    /// The thumb's current horizontal offset from the track's left edge.
    ///
    /// While dragging this follows the pointer, centered under it;
    /// otherwise it is the discrete on/off position. Always within
    /// `[0, track_width - thumb_width]`.
    pub fn thumb_offset(&self) -> f64 {
        let max_offset = f64::from(self.track.image.width) - f64::from(self.thumb.image.width);
        match self.drag {
            DragState::Dragging { pointer_x } => {
                (pointer_x - f64::from(self.thumb.image.width) / 2.0).clamp(0.0, max_offset)
            }
            DragState::Idle if self.on => max_offset,
            DragState::Idle => 0.0,
        }
    }
}

// --- MARK: EVENTS
impl SlideSwitch {
    /// Handles a pointer event dispatched by the host.
    ///
    /// All pointer events are consumed, and each one requests a repaint.
    /// Only the primary button starts a drag; a move while idle is ignored.
    pub fn on_pointer_event(&mut self, ctx: &mut EventCtx, event: &PointerEvent) {
        match *event {
            PointerEvent::Down {
                button: PointerButton::Primary,
                position,
            } => {
                self.drag = DragState::Dragging {
                    pointer_x: position.x,
                };
                trace!("drag started at x={}", position.x);
            }
            PointerEvent::Down { .. } => {}
            PointerEvent::Move { position } => {
                if let DragState::Dragging { pointer_x } = &mut self.drag {
                    *pointer_x = position.x;
                }
            }
            PointerEvent::Up { position, .. } => {
                if self.is_dragging() {
                    self.drag = DragState::Idle;
                    self.commit_release(position.x);
                }
            }
        }
        ctx.set_handled();
        ctx.request_render();
    }

    /// Commits the state for a pointer released at `pointer_x`.
    ///
    /// Releasing strictly past the track's midpoint turns the switch off;
    /// at or left of the midpoint it turns on.
    fn commit_release(&mut self, pointer_x: f64) {
        let midpoint = f64::from(self.track.image.width) / 2.0;
        let on = !(pointer_x > midpoint);
        trace!(
            "released at x={pointer_x}, committing {}",
            if on { "on" } else { "off" }
        );
        if on != self.on
            && let Some(on_toggle) = &mut self.on_toggle
        {
            on_toggle(on);
        }
        self.on = on;
    }
}

// --- MARK: PAINT
impl SlideSwitch {
    /// Paints the widget into `scene`.
    ///
    /// The track is drawn at the origin, the thumb at its current offset.
    /// Repeated paints with unchanged state produce identical output; there
    /// is no animation between states.
    pub fn paint(&self, scene: &mut Scene) {
        scene.draw_image(&self.track, Affine::IDENTITY);
        scene.draw_image(&self.thumb, Affine::translate((self.thumb_offset(), 0.0)));
    }
}

// --- MARK: ACCESSIBILITY
impl SlideSwitch {
    /// The widget's accessibility role.
    pub fn accessibility_role(&self) -> Role {
        Role::Switch
    }

    /// Fills in the widget's accessibility node.
    pub fn accessibility(&self, node: &mut Node) {
        node.add_action(accesskit::Action::Click);
        if self.on {
            node.set_toggled(Toggled::True);
        } else {
            node.set_toggled(Toggled::False);
        }
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    use assert_matches::assert_matches;
    use float_cmp::approx_eq;
    use vello::kurbo::Point;

    use super::*;
    use crate::testing::{TestHarness, solid_image};

    fn switch_200x60() -> SlideSwitch {
        SlideSwitch::from_images(
            solid_image(200, 60, [96, 96, 96, 255]),
            solid_image(40, 60, [230, 230, 230, 255]),
        )
        .unwrap()
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        image::RgbaImage::from_pixel(width, height, image::Rgba([0, 0, 0, 255]))
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn resting_offsets() {
        let mut switch = switch_200x60();
        assert_eq!(switch.thumb_offset(), 0.0);
        switch.set_on(true);
        assert_eq!(switch.thumb_offset(), 160.0);
    }

    #[test]
    fn preferred_size_is_track_size() {
        assert_eq!(switch_200x60().preferred_size(), Size::new(200.0, 60.0));
    }

    #[test]
    fn drag_tracks_and_clamps() {
        let mut harness = TestHarness::create(switch_200x60().with_on(true));

        let ctx = harness.pointer_down(50.0);
        assert!(ctx.is_handled());
        assert!(ctx.render_requested());
        assert!(harness.switch().is_dragging());
        assert!(approx_eq!(f64, harness.switch().thumb_offset(), 30.0));

        harness.pointer_move(210.0);
        assert!(approx_eq!(f64, harness.switch().thumb_offset(), 160.0));

        // Released past the midpoint: the switch commits to off.
        harness.pointer_up(210.0);
        assert!(!harness.switch().is_dragging());
        assert!(!harness.switch().is_on());
        assert_eq!(harness.pop_toggle(), Some(false));
        assert_eq!(harness.pop_toggle(), None);
    }

    #[test]
    fn midpoint_release_turns_on() {
        let mut harness = TestHarness::create(switch_200x60());
        harness.pointer_down(100.0);
        harness.pointer_up(100.0);
        assert!(harness.switch().is_on());
        assert_eq!(harness.pop_toggle(), Some(true));
    }

    #[test]
    fn release_without_transition_fires_no_callback() {
        let mut harness = TestHarness::create(switch_200x60());
        harness.pointer_down(150.0);
        harness.pointer_up(150.0);
        assert!(!harness.switch().is_on());
        assert_eq!(harness.pop_toggle(), None);
    }

    #[test]
    fn callback_fires_once_per_release() {
        let mut harness = TestHarness::create(switch_200x60());
        harness.pointer_down(50.0);
        harness.pointer_up(50.0);
        assert_eq!(harness.pop_toggle(), Some(true));
        // A stray pointer-up while idle commits nothing.
        harness.pointer_up(50.0);
        assert_eq!(harness.pop_toggle(), None);
    }

    #[test]
    fn offset_stays_within_track() {
        let mut harness = TestHarness::create(switch_200x60());
        for x in [-50.0, 0.0, 20.0, 100.0, 199.0, 1000.0] {
            harness.pointer_down(x);
            let offset = harness.switch().thumb_offset();
            assert!(
                (0.0..=160.0).contains(&offset),
                "offset {offset} out of range while dragging at x={x}"
            );
            harness.pointer_up(x);
            let offset = harness.switch().thumb_offset();
            assert!(
                (0.0..=160.0).contains(&offset),
                "offset {offset} out of range after release at x={x}"
            );
        }
    }

    #[test]
    fn equal_widths_pin_the_thumb() {
        let mut switch = SlideSwitch::from_images(
            solid_image(40, 40, [96, 96, 96, 255]),
            solid_image(40, 40, [230, 230, 230, 255]),
        )
        .unwrap();
        switch.set_on(true);
        assert_eq!(switch.thumb_offset(), 0.0);
    }

    #[test]
    fn repeated_renders_are_stable() {
        let mut harness = TestHarness::create(switch_200x60());
        harness.pointer_down(77.0);
        let before = harness.switch().thumb_offset();
        let _ = harness.render();
        let _ = harness.render();
        assert_eq!(harness.switch().thumb_offset(), before);
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut harness = TestHarness::create(switch_200x60());
        let ctx = harness.pointer_move(150.0);
        assert!(ctx.is_handled());
        assert!(!harness.switch().is_dragging());
        assert_eq!(harness.switch().thumb_offset(), 0.0);
    }

    #[test]
    fn every_pointer_event_is_consumed() {
        let mut harness = TestHarness::create(switch_200x60());
        for ctx in [
            harness.pointer_down(10.0),
            harness.pointer_move(20.0),
            harness.pointer_up(30.0),
        ] {
            assert!(ctx.is_handled());
            assert!(ctx.render_requested());
        }
    }

    #[test]
    fn secondary_button_does_not_start_a_drag() {
        let mut switch = switch_200x60();
        let mut ctx = EventCtx::new();
        switch.on_pointer_event(
            &mut ctx,
            &PointerEvent::Down {
                button: PointerButton::Secondary,
                position: Point::new(50.0, 0.0),
            },
        );
        assert!(ctx.is_handled());
        assert!(!switch.is_dragging());
    }

    #[test]
    fn replacing_the_listener_drops_the_old_one() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        let mut switch = switch_200x60();
        let record = first.clone();
        switch.set_on_toggle(move |on| record.borrow_mut().push(on));
        let record = second.clone();
        switch.set_on_toggle(move |on| record.borrow_mut().push(on));

        let mut ctx = EventCtx::new();
        switch.on_pointer_event(
            &mut ctx,
            &PointerEvent::Down {
                button: PointerButton::Primary,
                position: Point::new(30.0, 0.0),
            },
        );
        switch.on_pointer_event(
            &mut ctx,
            &PointerEvent::Up {
                button: PointerButton::Primary,
                position: Point::new(30.0, 0.0),
            },
        );

        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec![true]);
    }

    #[test]
    fn config_decodes_and_sets_initial_state() {
        let track = png_bytes(200, 60);
        let thumb = png_bytes(40, 60);
        let switch = SlideSwitch::from_config(SwitchConfig {
            track: &track,
            thumb: &thumb,
            on: true,
        })
        .unwrap();
        assert!(switch.is_on());
        assert_eq!(switch.preferred_size(), Size::new(200.0, 60.0));
    }

    #[test]
    fn config_state_defaults_to_off() {
        assert!(!SwitchConfig::default().on);
    }

    #[test]
    fn bad_track_bytes_report_the_track_layer() {
        let thumb = png_bytes(40, 60);
        let err = SlideSwitch::from_config(SwitchConfig {
            track: b"not an image",
            thumb: &thumb,
            on: false,
        })
        .unwrap_err();
        assert_matches!(
            err,
            SwitchError::Decode {
                layer: Layer::Track,
                ..
            }
        );
    }

    #[test]
    fn bad_thumb_bytes_report_the_thumb_layer() {
        let track = png_bytes(200, 60);
        let err = SlideSwitch::from_config(SwitchConfig {
            track: &track,
            thumb: b"not an image",
            on: false,
        })
        .unwrap_err();
        assert_matches!(
            err,
            SwitchError::Decode {
                layer: Layer::Thumb,
                ..
            }
        );
    }

    #[test]
    fn thumb_wider_than_track_is_rejected() {
        let err = SlideSwitch::from_images(
            solid_image(40, 60, [96, 96, 96, 255]),
            solid_image(200, 60, [230, 230, 230, 255]),
        )
        .unwrap_err();
        assert_matches!(
            err,
            SwitchError::ThumbTooWide {
                thumb: 200,
                track: 40
            }
        );
    }

    #[test]
    fn setters_replace_images() {
        let mut switch = switch_200x60();

        switch.set_track(&png_bytes(300, 80)).unwrap();
        assert_eq!(switch.preferred_size(), Size::new(300.0, 80.0));
        switch.set_on(true);
        assert_eq!(switch.thumb_offset(), 260.0);

        // A failed replacement keeps the previous image.
        assert_matches!(
            switch.set_thumb(b"garbage").unwrap_err(),
            SwitchError::Decode {
                layer: Layer::Thumb,
                ..
            }
        );
        assert_eq!(switch.thumb_offset(), 260.0);

        // Shrinking the track below the thumb's width is also rejected.
        assert_matches!(
            switch.set_track(&png_bytes(20, 20)).unwrap_err(),
            SwitchError::ThumbTooWide {
                thumb: 40,
                track: 20
            }
        );
        assert_eq!(switch.preferred_size(), Size::new(300.0, 80.0));
    }

    #[test]
    fn accessibility_node_reflects_state() {
        let mut switch = switch_200x60();
        assert_eq!(switch.accessibility_role(), Role::Switch);

        let mut node = Node::new(Role::Switch);
        switch.accessibility(&mut node);
        assert_eq!(node.toggled(), Some(Toggled::False));

        switch.set_on(true);
        let mut node = Node::new(Role::Switch);
        switch.accessibility(&mut node);
        assert_eq!(node.toggled(), Some(Toggled::True));
    }

    #[test]
    fn paint_does_not_panic() {
        let mut harness = TestHarness::create(switch_200x60());
        let _ = harness.render();
        harness.pointer_down(120.0);
        let _ = harness.render();
    }
}
