// Copyright 2026 the Slide Switch Authors
// SPDX-License-Identifier: Apache-2.0

//! A trivial host screen: wires two PNG drawables into a [`SlideSwitch`],
//! registers a state-change listener, and drives a scripted drag.
//!
//! The windowing and compositing shell is an external collaborator; this
//! host stands in for it by dispatching pointer events and painting the
//! widget whenever it requests a render.

use anyhow::Context;
use slide_switch::kurbo::Point;
use slide_switch::vello::Scene;
use slide_switch::{EventCtx, PointerButton, PointerEvent, SlideSwitch, SwitchConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

const TRACK: &[u8] = include_bytes!("assets/track.png");
const THUMB: &[u8] = include_bytes!("assets/thumb.png");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let mut switch = SlideSwitch::from_config(SwitchConfig {
        track: TRACK,
        thumb: THUMB,
        on: false,
    })
    .context("failed to build the switch from the bundled drawables")?;
    switch.set_on_toggle(|on| info!(on, "switch state changed"));

    let size = switch.preferred_size();
    info!(
        width = size.width,
        height = size.height,
        "switch measured from its track image"
    );

    // A centered press, a slide to the right edge and back, then a release
    // left of the midpoint: the switch commits to on.
    let script = [
        PointerEvent::Down {
            button: PointerButton::Primary,
            position: Point::new(100.0, 30.0),
        },
        PointerEvent::Move {
            position: Point::new(170.0, 30.0),
        },
        PointerEvent::Move {
            position: Point::new(240.0, 30.0),
        },
        PointerEvent::Move {
            position: Point::new(60.0, 30.0),
        },
        PointerEvent::Up {
            button: PointerButton::Primary,
            position: Point::new(60.0, 30.0),
        },
    ];

    let mut scene = Scene::new();
    for event in script {
        let mut ctx = EventCtx::new();
        switch.on_pointer_event(&mut ctx, &event);
        if ctx.render_requested() {
            scene.reset();
            switch.paint(&mut scene);
            info!(
                x = event.position().x,
                offset = switch.thumb_offset(),
                dragging = switch.is_dragging(),
                "repainted"
            );
        }
    }

    info!(on = switch.is_on(), "final state");
    Ok(())
}
