// Copyright 2026 the Slide Switch Authors
// SPDX-License-Identifier: Apache-2.0

//! Decoding encoded image assets into paintable bitmaps.

use vello::peniko::{ImageAlphaType, ImageBrush, ImageData, ImageFormat};

/// Decodes encoded image bytes (e.g. a PNG asset) into an RGBA8 bitmap.
///
/// Decoding is synchronous; assets are expected to be small and decoded
/// during setup, not on a hot path.
pub fn decode(bytes: &[u8]) -> Result<ImageBrush, image::ImageError> {
    let image = image::load_from_memory(bytes)?.into_rgba8();
    let (width, height) = image.dimensions();
    let data = ImageData {
        data: image.into_raw().into(),
        format: ImageFormat::Rgba8,
        alpha_type: ImageAlphaType::Alpha,
        width,
        height,
    };
    Ok(data.into())
}
