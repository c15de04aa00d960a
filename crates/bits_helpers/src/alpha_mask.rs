//! Alpha-only companion masks for pixel-accurate hit testing.
//!
//! Reading pixels back from a GPU texture is slow, so games keep a CPU copy
//! of just the alpha channel, already scaled to the size the sprite is drawn
//! at.

use bevy::prelude::*;
use bevy::render::render_resource::TextureFormat;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaskError {
    #[error("Mask data length mismatch - expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid texture format: {0:?}")]
    InvalidFormat(TextureFormat),

    #[error("Source image is empty")]
    EmptyImage,

    #[error("Mask size must be non-zero, got {0:?}")]
    EmptyMask(UVec2),

    #[error("Pixel ({x}, {y}) is missing from the image data")]
    TruncatedData { x: u32, y: u32 },
}

/// One alpha byte per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaMask {
    size: UVec2,
    alpha: Vec<u8>,
}

impl AlphaMask {
    pub fn new(size: UVec2, alpha: Vec<u8>) -> Result<Self, MaskError> {
        let expected = size.x as usize * size.y as usize;
        if alpha.len() != expected {
            return Err(MaskError::LengthMismatch {
                expected,
                actual: alpha.len(),
            });
        }
        Ok(Self { size, alpha })
    }

    pub fn from_fn(size: UVec2, mut alpha_at: impl FnMut(UVec2) -> u8) -> Self {
        let alpha = (0..size.y)
            .flat_map(|y| (0..size.x).map(move |x| UVec2::new(x, y)))
            .map(&mut alpha_at)
            .collect();
        Self { size, alpha }
    }

    /// Samples the alpha channel of `image`, scaled to `size` with nearest
    /// neighbour filtering.
    pub fn from_image(image: &Image, size: UVec2) -> Result<Self, MaskError> {
        const BYTES_PER_PIXEL: u32 = 4;

        let alpha_offset = match image.texture_descriptor.format {
            TextureFormat::Rgba8UnormSrgb
            | TextureFormat::Rgba8Unorm
            | TextureFormat::Bgra8UnormSrgb
            | TextureFormat::Bgra8Unorm => 3,
            format => return Err(MaskError::InvalidFormat(format)),
        };

        let source = UVec2::new(image.width(), image.height());
        if source.x == 0 || source.y == 0 {
            return Err(MaskError::EmptyImage);
        }
        if size.x == 0 || size.y == 0 {
            return Err(MaskError::EmptyMask(size));
        }

        let mut alpha = Vec::with_capacity(size.x as usize * size.y as usize);
        for y in 0..size.y {
            for x in 0..size.x {
                let src_x = x * source.x / size.x;
                let src_y = y * source.y / size.y;
                let idx = ((src_y * source.x + src_x) * BYTES_PER_PIXEL) as usize + alpha_offset;
                let a = image
                    .data
                    .get(idx)
                    .copied()
                    .ok_or(MaskError::TruncatedData { x: src_x, y: src_y })?;
                alpha.push(a);
            }
        }

        Ok(Self { size, alpha })
    }

    pub const fn size(&self) -> UVec2 {
        self.size
    }

    /// Alpha at a mask-local coordinate. Anything outside the mask is fully
    /// transparent.
    pub fn alpha_at(&self, local: IVec2) -> u8 {
        if local.x < 0 || local.y < 0 {
            return 0;
        }
        let local = local.as_uvec2();
        if local.x >= self.size.x || local.y >= self.size.y {
            return 0;
        }
        let idx = (local.y * self.size.x + local.x) as usize;
        self.alpha.get(idx).copied().unwrap_or(0)
    }
}
