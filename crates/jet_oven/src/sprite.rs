use std::sync::Arc;

use bevy::prelude::*;
use bits_helpers::alpha_mask::AlphaMask;

/// Decoded artwork shared by every sprite drawn with it.
#[derive(Debug)]
pub struct SpriteAsset {
    image: Handle<Image>,
    mask: AlphaMask,
}

impl SpriteAsset {
    pub fn new(image: Handle<Image>, mask: AlphaMask) -> Arc<Self> {
        Arc::new(Self { image, mask })
    }

    pub const fn image(&self) -> &Handle<Image> {
        &self.image
    }

    pub const fn mask(&self) -> &AlphaMask {
        &self.mask
    }

    pub const fn size(&self) -> UVec2 {
        self.mask.size()
    }
}

/// The three pieces of artwork a kitchen is built from.
#[derive(Resource, Debug, Clone)]
pub struct KitchenAssets {
    pub food: Arc<SpriteAsset>,
    pub plate: Arc<SpriteAsset>,
    pub oven: Arc<SpriteAsset>,
}

/// A positioned instance of a [`SpriteAsset`].
///
/// The position is the top-left corner in canvas pixels and is always kept
/// so that the whole sprite stays on the screen.
#[derive(Debug, Clone)]
pub struct KitchenSprite {
    asset: Arc<SpriteAsset>,
    position: IVec2,
    screen: UVec2,
}

impl KitchenSprite {
    pub fn new(asset: Arc<SpriteAsset>, position: IVec2, screen: UVec2) -> Self {
        let mut sprite = Self {
            asset,
            position: IVec2::ZERO,
            screen,
        };
        sprite.move_to(position);
        sprite
    }

    pub const fn position(&self) -> IVec2 {
        self.position
    }

    pub const fn x(&self) -> i32 {
        self.position.x
    }

    pub const fn y(&self) -> i32 {
        self.position.y
    }

    pub fn size(&self) -> UVec2 {
        self.asset.size()
    }

    pub fn image(&self) -> &Handle<Image> {
        self.asset.image()
    }

    /// Pixel-accurate hit test against the alpha mask. Artwork is not
    /// rectangular, so the bounding box alone is not enough.
    pub fn contains_point(&self, point: IVec2) -> bool {
        self.asset.mask().alpha_at(point - self.position) > 0
    }

    /// Moves the sprite, clamping it onto the screen.
    pub fn move_to(&mut self, target: IVec2) {
        let max = (self.screen.as_ivec2() - self.size().as_ivec2()).max(IVec2::ZERO);
        self.position = target.clamp(IVec2::ZERO, max);
    }

    pub fn translate(&mut self, delta: IVec2) {
        self.move_to(self.position + delta);
    }
}
