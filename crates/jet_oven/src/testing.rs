use std::sync::Arc;

use bevy::prelude::*;
use bits_helpers::alpha_mask::AlphaMask;

use crate::config::KitchenConfig;
use crate::items::{FoodId, PlateId};
use crate::kitchen::Kitchen;
use crate::sprite::{KitchenAssets, SpriteAsset};

/// Fully opaque rectangle.
pub fn square_asset(size: UVec2) -> Arc<SpriteAsset> {
    SpriteAsset::new(Handle::default(), AlphaMask::from_fn(size, |_| 255))
}

/// Opaque disc inscribed in a `diameter` square; the corners are clear.
pub fn disc_asset(diameter: u32) -> Arc<SpriteAsset> {
    let radius = diameter as f32 / 2.0;
    let mask = AlphaMask::from_fn(UVec2::splat(diameter), |p| {
        let offset = p.as_vec2() + Vec2::splat(0.5) - Vec2::splat(radius);
        if offset.length() <= radius { 255 } else { 0 }
    });
    SpriteAsset::new(Handle::default(), mask)
}

pub fn assets(config: &KitchenConfig) -> KitchenAssets {
    KitchenAssets {
        food: square_asset(config.food_size),
        plate: square_asset(config.plate_size),
        oven: square_asset(config.oven_size),
    }
}

pub const FOOD_START: IVec2 = IVec2::new(500, 400);

/// The default layout with opaque square artwork and the food parked in
/// the bottom-right corner, away from plates and oven.
pub fn kitchen() -> Kitchen {
    let config = KitchenConfig::default();
    let mut kitchen = Kitchen::lay_out(&config, &assets(&config), &mut fastrand::Rng::with_seed(7));
    kitchen.drag_to(crate::items::Item::Food(FOOD), FOOD_START);
    kitchen
}

pub const FOOD: FoodId = FoodId(0);
pub const PLATES: [PlateId; 3] = [PlateId(0), PlateId(1), PlateId(2)];
