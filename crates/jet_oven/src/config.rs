use bevy::prelude::*;

pub const SCREEN_SIZE: UVec2 = UVec2::new(640, 480);

pub const FOOD_SIZE: UVec2 = UVec2::new(50, 50);
pub const FOOD_COUNT: usize = 1;

pub const PLATE_SIZE: UVec2 = UVec2::new(60, 60);
pub const PLATE_POSITIONS: [IVec2; 3] = [
    IVec2::new(100, 100),
    IVec2::new(200, 200),
    IVec2::new(300, 300),
];

pub const OVEN_SIZE: UVec2 = UVec2::new(300, 200);
pub const OVEN_POSITION: IVec2 = IVec2::new(50, 50);
pub const OVEN_VELOCITY: i32 = 1; // Pixels per frame
pub const EJECT_DISTANCE: i32 = 200; // Plates leave once past oven.x + this

pub const DRAGGED_ALPHA: f32 = 0.5;

/// Layout and tuning of the kitchen. Positions are canvas pixels, origin
/// at the top-left corner.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct KitchenConfig {
    pub screen: UVec2,
    pub food_size: UVec2,
    pub food_count: usize,
    pub plate_size: UVec2,
    pub plate_positions: Vec<IVec2>,
    pub oven_size: UVec2,
    pub oven_position: IVec2,
    pub oven_velocity: i32,
    pub eject_distance: i32,
    pub dragged_alpha: f32,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            screen: SCREEN_SIZE,
            food_size: FOOD_SIZE,
            food_count: FOOD_COUNT,
            plate_size: PLATE_SIZE,
            plate_positions: PLATE_POSITIONS.to_vec(),
            oven_size: OVEN_SIZE,
            oven_position: OVEN_POSITION,
            oven_velocity: OVEN_VELOCITY,
            eject_distance: EJECT_DISTANCE,
            dragged_alpha: DRAGGED_ALPHA,
        }
    }
}
