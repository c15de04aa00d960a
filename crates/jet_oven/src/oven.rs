use bevy::prelude::*;

use crate::items::{Draggable, Food, Plate, PlateId};
use crate::sprite::KitchenSprite;

/// The jet oven: a conveyor that carries plates to the right and ejects
/// them once they have travelled far enough.
///
/// Plates riding the oven are never draggable.
#[derive(Debug, Clone)]
pub struct Oven {
    sprite: KitchenSprite,
    plates: Vec<PlateId>,
    velocity: i32,
    eject_distance: i32,
}

impl Oven {
    pub const fn new(sprite: KitchenSprite, velocity: i32, eject_distance: i32) -> Self {
        Self {
            sprite,
            plates: Vec::new(),
            velocity,
            eject_distance,
        }
    }

    pub const fn sprite(&self) -> &KitchenSprite {
        &self.sprite
    }

    /// Riding plates in loading order.
    pub fn plates(&self) -> &[PlateId] {
        &self.plates
    }

    pub fn carries(&self, plate: PlateId) -> bool {
        self.plates.contains(&plate)
    }

    /// Returns false if the plate was already riding.
    pub fn load(&mut self, plate: PlateId) -> bool {
        if self.carries(plate) {
            return false;
        }
        self.plates.push(plate);
        true
    }

    pub fn unload(&mut self, plate: PlateId) -> bool {
        let Some(index) = self.plates.iter().position(|&p| p == plate) else {
            return false;
        };
        self.plates.remove(index);
        true
    }

    /// A riding plate whose x passes this line is ejected.
    pub const fn eject_line(&self) -> i32 {
        self.sprite.x() + self.eject_distance
    }

    /// Moves every riding plate, and the food on it, one step along the
    /// belt. Plates past the eject line are unloaded, made draggable again
    /// and returned.
    pub fn advance(&mut self, plates: &mut [Plate], foods: &mut [Food]) -> Vec<PlateId> {
        let delta = IVec2::new(self.velocity, 0);
        let eject_line = self.eject_line();
        let mut ejected = Vec::new();

        for &plate_id in &self.plates {
            let Some(plate) = plates.get_mut(plate_id.0) else {
                continue;
            };
            plate.sprite_mut().translate(delta);
            let placed = plate.sprite().position();
            for food_id in plate.foods() {
                if let Some(food) = foods.get_mut(food_id.0) {
                    food.sprite_mut().move_to(placed);
                }
            }

            if plate.sprite().x() > eject_line {
                plate.set_draggable(true);
                ejected.push(plate_id);
            }
        }

        self.plates.retain(|plate| !ejected.contains(plate));
        ejected
    }
}
