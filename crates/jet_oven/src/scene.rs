use bevy::prelude::*;

use crate::items::{Draggable, FoodId, Item, PlateId};
use crate::kitchen::{DropOutcome, Kitchen};
use crate::pointer::{PointerInput, PointerSource};
use crate::stroke::Stroke;

/// What a drawn sprite stands for.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visual {
    Food(FoodId),
    Plate(PlateId),
    Oven,
}

#[derive(Debug, Clone)]
pub struct DrawCommand {
    pub visual: Visual,
    pub image: Handle<Image>,
    pub position: IVec2,
    pub size: UVec2,
    pub alpha: f32,
}

/// The kitchen and every drag in progress.
#[derive(Resource, Debug)]
pub struct Scene {
    kitchen: Kitchen,
    strokes: Vec<Stroke>,
    dragged_alpha: f32,
}

impl Scene {
    pub const fn new(kitchen: Kitchen, dragged_alpha: f32) -> Self {
        Self {
            kitchen,
            strokes: Vec::new(),
            dragged_alpha,
        }
    }

    pub const fn kitchen(&self) -> &Kitchen {
        &self.kitchen
    }

    pub const fn kitchen_mut(&mut self) -> &mut Kitchen {
        &mut self.kitchen
    }

    /// Active strokes in the order they started.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Replaces the kitchen and forgets every drag in progress.
    pub fn restart(&mut self, kitchen: Kitchen) {
        self.kitchen = kitchen;
        self.strokes.clear();
    }

    /// Starts a stroke if `source` went down over a pickable item. A pointer
    /// drives at most one stroke at a time.
    pub fn press(&mut self, source: PointerSource, input: &PointerInput) -> Option<Item> {
        if self.strokes.iter().any(|stroke| stroke.source() == source) {
            return None;
        }
        let point = source.position(input)?;
        let item = self.kitchen.item_at(point)?;
        let stroke = Stroke::begin(source, item, &mut self.kitchen, input)?;
        debug!("{source:?} picked up {item:?} at {point}");
        self.strokes.push(stroke);
        Some(item)
    }

    /// One frame: pick up under new presses, run the oven, move dragged items
    /// and drop released ones. Returns the drops that happened.
    pub fn update(&mut self, input: &PointerInput) -> Vec<DropOutcome> {
        for source in input.just_pressed() {
            self.press(source, input);
        }

        for plate in self.kitchen.advance_oven() {
            info!("Oven ejected {plate:?}");
        }

        let outcomes: Vec<_> = self
            .strokes
            .iter_mut()
            .filter_map(|stroke| stroke.update(&mut self.kitchen, input))
            .collect();

        let kitchen = &self.kitchen;
        self.strokes.retain(|stroke| kitchen.is_dragged(stroke.item()));

        outcomes
    }

    /// Sprites back to front: plates, food, then the oven on top.
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        let kitchen = &self.kitchen;
        let alpha = |dragged: bool| {
            if dragged {
                self.dragged_alpha
            } else {
                1.0
            }
        };

        let plates = kitchen.plate_ids().zip(kitchen.plates()).map(|(id, plate)| DrawCommand {
            visual: Visual::Plate(id),
            image: plate.sprite().image().clone(),
            position: plate.sprite().position(),
            size: plate.sprite().size(),
            alpha: alpha(plate.dragged()),
        });
        let foods = kitchen.food_ids().zip(kitchen.foods()).map(|(id, food)| DrawCommand {
            visual: Visual::Food(id),
            image: food.sprite().image().clone(),
            position: food.sprite().position(),
            size: food.sprite().size(),
            alpha: alpha(food.dragged()),
        });
        let oven = kitchen.oven().sprite();
        let oven = DrawCommand {
            visual: Visual::Oven,
            image: oven.image().clone(),
            position: oven.position(),
            size: oven.size(),
            alpha: 1.0,
        };

        plates.chain(foods).chain(std::iter::once(oven)).collect()
    }
}
