use bevy::prelude::*;

use crate::config::KitchenConfig;
use crate::items::{Draggable, Food, FoodId, Item, Plate, PlateId};
use crate::oven::Oven;
use crate::sprite::{KitchenAssets, KitchenSprite};

/// How a drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Food landed on a plate.
    Plated { food: FoodId, plate: PlateId },
    /// Food missed every plate and went back where it was picked up.
    Returned { food: FoodId },
    /// Plate was put on the oven.
    Loaded { plate: PlateId },
    /// Plate was dropped somewhere else and stays there.
    Left { plate: PlateId },
}

/// Arena owning every object in the kitchen. Plates refer to their food and
/// the oven to its plates by id, so moving something between containers is
/// just a change of ids.
#[derive(Debug, Clone)]
pub struct Kitchen {
    foods: Vec<Food>,
    plates: Vec<Plate>,
    oven: Oven,
}

impl Kitchen {
    pub const fn new(oven: Oven) -> Self {
        Self {
            foods: Vec::new(),
            plates: Vec::new(),
            oven,
        }
    }

    /// Builds the starting layout: food at random on-screen positions,
    /// plates at their configured spots and an empty oven.
    pub fn lay_out(config: &KitchenConfig, assets: &KitchenAssets, rng: &mut fastrand::Rng) -> Self {
        let screen = config.screen;
        let oven = Oven::new(
            KitchenSprite::new(assets.oven.clone(), config.oven_position, screen),
            config.oven_velocity,
            config.eject_distance,
        );
        let mut kitchen = Self::new(oven);

        let room = (screen.as_ivec2() - assets.food.size().as_ivec2()).max(IVec2::ONE);
        for _ in 0..config.food_count {
            let position = IVec2::new(rng.i32(0..room.x), rng.i32(0..room.y));
            kitchen.add_food(Food::new(KitchenSprite::new(
                assets.food.clone(),
                position,
                screen,
            )));
        }

        for &position in &config.plate_positions {
            kitchen.add_plate(Plate::new(KitchenSprite::new(
                assets.plate.clone(),
                position,
                screen,
            )));
        }

        kitchen
    }

    pub fn add_food(&mut self, food: Food) -> FoodId {
        self.foods.push(food);
        FoodId(self.foods.len() - 1)
    }

    pub fn add_plate(&mut self, plate: Plate) -> PlateId {
        self.plates.push(plate);
        PlateId(self.plates.len() - 1)
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    pub fn food_ids(&self) -> impl Iterator<Item = FoodId> {
        (0..self.foods.len()).map(FoodId)
    }

    pub fn plate_ids(&self) -> impl Iterator<Item = PlateId> {
        (0..self.plates.len()).map(PlateId)
    }

    pub fn food(&self, id: FoodId) -> Option<&Food> {
        self.foods.get(id.0)
    }

    pub fn plate(&self, id: PlateId) -> Option<&Plate> {
        self.plates.get(id.0)
    }

    pub fn plate_mut(&mut self, id: PlateId) -> Option<&mut Plate> {
        self.plates.get_mut(id.0)
    }

    pub const fn oven(&self) -> &Oven {
        &self.oven
    }

    pub fn item(&self, item: Item) -> Option<&dyn Draggable> {
        match item {
            Item::Food(id) => self.foods.get(id.0).map(|food| food as &dyn Draggable),
            Item::Plate(id) => self.plates.get(id.0).map(|plate| plate as &dyn Draggable),
        }
    }

    pub fn item_mut(&mut self, item: Item) -> Option<&mut dyn Draggable> {
        match item {
            Item::Food(id) => self
                .foods
                .get_mut(id.0)
                .map(|food| food as &mut dyn Draggable),
            Item::Plate(id) => self
                .plates
                .get_mut(id.0)
                .map(|plate| plate as &mut dyn Draggable),
        }
    }

    pub fn position(&self, item: Item) -> Option<IVec2> {
        self.item(item).map(|item| item.sprite().position())
    }

    pub fn is_dragged(&self, item: Item) -> bool {
        self.item(item).is_some_and(|item| item.dragged())
    }

    pub fn set_dragged(&mut self, item: Item, dragged: bool) {
        if let Some(item) = self.item_mut(item) {
            item.set_dragged(dragged);
        }
    }

    /// Topmost pickable item under `point`: food is tested first, then
    /// plates, each in declaration order.
    pub fn item_at(&self, point: IVec2) -> Option<Item> {
        let food = self
            .food_ids()
            .find(|&id| self.food(id).is_some_and(|food| pickable(food, point)))
            .map(Item::Food);
        food.or_else(|| {
            self.plate_ids()
                .find(|&id| self.plate(id).is_some_and(|plate| pickable(plate, point)))
                .map(Item::Plate)
        })
    }

    /// Moves a dragged item. Food on a plate follows to wherever the plate
    /// ends up after clamping, so it stays nested.
    pub fn drag_to(&mut self, item: Item, target: IVec2) {
        match item {
            Item::Food(id) => {
                if let Some(food) = self.foods.get_mut(id.0) {
                    food.sprite_mut().move_to(target);
                }
            }
            Item::Plate(id) => {
                let Some(plate) = self.plates.get_mut(id.0) else {
                    return;
                };
                plate.sprite_mut().move_to(target);
                let placed = plate.sprite().position();
                for food_id in plate.foods() {
                    if let Some(food) = self.foods.get_mut(food_id.0) {
                        food.sprite_mut().move_to(placed);
                    }
                }
            }
        }
    }

    /// Ends the drag of `item` released at `point`. `origin` is where the
    /// item was picked up.
    pub fn drop_item(&mut self, item: Item, point: IVec2, origin: IVec2) -> DropOutcome {
        self.set_dragged(item, false);
        match item {
            Item::Food(food) => self.drop_food(food, point, origin),
            Item::Plate(plate) => self.drop_plate(plate, point),
        }
    }

    /// The first plate, in declaration order, whose artwork covers `point`
    /// takes the food.
    fn drop_food(&mut self, food_id: FoodId, point: IVec2, origin: IVec2) -> DropOutcome {
        let target = self
            .plate_ids()
            .find(|&id| self.plate(id).is_some_and(|plate| plate.sprite().contains_point(point)));

        let Some(plate_id) = target else {
            self.drag_to(Item::Food(food_id), origin);
            return DropOutcome::Returned { food: food_id };
        };

        let riding = self.oven.carries(plate_id);
        let Some(plate) = self.plates.get_mut(plate_id.0) else {
            return DropOutcome::Returned { food: food_id };
        };
        plate.add_food(food_id);
        // A plate on the belt only becomes pickable once it is ejected.
        if !riding {
            plate.set_draggable(true);
        }
        let plate_position = plate.sprite().position();

        if let Some(food) = self.foods.get_mut(food_id.0) {
            food.sprite_mut().move_to(plate_position);
            food.set_draggable(false);
        }

        DropOutcome::Plated {
            food: food_id,
            plate: plate_id,
        }
    }

    fn drop_plate(&mut self, plate_id: PlateId, point: IVec2) -> DropOutcome {
        if !self.oven.sprite().contains_point(point) {
            return DropOutcome::Left { plate: plate_id };
        }
        let Some(plate) = self.plates.get_mut(plate_id.0) else {
            return DropOutcome::Left { plate: plate_id };
        };
        plate.set_draggable(false);
        self.oven.load(plate_id);
        DropOutcome::Loaded { plate: plate_id }
    }

    /// Runs the oven belt for one frame and returns the plates it ejected.
    pub fn advance_oven(&mut self) -> Vec<PlateId> {
        self.oven.advance(&mut self.plates, &mut self.foods)
    }
}

// Held items are skipped so no item is driven by two strokes.
fn pickable(item: &impl Draggable, point: IVec2) -> bool {
    item.draggable() && !item.dragged() && item.sprite().contains_point(point)
}
