use crate::sprite::KitchenSprite;

/// Index of a [`Food`] in the kitchen arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FoodId(pub usize);

/// Index of a [`Plate`] in the kitchen arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlateId(pub usize);

/// Anything a pointer can pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    Food(FoodId),
    Plate(PlateId),
}

/// Shared surface of the pickable kinds.
pub trait Draggable {
    fn sprite(&self) -> &KitchenSprite;
    fn sprite_mut(&mut self) -> &mut KitchenSprite;
    /// Held by an active stroke.
    fn dragged(&self) -> bool;
    fn set_dragged(&mut self, dragged: bool);
    /// Eligible for pickup.
    fn draggable(&self) -> bool;
    fn set_draggable(&mut self, draggable: bool);
}

#[derive(Debug, Clone)]
pub struct Food {
    sprite: KitchenSprite,
    dragged: bool,
    draggable: bool,
}

impl Food {
    pub const fn new(sprite: KitchenSprite) -> Self {
        Self {
            sprite,
            dragged: false,
            draggable: true,
        }
    }
}

impl Draggable for Food {
    fn sprite(&self) -> &KitchenSprite {
        &self.sprite
    }

    fn sprite_mut(&mut self) -> &mut KitchenSprite {
        &mut self.sprite
    }

    fn dragged(&self) -> bool {
        self.dragged
    }

    fn set_dragged(&mut self, dragged: bool) {
        self.dragged = dragged;
    }

    fn draggable(&self) -> bool {
        self.draggable
    }

    fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }
}

/// A plate starts out fixed in place; it becomes pickable once food lands
/// on it or the oven spits it out.
#[derive(Debug, Clone)]
pub struct Plate {
    sprite: KitchenSprite,
    foods: Vec<FoodId>,
    dragged: bool,
    draggable: bool,
}

impl Plate {
    pub const fn new(sprite: KitchenSprite) -> Self {
        Self {
            sprite,
            foods: Vec::new(),
            dragged: false,
            draggable: false,
        }
    }

    /// Foods on the plate in arrival order.
    pub fn foods(&self) -> &[FoodId] {
        &self.foods
    }

    pub fn holds(&self, food: FoodId) -> bool {
        self.foods.contains(&food)
    }

    /// Returns false if the food was already on the plate.
    pub fn add_food(&mut self, food: FoodId) -> bool {
        if self.holds(food) {
            return false;
        }
        self.foods.push(food);
        true
    }

    pub fn remove_food(&mut self, food: FoodId) -> bool {
        let Some(index) = self.foods.iter().position(|&f| f == food) else {
            return false;
        };
        self.foods.remove(index);
        true
    }
}

impl Draggable for Plate {
    fn sprite(&self) -> &KitchenSprite {
        &self.sprite
    }

    fn sprite_mut(&mut self) -> &mut KitchenSprite {
        &mut self.sprite
    }

    fn dragged(&self) -> bool {
        self.dragged
    }

    fn set_dragged(&mut self, dragged: bool) {
        self.dragged = dragged;
    }

    fn draggable(&self) -> bool {
        self.draggable
    }

    fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }
}
