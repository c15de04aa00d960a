//! Pointer sources and the per-frame pointer snapshot.
//!
//! Bevy's mouse and touch resources are read once per frame into a
//! [`PointerInput`]; everything downstream works on canvas coordinates and
//! press edges only.

use bevy::input::touch::Touches;
use bevy::prelude::*;
use bits_helpers::input::{cursor_world_position, screen_to_world_position, world_to_canvas};

use crate::config::KitchenConfig;

/// A mouse cursor or a single touch contact. Touch ids are stable for the
/// life of the contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Cursor,
    Touch(u64),
}

impl PointerSource {
    /// Canvas position this frame, if the pointer is visible.
    pub fn position(self, input: &PointerInput) -> Option<IVec2> {
        match self {
            Self::Cursor => input.cursor,
            Self::Touch(id) => input.touch(id).map(|touch| touch.position),
        }
    }

    /// True only on the frame the button or finger is lifted.
    pub fn just_released(self, input: &PointerInput) -> bool {
        match self {
            Self::Cursor => input.button.is_just_released(),
            Self::Touch(id) => input
                .touch(id)
                .is_some_and(|touch| touch.edge.is_just_released()),
        }
    }
}

/// Press state of a button or contact for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressEdge {
    #[default]
    Up,
    JustPressed,
    Held,
    JustReleased,
    /// Pressed and released within the same frame.
    Tapped,
}

impl PressEdge {
    pub const fn from_flags(just_pressed: bool, held: bool, just_released: bool) -> Self {
        match (just_pressed, just_released) {
            (true, true) => Self::Tapped,
            (true, false) => Self::JustPressed,
            (false, true) => Self::JustReleased,
            (false, false) if held => Self::Held,
            (false, false) => Self::Up,
        }
    }

    pub const fn is_just_pressed(self) -> bool {
        matches!(self, Self::JustPressed | Self::Tapped)
    }

    pub const fn is_just_released(self) -> bool {
        matches!(self, Self::JustReleased | Self::Tapped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchContact {
    pub id: u64,
    pub position: IVec2,
    pub edge: PressEdge,
}

/// Everything the kitchen needs to know about pointers for one frame.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerInput {
    cursor: Option<IVec2>,
    button: PressEdge,
    touches: Vec<TouchContact>,
}

impl PointerInput {
    #[must_use]
    pub fn with_cursor(mut self, position: Option<IVec2>, edge: PressEdge) -> Self {
        self.cursor = position;
        self.button = edge;
        self
    }

    #[must_use]
    pub fn with_touch(mut self, id: u64, position: IVec2, edge: PressEdge) -> Self {
        self.touches.retain(|touch| touch.id != id);
        self.touches.push(TouchContact { id, position, edge });
        self
    }

    pub fn touch(&self, id: u64) -> Option<&TouchContact> {
        self.touches.iter().find(|touch| touch.id == id)
    }

    /// Pointers that went down this frame: the cursor first, then touches
    /// in the order they were reported.
    pub fn just_pressed(&self) -> Vec<PointerSource> {
        let cursor = (self.button.is_just_pressed() && self.cursor.is_some())
            .then_some(PointerSource::Cursor);
        cursor
            .into_iter()
            .chain(
                self.touches
                    .iter()
                    .filter(|touch| touch.edge.is_just_pressed())
                    .map(|touch| PointerSource::Touch(touch.id)),
            )
            .collect()
    }
}

/// Snapshots mouse and touch state into [`PointerInput`] in canvas pixels.
pub fn capture_pointers(
    mut input: ResMut<PointerInput>,
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    config: Res<KitchenConfig>,
) {
    let to_canvas = |world: Vec2| world_to_canvas(world, config.screen);

    let cursor = cursor_world_position(&windows, &camera).map(to_canvas);
    let button = PressEdge::from_flags(
        buttons.just_pressed(MouseButton::Left),
        buttons.pressed(MouseButton::Left),
        buttons.just_released(MouseButton::Left),
    );
    let mut snapshot = PointerInput::default().with_cursor(cursor, button);

    // A cancelled contact ends its drag just like a lifted finger.
    let contacts = touches
        .iter()
        .chain(touches.iter_just_released())
        .chain(touches.iter_just_canceled());
    for touch in contacts {
        let id = touch.id();
        if snapshot.touch(id).is_some() {
            continue;
        }
        let Some(world) = screen_to_world_position(&camera, touch.position()) else {
            continue;
        };
        let edge = PressEdge::from_flags(
            touches.just_pressed(id),
            touches.get_pressed(id).is_some(),
            touches.just_released(id) || touches.just_canceled(id),
        );
        snapshot = snapshot.with_touch(id, to_canvas(world), edge);
    }

    *input = snapshot;
}
