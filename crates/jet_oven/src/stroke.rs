use bevy::prelude::*;

use crate::items::Item;
use crate::kitchen::{DropOutcome, Kitchen};
use crate::pointer::{PointerInput, PointerSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    Dragging,
    Resolved,
}

/// One drag gesture, from pickup to drop.
#[derive(Debug, Clone)]
pub struct Stroke {
    source: PointerSource,
    item: Item,
    // Pointer position minus item position at pickup, constant for the gesture.
    offset: IVec2,
    // Item position at pickup, used to send food back on a miss.
    origin: IVec2,
    last_point: IVec2,
    state: StrokeState,
}

impl Stroke {
    /// Picks `item` up with `source`. Returns `None` if the pointer has no
    /// position this frame or the item does not exist.
    pub fn begin(
        source: PointerSource,
        item: Item,
        kitchen: &mut Kitchen,
        input: &PointerInput,
    ) -> Option<Self> {
        let point = source.position(input)?;
        let origin = kitchen.position(item)?;
        kitchen.set_dragged(item, true);
        Some(Self {
            source,
            item,
            offset: point - origin,
            origin,
            last_point: point,
            state: StrokeState::Dragging,
        })
    }

    pub const fn source(&self) -> PointerSource {
        self.source
    }

    pub const fn item(&self) -> Item {
        self.item
    }

    pub const fn offset(&self) -> IVec2 {
        self.offset
    }

    pub const fn origin(&self) -> IVec2 {
        self.origin
    }

    pub const fn state(&self) -> StrokeState {
        self.state
    }

    /// Follows the pointer for one frame. On release the item is dropped
    /// and the outcome returned; the stroke is then resolved and inert.
    pub fn update(&mut self, kitchen: &mut Kitchen, input: &PointerInput) -> Option<DropOutcome> {
        if self.state == StrokeState::Resolved {
            return None;
        }
        if !kitchen.is_dragged(self.item) {
            self.state = StrokeState::Resolved;
            return None;
        }

        // Keep the last known point when the pointer drops out for a frame.
        if let Some(point) = self.source.position(input) {
            self.last_point = point;
        }

        if self.source.just_released(input) {
            self.state = StrokeState::Resolved;
            return Some(kitchen.drop_item(self.item, self.last_point, self.origin));
        }

        kitchen.drag_to(self.item, self.last_point - self.offset);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PressEdge;
    use crate::testing::{FOOD, FOOD_START, PLATES, kitchen};

    fn cursor(x: i32, y: i32, edge: PressEdge) -> PointerInput {
        PointerInput::default().with_cursor(Some(IVec2::new(x, y)), edge)
    }

    #[test]
    fn begin_marks_item_dragged_and_records_offset() {
        let mut kitchen = kitchen();
        let stroke = Stroke::begin(
            PointerSource::Cursor,
            Item::Food(FOOD),
            &mut kitchen,
            &cursor(510, 420, PressEdge::JustPressed),
        )
        .expect("cursor is visible");

        assert!(kitchen.is_dragged(Item::Food(FOOD)), "picked up");
        assert_eq!(stroke.offset(), IVec2::new(10, 20), "pointer minus item");
        assert_eq!(stroke.origin(), FOOD_START, "pickup position");
        assert_eq!(stroke.state(), StrokeState::Dragging, "initial state");
    }

    #[test]
    fn begin_without_pointer_position_does_nothing() {
        let mut kitchen = kitchen();
        let input = PointerInput::default().with_cursor(None, PressEdge::JustPressed);
        let stroke = Stroke::begin(PointerSource::Cursor, Item::Food(FOOD), &mut kitchen, &input);
        assert!(stroke.is_none(), "no position, no stroke");
        assert!(!kitchen.is_dragged(Item::Food(FOOD)), "item untouched");
    }

    #[test]
    fn update_follows_pointer_keeping_offset_and_clamps() {
        let mut kitchen = kitchen();
        let mut stroke = Stroke::begin(
            PointerSource::Cursor,
            Item::Food(FOOD),
            &mut kitchen,
            &cursor(510, 420, PressEdge::JustPressed),
        )
        .expect("cursor is visible");

        stroke.update(&mut kitchen, &cursor(200, 120, PressEdge::Held));
        assert_eq!(kitchen.position(Item::Food(FOOD)), Some(IVec2::new(190, 100)), "follows");

        stroke.update(&mut kitchen, &cursor(-300, 9000, PressEdge::Held));
        assert_eq!(kitchen.position(Item::Food(FOOD)), Some(IVec2::new(0, 430)), "clamped");
    }

    #[test]
    fn missing_pointer_leaves_item_in_place() {
        let mut kitchen = kitchen();
        let mut stroke = Stroke::begin(
            PointerSource::Touch(5),
            Item::Food(FOOD),
            &mut kitchen,
            &PointerInput::default().with_touch(5, IVec2::new(505, 405), PressEdge::JustPressed),
        )
        .expect("touch is visible");

        stroke.update(
            &mut kitchen,
            &PointerInput::default().with_touch(5, IVec2::new(305, 305), PressEdge::Held),
        );
        stroke.update(&mut kitchen, &PointerInput::default());

        assert_eq!(kitchen.position(Item::Food(FOOD)), Some(IVec2::new(300, 300)), "held");
        assert_eq!(stroke.state(), StrokeState::Dragging, "still dragging");
    }

    #[test]
    fn release_resolves_on_the_same_frame() {
        let mut kitchen = kitchen();
        let mut stroke = Stroke::begin(
            PointerSource::Cursor,
            Item::Food(FOOD),
            &mut kitchen,
            &cursor(510, 410, PressEdge::JustPressed),
        )
        .expect("cursor is visible");
        stroke.update(&mut kitchen, &cursor(20, 460, PressEdge::Held));

        let outcome = stroke.update(&mut kitchen, &cursor(20, 460, PressEdge::JustReleased));

        assert_eq!(outcome, Some(DropOutcome::Returned { food: FOOD }), "missed plates");
        assert!(!kitchen.is_dragged(Item::Food(FOOD)), "released");
        assert_eq!(kitchen.position(Item::Food(FOOD)), Some(FOOD_START), "snapped back");
        assert_eq!(stroke.state(), StrokeState::Resolved, "terminal");
        assert_eq!(
            stroke.update(&mut kitchen, &cursor(100, 100, PressEdge::Held)),
            None,
            "resolved strokes do nothing"
        );
        assert_eq!(kitchen.position(Item::Food(FOOD)), Some(FOOD_START), "not moved again");
    }

    #[test]
    fn release_uses_last_known_point_when_pointer_vanishes() {
        let mut kitchen = kitchen();
        let mut stroke = Stroke::begin(
            PointerSource::Cursor,
            Item::Food(FOOD),
            &mut kitchen,
            &cursor(510, 410, PressEdge::JustPressed),
        )
        .expect("cursor is visible");
        stroke.update(&mut kitchen, &cursor(330, 330, PressEdge::Held));

        let outcome = stroke.update(
            &mut kitchen,
            &PointerInput::default().with_cursor(None, PressEdge::JustReleased),
        );

        assert_eq!(
            outcome,
            Some(DropOutcome::Plated {
                food: FOOD,
                plate: PLATES[2]
            }),
            "dropped where the cursor was last seen"
        );
    }
}
