use bevy::prelude::*;

pub fn cursor_screen_position(windows: &Query<&Window>) -> Option<Vec2> {
    windows.get_single().ok()?.cursor_position()
}

pub fn screen_to_world_position(
    camera: &Query<(&Camera, &GlobalTransform)>,
    position: Vec2,
) -> Option<Vec2> {
    let (camera, camera_transform) = camera.get_single().ok()?;

    camera
        .viewport_to_world(camera_transform, position)
        .map(|ray| ray.origin.truncate())
        .ok()
}

pub fn cursor_world_position(
    windows: &Query<&Window>,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let position = cursor_screen_position(windows)?;
    screen_to_world_position(camera, position)
}

/// Maps a world position (origin at the centre, y up) to integer canvas
/// pixels (origin at the top-left corner, y down).
pub fn world_to_canvas(world: Vec2, canvas: UVec2) -> IVec2 {
    let half = canvas.as_vec2() / 2.0;
    Vec2::new(world.x + half.x, half.y - world.y)
        .floor()
        .as_ivec2()
}

/// Returns the world-space centre of a canvas rectangle given by its
/// top-left corner and size.
pub fn canvas_to_world(top_left: IVec2, size: UVec2, canvas: UVec2) -> Vec2 {
    let half = canvas.as_vec2() / 2.0;
    let center = top_left.as_vec2() + size.as_vec2() / 2.0;
    Vec2::new(center.x - half.x, half.y - center.y)
}
