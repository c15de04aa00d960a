use bevy::prelude::*;
use bits_helpers::input::canvas_to_world;

use crate::config::KitchenConfig;
use crate::kitchen::{DropOutcome, Kitchen};
use crate::pointer::PointerInput;
use crate::scene::{DrawCommand, Scene, Visual};
use crate::sprite::KitchenAssets;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// One sprite per kitchen object; z follows the draw order.
pub fn spawn_visuals(mut commands: Commands, scene: Res<Scene>, config: Res<KitchenConfig>) {
    for (layer, command) in scene.draw_list().into_iter().enumerate() {
        commands.spawn((
            Sprite {
                image: command.image.clone(),
                color: tint(&command),
                custom_size: Some(command.size.as_vec2()),
                ..default()
            },
            Transform::from_translation(translation(&command, layer, config.screen)),
            command.visual,
        ));
    }
}

pub fn restart_kitchen(
    keycode: Res<ButtonInput<KeyCode>>,
    mut scene: ResMut<Scene>,
    assets: Res<KitchenAssets>,
    config: Res<KitchenConfig>,
) {
    if keycode.just_pressed(KeyCode::KeyR) {
        info!("Restarting kitchen");
        scene.restart(Kitchen::lay_out(&config, &assets, &mut fastrand::Rng::new()));
    }
}

pub fn tick_scene(mut scene: ResMut<Scene>, input: Res<PointerInput>) {
    for outcome in scene.update(&input) {
        match outcome {
            DropOutcome::Plated { food, plate } => info!("{food:?} placed on {plate:?}"),
            DropOutcome::Returned { food } => info!("{food:?} returned"),
            DropOutcome::Loaded { plate } => info!("{plate:?} loaded into the oven"),
            DropOutcome::Left { plate } => info!("{plate:?} left on the counter"),
        }
    }
}

pub fn sync_visuals(
    scene: Res<Scene>,
    config: Res<KitchenConfig>,
    mut visuals: Query<(&Visual, &mut Transform, &mut Sprite)>,
) {
    let draw_list = scene.draw_list();
    for (visual, mut transform, mut sprite) in &mut visuals {
        let Some((layer, command)) = draw_list
            .iter()
            .enumerate()
            .find(|(_, command)| command.visual == *visual)
        else {
            continue;
        };
        transform.translation = translation(command, layer, config.screen);
        sprite.color = tint(command);
    }
}

fn translation(command: &DrawCommand, layer: usize, screen: UVec2) -> Vec3 {
    canvas_to_world(command.position, command.size, screen).extend(layer as f32)
}

fn tint(command: &DrawCommand) -> Color {
    Color::srgba(1.0, 1.0, 1.0, command.alpha)
}
