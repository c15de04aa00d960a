use bevy::prelude::*;

pub mod assets;
pub mod config;
pub mod gameplay;
pub mod items;
pub mod kitchen;
pub mod oven;
pub mod pointer;
pub mod scene;
pub mod sprite;
pub mod stroke;

#[cfg(test)]
mod testing;

use assets::{finish_loading, load_kitchen_images};
use config::{KitchenConfig, SCREEN_SIZE};
use gameplay::{restart_kitchen, setup_camera, spawn_visuals, sync_visuals, tick_scene};
use pointer::{PointerInput, capture_pointers};

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
}

pub struct JetOvenPlugin;

impl Plugin for JetOvenPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<KitchenConfig>()
            .init_resource::<PointerInput>()
            .add_systems(Startup, (setup_camera, load_kitchen_images))
            // Loading state
            .add_systems(
                Update,
                finish_loading.run_if(in_state(GameState::Loading)),
            )
            // Playing state
            .add_systems(OnEnter(GameState::Playing), spawn_visuals)
            .add_systems(
                Update,
                (capture_pointers, restart_kitchen, tick_scene, sync_visuals)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

pub fn run() -> AppExit {
    bits_helpers::get_default_app(env!("CARGO_PKG_NAME"), SCREEN_SIZE)
        .add_plugins(JetOvenPlugin)
        .run()
}
