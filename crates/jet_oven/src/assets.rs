use std::sync::Arc;

use bevy::asset::LoadState;
use bevy::prelude::*;
use bits_helpers::alpha_mask::{AlphaMask, MaskError};
use strum::{Display, EnumIter, IntoEnumIterator};
use thiserror::Error;

use crate::GameState;
use crate::config::KitchenConfig;
use crate::kitchen::Kitchen;
use crate::scene::Scene;
use crate::sprite::{KitchenAssets, SpriteAsset};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SpriteKind {
    Food,
    Plate,
    Oven,
}

impl SpriteKind {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Food => "images/cook.png",
            Self::Plate => "images/plate.png",
            Self::Oven => "images/oven.png",
        }
    }

    /// Size the artwork is drawn and hit tested at.
    pub const fn size(self, config: &KitchenConfig) -> UVec2 {
        match self {
            Self::Food => config.food_size,
            Self::Plate => config.plate_size,
            Self::Oven => config.oven_size,
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to load {kind} image: {reason}")]
    Image { kind: SpriteKind, reason: String },

    #[error("{kind} image disappeared while building its mask")]
    Missing { kind: SpriteKind },

    #[error("Failed to build {kind} mask: {source}")]
    Mask {
        kind: SpriteKind,
        #[source]
        source: MaskError,
    },
}

#[derive(Resource, Debug)]
pub struct KitchenImages {
    food: Handle<Image>,
    plate: Handle<Image>,
    oven: Handle<Image>,
}

impl KitchenImages {
    pub const fn handle(&self, kind: SpriteKind) -> &Handle<Image> {
        match kind {
            SpriteKind::Food => &self.food,
            SpriteKind::Plate => &self.plate,
            SpriteKind::Oven => &self.oven,
        }
    }
}

pub fn load_kitchen_images(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(KitchenImages {
        food: asset_server.load(SpriteKind::Food.path()),
        plate: asset_server.load(SpriteKind::Plate.path()),
        oven: asset_server.load(SpriteKind::Oven.path()),
    });
}

/// Waits for every image to decode, then builds the kitchen. Any failure
/// here is fatal.
pub fn finish_loading(
    mut commands: Commands,
    kitchen_images: Res<KitchenImages>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    config: Res<KitchenConfig>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    match prepare_assets(&kitchen_images, &asset_server, &images, &config) {
        Ok(None) => {}
        Ok(Some(assets)) => {
            info!("Kitchen assets ready");
            let kitchen = Kitchen::lay_out(&config, &assets, &mut fastrand::Rng::new());
            commands.insert_resource(Scene::new(kitchen, config.dragged_alpha));
            commands.insert_resource(assets);
            next_state.set(GameState::Playing);
        }
        Err(err) => {
            error!("{err}");
            exit.send(AppExit::error());
        }
    }
}

/// `Ok(None)` while images are still loading.
fn prepare_assets(
    kitchen_images: &KitchenImages,
    asset_server: &AssetServer,
    images: &Assets<Image>,
    config: &KitchenConfig,
) -> Result<Option<KitchenAssets>, LoadError> {
    for kind in SpriteKind::iter() {
        let handle = kitchen_images.handle(kind);
        if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle) {
            return Err(LoadError::Image {
                kind,
                reason: err.to_string(),
            });
        }
        if images.get(handle).is_none() {
            return Ok(None);
        }
    }

    let asset = |kind: SpriteKind| -> Result<Arc<SpriteAsset>, LoadError> {
        let handle = kitchen_images.handle(kind);
        let image = images.get(handle).ok_or(LoadError::Missing { kind })?;
        let mask = AlphaMask::from_image(image, kind.size(config))
            .map_err(|source| LoadError::Mask { kind, source })?;
        Ok(SpriteAsset::new(handle.clone(), mask))
    };

    Ok(Some(KitchenAssets {
        food: asset(SpriteKind::Food)?,
        plate: asset(SpriteKind::Plate)?,
        oven: asset(SpriteKind::Oven)?,
    }))
}
