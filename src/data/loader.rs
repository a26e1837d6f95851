use std::sync::OnceLock;

use egui::ImageSource;
use enum_map::EnumMap;

use crate::data::{
    food::{FoodData, FoodType},
    ingredient::{IngredientData, IngredientType},
    pot::PotType,
};

/// Copied next to the build output by build.rs.
pub const IMAGE_ROOT: &str = "res/images";

fn file_uri(folder: &str, stem: &str) -> ImageSource<'static> {
    ImageSource::Uri(format!("file://{IMAGE_ROOT}/{folder}/{stem}.png").into())
}

/// Instantiated ingredient data
#[derive(Debug, Clone)]
pub struct IngredientInfo {
    pub texture: ImageSource<'static>,
    pub data: &'static IngredientData,
}

/// Instantiated food data
#[derive(Debug, Clone)]
pub struct FoodInfo {
    pub texture: ImageSource<'static>,
    pub data: &'static FoodData,
}

#[derive(Debug, Clone)]
pub struct PotInfo {
    pub texture: ImageSource<'static>,
    /// The empty-slot frame drawn behind the pot's four slots.
    pub slot_texture: ImageSource<'static>,
}

/// Global static catalog info, set once when the app starts
pub static INGREDIENTS: OnceLock<EnumMap<IngredientType, IngredientInfo>> = OnceLock::new();
pub static FOODS: OnceLock<EnumMap<FoodType, FoodInfo>> = OnceLock::new();
pub static POTS: OnceLock<EnumMap<PotType, PotInfo>> = OnceLock::new();

/// Attach icon sources to every catalog row. The actual image decoding
/// happens lazily in egui's loaders.
pub fn init_catalog_info() {
    let ingredients = EnumMap::from_fn(|k: IngredientType| {
        let data = k.get();
        IngredientInfo {
            texture: file_uri("ingredients", data.key),
            data,
        }
    });
    INGREDIENTS.set(ingredients).unwrap();

    let foods = EnumMap::from_fn(|k: FoodType| {
        let data = k.get();
        FoodInfo {
            texture: file_uri("foods", data.key),
            data,
        }
    });
    FOODS.set(foods).unwrap();

    let pots = EnumMap::from_fn(|k: PotType| PotInfo {
        texture: file_uri("ui", k.key()),
        slot_texture: file_uri("ui", &format!("{}_slot", k.key())),
    });
    POTS.set(pots).unwrap();
}
