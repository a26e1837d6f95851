use std::sync::LazyLock;

use enum_map::{Enum, EnumMap};

use crate::i18n::Language;

#[derive(Enum, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FoodType {
    Meatballs,
    MeatyStew,
    Ratatouille,
    FruitMedley,
    ButterflyMuffin,
    FroggleBunwich,
    DragonPie,
    StuffedEggplant,
    Perogies,
    HoneyNuggets,
    HoneyHam,
    Kabobs,
    FishTacos,
    Fishsticks,
    Waffles,
    MonsterLasagna,
    BaconAndEggs,
    MandrakeSoup,
    TurkeyDinner,
    PumpkinCookie,
    Taffy,
    PowderCake,
    IceCream,
    Watermelonsicle,
    Ceviche,
    CaliforniaRoll,
    FlowerSalad,
    Jellybeans,
    BananaPop,
    // Portable pot exclusives
    FreshFruitCrepes,
    MonsterTartare,
    Moqueca,
    /// The failed dish. It has display data but no recipe; it is what the
    /// pot produces when nothing matches.
    WetGoop,
}

// User-defined
#[derive(Debug, Clone, PartialEq)]
pub struct FoodData {
    pub food: FoodType,
    /// Stable string key, also the icon file stem.
    pub key: &'static str,
    pub name_en: &'static str,
    pub name_zh: &'static str,
    pub health: f32,
    pub hunger: f32,
    pub sanity: f32,
    /// None means the dish never spoils.
    pub perish_days: Option<f32>,
    pub cook_secs: f32,
}

pub const FOOD_DATA: [FoodData; 33] = [
    FoodData {
        food: FoodType::Meatballs,
        key: "meatballs",
        name_en: "Meatballs",
        name_zh: "肉丸",
        health: 3.,
        hunger: 62.5,
        sanity: 5.,
        perish_days: Some(10.),
        cook_secs: 15.,
    },
    FoodData {
        food: FoodType::MeatyStew,
        key: "bonestew",
        name_en: "Meaty Stew",
        name_zh: "肉骨汤",
        health: 12.,
        hunger: 150.,
        sanity: 5.,
        perish_days: Some(10.),
        cook_secs: 15.,
    },
    FoodData {
        food: FoodType::Ratatouille,
        key: "ratatouille",
        name_en: "Ratatouille",
        name_zh: "蔬菜杂烩",
        health: 3.,
        hunger: 25.,
        sanity: 5.,
        perish_days: Some(15.),
        cook_secs: 20.,
    },
    FoodData {
        food: FoodType::FruitMedley,
        key: "fruitmedley",
        name_en: "Fruit Medley",
        name_zh: "水果拼盘",
        health: 20.,
        hunger: 25.,
        sanity: 5.,
        perish_days: Some(6.),
        cook_secs: 10.,
    },
    FoodData {
        food: FoodType::ButterflyMuffin,
        key: "butterflymuffin",
        name_en: "Butter Muffin",
        name_zh: "蝴蝶松饼",
        health: 20.,
        hunger: 37.5,
        sanity: 5.,
        perish_days: Some(15.),
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::FroggleBunwich,
        key: "frogglebunwich",
        name_en: "Froggle Bunwich",
        name_zh: "蛙腿三明治",
        health: 20.,
        hunger: 37.5,
        sanity: 5.,
        perish_days: Some(15.),
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::DragonPie,
        key: "dragonpie",
        name_en: "Dragonpie",
        name_zh: "火龙果派",
        health: 40.,
        hunger: 75.,
        sanity: 5.,
        perish_days: Some(15.),
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::StuffedEggplant,
        key: "stuffedeggplant",
        name_en: "Stuffed Eggplant",
        name_zh: "酿茄子",
        health: 3.,
        hunger: 37.5,
        sanity: 5.,
        perish_days: Some(15.),
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::Perogies,
        key: "perogies",
        name_en: "Pierogi",
        name_zh: "肉馅饺子",
        health: 40.,
        hunger: 37.5,
        sanity: 5.,
        perish_days: Some(20.),
        cook_secs: 20.,
    },
    FoodData {
        food: FoodType::HoneyNuggets,
        key: "honeynuggets",
        name_en: "Honey Nuggets",
        name_zh: "蜜汁鸡块",
        health: 20.,
        hunger: 37.5,
        sanity: 5.,
        perish_days: Some(15.),
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::HoneyHam,
        key: "honeyham",
        name_en: "Honey Ham",
        name_zh: "蜜汁火腿",
        health: 30.,
        hunger: 75.,
        sanity: 5.,
        perish_days: Some(15.),
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::Kabobs,
        key: "kabobs",
        name_en: "Kabobs",
        name_zh: "烤肉串",
        health: 3.,
        hunger: 37.5,
        sanity: 5.,
        perish_days: Some(15.),
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::FishTacos,
        key: "fishtacos",
        name_en: "Fish Tacos",
        name_zh: "鱼肉玉米卷",
        health: 20.,
        hunger: 37.5,
        sanity: 5.,
        perish_days: Some(6.),
        cook_secs: 10.,
    },
    FoodData {
        food: FoodType::Fishsticks,
        key: "fishsticks",
        name_en: "Fishsticks",
        name_zh: "炸鱼条",
        health: 40.,
        hunger: 37.5,
        sanity: 5.,
        perish_days: Some(10.),
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::Waffles,
        key: "waffles",
        name_en: "Waffles",
        name_zh: "华夫饼",
        health: 60.,
        hunger: 37.5,
        sanity: 5.,
        perish_days: Some(6.),
        cook_secs: 10.,
    },
    FoodData {
        food: FoodType::MonsterLasagna,
        key: "monsterlasagna",
        name_en: "Monster Lasagna",
        name_zh: "怪物千层饼",
        health: -20.,
        hunger: 37.5,
        sanity: -20.,
        perish_days: Some(6.),
        cook_secs: 10.,
    },
    FoodData {
        food: FoodType::BaconAndEggs,
        key: "baconeggs",
        name_en: "Bacon and Eggs",
        name_zh: "培根煎蛋",
        health: 20.,
        hunger: 75.,
        sanity: 5.,
        perish_days: Some(15.),
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::MandrakeSoup,
        key: "mandrakesoup",
        name_en: "Mandrake Soup",
        name_zh: "曼德拉草汤",
        health: 100.,
        hunger: 150.,
        sanity: 5.,
        perish_days: Some(6.),
        cook_secs: 60.,
    },
    FoodData {
        food: FoodType::TurkeyDinner,
        key: "turkeydinner",
        name_en: "Turkey Dinner",
        name_zh: "火鸡大餐",
        health: 20.,
        hunger: 75.,
        sanity: 5.,
        perish_days: Some(6.),
        cook_secs: 60.,
    },
    FoodData {
        food: FoodType::PumpkinCookie,
        key: "pumpkincookie",
        name_en: "Pumpkin Cookies",
        name_zh: "南瓜饼干",
        health: 0.,
        hunger: 37.5,
        sanity: 15.,
        perish_days: Some(10.),
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::Taffy,
        key: "taffy",
        name_en: "Taffy",
        name_zh: "太妃糖",
        health: -3.,
        hunger: 25.,
        sanity: 15.,
        perish_days: Some(15.),
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::PowderCake,
        key: "powcake",
        name_en: "Powdercake",
        name_zh: "奶粉蛋糕",
        health: -3.,
        hunger: 0.,
        sanity: 0.,
        perish_days: None,
        cook_secs: 10.,
    },
    FoodData {
        food: FoodType::IceCream,
        key: "icecream",
        name_en: "Ice Cream",
        name_zh: "冰淇淋",
        health: 0.,
        hunger: 25.,
        sanity: 50.,
        perish_days: Some(3.),
        cook_secs: 10.,
    },
    FoodData {
        food: FoodType::Watermelonsicle,
        key: "watermelonicle",
        name_en: "Melonsicle",
        name_zh: "西瓜冰棍",
        health: 3.,
        hunger: 12.5,
        sanity: 20.,
        perish_days: Some(3.),
        cook_secs: 10.,
    },
    FoodData {
        food: FoodType::Ceviche,
        key: "ceviche",
        name_en: "Ceviche",
        name_zh: "酸橘汁腌鱼",
        health: 20.,
        hunger: 25.,
        sanity: 5.,
        perish_days: Some(10.),
        cook_secs: 10.,
    },
    FoodData {
        food: FoodType::CaliforniaRoll,
        key: "californiaroll",
        name_en: "California Roll",
        name_zh: "加州卷",
        health: 20.,
        hunger: 37.5,
        sanity: 10.,
        perish_days: Some(10.),
        cook_secs: 10.,
    },
    FoodData {
        food: FoodType::FlowerSalad,
        key: "flowersalad",
        name_en: "Flower Salad",
        name_zh: "鲜花沙拉",
        health: 40.,
        hunger: 12.5,
        sanity: 5.,
        perish_days: Some(6.),
        cook_secs: 10.,
    },
    FoodData {
        food: FoodType::Jellybeans,
        key: "jellybeans",
        name_en: "Jellybeans",
        name_zh: "果冻豆",
        health: 2.,
        hunger: 0.,
        sanity: 5.,
        perish_days: None,
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::BananaPop,
        key: "bananapop",
        name_en: "Banana Pop",
        name_zh: "香蕉冰棍",
        health: 20.,
        hunger: 12.5,
        sanity: 33.,
        perish_days: Some(3.),
        cook_secs: 10.,
    },
    // Portable pot exclusives
    FoodData {
        food: FoodType::FreshFruitCrepes,
        key: "freshfruitcrepes",
        name_en: "Fresh Fruit Crepes",
        name_zh: "鲜果可丽饼",
        health: 60.,
        hunger: 150.,
        sanity: 15.,
        perish_days: Some(6.),
        cook_secs: 10.,
    },
    FoodData {
        food: FoodType::MonsterTartare,
        key: "monstertartare",
        name_en: "Monster Tartare",
        name_zh: "怪物鞑靼",
        health: 3.,
        hunger: 37.5,
        sanity: 10.,
        perish_days: Some(10.),
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::Moqueca,
        key: "moqueca",
        name_en: "Moqueca",
        name_zh: "巴西炖鱼",
        health: 60.,
        hunger: 75.,
        sanity: 33.,
        perish_days: Some(10.),
        cook_secs: 40.,
    },
    FoodData {
        food: FoodType::WetGoop,
        key: "wetgoop",
        name_en: "Wet Goop",
        name_zh: "湿糊糊",
        health: 0.,
        hunger: 0.,
        sanity: 0.,
        perish_days: Some(6.),
        cook_secs: 5.,
    },
];

static BY_TYPE: LazyLock<EnumMap<FoodType, &'static FoodData>> = LazyLock::new(|| {
    EnumMap::from_fn(|k: FoodType| {
        FOOD_DATA
            .iter()
            .find(|d| d.food == k)
            .unwrap_or_else(|| panic!("FoodData not found for: {k:?}"))
    })
});

impl FoodType {
    pub fn get(self) -> &'static FoodData {
        BY_TYPE[self]
    }

    pub fn key(self) -> &'static str {
        self.get().key
    }

    pub fn from_key(key: &str) -> Option<Self> {
        FOOD_DATA.iter().find(|d| d.key == key).map(|d| d.food)
    }

    pub fn name(self, language: Language) -> &'static str {
        let data = self.get();
        match language {
            Language::EnUs => data.name_en,
            Language::ZhCn => data.name_zh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_food_has_exactly_one_data_row() {
        for (i, data) in FOOD_DATA.iter().enumerate() {
            let dupes = FOOD_DATA
                .iter()
                .skip(i + 1)
                .filter(|other| other.food == data.food)
                .count();
            assert_eq!(dupes, 0, "duplicate row for {:?}", data.food);
        }
        for data in &FOOD_DATA {
            assert_eq!(data.food.get().key, data.key);
        }
    }

    #[test]
    fn keys_round_trip() {
        for data in &FOOD_DATA {
            assert_eq!(FoodType::from_key(data.key), Some(data.food));
        }
        assert_eq!(FoodType::from_key("notafood"), None);
    }

    #[test]
    fn names_are_present_in_both_languages() {
        for data in &FOOD_DATA {
            assert!(!data.name_en.is_empty());
            assert!(!data.name_zh.is_empty());
        }
    }
}
