use std::{ops, sync::LazyLock};

use enum_map::{Enum, EnumMap};
use impl_ops::*;

use crate::i18n::Language;

/// An exact ingredient quantity, counted in half-units.
///
/// Recipe thresholds compare quantities exactly, so quantities are fixed
/// point rather than floating point. Half a unit is the smallest
/// contribution any ingredient makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Units(i32);

impl Units {
    pub const ZERO: Units = Units(0);
    pub const HALF: Units = Units(1);
    pub const ONE: Units = Units(2);

    pub const fn whole(count: i32) -> Self {
        Units(count * 2)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl_op_ex!(+|a: &Units, b: &Units| -> Units { Units(a.0 + b.0) });
impl_op_ex!(+= |a: &mut Units, b: &Units| { a.0 += b.0 });

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0 as f32 / 2.)
    }
}

/// The closed set of ingredient categories. The same set doubles as the
/// axes of the aggregate vector recipes test against, which is how the
/// source game's tag system works.
#[derive(Enum, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Fruit,
    Veggie,
    Meat,
    Fish,
    Monster,
    Sweetener,
    Seed,
    Frozen,
    Magic,
    Egg,
    Decoration,
    Fat,
    Dairy,
    Inedible,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Category::Fruit,
        Category::Veggie,
        Category::Meat,
        Category::Fish,
        Category::Monster,
        Category::Sweetener,
        Category::Seed,
        Category::Frozen,
        Category::Magic,
        Category::Egg,
        Category::Decoration,
        Category::Fat,
        Category::Dairy,
        Category::Inedible,
    ];
}

/// The ingredient browser's filter: everything, or one category.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }
}

#[derive(Enum, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum IngredientType {
    // Meats
    Meat,
    Morsel,
    Drumstick,
    FrogLegs,
    // Monster
    MonsterMeat,
    Durian,
    // Fish
    Fish,
    Eel,
    // Veggies
    Carrot,
    Corn,
    Pumpkin,
    Eggplant,
    Tomato,
    Onion,
    RedCap,
    GreenCap,
    BlueCap,
    CactusFlesh,
    CactusFlower,
    Kelp,
    // Fruits
    Berries,
    Pomegranate,
    DragonFruit,
    Watermelon,
    Banana,
    // Sweeteners
    Honey,
    Honeycomb,
    RoyalJelly,
    // Eggs
    Egg,
    TallbirdEgg,
    // One-offs
    Mandrake,
    Seeds,
    Ice,
    ButterflyWings,
    Butter,
    ElectricMilk,
    Twigs,
}

// User-defined
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientData {
    pub ingredient: IngredientType,
    /// Stable string key, also the icon file stem. Share codes use it.
    pub key: &'static str,
    pub category: Category,
    /// What this ingredient adds to the pot's aggregate vector.
    pub contributes: &'static [(Category, Units)],
    pub name_en: &'static str,
    pub name_zh: &'static str,
}

use Category::*;

pub const INGREDIENT_DATA: [IngredientData; 37] = [
    // Meats
    IngredientData {
        ingredient: IngredientType::Meat,
        key: "meat",
        category: Meat,
        contributes: &[(Meat, Units::ONE)],
        name_en: "Meat",
        name_zh: "肉",
    },
    IngredientData {
        ingredient: IngredientType::Morsel,
        key: "morsel",
        category: Meat,
        contributes: &[(Meat, Units::HALF)],
        name_en: "Morsel",
        name_zh: "小块肉",
    },
    IngredientData {
        ingredient: IngredientType::Drumstick,
        key: "drumstick",
        category: Meat,
        contributes: &[(Meat, Units::HALF)],
        name_en: "Drumstick",
        name_zh: "禽腿",
    },
    IngredientData {
        ingredient: IngredientType::FrogLegs,
        key: "froglegs",
        category: Meat,
        contributes: &[(Meat, Units::HALF)],
        name_en: "Frog Legs",
        name_zh: "蛙腿",
    },
    // Monster
    IngredientData {
        ingredient: IngredientType::MonsterMeat,
        key: "monstermeat",
        category: Monster,
        contributes: &[(Meat, Units::ONE), (Monster, Units::ONE)],
        name_en: "Monster Meat",
        name_zh: "怪物肉",
    },
    IngredientData {
        ingredient: IngredientType::Durian,
        key: "durian",
        category: Monster,
        contributes: &[(Fruit, Units::ONE), (Monster, Units::ONE)],
        name_en: "Durian",
        name_zh: "榴莲",
    },
    // Fish
    IngredientData {
        ingredient: IngredientType::Fish,
        key: "fish",
        category: Fish,
        contributes: &[(Fish, Units::ONE), (Meat, Units::HALF)],
        name_en: "Fish",
        name_zh: "鱼",
    },
    IngredientData {
        ingredient: IngredientType::Eel,
        key: "eel",
        category: Fish,
        contributes: &[(Fish, Units::ONE), (Meat, Units::HALF)],
        name_en: "Eel",
        name_zh: "鳗鱼",
    },
    // Veggies
    IngredientData {
        ingredient: IngredientType::Carrot,
        key: "carrot",
        category: Veggie,
        contributes: &[(Veggie, Units::ONE)],
        name_en: "Carrot",
        name_zh: "胡萝卜",
    },
    IngredientData {
        ingredient: IngredientType::Corn,
        key: "corn",
        category: Veggie,
        contributes: &[(Veggie, Units::ONE)],
        name_en: "Corn",
        name_zh: "玉米",
    },
    IngredientData {
        ingredient: IngredientType::Pumpkin,
        key: "pumpkin",
        category: Veggie,
        contributes: &[(Veggie, Units::ONE)],
        name_en: "Pumpkin",
        name_zh: "南瓜",
    },
    IngredientData {
        ingredient: IngredientType::Eggplant,
        key: "eggplant",
        category: Veggie,
        contributes: &[(Veggie, Units::ONE)],
        name_en: "Eggplant",
        name_zh: "茄子",
    },
    IngredientData {
        ingredient: IngredientType::Tomato,
        key: "tomato",
        category: Veggie,
        contributes: &[(Veggie, Units::ONE)],
        name_en: "Tomato",
        name_zh: "番茄",
    },
    IngredientData {
        ingredient: IngredientType::Onion,
        key: "onion",
        category: Veggie,
        contributes: &[(Veggie, Units::ONE)],
        name_en: "Onion",
        name_zh: "洋葱",
    },
    IngredientData {
        ingredient: IngredientType::RedCap,
        key: "redcap",
        category: Veggie,
        contributes: &[(Veggie, Units::HALF)],
        name_en: "Red Cap",
        name_zh: "红蘑菇",
    },
    IngredientData {
        ingredient: IngredientType::GreenCap,
        key: "greencap",
        category: Veggie,
        contributes: &[(Veggie, Units::HALF)],
        name_en: "Green Cap",
        name_zh: "绿蘑菇",
    },
    IngredientData {
        ingredient: IngredientType::BlueCap,
        key: "bluecap",
        category: Veggie,
        contributes: &[(Veggie, Units::HALF)],
        name_en: "Blue Cap",
        name_zh: "蓝蘑菇",
    },
    IngredientData {
        ingredient: IngredientType::CactusFlesh,
        key: "cactusflesh",
        category: Veggie,
        contributes: &[(Veggie, Units::HALF)],
        name_en: "Cactus Flesh",
        name_zh: "仙人掌肉",
    },
    IngredientData {
        ingredient: IngredientType::CactusFlower,
        key: "cactusflower",
        category: Veggie,
        contributes: &[(Veggie, Units::HALF)],
        name_en: "Cactus Flower",
        name_zh: "仙人掌花",
    },
    IngredientData {
        ingredient: IngredientType::Kelp,
        key: "kelp",
        category: Veggie,
        contributes: &[(Veggie, Units::HALF)],
        name_en: "Kelp Fronds",
        name_zh: "海带",
    },
    // Fruits
    IngredientData {
        ingredient: IngredientType::Berries,
        key: "berries",
        category: Fruit,
        contributes: &[(Fruit, Units::HALF)],
        name_en: "Berries",
        name_zh: "浆果",
    },
    IngredientData {
        ingredient: IngredientType::Pomegranate,
        key: "pomegranate",
        category: Fruit,
        contributes: &[(Fruit, Units::ONE)],
        name_en: "Pomegranate",
        name_zh: "石榴",
    },
    IngredientData {
        ingredient: IngredientType::DragonFruit,
        key: "dragonfruit",
        category: Fruit,
        contributes: &[(Fruit, Units::ONE)],
        name_en: "Dragon Fruit",
        name_zh: "火龙果",
    },
    IngredientData {
        ingredient: IngredientType::Watermelon,
        key: "watermelon",
        category: Fruit,
        contributes: &[(Fruit, Units::ONE)],
        name_en: "Watermelon",
        name_zh: "西瓜",
    },
    IngredientData {
        ingredient: IngredientType::Banana,
        key: "banana",
        category: Fruit,
        contributes: &[(Fruit, Units::ONE)],
        name_en: "Banana",
        name_zh: "香蕉",
    },
    // Sweeteners
    IngredientData {
        ingredient: IngredientType::Honey,
        key: "honey",
        category: Sweetener,
        contributes: &[(Sweetener, Units::ONE)],
        name_en: "Honey",
        name_zh: "蜂蜜",
    },
    IngredientData {
        ingredient: IngredientType::Honeycomb,
        key: "honeycomb",
        category: Sweetener,
        contributes: &[(Sweetener, Units::ONE)],
        name_en: "Honeycomb",
        name_zh: "蜂巢",
    },
    IngredientData {
        ingredient: IngredientType::RoyalJelly,
        key: "royaljelly",
        category: Sweetener,
        contributes: &[(Sweetener, Units::ONE), (Magic, Units::HALF)],
        name_en: "Royal Jelly",
        name_zh: "蜂王浆",
    },
    // Eggs
    IngredientData {
        ingredient: IngredientType::Egg,
        key: "egg",
        category: Egg,
        contributes: &[(Egg, Units::ONE)],
        name_en: "Egg",
        name_zh: "鸟蛋",
    },
    IngredientData {
        ingredient: IngredientType::TallbirdEgg,
        key: "tallbirdegg",
        category: Egg,
        contributes: &[(Egg, Units::whole(4))],
        name_en: "Tallbird Egg",
        name_zh: "高脚鸟蛋",
    },
    // One-offs
    IngredientData {
        ingredient: IngredientType::Mandrake,
        key: "mandrake",
        category: Magic,
        contributes: &[(Veggie, Units::ONE), (Magic, Units::ONE)],
        name_en: "Mandrake",
        name_zh: "曼德拉草",
    },
    IngredientData {
        ingredient: IngredientType::Seeds,
        key: "seeds",
        category: Seed,
        contributes: &[(Seed, Units::ONE)],
        name_en: "Seeds",
        name_zh: "种子",
    },
    IngredientData {
        ingredient: IngredientType::Ice,
        key: "ice",
        category: Frozen,
        contributes: &[(Frozen, Units::ONE)],
        name_en: "Ice",
        name_zh: "冰",
    },
    IngredientData {
        ingredient: IngredientType::ButterflyWings,
        key: "butterflywings",
        category: Decoration,
        contributes: &[(Decoration, Units::HALF)],
        name_en: "Butterfly Wings",
        name_zh: "蝴蝶翅膀",
    },
    IngredientData {
        ingredient: IngredientType::Butter,
        key: "butter",
        category: Fat,
        contributes: &[(Fat, Units::ONE), (Dairy, Units::ONE)],
        name_en: "Butter",
        name_zh: "黄油",
    },
    IngredientData {
        ingredient: IngredientType::ElectricMilk,
        key: "electricmilk",
        category: Dairy,
        contributes: &[(Dairy, Units::ONE)],
        name_en: "Electric Milk",
        name_zh: "电羊奶",
    },
    IngredientData {
        ingredient: IngredientType::Twigs,
        key: "twigs",
        category: Inedible,
        contributes: &[(Inedible, Units::ONE)],
        name_en: "Twigs",
        name_zh: "树枝",
    },
];

static BY_TYPE: LazyLock<EnumMap<IngredientType, &'static IngredientData>> = LazyLock::new(|| {
    EnumMap::from_fn(|k: IngredientType| {
        INGREDIENT_DATA
            .iter()
            .find(|d| d.ingredient == k)
            .unwrap_or_else(|| panic!("IngredientData not found for: {k:?}"))
    })
});

impl IngredientType {
    pub fn get(self) -> &'static IngredientData {
        BY_TYPE[self]
    }

    pub fn key(self) -> &'static str {
        self.get().key
    }

    /// Lookup by string key, e.g. from a share code. Unknown keys are not
    /// an error, they just resolve to nothing.
    pub fn from_key(key: &str) -> Option<Self> {
        INGREDIENT_DATA
            .iter()
            .find(|d| d.key == key)
            .map(|d| d.ingredient)
    }

    pub fn name(self, language: Language) -> &'static str {
        let data = self.get();
        match language {
            Language::EnUs => data.name_en,
            Language::ZhCn => data.name_zh,
        }
    }
}

/// The ingredients the browser shows for a given filter, in catalog order.
pub fn by_category(
    filter: CategoryFilter,
) -> impl Iterator<Item = &'static IngredientData> {
    INGREDIENT_DATA
        .iter()
        .filter(move |d| filter.admits(d.category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ingredient_has_exactly_one_data_row() {
        for (i, data) in INGREDIENT_DATA.iter().enumerate() {
            let dupes = INGREDIENT_DATA
                .iter()
                .skip(i + 1)
                .filter(|other| other.ingredient == data.ingredient)
                .count();
            assert_eq!(dupes, 0, "duplicate row for {:?}", data.ingredient);
        }

        // get() panics on a missing row, so touching every variant is enough
        for data in &INGREDIENT_DATA {
            assert_eq!(data.ingredient.get().key, data.key);
        }
    }

    #[test]
    fn keys_are_unique_and_round_trip() {
        for data in &INGREDIENT_DATA {
            assert_eq!(
                IngredientType::from_key(data.key),
                Some(data.ingredient),
                "key {:?} does not round-trip",
                data.key
            );
        }
        assert_eq!(IngredientType::from_key("doesnotexist"), None);
    }

    #[test]
    fn every_category_has_an_ingredient() {
        for category in Category::ALL {
            assert!(
                by_category(CategoryFilter::Only(category)).next().is_some(),
                "no ingredient in {category:?}"
            );
        }
    }

    #[test]
    fn contributions_are_positive() {
        for data in &INGREDIENT_DATA {
            assert!(!data.contributes.is_empty(), "{:?} adds nothing", data.key);
            for (category, units) in data.contributes {
                assert!(
                    *units > Units::ZERO,
                    "{:?} has a non-positive {category:?} contribution",
                    data.key
                );
            }
        }
    }

    #[test]
    fn units_arithmetic_is_exact() {
        assert_eq!(Units::HALF + Units::HALF, Units::ONE);
        assert_eq!(Units::whole(3), Units::ONE + Units::ONE + Units::ONE);
        assert!(Units::whole(1) + Units::HALF > Units::ONE);
        assert_eq!(format!("{}", Units::HALF), "0.5");
        assert_eq!(format!("{}", Units::whole(4)), "4");
    }
}
