use crate::data::ingredient::{Category, CategoryFilter};

/// The two languages the original tool ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    EnUs,
    ZhCn,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::EnUs, Language::ZhCn];

    /// BCP 47 style tag, used by share codes.
    pub fn key(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "en-US" => Some(Language::EnUs),
            "zh-CN" => Some(Language::ZhCn),
            _ => None,
        }
    }

    /// How the language names itself in the picker.
    pub fn endonym(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::ZhCn => "简体中文",
        }
    }
}

/// Every fixed UI string. Ingredient, food and pot names live in their
/// catalog rows instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiText {
    Title,
    CookpotPage,
    FoodsPage,
    PotFull,
    All,
    Clear,
    Health,
    Hunger,
    Sanity,
    PerishTime,
    CookTime,
    NeverSpoils,
    Days,
    Seconds,
    CookedIn,
    PickAFood,
    ShareCode,
}

pub fn text(language: Language, label: UiText) -> &'static str {
    use UiText::*;
    match language {
        Language::EnUs => match label {
            Title => "Crockpot Cooking Simulator",
            CookpotPage => "Crock Pot",
            FoodsPage => "Foods",
            PotFull => "The pot is full",
            All => "All",
            Clear => "Clear",
            Health => "Health",
            Hunger => "Hunger",
            Sanity => "Sanity",
            PerishTime => "Perish time",
            CookTime => "Cook time",
            NeverSpoils => "Never spoils",
            Days => "days",
            Seconds => "s",
            CookedIn => "Cooked in",
            PickAFood => "Pick a dish to see its details",
            ShareCode => "Share code",
        },
        Language::ZhCn => match label {
            Title => "烹饪锅料理模拟器",
            CookpotPage => "烹饪锅",
            FoodsPage => "食物",
            PotFull => "锅已经满了",
            All => "全部",
            Clear => "清空",
            Health => "生命",
            Hunger => "饥饿",
            Sanity => "精神",
            PerishTime => "保鲜时间",
            CookTime => "烹饪时间",
            NeverSpoils => "永不腐烂",
            Days => "天",
            Seconds => "秒",
            CookedIn => "烹饪器具",
            PickAFood => "选择一种食物查看详情",
            ShareCode => "分享代码",
        },
    }
}

pub fn category_label(language: Language, filter: CategoryFilter) -> &'static str {
    let category = match filter {
        CategoryFilter::All => return text(language, UiText::All),
        CategoryFilter::Only(category) => category,
    };

    use Category::*;
    match language {
        Language::EnUs => match category {
            Fruit => "Fruit",
            Veggie => "Veggie",
            Meat => "Meat",
            Fish => "Fish",
            Monster => "Monster",
            Sweetener => "Sweetener",
            Seed => "Seed",
            Frozen => "Frozen",
            Magic => "Magic",
            Egg => "Egg",
            Decoration => "Decoration",
            Fat => "Fat",
            Dairy => "Dairy",
            Inedible => "Inedible",
        },
        Language::ZhCn => match category {
            Fruit => "水果",
            Veggie => "蔬菜",
            Meat => "肉类",
            Fish => "鱼类",
            Monster => "怪物",
            Sweetener => "甜味剂",
            Seed => "种子",
            Frozen => "冰冻",
            Magic => "魔法",
            Egg => "蛋类",
            Decoration => "装饰",
            Fat => "脂肪",
            Dairy => "乳制品",
            Inedible => "不可食用",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ingredient::INGREDIENT_DATA;

    #[test]
    fn language_keys_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_key(language.key()), Some(language));
        }
        assert_eq!(Language::from_key("fr-FR"), None);
    }

    #[test]
    fn every_label_is_translated() {
        use UiText::*;
        let labels = [
            Title, CookpotPage, FoodsPage, PotFull, All, Clear, Health, Hunger,
            Sanity, PerishTime, CookTime, NeverSpoils, Days, Seconds, CookedIn,
            PickAFood, ShareCode,
        ];

        for language in Language::ALL {
            for label in labels {
                assert!(!text(language, label).is_empty());
            }
            for category in Category::ALL {
                assert!(
                    !category_label(language, CategoryFilter::Only(category)).is_empty()
                );
            }
        }
    }

    #[test]
    fn ingredient_names_cover_both_languages() {
        for data in &INGREDIENT_DATA {
            assert!(!data.ingredient.name(Language::EnUs).is_empty());
            assert!(!data.ingredient.name(Language::ZhCn).is_empty());
        }
    }
}
