use std::{cmp::Reverse, sync::LazyLock};

use itertools::Itertools;
use typed_builder::TypedBuilder;

use crate::{
    cook::Totals,
    data::{
        food::FoodType,
        ingredient::{Category, IngredientType, Units},
        pot::PotType,
    },
};

pub const ANY_POT: &[PotType] = &[PotType::Cookpot, PotType::PortableCookpot];
pub const PORTABLE_ONLY: &[PotType] = &[PotType::PortableCookpot];

#[derive(Debug, TypedBuilder)]
pub struct Recipe {
    pub food: FoodType,
    #[builder(default = ANY_POT)]
    pub pots: &'static [PotType],
    /// Higher priorities are checked first. The catalog's declaration
    /// order breaks ties, and several entries rely on that: specific
    /// dishes are declared before the generic ones they overlap with.
    #[builder(default = 0)]
    pub priority: i32,
    pub test: fn(&Totals) -> bool,
}

impl Recipe {
    pub fn cookable_in(&self, pot: PotType) -> bool {
        self.pots.contains(&pot)
    }
}

/// All recipes, in evaluation order: stable-sorted by descending priority
/// so equal priorities keep their declared order.
pub static RECIPES: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    use Category::*;
    use IngredientType::{
        Banana, Berries, Butter, ButterflyWings, CactusFlower, Corn, DragonFruit,
        Drumstick, Eggplant, FrogLegs, Honey, Kelp, Mandrake, Onion, Pumpkin,
        RoyalJelly, Tomato, Twigs, Watermelon,
    };

    let mut recipes = vec![
        // Portable pot exclusives
        Recipe::builder()
            .food(FoodType::FreshFruitCrepes)
            .pots(PORTABLE_ONLY)
            .priority(30)
            .test(|t| {
                t.units(Fruit) >= Units::whole(1) + Units::HALF
                    && t.contains(Butter)
                    && t.contains(Honey)
            })
            .build(),
        Recipe::builder()
            .food(FoodType::MonsterTartare)
            .pots(PORTABLE_ONLY)
            .priority(30)
            .test(|t| {
                t.units(Monster) >= Units::whole(2)
                    && t.units(Egg) >= Units::ONE
                    && !t.has(Inedible)
            })
            .build(),
        Recipe::builder()
            .food(FoodType::Moqueca)
            .pots(PORTABLE_ONLY)
            .priority(30)
            .test(|t| t.contains(Tomato) && t.contains(Onion) && t.has(Fish))
            .build(),
        // Named-ingredient dishes
        Recipe::builder()
            .food(FoodType::Ceviche)
            .priority(20)
            .test(|t| {
                t.units(Fish) >= Units::whole(2)
                    && t.has(Frozen)
                    && !t.has(Inedible)
                    && !t.has(Egg)
            })
            .build(),
        Recipe::builder()
            .food(FoodType::CaliforniaRoll)
            .priority(20)
            .test(|t| t.count_of(Kelp) >= 2 && t.has(Fish))
            .build(),
        Recipe::builder()
            .food(FoodType::BananaPop)
            .priority(20)
            .test(|t| {
                t.contains(Banana)
                    && t.has(Frozen)
                    && t.count_of(Twigs) >= 1
                    && !t.has(Meat)
            })
            .build(),
        Recipe::builder()
            .food(FoodType::Jellybeans)
            .priority(12)
            .test(|t| t.contains(RoyalJelly) && !t.has(Inedible) && !t.has(Monster))
            .build(),
        Recipe::builder()
            .food(FoodType::MandrakeSoup)
            .priority(10)
            .test(|t| t.contains(Mandrake))
            .build(),
        Recipe::builder()
            .food(FoodType::FishTacos)
            .priority(10)
            .test(|t| t.has(Fish) && t.contains(Corn))
            .build(),
        Recipe::builder()
            .food(FoodType::Fishsticks)
            .priority(10)
            .test(|t| t.has(Fish) && t.count_of(Twigs) == 1)
            .build(),
        Recipe::builder()
            .food(FoodType::Waffles)
            .priority(10)
            .test(|t| t.contains(Butter) && t.has(Egg) && t.contains(Berries))
            .build(),
        Recipe::builder()
            .food(FoodType::MonsterLasagna)
            .priority(10)
            .test(|t| t.units(Monster) >= Units::whole(2) && !t.has(Inedible))
            .build(),
        Recipe::builder()
            .food(FoodType::BaconAndEggs)
            .priority(10)
            .test(|t| {
                t.units(Egg) > Units::ONE && t.units(Meat) > Units::ONE && !t.has(Veggie)
            })
            .build(),
        Recipe::builder()
            .food(FoodType::TurkeyDinner)
            .priority(10)
            .test(|t| {
                t.count_of(Drumstick) >= 2
                    && t.units(Meat) > Units::HALF
                    && (t.has(Veggie) || t.has(Fruit))
            })
            .build(),
        Recipe::builder()
            .food(FoodType::PumpkinCookie)
            .priority(10)
            .test(|t| t.contains(Pumpkin) && t.units(Sweetener) >= Units::whole(2))
            .build(),
        Recipe::builder()
            .food(FoodType::Taffy)
            .priority(10)
            .test(|t| t.units(Sweetener) >= Units::whole(3) && !t.has(Meat))
            .build(),
        Recipe::builder()
            .food(FoodType::PowderCake)
            .priority(10)
            .test(|t| t.contains(Twigs) && t.contains(Honey) && t.contains(Corn))
            .build(),
        Recipe::builder()
            .food(FoodType::IceCream)
            .priority(10)
            .test(|t| {
                t.has(Frozen)
                    && t.has(Dairy)
                    && t.has(Sweetener)
                    && !t.has(Meat)
                    && !t.has(Veggie)
                    && !t.has(Inedible)
                    && !t.has(Egg)
            })
            .build(),
        Recipe::builder()
            .food(FoodType::Watermelonsicle)
            .priority(10)
            .test(|t| {
                t.contains(Watermelon)
                    && t.has(Frozen)
                    && !t.has(Meat)
                    && !t.has(Veggie)
                    && !t.has(Egg)
            })
            .build(),
        Recipe::builder()
            .food(FoodType::FlowerSalad)
            .priority(10)
            .test(|t| {
                t.contains(CactusFlower)
                    && t.units(Veggie) >= Units::whole(2)
                    && !t.has(Meat)
                    && !t.has(Egg)
                    && !t.has(Inedible)
            })
            .build(),
        Recipe::builder()
            .food(FoodType::Kabobs)
            .priority(5)
            .test(|t| t.has(Meat) && t.count_of(Twigs) == 1 && !t.has(Monster))
            .build(),
        // Honey ham before nuggets: both want honey and meat, ham takes
        // the meatier pot.
        Recipe::builder()
            .food(FoodType::HoneyHam)
            .priority(2)
            .test(|t| {
                t.contains(Honey)
                    && t.units(Meat) > Units::whole(1) + Units::HALF
                    && !t.has(Inedible)
            })
            .build(),
        Recipe::builder()
            .food(FoodType::HoneyNuggets)
            .priority(2)
            .test(|t| {
                t.contains(Honey)
                    && t.has(Meat)
                    && t.units(Meat) <= Units::whole(1) + Units::HALF
                    && !t.has(Inedible)
            })
            .build(),
        Recipe::builder()
            .food(FoodType::ButterflyMuffin)
            .priority(1)
            .test(|t| {
                t.contains(ButterflyWings)
                    && t.units(Veggie) >= Units::HALF
                    && !t.has(Meat)
            })
            .build(),
        Recipe::builder()
            .food(FoodType::FroggleBunwich)
            .priority(1)
            .test(|t| t.contains(FrogLegs) && t.units(Veggie) >= Units::HALF)
            .build(),
        Recipe::builder()
            .food(FoodType::DragonPie)
            .priority(1)
            .test(|t| t.contains(DragonFruit) && !t.has(Meat))
            .build(),
        Recipe::builder()
            .food(FoodType::StuffedEggplant)
            .priority(1)
            .test(|t| t.contains(Eggplant) && t.units(Veggie) > Units::ONE)
            .build(),
        Recipe::builder()
            .food(FoodType::Perogies)
            .priority(1)
            .test(|t| {
                t.has(Egg) && t.has(Meat) && t.has(Veggie) && !t.has(Inedible)
            })
            .build(),
        // Broad fallbacks
        Recipe::builder()
            .food(FoodType::MeatyStew)
            .test(|t| {
                t.units(Meat) >= Units::whole(3) && !t.has(Monster) && !t.has(Inedible)
            })
            .build(),
        Recipe::builder()
            .food(FoodType::FruitMedley)
            .test(|t| {
                t.units(Fruit) >= Units::whole(3) && !t.has(Meat) && !t.has(Veggie)
            })
            .build(),
        Recipe::builder()
            .food(FoodType::Ratatouille)
            .test(|t| {
                !t.has(Meat) && t.units(Veggie) >= Units::HALF && !t.has(Inedible)
            })
            .build(),
        // Anything with meat in it makes meatballs if nothing better did
        Recipe::builder()
            .food(FoodType::Meatballs)
            .priority(-1)
            .test(|t| t.has(Meat) && !t.has(Inedible))
            .build(),
    ];

    recipes.sort_by_key(|r| Reverse(r.priority));
    recipes
});

/// Which pots can produce the given dish at all. Wet goop comes out of
/// every pot by definition.
pub fn eligible_pots(food: FoodType) -> Vec<PotType> {
    if food == FoodType::WetGoop {
        return ANY_POT.to_vec();
    }

    RECIPES
        .iter()
        .filter(|r| r.food == food)
        .flat_map(|r| r.pots.iter().copied())
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_order_is_descending_priority() {
        for pair in RECIPES.windows(2) {
            assert!(
                pair[0].priority >= pair[1].priority,
                "{:?} is ordered before {:?}",
                pair[0].food,
                pair[1].food
            );
        }
    }

    #[test]
    fn every_recipe_food_has_display_data() {
        for recipe in RECIPES.iter() {
            // get() panics on a missing row
            assert!(!recipe.food.get().key.is_empty());
        }
    }

    #[test]
    fn wet_goop_has_no_recipe() {
        assert!(RECIPES.iter().all(|r| r.food != FoodType::WetGoop));
    }

    #[test]
    fn every_food_except_wet_goop_is_cookable_somewhere() {
        use crate::data::food::FOOD_DATA;

        for data in &FOOD_DATA {
            assert!(
                !eligible_pots(data.food).is_empty(),
                "{:?} cannot be cooked in any pot",
                data.food
            );
        }
    }

    #[test]
    fn exclusives_are_portable_only() {
        for food in [
            FoodType::FreshFruitCrepes,
            FoodType::MonsterTartare,
            FoodType::Moqueca,
        ] {
            assert_eq!(eligible_pots(food), vec![PotType::PortableCookpot]);
        }
    }
}
