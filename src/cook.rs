use enum_map::EnumMap;
use itertools::Itertools;

use crate::data::{
    food::FoodType,
    ingredient::{Category, IngredientType, Units},
    pot::PotType,
    recipe::RECIPES,
};

/// The aggregate of everything in the pot: summed attribute units per
/// category, a count per specific ingredient (some recipes demand a named
/// ingredient), and the total slot count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Totals {
    units: EnumMap<Category, Units>,
    counts: EnumMap<IngredientType, usize>,
    len: usize,
}

impl Totals {
    pub fn of(ingredients: &[IngredientType]) -> Self {
        let mut totals = Self::default();
        for &ingredient in ingredients {
            totals.counts[ingredient] += 1;
            totals.len += 1;
            for &(category, units) in ingredient.get().contributes {
                totals.units[category] += units;
            }
        }
        totals
    }

    pub fn units(&self, category: Category) -> Units {
        self.units[category]
    }

    pub fn has(&self, category: Category) -> bool {
        !self.units[category].is_zero()
    }

    pub fn count_of(&self, ingredient: IngredientType) -> usize {
        self.counts[ingredient]
    }

    pub fn contains(&self, ingredient: IngredientType) -> bool {
        self.counts[ingredient] > 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn distinct_categories(&self) -> usize {
        self.units.iter().filter(|(_, u)| !u.is_zero()).count()
    }
}

/// Resolve what the pot produces: the first recipe, in priority order,
/// whose predicate accepts the aggregate. None means the failed dish.
pub fn resolve(pot: PotType, ingredients: &[IngredientType]) -> Option<FoodType> {
    let totals = Totals::of(ingredients);
    RECIPES
        .iter()
        .filter(|r| r.cookable_in(pot))
        .find(|r| (r.test)(&totals))
        .map(|r| r.food)
}

/// Every dish the aggregate satisfies, best first. The cookpot page lists
/// all of them, not just the winner.
pub fn candidates(pot: PotType, ingredients: &[IngredientType]) -> Vec<FoodType> {
    let totals = Totals::of(ingredients);
    RECIPES
        .iter()
        .filter(|r| r.cookable_in(pot))
        .filter(|r| (r.test)(&totals))
        .map(|r| r.food)
        .unique()
        .collect()
}

/// String-keyed entry point. Unknown keys contribute nothing, they are
/// not an error.
pub fn resolve_keys(pot: PotType, keys: &[&str]) -> Option<FoodType> {
    let ingredients = keys
        .iter()
        .filter_map(|key| {
            let found = IngredientType::from_key(key);
            if found.is_none() {
                log::warn!("Unknown ingredient key: {key:?}");
            }
            found
        })
        .collect::<Vec<_>>();

    resolve(pot, &ingredients)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use IngredientType::*;

    #[test]
    fn empty_pot_resolves_to_nothing() {
        assert_eq!(resolve(PotType::Cookpot, &[]), None);
        assert_eq!(resolve(PotType::PortableCookpot, &[]), None);
        assert!(candidates(PotType::Cookpot, &[]).is_empty());
    }

    #[test]
    fn meat_and_monster_meat_make_meatballs() {
        let pot = [Meat, Meat, Meat, MonsterMeat];
        assert_eq!(resolve(PotType::Cookpot, &pot), Some(FoodType::Meatballs));
    }

    #[test]
    fn meat_without_monster_makes_meaty_stew() {
        let pot = [Meat, Meat, Meat, Morsel];
        assert_eq!(resolve(PotType::Cookpot, &pot), Some(FoodType::MeatyStew));
    }

    #[test]
    fn resolution_is_deterministic() {
        let pot = [Honey, Honey, Honey, Berries];
        let first = resolve(PotType::Cookpot, &pot);
        assert_eq!(first, Some(FoodType::Taffy));
        for _ in 0..10 {
            assert_eq!(resolve(PotType::Cookpot, &pot), first);
        }
    }

    #[test]
    fn ingredient_order_does_not_matter() {
        let pot = [DragonFruit, Twigs, Ice, Berries];
        let expected = resolve(PotType::Cookpot, &pot);

        for permutation in pot.iter().copied().permutations(pot.len()) {
            assert_eq!(resolve(PotType::Cookpot, &permutation), expected);
        }
    }

    #[test]
    fn higher_priority_recipe_wins() {
        // Satisfies fishsticks (priority 10), kabobs (priority 5) and the
        // meatball fallback would if twigs didn't forbid it
        let pot = [Fish, Twigs, Carrot, Carrot];
        assert_eq!(resolve(PotType::Cookpot, &pot), Some(FoodType::Fishsticks));

        let listed = candidates(PotType::Cookpot, &pot);
        assert_eq!(listed.first(), Some(&FoodType::Fishsticks));
        assert!(listed.contains(&FoodType::Kabobs));
    }

    #[test]
    fn equal_priority_falls_back_to_declaration_order() {
        // Satisfies both fish tacos and fishsticks, both priority 10; fish
        // tacos is declared first and must win every time
        let pot = [Fish, Corn, Twigs, Carrot];
        assert_eq!(resolve(PotType::Cookpot, &pot), Some(FoodType::FishTacos));

        let listed = candidates(PotType::Cookpot, &pot);
        let tacos = listed.iter().position(|f| *f == FoodType::FishTacos);
        let sticks = listed.iter().position(|f| *f == FoodType::Fishsticks);
        assert!(tacos < sticks, "declaration order not preserved: {listed:?}");
    }

    #[test]
    fn honey_splits_between_ham_and_nuggets_on_meatiness() {
        // Exactly 1.5 meat goes to nuggets, anything meatier goes to ham
        let pot = [Honey, Meat, Drumstick, Pomegranate];
        assert_eq!(
            resolve(PotType::Cookpot, &pot),
            Some(FoodType::HoneyNuggets)
        );

        let pot = [Honey, Meat, Meat, Pomegranate];
        assert_eq!(resolve(PotType::Cookpot, &pot), Some(FoodType::HoneyHam));
    }

    #[test]
    fn portable_exclusives_do_not_cook_in_a_standard_pot() {
        let pot = [MonsterMeat, MonsterMeat, Egg, Carrot];
        assert_eq!(
            resolve(PotType::PortableCookpot, &pot),
            Some(FoodType::MonsterTartare)
        );
        assert_eq!(
            resolve(PotType::Cookpot, &pot),
            Some(FoodType::MonsterLasagna)
        );
    }

    #[test]
    fn moqueca_needs_the_portable_pot() {
        let pot = [Tomato, Onion, Fish, Fish];
        assert_eq!(resolve(PotType::PortableCookpot, &pot), Some(FoodType::Moqueca));
        assert_ne!(resolve(PotType::Cookpot, &pot), Some(FoodType::Moqueca));
    }

    #[test]
    fn unknown_keys_contribute_nothing() {
        assert_eq!(
            resolve_keys(PotType::Cookpot, &["meat", "doesnotexist"]),
            resolve_keys(PotType::Cookpot, &["meat"]),
        );
        assert_eq!(resolve_keys(PotType::Cookpot, &["doesnotexist"]), None);
    }

    #[test]
    fn resolve_is_total_over_small_pots() {
        // Every 0-2 multiset of a sample set resolves without panicking
        let sample = [Meat, Berries, Twigs, Mandrake, Ice, TallbirdEgg];
        for pot in [PotType::Cookpot, PotType::PortableCookpot] {
            assert!(resolve(pot, &[]).is_none());
            for &a in &sample {
                resolve(pot, &[a]);
                for &b in &sample {
                    if let Some(food) = resolve(pot, &[a, b]) {
                        assert_ne!(food, FoodType::WetGoop);
                    }
                }
            }
        }
    }

    #[test]
    fn aggregation_sums_exactly() {
        let totals = Totals::of(&[Meat, Meat, Meat, MonsterMeat]);
        assert_eq!(totals.units(Category::Meat), Units::whole(4));
        assert_eq!(totals.units(Category::Monster), Units::ONE);
        assert_eq!(totals.len(), 4);
        assert_eq!(totals.count_of(MonsterMeat), 1);
        assert_eq!(totals.distinct_categories(), 2);

        let halves = Totals::of(&[Morsel, Drumstick, FrogLegs]);
        assert_eq!(halves.units(Category::Meat), Units::whole(1) + Units::HALF);
    }

    #[test]
    fn candidate_list_is_priority_ordered() {
        let pot = [Meat, Meat, Meat, Meat];
        let listed = candidates(PotType::Cookpot, &pot);
        assert_eq!(
            listed,
            vec![FoodType::MeatyStew, FoodType::Meatballs]
        );
    }
}
