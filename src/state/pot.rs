use crate::data::{ingredient::IngredientType, pot::PotType};

/// A pot holds at most this many ingredients.
pub const POT_SLOTS: usize = 4;

/// What the user has placed in the pot: the pot variant and an ordered
/// list of at most [`POT_SLOTS`] ingredients. Only ever mutated in direct
/// response to a user action, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PotSelection {
    pot: PotType,
    slots: Vec<IngredientType>,
}

impl Default for PotSelection {
    fn default() -> Self {
        Self::new(PotType::default())
    }
}

impl PotSelection {
    pub fn new(pot: PotType) -> Self {
        Self {
            pot,
            slots: Vec::with_capacity(POT_SLOTS),
        }
    }

    /// Rebuild a selection, e.g. from a share code. Anything beyond the
    /// slot limit is dropped.
    pub fn restore(
        pot: PotType,
        ingredients: impl IntoIterator<Item = IngredientType>,
    ) -> Self {
        let mut selection = Self::new(pot);
        for ingredient in ingredients {
            if !selection.add(ingredient) {
                break;
            }
        }
        selection
    }

    pub fn pot(&self) -> PotType {
        self.pot
    }

    pub fn slots(&self) -> &[IngredientType] {
        &self.slots
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= POT_SLOTS
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns false when the pot is already full.
    #[must_use]
    pub fn add(&mut self, ingredient: IngredientType) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots.push(ingredient);
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<IngredientType> {
        if index >= self.slots.len() {
            return None;
        }
        Some(self.slots.remove(index))
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn toggle_pot(&mut self) {
        self.pot = self.pot.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use IngredientType::*;

    #[test]
    fn pot_never_exceeds_the_slot_limit() {
        let mut selection = PotSelection::default();
        for _ in 0..POT_SLOTS {
            assert!(selection.add(Meat));
        }
        assert!(selection.is_full());
        assert!(!selection.add(Meat));
        assert_eq!(selection.slots().len(), POT_SLOTS);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut selection = PotSelection::default();
        assert!(selection.add(Meat));
        assert!(selection.add(Berries));
        assert!(selection.add(Twigs));

        assert_eq!(selection.remove(1), Some(Berries));
        assert_eq!(selection.slots(), &[Meat, Twigs]);
        assert_eq!(selection.remove(5), None);
    }

    #[test]
    fn restore_truncates_to_capacity() {
        let selection =
            PotSelection::restore(PotType::Cookpot, [Meat; POT_SLOTS + 3]);
        assert_eq!(selection.slots().len(), POT_SLOTS);
    }

    #[test]
    fn toggling_the_pot_keeps_the_ingredients() {
        let mut selection = PotSelection::restore(PotType::Cookpot, [Meat, Berries]);
        selection.toggle_pot();
        assert_eq!(selection.pot(), PotType::PortableCookpot);
        assert_eq!(selection.slots(), &[Meat, Berries]);
    }
}
