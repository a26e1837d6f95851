use sycamore_reactive::{ReadSignal, Signal, create_memo, create_signal};

use crate::{
    Page, cook,
    data::{food::FoodType, ingredient::CategoryFilter},
    event::{Message, Subscriber},
    i18n::Language,
    share::{self, ShareState},
    state::pot::PotSelection,
};

/// Everything the UI reads, as signals. The resolved dish list is a memo
/// over the pot selection, so it recomputes exactly when the pot changes.
///
/// Must be created inside a reactive root.
#[derive(Debug)]
pub struct AppState {
    pub selection: Signal<PotSelection>,
    pub language: Signal<Language>,
    pub filter: Signal<CategoryFilter>,
    pub page: Signal<Page>,
    /// The dish whose details the foods page shows.
    pub selected_food: Signal<Option<FoodType>>,
    /// Set when an add bounced off a full pot; cleared by remove/clear.
    pub pot_full: Signal<bool>,
    pub resolved: ReadSignal<Vec<FoodType>>,
}

impl AppState {
    pub fn new(restored: ShareState) -> Self {
        let selection = create_signal(PotSelection::restore(
            restored.pot,
            restored.ingredients,
        ));
        let language = create_signal(restored.language);
        let filter = create_signal(CategoryFilter::All);
        let page = create_signal(Page::default());
        let selected_food = create_signal(None);
        let pot_full = create_signal(false);

        let resolved = create_memo(move || {
            let selection = selection.get_clone();
            cook::candidates(selection.pot(), selection.slots())
        });

        Self {
            selection,
            language,
            filter,
            page,
            selected_food,
            pot_full,
            resolved,
        }
    }

    pub fn share_code(&self) -> String {
        let selection = self.selection.get_clone();
        share::encode(self.language.get(), selection.pot(), selection.slots())
    }
}

impl Subscriber for AppState {
    fn handle_message(&mut self, event: &Message) {
        match *event {
            Message::AddIngredient(ingredient) => {
                let mut selection = self.selection.get_clone();
                if selection.add(ingredient) {
                    self.selection.set(selection);
                } else {
                    self.pot_full.set(true);
                }
            }
            Message::RemoveIngredient(index) => {
                let mut selection = self.selection.get_clone();
                if selection.remove(index).is_some() {
                    self.selection.set(selection);
                }
                self.pot_full.set(false);
            }
            Message::ClearPot => {
                let mut selection = self.selection.get_clone();
                selection.clear();
                self.selection.set(selection);
                self.pot_full.set(false);
            }
            Message::TogglePot => {
                let mut selection = self.selection.get_clone();
                selection.toggle_pot();
                self.selection.set(selection);
            }
            Message::SetFilter(filter) => self.filter.set(filter),
            Message::SetLanguage(language) => self.language.set(language),
            Message::SetPage(page) => self.page.set(page),
            Message::ShowFood(food) => {
                self.selected_food.set(Some(food));
                self.page.set(Page::Foods);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sycamore_reactive::create_root;

    use super::*;
    use crate::data::ingredient::IngredientType::*;

    #[test]
    fn resolved_dishes_follow_the_selection() {
        let _root = create_root(|| {
            let mut state = AppState::new(ShareState::default());
            assert!(state.resolved.get_clone().is_empty());

            for _ in 0..4 {
                state.handle_message(&Message::AddIngredient(Meat));
            }
            assert_eq!(
                state.resolved.get_clone().first(),
                Some(&FoodType::MeatyStew)
            );

            state.handle_message(&Message::ClearPot);
            assert!(state.resolved.get_clone().is_empty());
        });
    }

    #[test]
    fn adding_to_a_full_pot_raises_the_notice() {
        let _root = create_root(|| {
            let mut state = AppState::new(ShareState::default());
            for _ in 0..4 {
                state.handle_message(&Message::AddIngredient(Berries));
            }
            assert!(!state.pot_full.get());

            state.handle_message(&Message::AddIngredient(Berries));
            assert!(state.pot_full.get());
            assert_eq!(state.selection.get_clone().slots().len(), 4);

            state.handle_message(&Message::RemoveIngredient(0));
            assert!(!state.pot_full.get());
        });
    }

    #[test]
    fn share_code_tracks_language_pot_and_ingredients() {
        let _root = create_root(|| {
            let mut state = AppState::new(ShareState::default());
            state.handle_message(&Message::SetLanguage(Language::ZhCn));
            state.handle_message(&Message::TogglePot);
            state.handle_message(&Message::AddIngredient(Meat));

            assert_eq!(
                state.share_code(),
                "?lang=zh-CN&pot=portablecookpot&recipes=meat"
            );
        });
    }

    #[test]
    fn showing_a_food_switches_pages() {
        let _root = create_root(|| {
            let mut state = AppState::new(ShareState::default());
            state.handle_message(&Message::ShowFood(FoodType::Meatballs));
            assert_eq!(state.page.get(), Page::Foods);
            assert_eq!(state.selected_food.get(), Some(FoodType::Meatballs));
        });
    }
}
