use egui::{Sense, Vec2};

use crate::{
    data::{
        food::FoodType,
        loader::{FOODS, INGREDIENTS, POTS},
    },
    event::{MESSAGE_QUEUE, Message},
    i18n::{UiText, text},
    state::{app::AppState, pot::POT_SLOTS},
    ui::{Drawable, Icon},
};

const SLOT_SIZE: f32 = 56.;

/// The top strip of the cookpot page: the four slots, the pot toggle and
/// the resulting dishes.
pub struct PotPanel<'a> {
    pub state: &'a AppState,
}

impl Drawable for PotPanel<'_> {
    fn show_widget(&self, ui: &mut egui::Ui) {
        let language = self.state.language.get();
        let selection = self.state.selection.get_clone();

        let ingredients = INGREDIENTS.get().expect("Catalog info not initialised!");
        let foods = FOODS.get().expect("Catalog info not initialised!");
        let pots = POTS.get().expect("Catalog info not initialised!");
        let pot = &pots[selection.pot()];

        ui.horizontal(|ui| {
            // The four slots; a filled slot is clicked to take the
            // ingredient back out
            for slot in 0..POT_SLOTS {
                match selection.slots().get(slot) {
                    Some(&ingredient) => {
                        let resp = Icon {
                            texture: &ingredients[ingredient].texture,
                            size: SLOT_SIZE,
                            selected: false,
                        }
                        .draw(ui)
                        .on_hover_text(ingredient.name(language));

                        if resp.clicked() {
                            MESSAGE_QUEUE.send(Message::RemoveIngredient(slot));
                        }
                    }
                    None => {
                        ui.add(
                            egui::Image::new(pot.slot_texture.clone())
                                .fit_to_exact_size(Vec2::splat(SLOT_SIZE))
                                .sense(Sense::hover()),
                        );
                    }
                }
            }

            ui.separator();

            let resp = Icon {
                texture: &pot.texture,
                size: SLOT_SIZE,
                selected: false,
            }
            .draw(ui)
            .on_hover_text(selection.pot().name(language));
            if resp.clicked() {
                MESSAGE_QUEUE.send(Message::TogglePot);
            }

            if !selection.is_empty()
                && ui.button(text(language, UiText::Clear)).clicked()
            {
                MESSAGE_QUEUE.send(Message::ClearPot);
            }

            ui.separator();

            // What the pot would produce, best match first. A non-empty
            // pot that matches nothing shows the failed dish.
            let resolved = self.state.resolved.get_clone();
            let results = if selection.is_empty() {
                vec![]
            } else if resolved.is_empty() {
                vec![FoodType::WetGoop]
            } else {
                resolved
            };

            for food in results {
                let resp = Icon {
                    texture: &foods[food].texture,
                    size: SLOT_SIZE,
                    selected: false,
                }
                .draw(ui)
                .on_hover_text(food.name(language));

                if resp.clicked() {
                    MESSAGE_QUEUE.send(Message::ShowFood(food));
                }
            }
        });
    }
}
