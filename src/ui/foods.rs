use egui::RichText;
use egui_taffy::{
    TuiBuilderLogic,
    taffy::{self, AlignItems, prelude::percent},
    tui,
};
use itertools::Itertools;

use crate::{
    data::{
        food::{FOOD_DATA, FoodType},
        loader::FOODS,
        recipe::eligible_pots,
    },
    event::{MESSAGE_QUEUE, Message},
    i18n::{Language, UiText, text},
    state::app::AppState,
    ui::{Drawable, Icon},
};

const ICON_SIZE: f32 = 48.;

/// Browse every dish; selecting one shows its stat block.
pub struct FoodsPage<'a> {
    pub state: &'a AppState,
}

impl Drawable for FoodsPage<'_> {
    fn show_widget(&self, ui: &mut egui::Ui) {
        let language = self.state.language.get();
        let selected = self.state.selected_food.get();

        ui.horizontal_top(|ui| {
            egui::ScrollArea::vertical()
                .id_salt("food_grid")
                .max_width(ui.available_width() * 0.6)
                .show(ui, |ui| {
                    self.food_grid(ui, selected, language);
                });

            ui.separator();

            match selected {
                Some(food) => food_details(ui, food, language),
                None => {
                    ui.label(text(language, UiText::PickAFood));
                }
            }
        });
    }
}

impl FoodsPage<'_> {
    fn food_grid(
        &self,
        ui: &mut egui::Ui,
        selected: Option<FoodType>,
        language: Language,
    ) {
        let foods = FOODS.get().expect("Catalog info not initialised!");

        tui(ui, ui.id().with("foods"))
            .reserve_available_width()
            .style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                flex_wrap: taffy::FlexWrap::Wrap,
                align_items: Some(AlignItems::Start),
                size: taffy::Size {
                    width: percent(1.),
                    height: percent(1.),
                },
                ..Default::default()
            })
            .show(|ui| {
                ui.reuse_style().add(|ui| {
                    for data in &FOOD_DATA {
                        let icon = Icon {
                            texture: &foods[data.food].texture,
                            size: ICON_SIZE,
                            selected: selected == Some(data.food),
                        };
                        let resp =
                            ui.ui_add(icon).on_hover_text(data.food.name(language));

                        if resp.clicked() {
                            MESSAGE_QUEUE.send(Message::ShowFood(data.food));
                        }
                    }
                });
            });
    }
}

fn food_details(ui: &mut egui::Ui, food: FoodType, language: Language) {
    let foods = FOODS.get().expect("Catalog info not initialised!");
    let data = food.get();

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            Icon {
                texture: &foods[food].texture,
                size: ICON_SIZE,
                selected: false,
            }
            .draw(ui);
            ui.heading(food.name(language));
        });
        ui.separator();

        egui::Grid::new("food_stats").num_columns(2).show(ui, |ui| {
            ui.label(text(language, UiText::Health));
            ui.label(format!("{}", data.health));
            ui.end_row();

            ui.label(text(language, UiText::Hunger));
            ui.label(format!("{}", data.hunger));
            ui.end_row();

            ui.label(text(language, UiText::Sanity));
            ui.label(format!("{}", data.sanity));
            ui.end_row();

            ui.label(text(language, UiText::PerishTime));
            ui.label(match data.perish_days {
                Some(days) => format!("{days} {}", text(language, UiText::Days)),
                None => text(language, UiText::NeverSpoils).to_owned(),
            });
            ui.end_row();

            ui.label(text(language, UiText::CookTime));
            ui.label(format!(
                "{}{}",
                data.cook_secs,
                text(language, UiText::Seconds)
            ));
            ui.end_row();

            ui.label(text(language, UiText::CookedIn));
            ui.label(
                eligible_pots(food)
                    .into_iter()
                    .map(|pot| pot.name(language))
                    .join(", "),
            );
            ui.end_row();
        });

        ui.add_space(8.);
        ui.label(RichText::new(format!("#{}", data.key)).weak().monospace());
    });
}
