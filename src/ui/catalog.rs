use egui::scroll_area::ScrollBarVisibility;
use egui_taffy::{
    TuiBuilderLogic,
    taffy::{self, AlignItems, prelude::percent},
    tui,
};

use crate::{
    data::{
        ingredient::{Category, CategoryFilter, by_category},
        loader::INGREDIENTS,
    },
    event::{MESSAGE_QUEUE, Message},
    i18n::category_label,
    state::app::AppState,
    ui::{Drawable, Icon, pot::PotPanel},
};

const ICON_SIZE: f32 = 48.;

/// The whole cookpot page: pot strip on top, category filter column and
/// ingredient browser below.
pub struct CookpotPage<'a> {
    pub state: &'a AppState,
}

impl Drawable for CookpotPage<'_> {
    fn show_widget(&self, ui: &mut egui::Ui) {
        PotPanel { state: self.state }.show_widget(ui);
        ui.separator();

        ui.horizontal_top(|ui| {
            CategoryColumn { state: self.state }.show_widget(ui);
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("ingredient_grid")
                .scroll_bar_visibility(ScrollBarVisibility::VisibleWhenNeeded)
                .show(ui, |ui| {
                    IngredientGrid { state: self.state }.show_widget(ui);
                });
        });
    }
}

pub struct CategoryColumn<'a> {
    pub state: &'a AppState,
}

impl Drawable for CategoryColumn<'_> {
    fn show_widget(&self, ui: &mut egui::Ui) {
        let language = self.state.language.get();
        let active = self.state.filter.get();

        egui::ScrollArea::vertical()
            .id_salt("category_column")
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    let filters = std::iter::once(CategoryFilter::All)
                        .chain(Category::ALL.into_iter().map(CategoryFilter::Only));

                    for filter in filters {
                        if ui
                            .selectable_label(
                                active == filter,
                                category_label(language, filter),
                            )
                            .clicked()
                        {
                            MESSAGE_QUEUE.send(Message::SetFilter(filter));
                        }
                    }
                });
            });
    }
}

pub struct IngredientGrid<'a> {
    pub state: &'a AppState,
}

impl Drawable for IngredientGrid<'_> {
    fn show_widget(&self, ui: &mut egui::Ui) {
        let language = self.state.language.get();
        let filter = self.state.filter.get();
        let ingredients = INGREDIENTS.get().expect("Catalog info not initialised!");

        // Use egui_taffy to create a grid layout
        tui(ui, ui.id().with("ingredients"))
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
                    for data in by_category(filter) {
                        let icon = Icon {
                            texture: &ingredients[data.ingredient].texture,
                            size: ICON_SIZE,
                            selected: false,
                        };
                        let resp = ui
                            .ui_add(icon)
                            .on_hover_text(data.ingredient.name(language));

                        if resp.clicked() {
                            MESSAGE_QUEUE.send(Message::AddIngredient(data.ingredient));
                        }
                    }
                });
            });
    }
}
