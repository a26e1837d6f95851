pub mod catalog;
pub mod foods;
pub mod pot;

use egui::{
    Align, Align2, Color32, Context, CornerRadius, Frame, Id, ImageSource, Layout,
    Response, RichText, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use egui_taffy::{TuiBuilderLogic, TuiWidget};

use crate::{
    Page,
    event::{MESSAGE_QUEUE, Message},
    i18n::{Language, UiText, text},
    state::app::AppState,
    ui::{catalog::CookpotPage, foods::FoodsPage},
};

/// Trait to enable easy drawing of UI elements
pub trait Drawable {
    /// Draw a new window with the UI
    fn show_window(&self, _ctx: &Context) {}
    /// Draw the UI in an existing window
    fn show_widget(&self, _ui: &mut Ui) {}
}

/// Draw the whole frame: chrome, the active page and the full-pot notice.
pub fn draw(ctx: &Context, state: &AppState) {
    let language = state.language.get();

    egui::TopBottomPanel::top("chrome").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let title = ui.add(
                egui::Label::new(RichText::new(text(language, UiText::Title)).heading())
                    .sense(Sense::click()),
            );
            if title.clicked() {
                MESSAGE_QUEUE.send(Message::SetPage(Page::Cookpot));
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                language_picker(ui, language);
                ui.separator();
                page_nav(ui, state, language);
            });
        });
    });

    egui::TopBottomPanel::bottom("share").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(text(language, UiText::ShareCode));
            // Selectable so it can be copied out
            ui.label(RichText::new(state.share_code()).monospace());
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| match state.page.get() {
        Page::Cookpot => CookpotPage { state }.show_widget(ui),
        Page::Foods => FoodsPage { state }.show_widget(ui),
    });

    if state.pot_full.get() {
        PotFullNotice { language }.show_window(ctx);
    }
}

/// The centered overlay shown when an ingredient bounces off a full pot.
struct PotFullNotice {
    language: Language,
}

impl Drawable for PotFullNotice {
    fn show_window(&self, ctx: &Context) {
        egui::Area::new(Id::new("pot_full_notice"))
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                Frame::popup(&ctx.style()).show(ui, |ui| {
                    ui.label(
                        RichText::new(text(self.language, UiText::PotFull)).size(18.),
                    );
                });
            });
    }
}

fn page_nav(ui: &mut Ui, state: &AppState, language: Language) {
    let current = state.page.get();

    // Right-to-left layout, so the last page comes first
    for (page, label) in [
        (Page::Foods, UiText::FoodsPage),
        (Page::Cookpot, UiText::CookpotPage),
    ] {
        if ui
            .selectable_label(current == page, text(language, label))
            .clicked()
        {
            MESSAGE_QUEUE.send(Message::SetPage(page));
        }
    }
}

fn language_picker(ui: &mut Ui, current: Language) {
    for language in Language::ALL.into_iter().rev() {
        if ui
            .selectable_label(current == language, language.endonym())
            .clicked()
        {
            MESSAGE_QUEUE.send(Message::SetLanguage(language));
        }
    }
}

#[derive(Clone)]
pub struct Icon<'a> {
    pub texture: &'a ImageSource<'static>,
    pub size: f32,
    pub selected: bool,
}

impl<'a> Icon<'a> {
    pub fn draw(&self, ui: &mut Ui) -> Response {
        let resp = ui.add(
            egui::Image::new(self.texture.clone())
                .fit_to_exact_size(Vec2::splat(self.size))
                .sense(Sense::click()),
        );

        if self.selected {
            ui.painter().rect_stroke(
                resp.rect,
                CornerRadius::same(2),
                Stroke::new(2., Color32::GOLD),
                StrokeKind::Inside,
            );
        }

        resp
    }
}

impl<'a> TuiWidget for Icon<'a> {
    type Response = egui::Response;

    fn taffy_ui(self, tuib: egui_taffy::TuiBuilder) -> Self::Response {
        tuib.ui_add_manual(|ui| self.draw(ui), |resp, _| resp)
    }
}
