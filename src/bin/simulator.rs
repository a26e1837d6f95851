use anyhow::anyhow;
use cooking_simulator::{
    data,
    event::{MESSAGE_QUEUE, Subscriber},
    share::{self, ShareState},
    state::app::AppState,
    ui,
};

struct App {
    state: AppState,
}

impl App {
    fn new(cc: &eframe::CreationContext<'_>, restored: ShareState) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        install_cjk_fonts(&cc.egui_ctx);
        data::loader::init_catalog_info();

        Self {
            state: AppState::new(restored),
        }
    }

    /// Process all the messages in the queue
    fn process_message_queue(&mut self) {
        while let Some(m) = MESSAGE_QUEUE.take() {
            log::debug!("Message: {m:?}");
            self.state.handle_message(&m);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_message_queue();
        ui::draw(ctx, &self.state);
    }
}

/// Common system locations of a CJK-capable font; the built-in egui fonts
/// have no CJK glyphs, so without one the Chinese UI renders as boxes.
const CJK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

fn install_cjk_fonts(ctx: &egui::Context) {
    let Some(bytes) = CJK_FONT_PATHS
        .iter()
        .find_map(|path| std::fs::read(path).ok())
    else {
        log::warn!("WARNING: No CJK font found, Chinese text will not render");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), egui::FontData::from_owned(bytes).into());
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .get_mut(&family)
            .expect("Default font families missing!")
            .push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // An optional share code restores a previous session
    let restored = std::env::args()
        .nth(1)
        .map(|code| share::decode(&code))
        .unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100., 720.]),
        ..Default::default()
    };

    let mut outcome = Ok(());
    let _ = sycamore_reactive::create_root(|| {
        outcome = eframe::run_native(
            "Crockpot Cooking Simulator",
            options,
            Box::new(move |cc| Ok(Box::new(App::new(cc, restored)))),
        );
    });

    outcome.map_err(|e| anyhow!("Failed to run the simulator window: {e}"))
}
