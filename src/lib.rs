pub mod cook;
pub mod data;
pub mod event;
pub mod i18n;
pub mod share;
pub mod state;
pub mod ui;

/// Which page of the simulator is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    // Assemble a pot and watch what comes out
    #[default]
    Cookpot,
    // Browse every dish and its stats
    Foods,
}
