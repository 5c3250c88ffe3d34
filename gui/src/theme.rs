use eframe::egui::{self, Color32, Visuals};
use townloader_core::types::Theme;

// Window layout
pub const WINDOW_SIZE: [f32; 2] = [640.0, 380.0];
pub const LOADOUT_PANEL_WIDTH: f32 = 180.0;
pub const GUN_LIST_MIN_WIDTH: f32 = 260.0;

// Controls
pub const BUTTON_WIDTH: f32 = 120.0;
pub const BUTTON_HEIGHT: f32 = 28.0;
pub const PROMPT_WIDTH: f32 = 320.0;

/// Creates the dark gray visuals used as the default look.
pub fn dark_gray_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    // Window and pane backgrounds
    visuals.panel_fill = Color32::from_gray(46);
    visuals.window_fill = Color32::from_gray(46);
    visuals.extreme_bg_color = Color32::from_gray(51);
    visuals.faint_bg_color = Color32::from_gray(49);

    // Widget backgrounds
    visuals.widgets.noninteractive.bg_fill = Color32::from_gray(56);
    visuals.widgets.inactive.bg_fill = Color32::from_gray(68);
    visuals.widgets.hovered.bg_fill = Color32::from_gray(78);
    visuals.widgets.active.bg_fill = Color32::from_gray(85);
    visuals.selection.bg_fill = Color32::from_gray(85);

    visuals
}

/// Applies the configured theme to the context.
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    match theme {
        Theme::Dark => ctx.set_visuals(dark_gray_visuals()),
        Theme::Light => ctx.set_visuals(Visuals::light()),
    }
}
