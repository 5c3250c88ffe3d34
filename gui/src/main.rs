mod app;
mod dialogs;
mod panels;
mod theme;

use app::TownLoaderApp;
use eframe::egui;
use townloader_core::store::LoadoutStore;
use townloader_core::types::{AppConfig, Config};

const ICON_PATH: &str = "res/icon.png";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(theme::WINDOW_SIZE)
        .with_resizable(false);
    if let Some(icon) = load_icon(ICON_PATH) {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "townLoader",
        options,
        Box::new(|cc| {
            let config = Config::default();

            let app_config = AppConfig::load(&config.config_path()).map_err(|err| {
                log::error!("Failed to load {}: {err}", config.config_path().display());
                err
            })?;

            // Pin the theme before applying custom visuals
            cc.egui_ctx.set_theme(egui::Theme::Dark);
            theme::apply_theme(&cc.egui_ctx, app_config.general.theme);

            let store = LoadoutStore::open(&config).map_err(|err| {
                log::error!("Failed to load {}: {err}", config.loadouts_path().display());
                err
            })?;
            log::info!(
                "Loaded {} loadouts from {}",
                store.loadouts().len(),
                config.loadouts_path().display()
            );

            Ok(Box::new(TownLoaderApp::new(store)))
        }),
    )
}

/// Decodes the window icon. The icon is cosmetic: if the file is missing or
/// undecodable, log a warning and start without one.
fn load_icon(path: &str) -> Option<egui::IconData> {
    match image::open(path) {
        Ok(img) => {
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            Some(egui::IconData {
                rgba: rgba.into_raw(),
                width,
                height,
            })
        }
        Err(err) => {
            log::warn!("Could not load window icon from {path}: {err}");
            None
        }
    }
}
