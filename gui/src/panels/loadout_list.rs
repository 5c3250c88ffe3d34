use eframe::egui;
use townloader_core::types::Name;

/// Left pane: the loadout names, sorted, with the current one highlighted.
pub struct LoadoutListPanel;

impl LoadoutListPanel {
    /// Renders the name list. Returns the name clicked this frame.
    pub fn show(ui: &mut egui::Ui, names: &[Name], current: Option<&Name>) -> Option<Name> {
        let mut clicked = None;

        ui.heading("Loadouts");
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("loadout_list")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for name in names {
                    let selected = current == Some(name);
                    if ui.selectable_label(selected, name.as_str()).clicked() {
                        clicked = Some(name.clone());
                    }
                }
            });

        clicked
    }
}
