use crate::theme;
use eframe::egui;

/// Row interaction in the gun list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GunListEvent {
    Clicked(usize),
    DoubleClicked(usize),
}

/// Right pane: the guns of the current loadout, in order.
pub struct GunListPanel;

impl GunListPanel {
    /// Renders the gun list. Returns the row interaction this frame; a
    /// double click also reads as a click, so it is checked first.
    pub fn show(
        ui: &mut egui::Ui,
        guns: &[String],
        selected: Option<usize>,
    ) -> Option<GunListEvent> {
        let mut event = None;

        ui.heading("Guns");
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("gun_list")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.set_min_width(theme::GUN_LIST_MIN_WIDTH);
                for (index, gun) in guns.iter().enumerate() {
                    let response = ui.selectable_label(selected == Some(index), gun.as_str());
                    if response.double_clicked() {
                        event = Some(GunListEvent::DoubleClicked(index));
                    } else if response.clicked() {
                        event = Some(GunListEvent::Clicked(index));
                    }
                }
            });

        event
    }
}
