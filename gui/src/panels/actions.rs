use crate::theme;
use eframe::egui;

/// One of the four action buttons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    NewLoadout,
    AddGun,
    RemoveGun,
    CopyLoadout,
}

/// The action button column between the two lists.
pub struct ActionsPanel;

impl ActionsPanel {
    /// Renders the buttons. Returns the action pressed this frame.
    pub fn show(ui: &mut egui::Ui) -> Option<Action> {
        let mut pressed = None;

        ui.vertical(|ui| {
            for (label, action) in [
                ("New Loadout", Action::NewLoadout),
                ("Add Gun", Action::AddGun),
                ("Remove Gun", Action::RemoveGun),
                ("Copy Loadout", Action::CopyLoadout),
            ] {
                let button = egui::Button::new(label);
                if ui
                    .add_sized([theme::BUTTON_WIDTH, theme::BUTTON_HEIGHT], button)
                    .clicked()
                {
                    pressed = Some(action);
                }
            }
        });

        pressed
    }
}
