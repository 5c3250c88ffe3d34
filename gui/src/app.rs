use crate::dialogs::{Dialog, DialogResult};
use crate::panels::{Action, ActionsPanel, GunListEvent, GunListPanel, LoadoutListPanel};
use crate::theme;
use eframe::egui;
use townloader_core::store::LoadoutStore;
use townloader_core::store::error::StoreError;
use townloader_core::types::Name;

/// Application state: the store plus what is currently selected on screen.
///
/// `current` is the loadout whose guns fill the right pane; `selected_gun`
/// is an index into that loadout and is cleared whenever the gun list is
/// rebuilt.
pub struct TownLoaderApp {
    store: LoadoutStore,
    current: Option<Name>,
    selected_gun: Option<usize>,
    dialog: Dialog,
}

impl TownLoaderApp {
    pub fn new(store: LoadoutStore) -> Self {
        Self {
            store,
            current: None,
            selected_gun: None,
            dialog: Dialog::None,
        }
    }
}

impl eframe::App for TownLoaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let names: Vec<Name> = self.store.loadouts().names().cloned().collect();
        let guns: Vec<String> = self
            .current
            .as_ref()
            .and_then(|name| self.store.loadouts().guns(name))
            .map(|guns| guns.to_vec())
            .unwrap_or_default();

        let dialog_open = self.dialog.is_open();
        let mut clicked_name = None;
        let mut action = None;
        let mut gun_event = None;

        egui::SidePanel::left("loadout_panel")
            .resizable(false)
            .exact_width(theme::LOADOUT_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!dialog_open, |ui| {
                    clicked_name = LoadoutListPanel::show(ui, &names, self.current.as_ref());
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!dialog_open, |ui| {
                ui.horizontal_top(|ui| {
                    action = ActionsPanel::show(ui);
                    ui.separator();
                    gun_event = GunListPanel::show(ui, &guns, self.selected_gun);
                });
            });
        });

        if let Some(name) = clicked_name {
            self.select_loadout(name);
        }
        if let Some(action) = action {
            self.apply_action(action);
        }
        if let Some(event) = gun_event {
            self.apply_gun_event(event);
        }
        if let Some(result) = self.dialog.show(ctx) {
            self.apply_dialog(result);
        }
    }
}

/// Gesture handlers. Plain state transitions over the store and dialog so
/// they can be exercised without an egui context.
impl TownLoaderApp {
    fn select_loadout(&mut self, name: Name) {
        self.current = Some(name);
        self.selected_gun = None;
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::NewLoadout => {
                self.dialog = Dialog::NewLoadout { name: String::new() };
            }
            Action::AddGun => {
                if self.current.is_none() {
                    self.dialog =
                        Dialog::notice("No Loadout", "Please select or create a loadout first.");
                    return;
                }
                self.dialog = Dialog::AddGun { gun: String::new() };
            }
            Action::RemoveGun => self.remove_selected_gun(),
            Action::CopyLoadout => self.copy_current_loadout(),
        }
    }

    fn apply_gun_event(&mut self, event: GunListEvent) {
        match event {
            GunListEvent::Clicked(index) => self.selected_gun = Some(index),
            GunListEvent::DoubleClicked(index) => {
                self.selected_gun = Some(index);
                self.open_edit_dialog(index);
            }
        }
    }

    fn apply_dialog(&mut self, result: DialogResult) {
        match result {
            DialogResult::CreateLoadout(raw) => match Name::try_from(raw) {
                Ok(name) => {
                    if let Err(err) = self.store.create_loadout(name) {
                        self.report_error("create loadout", &err);
                    }
                }
                Err(err) => {
                    self.dialog = Dialog::notice("Invalid Name", &err.to_string());
                }
            },
            DialogResult::AddGun(gun) => {
                let Some(current) = self.current.clone() else {
                    return;
                };
                if let Err(err) = self.store.add_gun(&current, gun) {
                    self.report_error("add gun", &err);
                }
                self.selected_gun = None;
            }
            DialogResult::EditGun { index, gun } => {
                let Some(current) = self.current.clone() else {
                    return;
                };
                if let Err(err) = self.store.edit_gun(&current, index, gun) {
                    self.report_error("edit gun", &err);
                }
                self.selected_gun = None;
            }
        }
    }

    fn remove_selected_gun(&mut self) {
        let Some(current) = self.current.clone() else {
            self.dialog = Dialog::notice("No Loadout", "Please select a loadout first.");
            return;
        };
        let Some(index) = self.selected_gun else {
            self.dialog = Dialog::notice("No Selection", "Please select a gun to remove.");
            return;
        };
        let Some(gun) = self
            .store
            .loadouts()
            .guns(&current)
            .and_then(|guns| guns.get(index).cloned())
        else {
            // The selection outlived the row it pointed at.
            self.selected_gun = None;
            self.dialog = Dialog::notice("No Selection", "Please select a gun to remove.");
            return;
        };

        if let Err(err) = self.store.remove_gun(&current, &gun) {
            self.report_error("remove gun", &err);
        }
        self.selected_gun = None;
    }

    fn open_edit_dialog(&mut self, index: usize) {
        let Some(current) = self.current.clone() else {
            self.dialog = Dialog::notice("No Loadout", "Please select a loadout first.");
            return;
        };
        let Some(gun) = self
            .store
            .loadouts()
            .guns(&current)
            .and_then(|guns| guns.get(index).cloned())
        else {
            self.selected_gun = None;
            self.dialog = Dialog::notice("No Selection", "Please select a gun to edit.");
            return;
        };

        self.dialog = Dialog::EditGun { index, gun };
    }

    fn copy_current_loadout(&mut self) {
        let Some(current) = self.current.clone() else {
            self.dialog = Dialog::notice("No Loadout", "Please select a loadout first.");
            return;
        };

        match self.store.copy_to_clipboard(&current) {
            Ok(command) => {
                log::info!("Copied loadout \"{current}\" ({} chars)", command.len());
                self.dialog = Dialog::notice("Copied", "Loadout copied to clipboard!");
            }
            Err(err) => self.report_error("copy loadout", &err),
        }
    }

    fn report_error(&mut self, context: &str, err: &StoreError) {
        log::error!("Failed to {context}: {err}");
        self.dialog = Dialog::notice("Error", &err.to_string());
    }
}

#[cfg(test)]
mod tests;
