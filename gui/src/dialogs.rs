//! Modal prompt and notice windows.
//!
//! The app holds at most one open dialog at a time. Prompts submit on OK or
//! Enter; submitting an empty string counts as cancel.

use crate::theme;
use eframe::egui;

/// The dialog currently on screen, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Dialog {
    #[default]
    None,
    /// Name prompt for a new loadout.
    NewLoadout { name: String },
    /// Gun text prompt for the current loadout.
    AddGun { gun: String },
    /// Gun text prompt pre-filled with the gun being edited.
    EditGun { index: usize, gun: String },
    /// Message with a single OK button, for warnings and confirmations.
    Notice { title: String, message: String },
}

/// A submitted prompt, handed back to the app to apply.
#[derive(Clone, Debug, PartialEq)]
pub enum DialogResult {
    CreateLoadout(String),
    AddGun(String),
    EditGun { index: usize, gun: String },
}

enum PromptOutcome {
    Open,
    Cancelled,
    Submitted,
}

impl Dialog {
    pub fn notice(title: &str, message: &str) -> Self {
        Self::Notice {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn is_open(&self) -> bool {
        *self != Self::None
    }

    /// Renders the open dialog. On submit or cancel the dialog closes
    /// itself; a submit also returns the entered value.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogResult> {
        let outcome = match self {
            Dialog::None => return None,
            Dialog::NewLoadout { name } => {
                Self::prompt(ctx, "New Loadout", "Enter the loadout name:", name)
            }
            Dialog::AddGun { gun } => Self::prompt(
                ctx,
                "Add Gun",
                "Enter the gun and attachments in format 'gun+attachment1+attachment2':",
                gun,
            ),
            Dialog::EditGun { gun, .. } => {
                Self::prompt(ctx, "Edit Gun", "Edit the gun and attachments:", gun)
            }
            Dialog::Notice { title, message } => Self::notice_window(ctx, title, message),
        };

        match outcome {
            PromptOutcome::Open => None,
            PromptOutcome::Cancelled => {
                *self = Dialog::None;
                None
            }
            PromptOutcome::Submitted => match std::mem::take(self) {
                Dialog::NewLoadout { name } => Some(DialogResult::CreateLoadout(name)),
                Dialog::AddGun { gun } => Some(DialogResult::AddGun(gun)),
                Dialog::EditGun { index, gun } => Some(DialogResult::EditGun { index, gun }),
                _ => None,
            },
        }
    }

    fn prompt(ctx: &egui::Context, title: &str, label: &str, text: &mut String) -> PromptOutcome {
        let mut outcome = PromptOutcome::Open;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(label);

                let response = ui.add(
                    egui::TextEdit::singleline(text).desired_width(theme::PROMPT_WIDTH),
                );
                // lost_focus must be read before request_focus puts focus
                // back, or the Enter-triggered release is never seen.
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                response.request_focus();

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || submitted {
                        // An empty submission behaves like cancel.
                        outcome = if text.is_empty() {
                            PromptOutcome::Cancelled
                        } else {
                            PromptOutcome::Submitted
                        };
                    }
                    if ui.button("Cancel").clicked()
                        || ui.input(|i| i.key_pressed(egui::Key::Escape))
                    {
                        outcome = PromptOutcome::Cancelled;
                    }
                });
            });

        outcome
    }

    fn notice_window(ctx: &egui::Context, title: &str, message: &str) -> PromptOutcome {
        let mut outcome = PromptOutcome::Open;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    outcome = PromptOutcome::Cancelled;
                }
            });

        outcome
    }
}
