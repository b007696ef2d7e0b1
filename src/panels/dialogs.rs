use egui::{Id, Key, Modal};

use crate::PixelGridApp;
use crate::config::MAX_SIDE;

/// The blocking dialog currently on screen, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    Closed,
    /// Asking for a new side length, prefilled with the current one
    ResizePrompt { input: String, focus_pending: bool },
    /// A validation message the user has to dismiss
    Alert { message: String },
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Show the open dialog as a modal; everything underneath stops taking input.
///
/// Clicking the backdrop does nothing, the dialog has to be answered.
pub fn dialogs(app: &mut PixelGridApp, ctx: &egui::Context) {
    match &mut app.dialog {
        Dialog::Closed => {}
        Dialog::ResizePrompt { input, focus_pending } => {
            // Outer None: still open. Inner None: cancelled.
            let answer = Modal::new(Id::new("resize_prompt"))
                .show(ctx, |ui| {
                    ui.heading("Resize grid");
                    ui.label(format!("How many squares per side? (max {MAX_SIDE})"));
                    let response = ui.text_edit_singleline(input);
                    if std::mem::take(focus_pending) {
                        response.request_focus();
                    }
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                    let cancelled = ui.input(|i| i.key_pressed(Key::Escape));

                    let mut answer = None;
                    ui.horizontal(|ui| {
                        if ui.button("OK").clicked() || submitted {
                            answer = Some(Some(input.clone()));
                        }
                        if ui.button("Cancel").clicked() || cancelled {
                            answer = Some(None);
                        }
                    });
                    answer
                })
                .inner;

            if let Some(answer) = answer {
                app.dialog = match app.toolbar.request_resize(answer.as_deref(), &mut app.state) {
                    Ok(_) => Dialog::Closed,
                    Err(err) => Dialog::Alert {
                        message: err.to_string(),
                    },
                };
            }
        }
        Dialog::Alert { message } => {
            let dismissed = Modal::new(Id::new("resize_alert"))
                .show(ctx, |ui| {
                    ui.heading("Invalid size");
                    ui.label(message.as_str());
                    ui.button("OK").clicked() || ui.input(|i| i.key_pressed(Key::Enter))
                })
                .inner;
            if dismissed {
                app.dialog = Dialog::Closed;
            }
        }
    }
}
