use crate::color::ColorMode;
use crate::input::InputHandler;
use crate::panels::{Dialog, dialogs, grid_input, grid_panel, toolbar_panel};
use crate::state::SketchState;
use crate::toolbar::ToolbarController;

/// We derive Deserialize/Serialize so the color preferences survive a restart.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PixelGridApp {
    pub(crate) state: SketchState,
    #[serde(skip)]
    pub(crate) toolbar: ToolbarController,
    #[serde(skip)]
    pub(crate) input: InputHandler,
    #[serde(skip)]
    pub(crate) dialog: Dialog,
}

impl PixelGridApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = cc
            .storage
            .and_then(|storage| eframe::get_value::<Self>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::from_state(app.state)
    }

    /// Start a session from existing state; the grid is built on the first frame
    pub fn from_state(mut state: SketchState) -> Self {
        let mut toolbar = ToolbarController::new();
        let random = state.colors.mode() == ColorMode::Random;
        toolbar.toggle_color_mode(random, &mut state);

        Self {
            state,
            toolbar,
            input: InputHandler::new(),
            dialog: Dialog::Closed,
        }
    }

    pub fn state(&self) -> &SketchState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SketchState {
        &mut self.state
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    /// Show the resize prompt, prefilled with the current side length
    pub fn open_resize_prompt(&mut self) {
        self.dialog = Dialog::ResizePrompt {
            input: self.state.side().to_string(),
            focus_pending: true,
        };
    }

    /// Lay out one frame. Grid input goes first, before any widget reads it.
    pub fn ui(&mut self, ctx: &egui::Context) {
        grid_input(self, ctx);
        toolbar_panel(self, ctx);
        grid_panel(self, ctx);
        dialogs(self, ctx);
    }
}

impl eframe::App for PixelGridApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
