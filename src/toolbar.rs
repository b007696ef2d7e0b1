use std::time::Duration;

use egui::{Color32, Rect};

use crate::color::ColorMode;
use crate::config::RESIZE_QUIET_PERIOD;
use crate::error::{ResizeError, parse_side_length};
use crate::state::SketchState;
use crate::util::Debouncer;

/// Turns toolbar and viewport events into grid and color-mode changes
#[derive(Debug, Clone)]
pub struct ToolbarController {
    resize_debounce: Debouncer,
    viewport: Option<Rect>,
    container: Option<Rect>,
    mode_label: &'static str,
}

impl Default for ToolbarController {
    fn default() -> Self {
        Self {
            resize_debounce: Debouncer::new(RESIZE_QUIET_PERIOD),
            viewport: None,
            container: None,
            mode_label: ColorMode::default().label(),
        }
    }
}

impl ToolbarController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the answer from the resize prompt.
    ///
    /// `None` means the prompt was cancelled and nothing happens. Invalid
    /// input leaves the grid untouched and returns the message to show.
    pub fn request_resize(
        &mut self,
        answer: Option<&str>,
        state: &mut SketchState,
    ) -> Result<Option<usize>, ResizeError> {
        let Some(answer) = answer else {
            log::debug!("Resize prompt cancelled");
            return Ok(None);
        };

        let side = parse_side_length(answer).inspect_err(|err| {
            log::debug!("Rejected resize input {answer:?}: {err}");
        })?;

        state.set_side(side);
        state.grid.rebuild(side);
        log::info!("Grid resized to {side}x{side}");
        Ok(Some(side))
    }

    /// Wipe every cell's color, keeping the layout
    pub fn clear(&mut self, state: &mut SketchState) {
        state.grid.clear();
        log::debug!("Grid cleared");
    }

    pub fn toggle_color_mode(&mut self, checked: bool, state: &mut SketchState) {
        let mode = ColorMode::from_random_checked(checked);
        state.colors.set_mode(mode);
        self.mode_label = mode.label();
    }

    pub fn set_fixed_color(&mut self, color: Color32, state: &mut SketchState) {
        state.colors.set_fixed_color(color);
    }

    /// Text for the mode label next to the checkbox
    pub fn mode_label(&self) -> &'static str {
        self.mode_label
    }

    /// The container changed size; rebuild once it has been quiet for a while
    pub fn on_viewport_resize(&mut self, now: f64, container: Rect) {
        self.container = Some(container);
        self.resize_debounce.schedule(now);
    }

    /// Feed the viewport (screen rect) and the grid container seen this frame.
    ///
    /// The first call builds the grid immediately. Only a change of the
    /// viewport schedules the debounced rebuild; the container alone can move
    /// when the toolbar rewraps and that must not wipe the drawing. While a
    /// rebuild is pending the latest container is kept for it. Returns true if
    /// the grid was built.
    pub fn observe_viewport(
        &mut self,
        now: f64,
        viewport: Rect,
        container: Rect,
        state: &mut SketchState,
    ) -> bool {
        if !state.grid.is_built() {
            self.viewport = Some(viewport);
            self.container = Some(container);
            let side = state.side();
            state.grid.build(side, container);
            log::info!("Grid created: {side}x{side}");
            return true;
        }

        if self.viewport != Some(viewport) {
            self.viewport = Some(viewport);
            self.on_viewport_resize(now, container);
        } else if self.resize_debounce.is_pending() {
            self.container = Some(container);
        }
        false
    }

    /// Run the pending rebuild if its quiet period is over. Returns true if it ran.
    pub fn poll(&mut self, now: f64, state: &mut SketchState) -> bool {
        if !self.resize_debounce.poll(now) {
            return false;
        }
        let container = self.container.unwrap_or_else(|| state.grid.container());
        state.grid.build(state.side(), container);
        true
    }

    /// How long until the pending rebuild is due, if one is pending
    pub fn rebuild_due_in(&self, now: f64) -> Option<Duration> {
        self.resize_debounce.remaining(now)
    }
}
