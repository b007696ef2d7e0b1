//! The pointer-driven paint state machine.
//!
//! ```text
//!            press / touch-start over a cell
//!   ┌──────┐ ───────────────────────────────► ┌──────────┐ ◄─┐ enter / touch-move
//!   │ Idle │                                  │ Painting │   │ over a cell
//!   └──────┘ ◄─────────────────────────────── └──────────┘ ──┘
//!            release / touch-end / pointer left the window
//! ```
//!
//! A single activation (click) paints its cell in either state without
//! changing the state.

use crate::color::ColorProvider;
use crate::grid::{CellId, Grid};

/// Whether a gesture is currently painting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintState {
    #[default]
    Idle,
    Painting,
}

/// What the host should do with default scrolling for a touch-move.
///
/// In egui this only covers scroll deltas: the app clears them before any
/// widget runs. A single-finger drag is never turned into scrolling by the
/// grid panel itself, so there is nothing more to suppress there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPolicy {
    #[default]
    Allow,
    Suppress,
}

impl ScrollPolicy {
    /// Suppression wins when several moves land in one frame
    pub fn combine(self, other: Self) -> Self {
        if self == Self::Suppress || other == Self::Suppress {
            Self::Suppress
        } else {
            Self::Allow
        }
    }
}

/// The grid and color source a gesture paints with
pub struct PaintContext<'a> {
    pub grid: &'a mut Grid,
    pub colors: &'a mut ColorProvider,
}

impl<'a> PaintContext<'a> {
    pub fn new(grid: &'a mut Grid, colors: &'a mut ColorProvider) -> Self {
        Self { grid, colors }
    }

    /// Paint one cell with the provider's current color.
    ///
    /// A stale id from a previous layout does not draw a color at all.
    pub fn paint(&mut self, cell: CellId) {
        if self.grid.cell(cell).is_none() {
            return;
        }
        let color = self.colors.current_color();
        self.grid.paint(cell, color);
        log::trace!("Painted {:?} with {:?}", cell, color);
    }
}

/// Typed gesture events, independent of the UI toolkit that produces them
pub trait GestureHandler {
    /// Primary press or touch-start over a cell
    fn on_press_start(&mut self, cell: CellId, ctx: &mut PaintContext<'_>);

    /// Pointer entered a cell; only paints while a gesture is active
    fn on_enter_while_pressed(&mut self, cell: CellId, ctx: &mut PaintContext<'_>);

    /// Touch moved; `target` is the hit-tested cell, `over_grid` whether the
    /// touch point lies within the grid's bounds
    fn on_touch_move(
        &mut self,
        target: Option<CellId>,
        over_grid: bool,
        ctx: &mut PaintContext<'_>,
    ) -> ScrollPolicy;

    /// Release, touch-end, or the pointer leaving the window
    fn on_release_anywhere(&mut self);

    /// A click on a cell
    fn on_single_activate(&mut self, cell: CellId, ctx: &mut PaintContext<'_>);
}

#[derive(Debug, Clone, Default)]
pub struct PaintStateMachine {
    state: PaintState,
}

impl PaintStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    pub fn is_painting(&self) -> bool {
        self.state == PaintState::Painting
    }
}

impl GestureHandler for PaintStateMachine {
    fn on_press_start(&mut self, cell: CellId, ctx: &mut PaintContext<'_>) {
        ctx.paint(cell);
        if self.state == PaintState::Idle {
            log::debug!("Gesture started at {:?}", cell);
        }
        self.state = PaintState::Painting;
    }

    fn on_enter_while_pressed(&mut self, cell: CellId, ctx: &mut PaintContext<'_>) {
        if self.is_painting() {
            ctx.paint(cell);
        }
    }

    fn on_touch_move(
        &mut self,
        target: Option<CellId>,
        over_grid: bool,
        ctx: &mut PaintContext<'_>,
    ) -> ScrollPolicy {
        if let (Some(cell), true) = (target, self.is_painting()) {
            ctx.paint(cell);
        }
        if over_grid { ScrollPolicy::Suppress } else { ScrollPolicy::Allow }
    }

    fn on_release_anywhere(&mut self) {
        if self.is_painting() {
            log::debug!("Gesture ended");
        }
        self.state = PaintState::Idle;
    }

    fn on_single_activate(&mut self, cell: CellId, ctx: &mut PaintContext<'_>) {
        ctx.paint(cell);
    }
}
