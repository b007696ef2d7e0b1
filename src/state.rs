use serde::{Deserialize, Serialize};

use crate::color::ColorProvider;
use crate::config::DEFAULT_SIDE;
use crate::grid::Grid;
use crate::paint::{PaintContext, PaintStateMachine};

/// Everything a drawing session mutates, held in one place instead of globals.
///
/// Only the color preferences are persisted; the grid and the gesture state
/// start fresh on every launch.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchState {
    pub colors: ColorProvider,
    #[serde(skip)]
    pub grid: Grid,
    #[serde(skip)]
    pub paint: PaintStateMachine,
    #[serde(skip, default = "default_side")]
    side: usize,
}

fn default_side() -> usize {
    DEFAULT_SIDE
}

impl Default for SketchState {
    fn default() -> Self {
        Self {
            colors: ColorProvider::default(),
            grid: Grid::default(),
            paint: PaintStateMachine::default(),
            side: default_side(),
        }
    }
}

impl SketchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(colors: ColorProvider) -> Self {
        Self {
            colors,
            ..Self::default()
        }
    }

    /// The committed side length; the grid is rebuilt to match it
    pub fn side(&self) -> usize {
        self.side
    }

    pub(crate) fn set_side(&mut self, side: usize) {
        self.side = side;
    }

    /// Split borrows so the state machine can paint while being borrowed itself
    pub fn split(&mut self) -> (&mut PaintStateMachine, PaintContext<'_>) {
        (&mut self.paint, PaintContext::new(&mut self.grid, &mut self.colors))
    }
}
