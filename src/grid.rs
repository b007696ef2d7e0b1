use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};

use crate::config::MAX_SIDE;

/// Position of a cell, implied by row-major creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    pub row: usize,
    pub col: usize,
}

impl CellId {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One paintable square of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    id: CellId,
    color: Option<Color32>,
}

impl Cell {
    pub fn id(&self) -> CellId {
        self.id
    }

    /// `None` means the cell shows the background
    pub fn color(&self) -> Option<Color32> {
        self.color
    }
}

/// The N×N collection of cells laid out inside a container rect.
///
/// The grid is never resized in place: `build` throws every cell away and
/// creates a fresh set, bumping `generation` so callers holding a `CellId`
/// from the previous layout can tell it is stale.
#[derive(Debug, Clone)]
pub struct Grid {
    side: usize,
    cell_size: f32,
    container: Rect,
    cells: Vec<Cell>,
    generation: u64,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            side: 0,
            cell_size: 0.0,
            container: Rect::ZERO,
            cells: Vec::new(),
            generation: 0,
        }
    }
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all cells and lay out `side`×`side` new ones inside `container`.
    ///
    /// `side` must already be validated to `1..=MAX_SIDE`.
    pub fn build(&mut self, side: usize, container: Rect) {
        debug_assert!((1..=MAX_SIDE).contains(&side), "grid side {side} out of range");

        self.cells.clear();
        self.side = side;
        self.container = container;

        let usable = container.width().min(container.height()).max(0.0);
        // A container narrower than one pixel per cell still gets visible cells
        self.cell_size = (usable / side as f32).floor().max(1.0);

        self.cells.reserve(side * side);
        for row in 0..side {
            for col in 0..side {
                self.cells.push(Cell {
                    id: CellId::new(row, col),
                    color: None,
                });
            }
        }

        self.generation += 1;
        log::debug!(
            "Built {side}x{side} grid, cell size {}px, generation {}",
            self.cell_size,
            self.generation
        );
    }

    /// Rebuild at `side` against the container of the last build
    pub fn rebuild(&mut self, side: usize) {
        let container = self.container;
        self.build(side, container);
    }

    pub fn is_built(&self) -> bool {
        !self.cells.is_empty()
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.index_of(id).map(|index| &self.cells[index])
    }

    /// Area actually covered by cells, anchored at the container's top-left
    pub fn rect(&self) -> Rect {
        let extent = self.cell_size * self.side as f32;
        Rect::from_min_size(self.container.min, Vec2::splat(extent))
    }

    pub fn cell_rect(&self, id: CellId) -> Rect {
        let min = self.container.min
            + vec2(id.col as f32 * self.cell_size, id.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Hit-test a screen position against the cells
    pub fn cell_at(&self, pos: Pos2) -> Option<CellId> {
        if !self.is_built() || !self.rect().contains(pos) {
            return None;
        }
        let local = pos - self.container.min;
        let last = self.side - 1;
        // `Rect::contains` is inclusive on the far edge
        let col = ((local.x / self.cell_size) as usize).min(last);
        let row = ((local.y / self.cell_size) as usize).min(last);
        Some(CellId::new(row, col))
    }

    /// Set a cell's color. Returns false for an id outside the current layout.
    pub fn paint(&mut self, id: CellId, color: Color32) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.cells[index].color = Some(color);
                true
            }
            None => false,
        }
    }

    /// Reset every cell to the background without rebuilding
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.color = None;
        }
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.color.is_some()).count()
    }

    fn index_of(&self, id: CellId) -> Option<usize> {
        (id.row < self.side && id.col < self.side).then(|| id.row * self.side + id.col)
    }
}

/// Container rect used when nothing better is known (tests, first frame)
pub fn container_at_origin(width: f32, height: f32) -> Rect {
    Rect::from_min_size(pos2(0.0, 0.0), vec2(width, height))
}
