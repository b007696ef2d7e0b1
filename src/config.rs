/// Side length the grid starts with.
pub const DEFAULT_SIDE: usize = 16;

/// Largest side length a resize request may ask for.
pub const MAX_SIDE: usize = 100;

/// Quiet period (seconds) a container resize must settle for before the grid is rebuilt.
pub const RESIZE_QUIET_PERIOD: f64 = 0.2;

/// Color of an unpainted cell.
pub const BACKGROUND: egui::Color32 = egui::Color32::WHITE;

/// Thin separator drawn between cells.
pub const CELL_SEPARATOR: egui::Color32 = egui::Color32::from_gray(225);
