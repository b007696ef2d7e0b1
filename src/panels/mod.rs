mod dialogs;
mod grid_panel;
mod toolbar_panel;

pub use dialogs::{Dialog, dialogs};
pub use grid_panel::{grid_input, grid_panel, paint_grid};
pub use toolbar_panel::toolbar_panel;
