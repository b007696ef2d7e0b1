use egui::{LayerId, Painter, Sense, Stroke, Vec2, pos2};

use crate::PixelGridApp;
use crate::config::{BACKGROUND, CELL_SEPARATOR};
use crate::grid::Grid;
use crate::input::route_events;
use crate::paint::ScrollPolicy;

/// Below this cell size separators would hide the colors
const MIN_SEPARATED_CELL: f32 = 4.0;

/// Route this frame's pointer and touch input to the paint state machine.
///
/// Runs before any panel is laid out so that a suppressed scroll never
/// reaches a widget. Positions covered by another layer (popups, windows,
/// modal backdrops) do not reach the grid; panels live on the background
/// layer, which is where the grid is drawn.
pub fn grid_input(app: &mut PixelGridApp, ctx: &egui::Context) {
    if app.dialog.is_open() {
        return;
    }

    let on_grid_layer =
        |pos| ctx.layer_id_at(pos).is_none_or(|layer| layer == LayerId::background());
    let events = app.input.process_input(ctx, &app.state.grid, on_grid_layer);
    if events.is_empty() {
        return;
    }

    let (machine, mut paint_ctx) = app.state.split();
    if route_events(&events, machine, &mut paint_ctx) == ScrollPolicy::Suppress {
        ctx.input_mut(|input| {
            input.raw_scroll_delta = Vec2::ZERO;
            input.smooth_scroll_delta = Vec2::ZERO;
        });
    }
}

pub fn grid_panel(app: &mut PixelGridApp, ctx: &egui::Context) {
    let now = ctx.input(|input| input.time);
    let viewport = ctx.screen_rect();

    egui::CentralPanel::default().show(ctx, |ui| {
        let container = ui.available_rect_before_wrap();
        app.toolbar.observe_viewport(now, viewport, container, &mut app.state);
        app.toolbar.poll(now, &mut app.state);

        // Claim the whole container so drags over the grid stay with us
        ui.allocate_rect(container, Sense::click_and_drag());

        paint_grid(ui.painter(), &app.state.grid);
    });

    if let Some(wait) = app.toolbar.rebuild_due_in(now) {
        ctx.request_repaint_after(wait);
    }
}

/// Draw every cell, then the separators on top
pub fn paint_grid(painter: &Painter, grid: &Grid) {
    if !grid.is_built() {
        return;
    }

    for cell in grid.cells() {
        let color = cell.color().unwrap_or(BACKGROUND);
        painter.rect_filled(grid.cell_rect(cell.id()), 0.0, color);
    }

    if grid.cell_size() < MIN_SEPARATED_CELL {
        return;
    }
    let rect = grid.rect();
    let stroke = Stroke::new(1.0, CELL_SEPARATOR);
    for i in 0..=grid.side() {
        let offset = i as f32 * grid.cell_size();
        painter.line_segment(
            [pos2(rect.min.x + offset, rect.min.y), pos2(rect.min.x + offset, rect.max.y)],
            stroke,
        );
        painter.line_segment(
            [pos2(rect.min.x, rect.min.y + offset), pos2(rect.max.x, rect.min.y + offset)],
            stroke,
        );
    }
}
