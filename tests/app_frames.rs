use egui::{
    Event, Id, Key, Modifiers, MouseWheelUnit, PointerButton, Pos2, RawInput, Rect, Sense,
    TouchDeviceId, TouchId, TouchPhase, Vec2, pos2, vec2,
};
use pixel_grid::grid::CellId;
use pixel_grid::panels::Dialog;
use pixel_grid::{ColorProvider, PixelGridApp, SketchState};

const SCREEN: Vec2 = vec2(800.0, 800.0);

/// Drives the whole app headlessly, one egui frame at a time
struct Harness {
    ctx: egui::Context,
    app: PixelGridApp,
    time: f64,
    overlay: Option<Rect>,
}

impl Harness {
    fn new() -> Self {
        let state = SketchState::with_colors(ColorProvider::seeded(3));
        let mut harness = Self {
            ctx: egui::Context::default(),
            app: PixelGridApp::from_state(state),
            time: 0.0,
            overlay: None,
        };
        harness.idle(3);
        harness
    }

    fn frame(&mut self, events: Vec<Event>) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN)),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        self.time += 1.0 / 60.0;

        let overlay = self.overlay;
        let _ = self.ctx.run(input, |ctx| {
            self.app.ui(ctx);
            if let Some(rect) = overlay {
                egui::Area::new(Id::new("overlay")).fixed_pos(rect.min).show(ctx, |ui| {
                    ui.allocate_exact_size(rect.size(), Sense::click());
                });
            }
        });
    }

    fn idle(&mut self, frames: usize) {
        for _ in 0..frames {
            self.frame(Vec::new());
        }
    }

    fn click(&mut self, pos: Pos2) {
        self.frame(vec![Event::PointerMoved(pos)]);
        self.frame(vec![button(pos, true)]);
        self.frame(vec![button(pos, false)]);
        self.idle(1);
    }

    fn key(&mut self, key: Key) {
        self.frame(vec![Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }]);
        self.idle(1);
    }

    fn center(&self, row: usize, col: usize) -> Pos2 {
        self.app.state().grid.cell_rect(CellId::new(row, col)).center()
    }

    fn painted(&self) -> usize {
        self.app.state().grid.painted_count()
    }

    /// Vertical middle of the toolbar, which sits above the grid container
    fn toolbar_y(&self) -> f32 {
        (self.app.state().grid.container().min.y - 8.0).max(2.0) * 0.5
    }
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn touch(phase: TouchPhase, pos: Pos2) -> Event {
    Event::Touch {
        device_id: TouchDeviceId(0),
        id: TouchId(7),
        phase,
        pos,
        force: None,
    }
}

/// Find the x of the Clear button by clicking along the toolbar of fresh apps
fn clear_button_x() -> f32 {
    for x in (0..400).step_by(3) {
        let mut harness = Harness::new();
        harness.click(harness.center(0, 0));
        assert_eq!(harness.painted(), 1);

        let y = harness.toolbar_y();
        harness.click(pos2(x as f32, y));
        if harness.painted() == 0 {
            return x as f32;
        }
    }
    panic!("no Clear button along the toolbar");
}

#[test]
fn test_first_frame_builds_default_grid() {
    let harness = Harness::new();
    let grid = &harness.app.state().grid;
    assert!(grid.is_built());
    assert_eq!(grid.side(), 16);
    assert!(grid.container().min.y > 0.0);
    assert_eq!(harness.painted(), 0);
}

#[test]
fn test_click_and_drag_paint_through_frames() {
    let mut harness = Harness::new();
    harness.click(harness.center(2, 2));
    assert_eq!(harness.painted(), 1);
    assert!(harness.app.state().grid.cell(CellId::new(2, 2)).unwrap().color().is_some());

    let path = [harness.center(5, 0), harness.center(5, 1), harness.center(5, 2)];
    harness.frame(vec![Event::PointerMoved(path[0]), button(path[0], true)]);
    harness.frame(vec![Event::PointerMoved(path[1])]);
    harness.frame(vec![Event::PointerMoved(path[2]), button(path[2], false)]);
    assert_eq!(harness.painted(), 4);

    // Released, so hovering no longer paints
    harness.frame(vec![Event::PointerMoved(harness.center(5, 3))]);
    assert_eq!(harness.painted(), 4);
}

#[test]
fn test_clicks_on_an_overlapping_layer_do_not_paint() {
    let mut harness = Harness::new();
    let grid = &harness.app.state().grid;
    let covered = Rect::from_min_size(grid.rect().min, Vec2::splat(grid.cell_size() * 4.0));
    harness.overlay = Some(covered);
    harness.idle(3);

    harness.click(harness.center(1, 1));
    assert_eq!(harness.painted(), 0);

    // A drag that starts under the overlay does not start painting either
    let (start, end) = (harness.center(2, 2), harness.center(2, 6));
    harness.frame(vec![Event::PointerMoved(start), button(start, true)]);
    harness.frame(vec![Event::PointerMoved(end)]);
    harness.frame(vec![button(end, false)]);
    assert_eq!(harness.painted(), 0);

    harness.click(harness.center(10, 10));
    assert_eq!(harness.painted(), 1);
}

#[test]
fn test_grid_ignores_input_while_prompt_is_open() {
    let mut harness = Harness::new();
    harness.app.open_resize_prompt();
    harness.idle(2);

    harness.click(harness.center(3, 3));
    let (from, to) = (harness.center(4, 0), harness.center(4, 4));
    harness.frame(vec![touch(TouchPhase::Start, from)]);
    harness.frame(vec![touch(TouchPhase::Move, to)]);
    harness.frame(vec![touch(TouchPhase::End, to)]);

    assert_eq!(harness.painted(), 0);
    assert!(matches!(harness.app.dialog(), Dialog::ResizePrompt { .. }));
}

#[test]
fn test_toolbar_is_inert_under_the_prompt() {
    let clear_x = clear_button_x();

    let mut harness = Harness::new();
    harness.click(harness.center(0, 0));
    harness.app.open_resize_prompt();
    harness.idle(2);

    let y = harness.toolbar_y();
    harness.click(pos2(clear_x, y));
    assert_eq!(harness.painted(), 1);
    assert!(matches!(harness.app.dialog(), Dialog::ResizePrompt { .. }));

    harness.key(Key::Escape);
    assert_eq!(*harness.app.dialog(), Dialog::Closed);
    harness.click(pos2(clear_x, y));
    assert_eq!(harness.painted(), 0);
}

#[test]
fn test_escape_cancels_prompt() {
    let mut harness = Harness::new();
    harness.click(harness.center(0, 0));
    let generation = harness.app.state().grid.generation();

    harness.app.open_resize_prompt();
    harness.idle(2);
    harness.key(Key::Escape);

    assert_eq!(*harness.app.dialog(), Dialog::Closed);
    assert_eq!(harness.app.state().side(), 16);
    assert_eq!(harness.app.state().grid.generation(), generation);
    assert_eq!(harness.painted(), 1);
}

#[test]
fn test_invalid_answer_shows_alert_then_dismisses() {
    let mut harness = Harness::new();
    harness.app.open_resize_prompt();
    harness.idle(2);

    harness.frame(vec![Event::Text("x".into())]);
    harness.key(Key::Enter);
    assert_eq!(
        *harness.app.dialog(),
        Dialog::Alert {
            message: "Enter a positive whole number.".into()
        }
    );
    assert_eq!(harness.app.state().side(), 16);

    harness.key(Key::Enter);
    assert_eq!(*harness.app.dialog(), Dialog::Closed);
}

#[test]
fn test_touch_drag_over_grid_swallows_scrolling() {
    let mut harness = Harness::new();
    let (from, to) = (harness.center(6, 6), harness.center(6, 7));
    harness.frame(vec![touch(TouchPhase::Start, from)]);

    let wheel = Event::MouseWheel {
        unit: MouseWheelUnit::Point,
        delta: vec2(0.0, -40.0),
        modifiers: Modifiers::NONE,
    };
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN)),
        time: Some(harness.time),
        events: vec![touch(TouchPhase::Move, to), wheel],
        ..Default::default()
    };
    let mut scroll = None;
    let _ = harness.ctx.run(input, |ctx| {
        harness.app.ui(ctx);
        scroll = Some(ctx.input(|i| i.raw_scroll_delta));
    });

    assert_eq!(scroll, Some(Vec2::ZERO));
    assert_eq!(harness.painted(), 2);
}
