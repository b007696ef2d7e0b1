use egui::{Context, Event, PointerButton, Pos2, TouchId, TouchPhase};

use crate::grid::{CellId, Grid};

mod router;
pub use router::{route_event, route_events};

/// Gesture events derived from raw egui input, already hit-tested against the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed over a cell
    PressStart { cell: CellId },
    /// Pointer moved onto a different cell
    PointerEnter { cell: CellId },
    /// Primary button released, wherever the pointer is
    ReleaseAnywhere,
    /// Primary press and release landed on the same cell
    SingleActivate { cell: CellId },
    /// Pointer left the application window
    PointerLeftWindow,
    /// First finger went down over a cell
    TouchStart { cell: CellId },
    /// Tracked finger moved
    TouchMove {
        target: Option<CellId>,
        over_grid: bool,
    },
    /// Tracked finger lifted or the touch was cancelled
    TouchEnd,
}

/// Turns egui's per-frame event list into `InputEvent`s.
///
/// egui reports the first touch twice: once as `Event::Touch` and once as
/// emulated pointer events. Pointer events are ignored from the start of a
/// touch until the matching `PointerGone`, so a tap is not also a click.
#[derive(Debug, Default)]
pub struct InputHandler {
    hovered: Option<CellId>,
    pressed: Option<CellId>,
    touch: Option<TouchId>,
    pointer_is_emulated: bool,
    generation: u64,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this frame's raw events from egui and translate them.
    ///
    /// `reachable` says whether the grid is the topmost thing at a position;
    /// presses, enters and touches anywhere else never hit a cell.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        grid: &Grid,
        reachable: impl Fn(Pos2) -> bool,
    ) -> Vec<InputEvent> {
        let events = ctx.input(|input| input.events.clone());
        self.process_events_where(&events, grid, reachable)
    }

    /// Translate events with nothing covering the grid
    pub fn process_events(&mut self, events: &[Event], grid: &Grid) -> Vec<InputEvent> {
        self.process_events_where(events, grid, |_| true)
    }

    pub fn process_events_where(
        &mut self,
        events: &[Event],
        grid: &Grid,
        reachable: impl Fn(Pos2) -> bool,
    ) -> Vec<InputEvent> {
        let hit = |pos: Pos2| grid.cell_at(pos).filter(|_| reachable(pos));

        if grid.generation() != self.generation {
            // Cells we remember belong to a layout that no longer exists
            self.hovered = None;
            self.pressed = None;
            self.generation = grid.generation();
        }

        let mut out = Vec::new();
        for event in events {
            match event {
                Event::PointerMoved(pos) if !self.pointer_is_emulated => {
                    let cell = hit(*pos);
                    if cell != self.hovered {
                        self.hovered = cell;
                        if let Some(cell) = cell {
                            out.push(InputEvent::PointerEnter { cell });
                        }
                    }
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } if !self.pointer_is_emulated => {
                    let cell = hit(*pos);
                    if *pressed {
                        self.hovered = cell;
                        self.pressed = cell;
                        if let Some(cell) = cell {
                            out.push(InputEvent::PressStart { cell });
                        }
                    } else {
                        out.push(InputEvent::ReleaseAnywhere);
                        if let Some(cell) = self.pressed.take().filter(|pressed| Some(*pressed) == cell) {
                            out.push(InputEvent::SingleActivate { cell });
                        }
                    }
                }
                Event::PointerGone => {
                    self.pointer_is_emulated = false;
                    self.hovered = None;
                    self.pressed = None;
                    out.push(InputEvent::PointerLeftWindow);
                }
                Event::Touch { id, phase, pos, .. } => match phase {
                    TouchPhase::Start if self.touch.is_none() => {
                        self.touch = Some(*id);
                        self.pointer_is_emulated = true;
                        self.hovered = None;
                        self.pressed = None;
                        if let Some(cell) = hit(*pos) {
                            out.push(InputEvent::TouchStart { cell });
                        }
                    }
                    TouchPhase::Move if self.touch == Some(*id) => {
                        out.push(InputEvent::TouchMove {
                            target: hit(*pos),
                            over_grid: grid.is_built()
                                && grid.rect().contains(*pos)
                                && reachable(*pos),
                        });
                    }
                    TouchPhase::End | TouchPhase::Cancel if self.touch == Some(*id) => {
                        self.touch = None;
                        out.push(InputEvent::TouchEnd);
                    }
                    _ => {}
                },
                _ => {}
            }
        }
        out
    }

    /// Whether a finger is currently down
    pub fn touch_active(&self) -> bool {
        self.touch.is_some()
    }
}
