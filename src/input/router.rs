use crate::paint::{GestureHandler, PaintContext, ScrollPolicy};

use super::InputEvent;

/// Routes one input event to the gesture handler.
///
/// Returns the scroll policy the event asks for; only touch moves over the
/// grid ever suppress scrolling.
pub fn route_event(
    event: &InputEvent,
    handler: &mut impl GestureHandler,
    ctx: &mut PaintContext<'_>,
) -> ScrollPolicy {
    match *event {
        InputEvent::PressStart { cell } | InputEvent::TouchStart { cell } => {
            handler.on_press_start(cell, ctx);
        }
        InputEvent::PointerEnter { cell } => handler.on_enter_while_pressed(cell, ctx),
        InputEvent::SingleActivate { cell } => handler.on_single_activate(cell, ctx),
        InputEvent::ReleaseAnywhere | InputEvent::PointerLeftWindow | InputEvent::TouchEnd => {
            handler.on_release_anywhere();
        }
        InputEvent::TouchMove { target, over_grid } => {
            return handler.on_touch_move(target, over_grid, ctx);
        }
    }
    ScrollPolicy::Allow
}

/// Route a whole frame's worth of events, combining their scroll policies
pub fn route_events(
    events: &[InputEvent],
    handler: &mut impl GestureHandler,
    ctx: &mut PaintContext<'_>,
) -> ScrollPolicy {
    events
        .iter()
        .fold(ScrollPolicy::Allow, |policy, event| policy.combine(route_event(event, handler, ctx)))
}
