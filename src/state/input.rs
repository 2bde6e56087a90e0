// Touch and mouse events reduced to one horizontal pointer stream.
use web_sys::{MouseEvent, TouchEvent};

use super::carousel::CarouselAction;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Press(f64),
    Drag(f64),
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MousePhase {
    Down,
    Move,
    Up,
    Leave,
}

impl PointerInput {
    /// Build an input from an already extracted client x (None for lift/cancel).
    fn from_phase_x(pressed: bool, x: Option<f64>) -> Option<Self> {
        match (pressed, x) {
            (true, Some(x)) => Some(PointerInput::Press(x)),
            (false, Some(x)) => Some(PointerInput::Drag(x)),
            (_, None) => None,
        }
    }
}

impl From<PointerInput> for CarouselAction {
    fn from(input: PointerInput) -> Self {
        match input {
            PointerInput::Press(x) => CarouselAction::Begin(x),
            PointerInput::Drag(x) => CarouselAction::Move(x),
            PointerInput::Release => CarouselAction::End,
        }
    }
}

/// Only the first touch point drives the gesture.
pub fn from_touch(e: &TouchEvent, phase: TouchPhase) -> Option<PointerInput> {
    let first_x = || e.touches().item(0).map(|t| t.client_x() as f64);
    match phase {
        TouchPhase::Start => PointerInput::from_phase_x(true, first_x()),
        TouchPhase::Move => PointerInput::from_phase_x(false, first_x()),
        TouchPhase::End | TouchPhase::Cancel => Some(PointerInput::Release),
    }
}

pub fn from_mouse(e: &MouseEvent, phase: MousePhase) -> Option<PointerInput> {
    let x = e.client_x() as f64;
    match phase {
        MousePhase::Down if e.button() == 0 => Some(PointerInput::Press(x)),
        MousePhase::Down => None,
        MousePhase::Move => Some(PointerInput::Drag(x)),
        MousePhase::Up | MousePhase::Leave => Some(PointerInput::Release),
    }
}
