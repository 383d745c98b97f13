//! Application state shared between the input handler and the render step.
//!
//! The tutorial programs keep their few toggles in an [`AppState`] that is
//! passed by reference wherever it is needed; nothing here is process-wide.

use glutin::event::{ElementState, VirtualKeyCode};

/// Which of the fixed shapes the triangle program is drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Triangle,
    Rectangle,
}

impl Shape {
    pub fn next(self) -> Shape {
        match self {
            Shape::Triangle => Shape::Rectangle,
            Shape::Rectangle => Shape::Triangle,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub wireframe: bool,
    pub shape: Shape,
    pub quit_requested: bool,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            wireframe: false,
            shape: Shape::Triangle,
            quit_requested: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}

/// Applies one keyboard event to the state.
///
/// Escape requests quitting, `W` toggles wireframe mode, and space switches
/// to the next shape. Key releases and unmapped keys are ignored.
pub fn handle_key(state: &mut AppState, key_state: ElementState, key: Option<VirtualKeyCode>) {
    if key_state != ElementState::Pressed {
        return;
    }

    match key {
        Some(VirtualKeyCode::Escape) => state.quit_requested = true,
        Some(VirtualKeyCode::W) => state.wireframe = !state.wireframe,
        Some(VirtualKeyCode::Space) => state.shape = state.shape.next(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_requests_quit() {
        let mut state = AppState::new();

        handle_key(
            &mut state,
            ElementState::Pressed,
            Some(VirtualKeyCode::Escape),
        );

        assert!(state.quit_requested);
    }

    #[test]
    fn w_toggles_wireframe_back_and_forth() {
        let mut state = AppState::new();

        handle_key(&mut state, ElementState::Pressed, Some(VirtualKeyCode::W));
        assert!(state.wireframe);

        handle_key(&mut state, ElementState::Pressed, Some(VirtualKeyCode::W));
        assert!(!state.wireframe);
    }

    #[test]
    fn space_cycles_through_the_shapes() {
        let mut state = AppState::new();

        handle_key(
            &mut state,
            ElementState::Pressed,
            Some(VirtualKeyCode::Space),
        );
        assert_eq!(state.shape, Shape::Rectangle);

        handle_key(
            &mut state,
            ElementState::Pressed,
            Some(VirtualKeyCode::Space),
        );
        assert_eq!(state.shape, Shape::Triangle);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut state = AppState::new();

        handle_key(
            &mut state,
            ElementState::Released,
            Some(VirtualKeyCode::Escape),
        );

        assert!(!state.quit_requested);
    }

    #[test]
    fn unmapped_keys_leave_the_state_alone() {
        let mut state = AppState::new();

        handle_key(&mut state, ElementState::Pressed, Some(VirtualKeyCode::A));
        handle_key(&mut state, ElementState::Pressed, None);

        assert!(!state.quit_requested);
        assert!(!state.wireframe);
        assert_eq!(state.shape, Shape::Triangle);
    }
}
