use winit::event::{ElementState, Touch, TouchPhase as WinitTouchPhase};

use crate::gesture::{TouchEvent, TouchPhase, TouchPoint};

/// Touch id used for the emulated mouse contact
pub const MOUSE_TOUCH_ID: u64 = 0;

/// Map a winit touch to an engine touch event. Cancelled contacts end.
pub fn from_winit(touch: &Touch) -> TouchEvent {
    map_phase(
        touch.phase,
        touch.id,
        touch.location.x as f32,
        touch.location.y as f32,
    )
}

pub fn map_phase(phase: WinitTouchPhase, id: u64, x: f32, y: f32) -> TouchEvent {
    let phase = match phase {
        WinitTouchPhase::Started => TouchPhase::Start,
        WinitTouchPhase::Moved => TouchPhase::Move,
        WinitTouchPhase::Ended | WinitTouchPhase::Cancelled => TouchPhase::End,
    };
    TouchEvent {
        phase,
        point: TouchPoint::new(id, x, y),
    }
}

/// Turns left-button mouse input into a single touch contact
#[derive(Debug, Default, Clone, Copy)]
pub struct MouseTouch {
    cursor: Option<(f32, f32)>,
    pressed: bool,
}

impl MouseTouch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) -> Option<TouchEvent> {
        self.cursor = Some((x, y));
        self.pressed.then(|| TouchEvent::moved(MOUSE_TOUCH_ID, x, y))
    }

    pub fn cursor_left(&mut self) -> Option<TouchEvent> {
        let (x, y) = self.cursor.take()?;
        if self.pressed {
            self.pressed = false;
            Some(TouchEvent::end(MOUSE_TOUCH_ID, x, y))
        } else {
            None
        }
    }

    pub fn button(&mut self, state: ElementState) -> Option<TouchEvent> {
        let (x, y) = self.cursor?;
        match (state, self.pressed) {
            (ElementState::Pressed, false) => {
                self.pressed = true;
                Some(TouchEvent::start(MOUSE_TOUCH_ID, x, y))
            }
            (ElementState::Released, true) => {
                self.pressed = false;
                Some(TouchEvent::end(MOUSE_TOUCH_ID, x, y))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winit_phases() {
        assert_eq!(map_phase(WinitTouchPhase::Started, 3, 1.0, 2.0), TouchEvent::start(3, 1.0, 2.0));
        assert_eq!(map_phase(WinitTouchPhase::Moved, 3, 1.0, 2.0), TouchEvent::moved(3, 1.0, 2.0));
        assert_eq!(map_phase(WinitTouchPhase::Ended, 3, 1.0, 2.0), TouchEvent::end(3, 1.0, 2.0));
        assert_eq!(map_phase(WinitTouchPhase::Cancelled, 3, 1.0, 2.0), TouchEvent::end(3, 1.0, 2.0));
    }

    #[test]
    fn test_mouse_press_drag_release() {
        let mut mouse = MouseTouch::new();
        assert_eq!(mouse.button(ElementState::Pressed), None);

        assert_eq!(mouse.cursor_moved(10.0, 10.0), None);
        assert_eq!(mouse.button(ElementState::Pressed), Some(TouchEvent::start(0, 10.0, 10.0)));
        assert_eq!(mouse.cursor_moved(20.0, 10.0), Some(TouchEvent::moved(0, 20.0, 10.0)));
        assert_eq!(mouse.button(ElementState::Released), Some(TouchEvent::end(0, 20.0, 10.0)));
        assert!(!mouse.is_pressed());
    }

    #[test]
    fn test_leaving_window_ends_contact() {
        let mut mouse = MouseTouch::new();
        mouse.cursor_moved(5.0, 5.0);
        mouse.button(ElementState::Pressed);
        assert_eq!(mouse.cursor_left(), Some(TouchEvent::end(0, 5.0, 5.0)));
        assert_eq!(mouse.cursor(), None);
    }
}
