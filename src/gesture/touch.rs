use std::collections::VecDeque;

/// Lifecycle phase of a raw touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

/// One active contact in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    pub fn distance_to(&self, other: &TouchPoint) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle (radians) of the segment from `self` to `other`
    pub fn angle_to(&self, other: &TouchPoint) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Raw touch event as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub point: TouchPoint,
}

impl TouchEvent {
    pub fn start(id: u64, x: f32, y: f32) -> Self {
        Self {
            phase: TouchPhase::Start,
            point: TouchPoint::new(id, x, y),
        }
    }

    pub fn moved(id: u64, x: f32, y: f32) -> Self {
        Self {
            phase: TouchPhase::Move,
            point: TouchPoint::new(id, x, y),
        }
    }

    pub fn end(id: u64, x: f32, y: f32) -> Self {
        Self {
            phase: TouchPhase::End,
            point: TouchPoint::new(id, x, y),
        }
    }
}

/// Folds queued touch events into the set of currently active contacts.
///
/// Host callbacks only [`queue`](TouchTracker::queue) events; the frame
/// callback calls [`flush`](TouchTracker::flush) once per frame, so all touch
/// state is consumed synchronously by the frame.
#[derive(Debug, Default)]
pub struct TouchTracker {
    active: Vec<TouchPoint>,
    pending: VecDeque<TouchEvent>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&mut self, event: TouchEvent) {
        self.pending.push_back(event);
    }

    /// Apply every queued event in arrival order and return the active contacts
    pub fn flush(&mut self) -> &[TouchPoint] {
        while let Some(event) = self.pending.pop_front() {
            let point = event.point;
            match event.phase {
                TouchPhase::Start => {
                    self.remove(point.id);
                    self.active.push(point);
                }
                TouchPhase::Move => {
                    if let Some(existing) = self.active.iter_mut().find(|p| p.id == point.id) {
                        existing.x = point.x;
                        existing.y = point.y;
                    }
                }
                TouchPhase::End => self.remove(point.id),
            }
        }

        &self.active
    }

    pub fn active(&self) -> &[TouchPoint] {
        &self.active
    }

    pub fn clear(&mut self) {
        self.active.clear();
        self.pending.clear();
    }

    fn remove(&mut self, id: u64) {
        self.active.retain(|p| p.id != id);
    }
}
