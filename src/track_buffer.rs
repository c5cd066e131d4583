use crate::geodesy::Point;
use std::collections::VecDeque;

pub const DEFAULT_TRACK_CAPACITY: usize = 100;

/// Recent positions of the boat, oldest first. Only used to draw the trail.
#[derive(Clone, Debug)]
pub struct TrackBuffer {
    capacity: usize,
    points: VecDeque<Point>,
}

impl TrackBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TRACK_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        // a zero sized trail would drop every point
        let capacity = capacity.max(1);
        TrackBuffer {
            capacity,
            points: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn append(&mut self, point: Point) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> Vec<Point> {
        self.points.iter().copied().collect()
    }

    /// The points to draw as a polyline, if there are enough of them.
    pub fn trail(&self) -> Option<Vec<Point>> {
        if self.points.len() > 1 {
            Some(self.points())
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.back()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
