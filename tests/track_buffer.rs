use sailnav_core::geodesy::Point;
use sailnav_core::track_buffer::TrackBuffer;

fn point(i: usize) -> Point {
    Point::new(45.0 + i as f64 * 0.0001, 12.0)
}

#[test]
fn keeps_last_100() {
    let mut track = TrackBuffer::new();
    for i in 0..150 {
        track.append(point(i));
    }
    assert_eq!(track.len(), 100);
    let points = track.points();
    assert_eq!(points.len(), 100);
    for (offset, p) in points.iter().enumerate() {
        assert_eq!(*p, point(50 + offset));
    }
    assert_eq!(track.last(), Some(&point(149)));
}

#[test]
fn empty_track() {
    let track = TrackBuffer::new();
    assert!(track.is_empty());
    assert!(track.points().is_empty());
    assert!(track.trail().is_none());
    assert!(track.last().is_none());
}

#[test]
fn trail_needs_two_points() {
    let mut track = TrackBuffer::new();
    track.append(point(0));
    assert!(track.trail().is_none());
    track.append(point(1));
    assert_eq!(track.trail().unwrap(), vec![point(0), point(1)]);
}

#[test]
fn reset() {
    let mut track = TrackBuffer::with_capacity(3);
    for i in 0..5 {
        track.append(point(i));
    }
    assert_eq!(track.points(), vec![point(2), point(3), point(4)]);
    track.reset();
    assert!(track.is_empty());
    assert_eq!(track.capacity(), 3);
}
