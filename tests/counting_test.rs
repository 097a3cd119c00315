use crosscount_rs::{Counter, Detection, Direction, Generation, Point, Rect, Track, Tracker, TrackerConfig};

fn track_through(points: &[(i32, i32)]) -> Track {
    let (x, y) = points[0];
    let mut track = Track::new(1, Rect::default(), Point::new(x, y), Generation::new(1));
    for &(x, y) in &points[1..] {
        track.update(Rect::default(), Point::new(x, y), Generation::new(1));
    }
    track
}

#[test]
fn test_downward_crossing_is_in() {
    let counter = Counter::new(200);
    let mut tracks = vec![track_through(&[(50, 195), (50, 205)])];

    let result = counter.process(&mut tracks);

    assert_eq!(result.count_in, 1);
    assert_eq!(result.count_out, 0);
    assert_eq!(result.newly_counted[0].direction, Direction::In);
}

#[test]
fn test_direction_follows_step_sign() {
    for line in [100, 200, 300] {
        let counter = Counter::new(line);
        let mut down = vec![track_through(&[(0, line - 3), (0, line + 4)])];
        let mut up = vec![track_through(&[(0, line + 4), (0, line - 3)])];

        assert_eq!(counter.crossing(&down[0]), Some(Direction::In));
        assert_eq!(counter.crossing(&up[0]), Some(Direction::Out));
        assert_eq!(counter.process(&mut down).count_in, 1);
        assert_eq!(counter.process(&mut up).count_out, 1);
    }
}

#[test]
fn test_counted_track_never_recounted() {
    let counter = Counter::new(200);
    let mut tracks = vec![track_through(&[(50, 195), (50, 205)])];
    let first = counter.process(&mut tracks);
    assert_eq!((first.count_in, first.count_out), (1, 0));

    let mut total = 0;
    for step in 0..6 {
        let y = if step % 2 == 0 { 195 } else { 205 };
        tracks[0].update(Rect::default(), Point::new(50, y), Generation::new(1));
        let result = counter.process(&mut tracks);
        total += result.count_in + result.count_out;
        assert!(tracks[0].is_counted());
    }
    assert_eq!(total, 0);
}

#[test]
fn test_untouched_tracks_unchanged() {
    let counter = Counter::new(200);
    let crossing = track_through(&[(50, 195), (50, 205)]);
    let idle = track_through(&[(90, 100), (90, 110)]);
    let mut tracks = vec![crossing, idle.clone()];

    let result = counter.process(&mut tracks);

    assert_eq!(result.newly_counted.len(), 1);
    assert_eq!(tracks[1], idle);
}

#[test]
fn test_tracked_object_counted_once_end_to_end() {
    let mut tracker = Tracker::new(TrackerConfig {
        split_line: 368,
        ..TrackerConfig::default()
    });
    let counter = Counter::new(418);

    let mut tracks = Vec::new();
    let mut count_in = 0;
    let mut count_out = 0;

    // Object walks down through the sub-window, 12 px per frame.
    for frame in 0..10 {
        let cy = 32 + frame * 12;
        let det = Detection::from_tlbr(300, cy - 25, 350, cy + 25);
        tracks = tracker.process(tracks, &[det]);
        let result = counter.process(&mut tracks);
        count_in += result.count_in;
        count_out += result.count_out;
    }

    assert_eq!((count_in, count_out), (1, 0));
    assert_eq!(tracks.len(), 1);
    assert!(tracks[0].is_counted());
}
