use crosscount_rs::tracker::TRAJECTORY_CAPACITY;
use crosscount_rs::{Detection, Generation, Point, Rect, Track, Tracker, TrackerConfig};

fn tracker(split_line: i32) -> Tracker {
    Tracker::new(TrackerConfig {
        split_line,
        centroid_threshold_square: 1300,
        boundary_margin: 30,
    })
}

#[test]
fn test_first_frame_seeds_tracks() {
    let mut tracker = tracker(100);

    let tracks = tracker.process(vec![], &[Detection::from_tlbr(10, 40, 30, 60)]);

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].rect(), Rect::new(10, 140, 30, 160));
    assert_eq!(
        tracks[0].trajectory().copied().collect::<Vec<_>>(),
        vec![Point::new(20, 150)]
    );
}

#[test]
fn test_nearby_detection_continues_track() {
    let mut tracker = tracker(100);
    let tracks = tracker.process(vec![], &[Detection::from_tlbr(10, 40, 30, 60)]);
    let id = tracks[0].track_id();

    // (25, 55) moves to (25, 155): squared distance 50 from (20, 150).
    let det = Detection::new(Rect::new(15, 45, 35, 65), Point::new(25, 55));
    let tracks = tracker.process(tracks, &[det]);

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].track_id(), id);
    assert_eq!(tracks[0].len(), 2);
}

#[test]
fn test_unmatched_track_dropped() {
    let mut tracker = tracker(100);
    let tracks = tracker.process(vec![], &[Detection::from_tlbr(10, 40, 30, 60)]);
    let id = tracks[0].track_id();

    let far = Detection::from_tlbr(300, 100, 340, 140);
    let tracks = tracker.process(tracks, &[far]);

    assert_eq!(tracks.len(), 1);
    assert!(tracks.iter().all(|t| t.track_id() != id));
}

#[test]
fn test_trajectory_bounded_fifo() {
    let mut tracker = tracker(0);
    let mut tracks = Vec::new();

    // Eleven frames, each moving 5 pixels down.
    for i in 0..11 {
        let cy = 100 + i * 5;
        tracks = tracker.process(tracks, &[Detection::from_tlbr(40, cy - 10, 60, cy + 10)]);
    }

    assert_eq!(tracks.len(), 1);
    let ys: Vec<i32> = tracks[0].trajectory().map(|p| p.y).collect();
    assert_eq!(ys.len(), TRAJECTORY_CAPACITY);
    assert_eq!(ys, (1..11).map(|i| 100 + i * 5).collect::<Vec<_>>());
}

#[test]
fn test_survivors_carry_current_generation() {
    let mut tracker = tracker(100);
    let mut tracks = Vec::new();
    let frames = [
        vec![Detection::from_tlbr(10, 40, 30, 60), Detection::from_tlbr(200, 40, 220, 60)],
        vec![Detection::from_tlbr(12, 42, 32, 62)],
        vec![Detection::from_tlbr(14, 44, 34, 64), Detection::from_tlbr(400, 90, 420, 110)],
        vec![],
    ];

    for dets in &frames {
        tracks = tracker.process(tracks, dets);
        let generation = tracker.generation();
        assert!(tracks.iter().all(|t| t.matches_generation(generation)));
        assert!(tracks.iter().all(|t| (1..=TRAJECTORY_CAPACITY).contains(&t.len())));
    }
    assert!(tracks.is_empty());
}

#[test]
fn test_stale_tracks_from_caller_are_pruned() {
    let mut tracker = tracker(100);
    let stale = Track::new(42, Rect::new(0, 0, 10, 10), Point::new(5, 5), Generation::new(7));

    let tracks = tracker.process(vec![stale], &[]);
    assert!(tracks.is_empty());
}
