use super::*;

#[test]
fn steps_one_frame_per_frame_duration_and_wraps() {
    let mut p = Playback {
        playing: true,
        selected_frame: Some(2),
        elapsed: 0.0,
    };
    p.advance(0.1, 4);
    assert_eq!(p.selected_frame, Some(2));
    p.advance(0.2, 4);
    assert_eq!(p.selected_frame, Some(3));
    assert!((p.elapsed - 0.05).abs() < 1e-12);
    p.advance(0.25, 4);
    assert_eq!(p.selected_frame, Some(0));
}

#[test]
fn starts_from_the_first_frame_when_nothing_is_selected() {
    let mut p = Playback::new();
    p.toggle();
    p.advance(0.5, 2);
    assert_eq!(p.selected_frame, Some(0));
}

#[test]
fn long_stalls_drop_the_backlog() {
    let mut p = Playback {
        playing: true,
        selected_frame: Some(0),
        elapsed: 0.0,
    };
    p.advance(5.0, 30);
    assert_eq!(p.selected_frame, Some(1));
    assert_eq!(p.elapsed, 0.0);
}

#[test]
fn paused_playback_resets_the_accumulator() {
    let mut p = Playback {
        playing: false,
        selected_frame: Some(1),
        elapsed: 0.3,
    };
    p.advance(0.5, 4);
    assert_eq!(p.selected_frame, Some(1));
    assert_eq!(p.elapsed, 0.0);
}

#[test]
fn selecting_pauses_and_suspend_round_trips() {
    let mut p = Playback::new();
    p.toggle();
    let saved = p.suspend();
    assert!(saved);
    assert!(!p.playing);
    p.restore(saved);
    assert!(p.playing);

    p.select(7);
    assert!(!p.playing);
    p.clamp_selection(3);
    assert_eq!(p.selected_frame, Some(2));
    p.clamp_selection(0);
    assert_eq!(p.selected_frame, None);
}
