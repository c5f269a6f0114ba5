//! Playback controller behavior tests
//!
//! Navigation, toggling, seeking and snapshot writes against a mock element.

mod test_helpers;

use cassette_core::{PlaybackSnapshot, SnapshotStore, SNAPSHOT_KEY};
use cassette_playback::{
    PlaybackConfig, PlaybackController, PlaybackError, PlaybackEvent, PlaybackState,
};
use cassette_storage::MemorySessionStore;
use std::sync::Arc;
use test_helpers::{assert_state, entry, playlist_of, MockElement};

// ===== Test Helpers =====

fn mount(len: usize) -> (PlaybackController, MockElement, Arc<MemorySessionStore>) {
    let element = MockElement::new();
    let session = Arc::new(MemorySessionStore::new());
    let controller = PlaybackController::mount(
        playlist_of(len),
        Box::new(element.clone()),
        session.clone(),
        PlaybackConfig::default(),
    );
    (controller, element, session)
}

fn stored_snapshot(session: &MemorySessionStore) -> PlaybackSnapshot {
    session.read(SNAPSHOT_KEY, PlaybackSnapshot::new(Some(999), 999.0))
}

// ===== Mount =====

#[test]
fn fresh_session_mounts_idle() {
    let (controller, element, session) = mount(3);

    assert_state(controller.state(), PlaybackState::Idle);
    assert_eq!(controller.current_index(), None);
    assert_eq!(controller.current_entry(), None);
    assert_eq!(element.last_loaded(), None);
    assert_eq!(stored_snapshot(&session), PlaybackSnapshot::default());
}

// ===== Select =====

#[test]
fn select_loads_and_plays() {
    let (mut controller, element, session) = mount(3);

    controller.select_index(1).unwrap();

    assert_state(controller.state(), PlaybackState::Playing);
    assert_eq!(controller.current_index(), Some(1));
    assert_eq!(controller.current_entry().unwrap().file_name, "track-1.mp3");
    assert_eq!(element.last_loaded().as_deref(), Some("data:audio/mpeg;base64,2"));
    assert!(element.is_playing());
    assert_eq!(stored_snapshot(&session), PlaybackSnapshot::new(Some(1), 0.0));
}

#[test]
fn reselecting_playing_entry_pauses_then_resumes() {
    let (mut controller, element, _session) = mount(3);
    controller.select_index(2).unwrap();
    element.advance_to(17.0);
    controller.on_time_update();

    controller.select_index(2).unwrap();
    assert_state(controller.state(), PlaybackState::Paused);
    assert!(!element.is_playing());

    controller.select_index(2).unwrap();
    assert_state(controller.state(), PlaybackState::Playing);
    assert_eq!(controller.current_time(), 17.0);
    assert_eq!(element.time(), 17.0);
}

#[test]
fn selecting_different_entry_restarts_time() {
    let (mut controller, element, _session) = mount(3);
    controller.select_index(0).unwrap();
    controller.seek(30.0);

    controller.select_index(1).unwrap();

    assert_eq!(controller.current_time(), 0.0);
    assert_eq!(element.time(), 0.0);
}

#[test]
fn select_rejects_bad_indices() {
    let (mut controller, _element, _session) = mount(2);
    assert!(matches!(
        controller.select_index(2),
        Err(PlaybackError::IndexOutOfBounds(2))
    ));
    assert_eq!(controller.current_index(), None);

    let (mut empty, _element, _session) = mount(0);
    assert!(matches!(
        empty.select_index(0),
        Err(PlaybackError::PlaylistEmpty)
    ));
}

// ===== Next / Previous =====

#[test]
fn next_wraps_past_end() {
    let (mut controller, _element, _session) = mount(3);
    controller.select_index(2).unwrap();

    controller.next().unwrap();

    assert_eq!(controller.current_index(), Some(0));
    assert_state(controller.state(), PlaybackState::Playing);
}

#[test]
fn previous_wraps_before_start() {
    let (mut controller, _element, _session) = mount(3);
    controller.select_index(0).unwrap();

    controller.previous().unwrap();

    assert_eq!(controller.current_index(), Some(2));
}

#[test]
fn navigation_from_idle() {
    let (mut controller, _element, _session) = mount(4);
    controller.next().unwrap();
    assert_eq!(controller.current_index(), Some(0));

    let (mut controller, _element, _session) = mount(4);
    controller.previous().unwrap();
    assert_eq!(controller.current_index(), Some(3));
}

#[test]
fn next_and_previous_reset_time() {
    let (mut controller, element, session) = mount(3);
    controller.select_index(0).unwrap();
    controller.seek(12.0);

    controller.next().unwrap();
    assert_eq!(controller.current_time(), 0.0);
    assert_eq!(element.time(), 0.0);

    controller.seek(8.0);
    controller.previous().unwrap();
    assert_eq!(controller.current_time(), 0.0);
    assert_eq!(stored_snapshot(&session), PlaybackSnapshot::new(Some(0), 0.0));
}

#[test]
fn next_resumes_playing_from_paused() {
    let (mut controller, _element, _session) = mount(2);
    controller.select_index(0).unwrap();
    controller.toggle_play_pause();
    assert_state(controller.state(), PlaybackState::Paused);

    controller.next().unwrap();

    assert_state(controller.state(), PlaybackState::Playing);
}

#[test]
fn navigation_on_empty_playlist_is_an_error() {
    let (mut controller, _element, _session) = mount(0);

    assert!(matches!(controller.next(), Err(PlaybackError::PlaylistEmpty)));
    assert!(matches!(controller.previous(), Err(PlaybackError::PlaylistEmpty)));
    assert!(matches!(controller.on_ended(), Err(PlaybackError::PlaylistEmpty)));
    assert_state(controller.state(), PlaybackState::Idle);
}

#[test]
fn ended_advances_like_next() {
    let (mut controller, _element, _session) = mount(2);
    controller.select_index(1).unwrap();

    controller.on_ended().unwrap();

    assert_eq!(controller.current_index(), Some(0));
    assert_eq!(controller.current_time(), 0.0);
}

#[test]
fn single_entry_playlist_wraps_onto_itself() {
    let (mut controller, element, _session) = mount(1);
    controller.select_index(0).unwrap();
    controller.seek(50.0);

    controller.next().unwrap();

    assert_eq!(controller.current_index(), Some(0));
    assert_eq!(controller.current_time(), 0.0);
    assert_eq!(element.log.lock().unwrap().loaded.len(), 2);
}

// ===== Seek =====

#[test]
fn seek_propagates_and_persists() {
    let (mut controller, element, session) = mount(2);
    controller.select_index(1).unwrap();

    assert!(controller.seek(42.5));

    assert_eq!(controller.current_time(), 42.5);
    assert_eq!(element.time(), 42.5);
    assert_eq!(stored_snapshot(&session), PlaybackSnapshot::new(Some(1), 42.5));
}

#[test]
fn non_finite_seek_is_ignored() {
    let (mut controller, element, session) = mount(2);
    controller.select_index(0).unwrap();
    controller.seek(10.0);

    assert!(!controller.seek(f64::NAN));
    assert!(!controller.seek(f64::INFINITY));
    assert!(!controller.seek(f64::NEG_INFINITY));

    assert_eq!(controller.current_time(), 10.0);
    assert_eq!(element.time(), 10.0);
    assert_eq!(stored_snapshot(&session).current_time, 10.0);
}

#[test]
fn seek_without_selection_does_nothing() {
    let (mut controller, element, session) = mount(3);

    assert!(!controller.seek(30.0));

    assert_state(controller.state(), PlaybackState::Idle);
    assert_eq!(controller.current_time(), 0.0);
    assert_eq!(element.time(), 0.0);
    assert_eq!(stored_snapshot(&session), PlaybackSnapshot::default());
}

#[test]
fn negative_seek_clamps_to_zero() {
    let (mut controller, _element, _session) = mount(1);
    controller.select_index(0).unwrap();
    controller.seek(5.0);

    controller.seek(-3.0);

    assert_eq!(controller.current_time(), 0.0);
}

// ===== Toggle =====

#[test]
fn toggle_flips_between_playing_and_paused() {
    let (mut controller, element, _session) = mount(1);
    controller.select_index(0).unwrap();

    controller.toggle_play_pause();
    assert_state(controller.state(), PlaybackState::Paused);
    assert!(!element.is_playing());

    controller.toggle_play_pause();
    assert_state(controller.state(), PlaybackState::Playing);
    assert!(element.is_playing());
}

#[test]
fn toggle_while_idle_does_nothing() {
    let (mut controller, element, _session) = mount(3);

    controller.toggle_play_pause();

    assert_state(controller.state(), PlaybackState::Idle);
    assert!(!element.is_playing());
}

// ===== Element callbacks =====

#[test]
fn time_updates_are_tracked_and_persisted() {
    let (mut controller, element, session) = mount(2);
    controller.select_index(0).unwrap();

    element.advance_to(3.25);
    controller.on_time_update();

    assert_eq!(controller.current_time(), 3.25);
    assert_eq!(stored_snapshot(&session).current_time, 3.25);
}

#[test]
fn time_updates_ignored_while_seeking() {
    let (mut controller, element, _session) = mount(2);
    controller.select_index(0).unwrap();
    controller.seek(20.0);

    {
        let mut log = element.log.lock().unwrap();
        log.seeking = true;
        log.time = 1.0;
    }
    controller.on_time_update();

    assert_eq!(controller.current_time(), 20.0);
}

#[test]
fn loaded_metadata_sets_duration_until_next_load() {
    let (mut controller, element, _session) = mount(2);
    controller.select_index(0).unwrap();
    element.log.lock().unwrap().duration = Some(180.0);

    controller.on_loaded_metadata();
    assert_eq!(controller.duration(), Some(180.0));

    controller.next().unwrap();
    assert_eq!(controller.duration(), None);
}

#[test]
fn rejected_start_falls_back_to_paused() {
    let element = MockElement::rejecting("data:audio/mpeg;base64,2");
    let session = Arc::new(MemorySessionStore::new());
    let mut controller = PlaybackController::mount(
        playlist_of(2),
        Box::new(element.clone()),
        session.clone(),
        PlaybackConfig::default(),
    );

    controller.select_index(1).unwrap();

    assert_state(controller.state(), PlaybackState::Paused);
    assert_eq!(controller.current_index(), Some(1));
    assert_eq!(stored_snapshot(&session), PlaybackSnapshot::new(Some(1), 0.0));
    assert!(controller
        .drain_events()
        .iter()
        .any(|e| matches!(e, PlaybackEvent::StartRejected { .. })));

    // Other sources still play
    controller.next().unwrap();
    assert_state(controller.state(), PlaybackState::Playing);
}

// ===== Events =====

#[test]
fn events_describe_track_changes() {
    let (mut controller, _element, _session) = mount(2);
    controller.drain_events();

    controller.select_index(0).unwrap();
    controller.next().unwrap();
    let events = controller.drain_events();

    assert!(events.contains(&PlaybackEvent::TrackChanged {
        index: 0,
        file_name: "track-0.mp3".to_string(),
        previous_index: None,
    }));
    assert!(events.contains(&PlaybackEvent::TrackChanged {
        index: 1,
        file_name: "track-1.mp3".to_string(),
        previous_index: Some(0),
    }));
    assert!(events.contains(&PlaybackEvent::StateChanged {
        state: PlaybackState::Playing
    }));
    assert!(controller.drain_events().is_empty());
}

// ===== Scenario =====

#[test]
fn select_then_next_twice_wraps_two_entry_playlist() {
    let element = MockElement::new();
    let session = Arc::new(MemorySessionStore::new());
    let playlist = cassette_core::Playlist::new(vec![entry(1, "a.mp3"), entry(2, "b.mp3")]);
    let mut controller = PlaybackController::mount(
        playlist,
        Box::new(element),
        session,
        PlaybackConfig::default(),
    );

    controller.select_index(0).unwrap();
    controller.next().unwrap();
    assert_eq!(controller.current_index(), Some(1));
    assert_eq!(controller.current_entry().unwrap().file_name, "b.mp3");

    controller.next().unwrap();
    assert_eq!(controller.current_index(), Some(0));
}
