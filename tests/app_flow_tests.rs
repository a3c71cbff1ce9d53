//! Application-level flow tests
//!
//! Drive `GuardApp` headlessly through its request handler and check the
//! cross-screen behavior: completion routing, session teardown on
//! navigation, model selection visibility and navigation idempotence.

use deepguard::config::Config;
use deepguard::state::{AppRequest, RecordingMode, Screen};
use deepguard::ui::GuardApp;
use std::time::Instant;

fn app() -> (GuardApp, egui::Context, Instant) {
    let app = GuardApp::with_config(Config::default(), None);
    (app, egui::Context::default(), Instant::now())
}

#[test]
fn test_starts_at_home_with_defaults() {
    let (app, _ctx, _now) = app();
    assert_eq!(app.nav().current(), Screen::Home);
    assert_eq!(app.nav().selected_model(), "standard");
    assert!(!app.nav().is_recording());
    assert!(app.confidence().is_none());
}

#[test]
fn test_stop_routes_to_audio_results() {
    let (mut app, ctx, now) = app();

    app.handle_request(AppRequest::StartRecording(RecordingMode::Audio), now, &ctx);
    assert!(app.nav().is_recording());
    assert!(app.session().is_recording());

    app.handle_request(AppRequest::StopRecording, now, &ctx);
    assert_eq!(app.nav().current(), Screen::AudioResults);
    assert!(!app.nav().is_recording());
    // presenter exists and starts counting from zero toward the mock target
    assert_eq!(app.confidence(), Some((0, 94)));
}

#[test]
fn test_stop_routes_to_video_results() {
    let (mut app, ctx, now) = app();

    app.handle_request(AppRequest::StartRecording(RecordingMode::Video), now, &ctx);
    app.handle_request(AppRequest::StopRecording, now, &ctx);

    assert_eq!(app.nav().current(), Screen::VideoResults);
    assert_eq!(app.confidence(), Some((0, 87)));
}

#[test]
fn test_stop_without_recording_is_noop() {
    let (mut app, ctx, now) = app();
    app.handle_request(AppRequest::StopRecording, now, &ctx);
    assert_eq!(app.nav().current(), Screen::Home);
    assert!(app.confidence().is_none());
}

#[test]
fn test_navigation_away_cancels_session() {
    let (mut app, ctx, now) = app();

    app.handle_request(AppRequest::StartRecording(RecordingMode::Audio), now, &ctx);
    app.handle_request(AppRequest::Navigate(Screen::Models), now, &ctx);

    assert_eq!(app.nav().current(), Screen::Models);
    assert!(!app.nav().is_recording());
    assert!(!app.session().is_recording());
    assert_eq!(app.session().elapsed_seconds(), 0);
}

#[test]
fn test_model_selection_visible_across_screens() {
    let (mut app, ctx, now) = app();

    app.handle_request(AppRequest::Navigate(Screen::Models), now, &ctx);
    app.handle_request(AppRequest::SelectModel("advanced".to_string()), now, &ctx);
    app.handle_request(AppRequest::Navigate(Screen::Home), now, &ctx);

    assert_eq!(app.nav().current(), Screen::Home);
    assert_eq!(app.nav().selected_model(), "advanced");
}

#[test]
fn test_navigate_home_twice_is_idempotent() {
    let (mut app, ctx, now) = app();

    app.handle_request(AppRequest::Navigate(Screen::History), now, &ctx);
    app.handle_request(AppRequest::Navigate(Screen::Home), now, &ctx);
    let model = app.nav().selected_model().to_string();
    let recording = app.nav().is_recording();

    app.handle_request(AppRequest::Navigate(Screen::Home), now, &ctx);
    assert_eq!(app.nav().current(), Screen::Home);
    assert_eq!(app.nav().selected_model(), model);
    assert_eq!(app.nav().is_recording(), recording);
}

#[test]
fn test_leaving_results_drops_presenter() {
    let (mut app, ctx, now) = app();

    app.handle_request(AppRequest::Navigate(Screen::AudioResults), now, &ctx);
    assert!(app.confidence().is_some());

    app.handle_request(AppRequest::Navigate(Screen::History), now, &ctx);
    assert!(app.confidence().is_none());
}

#[test]
fn test_results_reachable_by_direct_navigation() {
    let (mut app, ctx, now) = app();

    app.handle_request(AppRequest::Navigate(Screen::VideoResults), now, &ctx);
    assert_eq!(app.nav().current(), Screen::VideoResults);
    assert_eq!(app.confidence(), Some((0, 87)));

    app.handle_request(AppRequest::Navigate(Screen::AudioResults), now, &ctx);
    assert_eq!(app.confidence(), Some((0, 94)));
}

#[test]
fn test_double_start_keeps_first_session() {
    let (mut app, ctx, now) = app();

    app.handle_request(AppRequest::StartRecording(RecordingMode::Audio), now, &ctx);
    app.handle_request(AppRequest::StartRecording(RecordingMode::Video), now, &ctx);

    // the second start is ignored; stopping still routes by the first mode
    app.handle_request(AppRequest::StopRecording, now, &ctx);
    assert_eq!(app.nav().current(), Screen::AudioResults);
}
