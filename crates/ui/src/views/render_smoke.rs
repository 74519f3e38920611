use std::sync::Arc;

use async_trait::async_trait;
use odyssey_core::model::{
    Catalog, CatalogBuilder, CourseRecord, TrackName, WidgetConfig, WidgetConfigOverride,
    WidgetState,
};
use services::{ProgressFetchError, ProgressSource, WidgetServices};
use storage::Storage;

use crate::render::render_widget;
use crate::render_session;
use crate::styles::{CLOSE_BUTTON_ID, TRACK_SELECT_ID};

fn ready(track: &str, records: Vec<CourseRecord>) -> WidgetState {
    let mut state = WidgetState::loading(TrackName::new(track));
    state.apply_records(records);
    state
}

fn done(id: &str) -> CourseRecord {
    CourseRecord::completed(id, "2024-01-01T00:00:00Z", "2024-02-01T00:00:00Z")
}

#[test]
fn loading_state_renders_placeholder_only() {
    let state = WidgetState::loading(TrackName::new("Everyone"));
    let html = render_widget(Catalog::odyssey(), &WidgetConfig::default(), &state);

    assert!(html.contains("🚀 Loading..."), "missing loading text in {html}");
    assert!(!html.contains(TRACK_SELECT_ID), "selector rendered while loading: {html}");
}

#[test]
fn failed_fetch_renders_login_prompt() {
    let mut state = WidgetState::loading(TrackName::new("Everyone"));
    state.apply_error("connection refused");
    let html = render_widget(Catalog::odyssey(), &WidgetConfig::default(), &state);

    assert!(html.contains("Error fetching data"), "missing error in {html}");
    assert!(html.contains("Please make sure you are logged in at"), "missing prompt in {html}");
    assert!(
        html.contains("href=\"https://www.apollographql.com/tutorials/\""),
        "missing login link in {html}"
    );
    assert!(!html.contains("connection refused"), "raw error leaked in {html}");
}

#[test]
fn untouched_course_links_without_version_suffix() {
    let html = render_widget(
        Catalog::odyssey(),
        &WidgetConfig::default(),
        &ready("Everyone", Vec::new()),
    );

    assert!(
        html.contains("href=\"https://www.apollographql.com/tutorials/lift-off-part1\""),
        "missing stripped course link in {html}"
    );
    assert!(!html.contains("lift-off-part1/v2"), "version suffix leaked in {html}");
    assert!(html.contains("❌ Not Started"), "missing status in {html}");
    assert!(html.contains("🎯 Apollo Graph Developer - Associate"), "missing group in {html}");
    assert!(!html.contains("Track Completed!"), "track wrongly completed in {html}");
}

#[test]
fn completed_associate_group_shows_label() {
    let catalog = Catalog::odyssey();
    let records = catalog
        .courses_for_certification("Associate", "Everyone")
        .into_iter()
        .map(|id| done(id.as_str()))
        .collect();
    let html = render_widget(catalog, &WidgetConfig::default(), &ready("Everyone", records));

    assert!(html.contains("🏆 Apollo Graph Developer - Associate"), "missing trophy in {html}");
    assert!(html.contains("(Completed!)"), "missing group label in {html}");
    assert!(html.contains("#28a74515"), "missing success treatment in {html}");
}

#[test]
fn fully_completed_track_switches_header() {
    let catalog = Catalog::odyssey();
    let records = catalog
        .courses_for_track("Everyone")
        .into_iter()
        .map(|id| done(id.as_str()))
        .collect();
    let html = render_widget(catalog, &WidgetConfig::default(), &ready("Everyone", records));

    assert!(html.contains("🎉 Apollo Odyssey Course Progress"), "missing header in {html}");
    assert!(html.contains("(Track Completed!)"), "missing track label in {html}");
}

#[test]
fn controls_carry_stable_ids_and_selection() {
    let html = render_widget(
        Catalog::odyssey(),
        &WidgetConfig::default(),
        &ready("Android", Vec::new()),
    );

    assert!(html.contains(&format!("id=\"{TRACK_SELECT_ID}\"")), "missing select in {html}");
    assert!(html.contains(&format!("id=\"{CLOSE_BUTTON_ID}\"")), "missing close in {html}");
    for track in ["Everyone", "Advanced", "Android", "Backend", "Frontend", "iOS"] {
        assert!(html.contains(&format!("value=\"{track}\"")), "missing {track} in {html}");
    }
    assert_eq!(html.matches("selected").count(), 1, "expected one selected option in {html}");
    let selected_at = html.find("selected").unwrap_or_default();
    let android_at = html.find("value=\"Android\"").unwrap_or_default();
    assert!(selected_at > android_at, "selection not on Android in {html}");
}

#[test]
fn text_is_escaped() {
    let catalog = CatalogBuilder::new("https://example.com/learn/")
        .course("intro", "Schemas & <Types>", &["Everyone"])
        .build()
        .unwrap();
    let html = render_widget(&catalog, &WidgetConfig::default(), &ready("Everyone", Vec::new()));

    assert!(
        html.contains("Schemas &#38; &#60;Types&#62;"),
        "text not escaped in {html}"
    );
    assert!(!html.contains("<Types>"), "raw markup leaked into {html}");
    assert!(
        html.contains("href=\"https://example.com/learn/intro\""),
        "missing custom base url in {html}"
    );
}

#[test]
fn configured_labels_replace_defaults() {
    let overrides = WidgetConfigOverride::from_json(
        r#"{"text": {"notStarted": "Todo", "close": "Dismiss"}, "icons": {"notStarted": "·"}}"#,
    )
    .unwrap();
    let html = render_widget(
        Catalog::odyssey(),
        &overrides.resolve(),
        &ready("Everyone", Vec::new()),
    );

    assert!(html.contains("· Todo"), "missing custom status in {html}");
    assert!(html.contains("Dismiss"), "missing custom close label in {html}");
    assert!(!html.contains("Not Started"), "default label leaked in {html}");
}

struct FixedProgress(Vec<CourseRecord>);

#[async_trait(?Send)]
impl ProgressSource for FixedProgress {
    async fn fetch_progress(&self) -> Result<Vec<CourseRecord>, ProgressFetchError> {
        Ok(self.0.clone())
    }
}

#[tokio::test(flavor = "current_thread")]
async fn session_renders_after_load_and_track_switch() {
    let services = WidgetServices::new(
        Arc::new(Catalog::odyssey().clone()),
        &Storage::in_memory(),
        Arc::new(FixedProgress(vec![done("lift-off-part1/v2")])),
    );
    let config = WidgetConfig::default();
    let mut session = services.start_session();

    assert!(render_session(&session, &config).contains("Loading..."));

    session.load().await;
    let html = render_session(&session, &config);
    assert!(html.contains("✅ Completed!"), "missing completed course in {html}");
    assert!(html.contains("Completed on 2024-02-01"), "missing tooltip in {html}");

    session.select_track(TrackName::new("iOS"));
    let html = render_session(&session, &config);
    let ios_at = html.find("value=\"iOS\"").unwrap_or_default();
    assert!(html[ios_at..].contains("selected"), "iOS not selected in {html}");
    assert_eq!(html.matches("selected").count(), 1);
}
