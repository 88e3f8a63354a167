//! Media wall integration tests
//!
//! End-to-end scenarios through the store, from JSON actions to selectors.

use media_wall::app_state::media_wall::{
    select_blocked_user, select_entities, select_filtered_entities, select_hidden_feed_id,
    select_profanity_check, select_remove_duplicate,
};
use media_wall::{
    init_logging, ApiOutcome, MediaWallAction, MediaWallConfig, MediaWallReducer,
    MediaWallState, MediaWallStore, WallPost,
};
use tempfile::TempDir;

fn post(id: &str, account: &str) -> WallPost {
    WallPost::new(id, account)
}

fn ids(posts: &[WallPost]) -> Vec<&str> {
    posts.iter().map(|p| p.id.as_str()).collect()
}

fn success(posts: Vec<WallPost>) -> ApiOutcome {
    ApiOutcome::Success(posts)
}

/// Blocking one author leaves the rest of the wall alone
#[test]
fn test_block_user_scenario() {
    let store = MediaWallStore::new(MediaWallConfig::default()).unwrap();
    store.dispatch(MediaWallAction::SearchComplete(success(vec![
        post("1", "a"),
        post("2", "b"),
    ])));

    let state = store.dispatch(MediaWallAction::BlockUser("a".to_string()));

    assert_eq!(ids(select_filtered_entities(&state)), vec!["2"]);
    assert_eq!(select_blocked_user(&state), ["a".to_string()]);
    assert_eq!(ids(select_entities(&state)), vec!["1", "2"]);
}

/// A new page lands in front of the existing results
#[test]
fn test_pagination_scenario() {
    let store = MediaWallStore::new(MediaWallConfig::default()).unwrap();
    store.dispatch(MediaWallAction::SearchComplete(success(vec![post("1", "a")])));

    let state = store.dispatch(MediaWallAction::PaginationComplete(success(vec![post(
        "3", "c",
    )])));

    assert_eq!(ids(select_entities(&state)), vec!["3", "1"]);
    assert_eq!(ids(select_filtered_entities(&state)), vec!["3", "1"]);
}

/// With the default config, unblocking neither restores posts nor shrinks the block list
#[test]
fn test_unblock_scenario_default_config() {
    let store = MediaWallStore::new(MediaWallConfig::default()).unwrap();
    store.dispatch(MediaWallAction::SearchComplete(success(vec![
        post("1", "a"),
        post("2", "b"),
    ])));
    store.dispatch(MediaWallAction::BlockUser("a".to_string()));

    let state = store.dispatch(MediaWallAction::UnblockUser("a".to_string()));

    assert_eq!(ids(select_filtered_entities(&state)), vec!["2"]);
    assert_eq!(select_blocked_user(&state), ["a".to_string()]);
}

/// With the consistent config, unblocking brings the author back
#[test]
fn test_unblock_scenario_consistent_config() {
    let store = MediaWallStore::new(MediaWallConfig::consistent()).unwrap();
    store.dispatch(MediaWallAction::SearchComplete(success(vec![
        post("1", "a"),
        post("2", "b"),
    ])));
    store.dispatch(MediaWallAction::BlockUser("a".to_string()));

    let state = store.dispatch(MediaWallAction::UnblockUser("a".to_string()));

    assert_eq!(ids(select_filtered_entities(&state)), vec!["1", "2"]);
    assert!(select_blocked_user(&state).is_empty());
}

/// Hide then show returns to the pre-hide state
#[test]
fn test_hide_show_round_trip() {
    let store = MediaWallStore::new(MediaWallConfig::default()).unwrap();
    let before = store.dispatch(MediaWallAction::SearchComplete(success(vec![
        post("1", "a"),
        post("2", "b"),
        post("3", "c"),
    ])));

    let hidden = store.dispatch(MediaWallAction::HideFeed("1".to_string()));
    assert_eq!(ids(select_filtered_entities(&hidden)), vec!["2", "3"]);
    assert_eq!(select_hidden_feed_id(&hidden), ["1".to_string()]);

    let shown = store.dispatch(MediaWallAction::ShowFeed("1".to_string()));
    assert_eq!(shown.filtered_entities, before.filtered_entities);
    assert_eq!(shown.hidden_feed_id, before.hidden_feed_id);
}

/// Unknown actions leave every field untouched
#[test]
fn test_unrecognized_actions() {
    let reducer = MediaWallReducer::with_defaults();
    let state = MediaWallState {
        entities: vec![post("1", "a")],
        filtered_entities: vec![post("1", "a")],
        hidden_feed_id: vec!["9".to_string()],
        blocked_user: vec!["z".to_string()],
        profanity_check: true,
        remove_duplicate: true,
    };

    let action: MediaWallAction =
        serde_json::from_value(serde_json::json!({"type": "auth/logout"})).unwrap();
    assert_eq!(reducer.reduce(&state, &action), state);
}

/// A full session driven by JSON actions, as a host would send them
#[test]
fn test_json_session() {
    let store = MediaWallStore::new(MediaWallConfig::default()).unwrap();

    let actions = [
        serde_json::json!({"type": "profanityToggle", "payload": true}),
        serde_json::json!({"type": "duplicateToggle", "payload": true}),
        serde_json::json!({"type": "searchComplete", "payload": {"success": [
            {"id": "1", "account": {"id": "a"}, "text": "sunny day"},
            {"id": "2", "account": {"id": "b"}, "text": "this is bullshit"},
            {"id": "1", "account": {"id": "a"}, "text": "sunny day"},
            {"id": "3", "account": {"id": "c"}, "mediaAttachments": []}
        ]}}),
        serde_json::json!({"type": "paginationComplete", "payload": {"failure": "timeout"}}),
        serde_json::json!({"type": "hideFeed", "payload": "3"}),
    ];
    for action in &actions {
        store.dispatch_json(&action.to_string()).unwrap();
    }

    let state = store.snapshot();
    assert!(select_profanity_check(&state));
    assert!(select_remove_duplicate(&state));
    assert_eq!(ids(select_entities(&state)), vec!["1", "2", "1", "3"]);
    assert_eq!(ids(select_filtered_entities(&state)), vec!["1"]);
    assert_eq!(select_hidden_feed_id(&state), ["3".to_string()]);

    let json = serde_json::to_value(&*state).unwrap();
    assert_eq!(json["entities"][3]["mediaAttachments"], serde_json::json!([]));
}

/// Profanity filtering through the toggle is idempotent
#[test]
fn test_profanity_toggle_idempotent() {
    let store = MediaWallStore::new(MediaWallConfig::default()).unwrap();
    store.dispatch(MediaWallAction::SearchComplete(success(vec![
        post("1", "a").with_text("calm"),
        post("2", "b").with_text("piss off"),
    ])));

    let once = store.dispatch(MediaWallAction::ProfanityToggle(true));
    let twice = store.dispatch(MediaWallAction::ProfanityToggle(true));

    assert_eq!(once.filtered_entities, twice.filtered_entities);
    assert_eq!(ids(select_filtered_entities(&twice)), vec!["1"]);
}

/// A store configured from a file picks up its word list
#[tokio::test]
async fn test_store_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("media_wall.json");
    tokio::fs::write(
        &path,
        r#"{"filters": {"profanityWords": ["spoiler"]}, "recomputeOnToggle": true}"#,
    )
    .await
    .unwrap();

    let config = MediaWallConfig::load(&path).await.unwrap();
    let store = MediaWallStore::new(config).unwrap();
    store.dispatch(MediaWallAction::SearchComplete(success(vec![
        post("1", "a").with_text("big spoiler ahead"),
        post("2", "b").with_text("damn fine coffee"),
    ])));

    let on = store.dispatch(MediaWallAction::ProfanityToggle(true));
    assert_eq!(ids(select_filtered_entities(&on)), vec!["2"]);

    let off = store.dispatch(MediaWallAction::ProfanityToggle(false));
    assert_eq!(ids(select_filtered_entities(&off)), vec!["1", "2"]);
}

#[test]
fn test_init_logging_is_repeatable() {
    init_logging("off");
    assert!(!init_logging("off"));
}
