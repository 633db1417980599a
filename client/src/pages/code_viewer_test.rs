use super::*;
use crate::state::store::{MemoryStorage, SessionKey};
use crate::util::guard::can_enter;

fn developer_store(token: Option<&str>) -> SessionStore<MemoryStorage> {
    let store = SessionStore::new(MemoryStorage::new());
    store.apply(SessionEvent::ChooseProfile(Profile::Developer)).unwrap();
    if let Some(raw) = token {
        store.apply(SessionEvent::Login(AuthToken::new(raw).unwrap())).unwrap();
    }
    store
}

fn file(name: &str) -> SourceFile {
    SourceFile {
        name: name.to_owned(),
        path: name.to_owned(),
        kind: "rust".to_owned(),
        content: String::new(),
    }
}

// =============================================================
// Entry
// =============================================================

#[test]
fn authenticated_developer_enters_with_token() {
    let store = developer_store(Some("abc"));
    assert_eq!(enter(&store).map(|t| t.as_str().to_owned()), Ok("abc".to_owned()));
}

#[test]
fn missing_token_passes_guard_but_redirects_to_login() {
    let store = developer_store(None);
    assert!(can_enter(AppRoute::DeveloperCode, &store).is_allowed());
    assert_eq!(enter(&store).unwrap_err(), AppRoute::DeveloperLogin);
}

#[test]
fn wrong_profile_redirects_to_root_even_with_token() {
    let store = SessionStore::new(MemoryStorage::new());
    store.set(SessionKey::SelectedProfile, "recruiter");
    store.set(SessionKey::AuthToken, "abc");
    assert_eq!(enter(&store).unwrap_err(), AppRoute::Root);
}

#[test]
fn no_profile_redirects_to_root() {
    let store = SessionStore::new(MemoryStorage::new());
    assert_eq!(enter(&store).unwrap_err(), AppRoute::Root);
}

// =============================================================
// Source-file responses
// =============================================================

#[test]
fn unauthorized_response_logs_out_and_returns_to_login() {
    let store = developer_store(Some("abc"));
    let mut data = CodeViewerData::default();

    let effects = handle_files(&store, &mut data, Err(ApiError::from_status(401, None)));

    assert_eq!(effects, vec![NavEffect::Navigate(AppRoute::DeveloperLogin)]);
    assert!(store.auth_token().is_none());
    assert_eq!(store.selected_profile(), Some(Profile::Developer));
    assert!(!data.loading);
}

#[test]
fn other_failures_stay_on_page() {
    let store = developer_store(Some("abc"));
    let mut data = CodeViewerData::default();
    let effects = handle_files(&store, &mut data, Err(ApiError::from_status(500, None)));
    assert!(effects.is_empty());
    assert!(store.auth_token().is_some());
}

#[test]
fn loaded_files_select_first() {
    let store = developer_store(Some("abc"));
    let mut data = CodeViewerData::default();
    let effects = handle_files(&store, &mut data, Ok(vec![file("main.rs"), file("lib.rs")]));
    assert!(effects.is_empty());
    assert_eq!(data.selected_file().map(|f| f.name.as_str()), Some("main.rs"));
}

// =============================================================
// Actions and helpers
// =============================================================

#[test]
fn logout_keeps_profile_and_goes_to_root() {
    let store = developer_store(Some("abc"));
    assert_eq!(logout(&store), vec![NavEffect::Navigate(AppRoute::Root)]);
    assert!(store.auth_token().is_none());
    assert!(store.is_set(SessionKey::SelectedProfile));
}

#[test]
fn file_icons_by_type() {
    assert_eq!(file_icon("CSharp"), "🔷");
    assert_eq!(file_icon("scss"), "🎨");
    assert_eq!(file_icon("css"), "🎨");
    assert_eq!(file_icon("json"), "📋");
    assert_eq!(file_icon("typescript"), "📄");
    assert_eq!(file_icon("unknown"), "📄");
}

#[test]
fn language_class_is_lowercased() {
    assert_eq!(language_class("TypeScript"), "language-typescript");
}
