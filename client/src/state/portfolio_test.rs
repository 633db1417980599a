use super::*;

fn profile() -> Profile {
    serde_json::from_str(r#"{"name":"Ada","title":"Engineer"}"#).unwrap()
}

fn file(name: &str) -> SourceFile {
    SourceFile {
        name: name.to_owned(),
        path: format!("src/{name}"),
        kind: "typescript".to_owned(),
        content: String::new(),
    }
}

// =============================================================
// RecruiterData
// =============================================================

#[test]
fn recruiter_starts_loading_without_data() {
    let data = RecruiterData::default();
    assert!(data.loading);
    assert!(data.profile.is_none());
}

#[test]
fn recruiter_profile_success_stops_loading() {
    let mut data = RecruiterData::default();
    data.profile_loaded(Ok(profile()));
    assert!(!data.loading);
    assert_eq!(data.profile, Some(profile()));
}

#[test]
fn recruiter_401_only_stops_loading() {
    let mut data = RecruiterData::default();
    data.profile_loaded(Err(ApiError::from_status(401, None)));
    assert!(!data.loading);
    assert!(data.profile.is_none());
}

#[test]
fn recruiter_secondary_failures_leave_loading_alone() {
    let mut data = RecruiterData::default();
    data.experience_loaded(Err(ApiError::Network("offline".to_owned())));
    data.projects_loaded(Err(ApiError::from_status(500, None)));
    assert!(data.loading);
    assert!(data.experience.is_empty());
    assert!(data.projects.is_empty());
}

// =============================================================
// CodeViewerData
// =============================================================

#[test]
fn files_loaded_selects_first_file() {
    let mut data = CodeViewerData::default();
    let outcome = data.files_loaded(Ok(vec![file("a.ts"), file("b.ts")]));
    assert_eq!(outcome, FilesOutcome::Loaded);
    assert!(!data.loading);
    assert_eq!(data.selected_file().map(|f| f.name.as_str()), Some("a.ts"));
}

#[test]
fn empty_file_list_selects_nothing() {
    let mut data = CodeViewerData::default();
    data.files_loaded(Ok(Vec::new()));
    assert!(data.selected_file().is_none());
}

#[test]
fn files_401_is_reported_as_unauthorized() {
    let mut data = CodeViewerData::default();
    assert_eq!(data.files_loaded(Err(ApiError::from_status(401, None))), FilesOutcome::Unauthorized);
    assert!(!data.loading);
}

#[test]
fn files_other_failure_is_plain_failure() {
    let mut data = CodeViewerData::default();
    assert_eq!(data.files_loaded(Err(ApiError::from_status(503, None))), FilesOutcome::Failed);
}

#[test]
fn select_ignores_out_of_range() {
    let mut data = CodeViewerData::default();
    data.files_loaded(Ok(vec![file("a.ts"), file("b.ts")]));
    data.select(1);
    assert_eq!(data.selected, Some(1));
    data.select(7);
    assert_eq!(data.selected, Some(1));
}
