//! Fetched data backing the recruiter and code-viewer pages.
//!
//! Responses arrive as independent dispatches after the page is set up. A
//! late response for an unmounted page lands in a dropped signal and has no
//! effect. There is no timeout: a hung request leaves `loading` set.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use crate::net::api::ApiError;
use crate::net::types::{Experience, Profile, Project, SourceFile};

/// Recruiter home data. Only the profile fetch drives `loading`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecruiterData {
    pub profile: Option<Profile>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub loading: bool,
}

impl Default for RecruiterData {
    fn default() -> Self {
        Self { profile: None, experience: Vec::new(), projects: Vec::new(), loading: true }
    }
}

impl RecruiterData {
    /// Any failure, 401 included, only stops loading and logs.
    pub fn profile_loaded(&mut self, result: Result<Profile, ApiError>) {
        match result {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => log::error!("error loading profile: {e}"),
        }
        self.loading = false;
    }

    pub fn experience_loaded(&mut self, result: Result<Vec<Experience>, ApiError>) {
        match result {
            Ok(items) => self.experience = items,
            Err(e) => log::error!("error loading experience: {e}"),
        }
    }

    pub fn projects_loaded(&mut self, result: Result<Vec<Project>, ApiError>) {
        match result {
            Ok(items) => self.projects = items,
            Err(e) => log::error!("error loading projects: {e}"),
        }
    }
}

/// Result of the code viewer's source-file fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilesOutcome {
    Loaded,
    Failed,
    /// The token was rejected; the page must log out and return to login.
    Unauthorized,
}

/// Code viewer data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeViewerData {
    pub files: Vec<SourceFile>,
    pub selected: Option<usize>,
    pub loading: bool,
}

impl Default for CodeViewerData {
    fn default() -> Self {
        Self { files: Vec::new(), selected: None, loading: true }
    }
}

impl CodeViewerData {
    /// Store fetched files and select the first one.
    pub fn files_loaded(&mut self, result: Result<Vec<SourceFile>, ApiError>) -> FilesOutcome {
        self.loading = false;
        match result {
            Ok(files) => {
                self.selected = if files.is_empty() { None } else { Some(0) };
                self.files = files;
                FilesOutcome::Loaded
            }
            Err(e) => {
                log::error!("error loading source files: {e}");
                if e.is_unauthorized() { FilesOutcome::Unauthorized } else { FilesOutcome::Failed }
            }
        }
    }

    /// Select a file by index. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.files.len() {
            self.selected = Some(index);
        }
    }

    pub fn selected_file(&self) -> Option<&SourceFile> {
        self.selected.and_then(|i| self.files.get(i))
    }
}
