//! Dashboard controller: owns the record set, the list query and the
//! request status, and turns user intents into state transitions.
//!
//! [`DashboardState`] holds the state and its reducers. [`Dashboard`] pairs
//! it with a repository and runs each remote intent as
//! `begin_request`, one repository call, then the matching `apply_*`.
//! Hosts that want several requests in flight can drive the reducers
//! themselves; results are applied in whatever order they arrive and the
//! last write wins.

use crate::list_processor::{process, total_pages};
use roster_core::{
    Entity, FieldErrors, ListQuery, Page, PageSize, RosterResult, Submission, User, UserDraft,
    UserField, UserForm, UserId,
};
use roster_repository::UserRepository;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Status shown after a failed initial load.
pub const LOAD_FAILED: &str = "Failed to load users";
/// Status shown after a failed create.
pub const ADD_FAILED: &str = "Failed to add user";
/// Status shown after a failed update.
pub const UPDATE_FAILED: &str = "Failed to update user";
/// Status shown after a failed delete.
pub const DELETE_FAILED: &str = "Failed to delete user";

/// Request status of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Error(String),
}

impl Status {
    /// Returns true while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the user-facing error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Authoritative dashboard state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    records: Vec<User>,
    query: ListQuery,
    status: Status,
}

impl DashboardState {
    /// Creates an empty state with the given query.
    #[must_use]
    pub fn new(query: ListQuery) -> Self {
        Self {
            records: Vec::new(),
            query,
            status: Status::Idle,
        }
    }

    /// All records, in list order.
    #[must_use]
    pub fn records(&self) -> &[User] {
        &self.records
    }

    /// The current list query.
    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }

    /// The current request status.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// The page of records to display.
    #[must_use]
    pub fn view(&self) -> Page<&User> {
        process(&self.records, &self.query)
    }

    /// Marks a request as in flight.
    pub fn begin_request(&mut self) {
        self.status = Status::Loading;
    }

    /// Folds the result of a list call into the state.
    pub fn apply_loaded(&mut self, result: RosterResult<Vec<User>>) {
        match result {
            Ok(records) => {
                info!(count = records.len(), "Users loaded");
                self.records = records;
                self.status = Status::Idle;
            }
            Err(e) => self.fail(LOAD_FAILED, &e),
        }
    }

    /// Folds the result of a create call into the state; new users go first.
    pub fn apply_added(&mut self, result: RosterResult<User>) {
        match result {
            Ok(user) => {
                info!("User added: {}", user.id);
                self.records.insert(0, user);
                self.status = Status::Idle;
            }
            Err(e) => self.fail(ADD_FAILED, &e),
        }
    }

    /// Folds the result of an update call into the state, replacing the
    /// record with the same id.
    pub fn apply_updated(&mut self, result: RosterResult<User>) {
        match result {
            Ok(user) => {
                info!("User updated: {}", user.id);
                for record in self.records.iter_mut().filter(|r| r.id() == user.id()) {
                    record.clone_from(&user);
                }
                self.status = Status::Idle;
            }
            Err(e) => self.fail(UPDATE_FAILED, &e),
        }
    }

    /// Folds the result of a delete call into the state.
    pub fn apply_deleted(&mut self, id: &UserId, result: RosterResult<()>) {
        match result {
            Ok(()) => {
                info!("User deleted: {}", id);
                self.records.retain(|record| record.id() != id);
                self.status = Status::Idle;
            }
            Err(e) => self.fail(DELETE_FAILED, &e),
        }
    }

    /// Sets the search text and returns to the first page.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        self.query.current_page = 1;
    }

    /// Sorts by `key`; sorting by the current key again flips the direction.
    pub fn sort(&mut self, key: UserField) {
        if self.query.sort_key == Some(key) {
            self.query.sort_order = self.query.sort_order.flipped();
        } else {
            self.query.sort_key = Some(key);
            self.query.sort_order = roster_core::SortOrder::Asc;
        }
        debug!(key = %key, order = %self.query.sort_order, "Sort changed");
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize) {
        let last = total_pages(&self.records, &self.query);
        self.query.current_page = page.clamp(1, last);
    }

    /// Moves one page forward, staying on the last page.
    pub fn next_page(&mut self) {
        self.go_to_page(self.query.current_page.saturating_add(1));
    }

    /// Moves one page back, staying on the first page.
    pub fn previous_page(&mut self) {
        self.go_to_page(self.query.current_page.saturating_sub(1));
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.query.page_size = size;
        self.query.current_page = 1;
    }

    fn fail(&mut self, message: &str, error: &roster_core::RosterError) {
        warn!(error = %error, "{}", message);
        self.status = Status::Error(message.to_string());
    }
}

/// Dashboard controller bound to a user repository.
pub struct Dashboard<R: UserRepository> {
    repository: Arc<R>,
    state: DashboardState,
}

impl<R: UserRepository> Dashboard<R> {
    /// Creates a dashboard with the default query.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_query(repository, ListQuery::default())
    }

    /// Creates a dashboard with a custom initial query.
    pub fn with_query(repository: Arc<R>, query: ListQuery) -> Self {
        Self {
            repository,
            state: DashboardState::new(query),
        }
    }

    /// The dashboard state.
    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    /// The page of records to display.
    #[must_use]
    pub fn view(&self) -> Page<&User> {
        self.state.view()
    }

    /// Loads the record set from the repository.
    pub async fn load(&mut self) {
        debug!("Loading users");
        self.state.begin_request();
        let result = self.repository.list().await;
        self.state.apply_loaded(result);
    }

    /// Creates a user and puts it at the top of the list.
    pub async fn add(&mut self, draft: &UserDraft) {
        debug!("Adding user: {} {}", draft.first_name, draft.last_name);
        self.state.begin_request();
        let result = self.repository.create(draft).await;
        self.state.apply_added(result);
    }

    /// Updates a user in place.
    pub async fn update(&mut self, user: &User) {
        debug!("Updating user: {}", user.id);
        self.state.begin_request();
        let result = self.repository.update(user).await;
        self.state.apply_updated(result);
    }

    /// Deletes a user.
    pub async fn delete(&mut self, id: &UserId) {
        debug!("Deleting user: {}", id);
        self.state.begin_request();
        let result = self.repository.remove(id).await;
        self.state.apply_deleted(id, result);
    }

    /// Validates the form, then adds or updates depending on whether it
    /// carries an id. Invalid forms never reach the repository.
    pub async fn save(&mut self, form: &UserForm) -> Result<(), FieldErrors> {
        match form.submit() {
            Ok(Submission::Create(draft)) => self.add(&draft).await,
            Ok(Submission::Update(user)) => self.update(&user).await,
            Err(errors) => {
                debug!(errors = %errors, "Form rejected");
                return Err(errors);
            }
        }
        Ok(())
    }

    /// Sets the search text and returns to the first page.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.set_search_text(text);
    }

    /// Sorts by `key`, flipping the direction on repeat.
    pub fn sort(&mut self, key: UserField) {
        self.state.sort(key);
    }

    /// Moves to `page`, clamped into range.
    pub fn go_to_page(&mut self, page: usize) {
        self.state.go_to_page(page);
    }

    /// Moves one page forward.
    pub fn next_page(&mut self) {
        self.state.next_page();
    }

    /// Moves one page back.
    pub fn previous_page(&mut self) {
        self.state.previous_page();
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.state.set_page_size(size);
    }
}

impl<R: UserRepository> std::fmt::Debug for Dashboard<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
