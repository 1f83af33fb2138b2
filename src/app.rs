//! The application container. Owns every store plus the session manager and
//! relays user intents into them, re-deriving the current shift whenever the
//! template list, roster, or occupancy data changes under a logged-in user.
//!
//! All state transitions are discrete and single-threaded; the only
//! suspension point is the login gate's simulated latency.

use std::time::Duration;

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use shiftboard_core::models::{
    DailyOccupancy, NewAssignment, NewTemplate, NewUser, ShiftData, TaskTemplate, User,
};
use shiftboard_core::{
    seed, AppConfig, AuthError, Catalog, LoginGate, OccupancyBook, Roster, SessionManager,
    StoreError,
};

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct App {
    catalog: Catalog,
    roster: Roster,
    occupancy: OccupancyBook,
    config: AppConfig,
    session: SessionManager,
    gate: LoginGate,
    current_user: Option<User>,
    /// Injectable so tests can pin the calendar date.
    clock: fn() -> NaiveDate,
}

impl App {
    pub fn new(
        catalog: Catalog,
        roster: Roster,
        occupancy: OccupancyBook,
        config: AppConfig,
    ) -> Self {
        Self {
            catalog,
            roster,
            occupancy,
            config,
            session: SessionManager::new(),
            gate: LoginGate::default(),
            current_user: None,
            clock: local_today,
        }
    }

    /// Demo dataset seeded for today.
    pub fn seeded() -> Self {
        Self::seeded_with_clock(local_today)
    }

    pub fn seeded_with_clock(clock: fn() -> NaiveDate) -> Self {
        let catalog = seed::catalog();
        let today = clock();
        let roster = seed::roster(&catalog, today);
        let occupancy = seed::occupancy(today);
        Self {
            clock,
            ..Self::new(catalog, roster, occupancy, AppConfig::default())
        }
    }

    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.gate = LoginGate::with_delay(delay);
        self
    }

    fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    // --- Read surface for the shell ---

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn occupancy(&self) -> &OccupancyBook {
        &self.occupancy
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn current_shift(&self) -> Option<&ShiftData> {
        self.session.current()
    }

    // --- Login / logout ---

    pub async fn login(&mut self, username: &str, password: &str) -> Result<User, AuthError> {
        let user = self.gate.login(&self.catalog, username, password).await?;
        tracing::info!(user = %user.username, "login confirmed");
        self.current_user = Some(user.clone());
        self.refresh_session();
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::info!(user = %user.username, "logged out");
        }
        self.session.clear();
    }

    /// Re-derive the shift for the logged-in user and today's date. No-op
    /// when nobody is logged in.
    fn refresh_session(&mut self) {
        if let Some(user) = &self.current_user {
            let today = (self.clock)();
            self.session
                .derive_for(user, today, &self.catalog, &self.roster, &self.occupancy);
        }
    }

    // --- Session intents ---

    /// Deliberately begin a new shift regardless of roster assignment. The
    /// agent name comes from the given assignee, falling back to the current
    /// user.
    pub fn start_new_shift(&mut self, shift_type: &str, assignee: Option<Uuid>) -> &ShiftData {
        let agent_name = assignee
            .and_then(|id| self.catalog.user(id))
            .map(|u| u.name.clone())
            .or_else(|| self.current_user.as_ref().map(|u| u.name.clone()))
            .unwrap_or_default();
        let today = self.today();
        self.session
            .start_new(shift_type, agent_name, today, &self.catalog, &self.occupancy)
    }

    pub fn toggle_task(&mut self, task_id: Uuid) -> Option<&ShiftData> {
        self.session.toggle_task(task_id)
    }

    pub fn update_shift_notes(&mut self, text: &str) -> Option<&ShiftData> {
        self.session.update_notes(text)
    }

    pub fn complete_shift(&mut self) -> Option<&ShiftData> {
        self.session.complete_shift()
    }

    // --- Template administration (re-derives the session) ---

    pub fn add_template(&mut self, input: NewTemplate) -> Uuid {
        let id = self.catalog.add_template(input);
        self.refresh_session();
        id
    }

    pub fn update_template(&mut self, template: TaskTemplate) -> bool {
        let changed = self.catalog.update_template(template);
        self.refresh_session();
        changed
    }

    pub fn remove_template(&mut self, id: Uuid) -> bool {
        let removed = self.catalog.remove_template(id);
        self.refresh_session();
        removed
    }

    // --- Shift types and categories ---

    pub fn add_shift_type(&mut self, name: &str) -> bool {
        self.catalog.add_shift_type(name)
    }

    pub fn remove_shift_type(&mut self, name: &str) -> bool {
        self.catalog.remove_shift_type(name)
    }

    pub fn add_category(&mut self, name: &str) -> bool {
        self.catalog.add_category(name)
    }

    pub fn remove_category(&mut self, name: &str) -> bool {
        self.catalog.remove_category(name)
    }

    // --- Roster administration (re-derives the session) ---

    pub fn assign_shift(&mut self, input: NewAssignment) -> Uuid {
        let id = self.roster.assign(input);
        self.refresh_session();
        id
    }

    pub fn unassign_shift(&mut self, date: NaiveDate, shift_type: &str) -> bool {
        let removed = self.roster.unassign(date, shift_type);
        self.refresh_session();
        removed
    }

    pub fn replace_roster(&mut self, assignments: Vec<NewAssignment>) {
        self.roster.replace_all(assignments);
        self.refresh_session();
    }

    // --- Occupancy administration (re-derives the session) ---

    pub fn set_occupancy(&mut self, record: DailyOccupancy) {
        self.occupancy.set(record);
        self.refresh_session();
    }

    pub fn remove_occupancy(&mut self, date: NaiveDate) -> bool {
        let removed = self.occupancy.remove(date);
        self.refresh_session();
        removed
    }

    // --- User administration ---

    pub fn add_user(&mut self, input: NewUser) -> Result<Uuid, StoreError> {
        self.catalog.add_user(input)
    }

    pub fn update_user(&mut self, user: User) -> Result<bool, StoreError> {
        self.catalog.update_user(user)
    }

    /// No cascade: roster assignments referencing the user stay in place and
    /// derivation falls back to its defaults for whoever logs in next.
    pub fn remove_user(&mut self, id: Uuid) -> bool {
        self.catalog.remove_user(id)
    }

    // --- Configuration ---

    pub fn update_config(&mut self, config: AppConfig) {
        self.config = config;
    }
}
