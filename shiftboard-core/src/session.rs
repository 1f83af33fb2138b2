//! Shift session derivation and the single-shift session manager.
//!
//! The manager owns the one current [`ShiftData`] and the rule for
//! (re)deriving it from the catalog, roster, and occupancy stores. Every
//! operation here is total: missing roster or occupancy data falls back to
//! documented defaults and is never an error.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{ShiftData, ShiftStatus, Task, TaskTemplate, User};
use crate::store::{Catalog, OccupancyBook, Roster};

/// Occupancy percentage assumed when no record exists for the day.
pub const DEFAULT_OCCUPANCY: u8 = 75;

/// Shift type assumed when the catalog has no shift types configured at all.
pub const FALLBACK_SHIFT_TYPE: &str = "Morning";

/// Continuity state of the session across a re-derivation.
///
/// Re-derivation happens on login and whenever templates, roster, or
/// occupancy change while someone is logged in. An `InProgress` session (same
/// shift type, at least one task) keeps its task list so incidental
/// recomputes never wipe completed work; anything else rebuilds from the
/// templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Fresh,
    InProgress,
}

impl SessionPhase {
    pub fn of(previous: Option<&ShiftData>, target_shift_type: &str) -> Self {
        match previous {
            Some(prev) if prev.shift_type == target_shift_type && !prev.tasks.is_empty() => {
                Self::InProgress
            }
            _ => Self::Fresh,
        }
    }
}

/// Instantiate one task per template applying to `shift_type`, preserving
/// template order. Each task gets a fresh id, so instantiating the same
/// template twice never collides.
pub fn instantiate_tasks(templates: &[TaskTemplate], shift_type: &str) -> Vec<Task> {
    templates
        .iter()
        .filter(|t| t.scope.applies_to(shift_type))
        .map(Task::from_template)
        .collect()
}

/// Display form of a calendar date, e.g. "21 August 2026".
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

fn resolve_shift_type(user: &User, today: NaiveDate, catalog: &Catalog, roster: &Roster) -> String {
    // Scan slots in configured shift-type order so a user rostered twice on
    // one date resolves deterministically to the earliest configured type.
    for shift_type in catalog.shift_types() {
        if let Some(assignment) = roster.get(today, shift_type) {
            if assignment.user_id == user.id {
                return shift_type.clone();
            }
        }
    }
    tracing::debug!(user = %user.username, %today, "no roster assignment, using default shift type");
    catalog
        .default_shift_type()
        .unwrap_or(FALLBACK_SHIFT_TYPE)
        .to_string()
}

/// Derive the shift session for a logged-in user on a given date.
///
/// Resolution order: roster assignment decides the target shift type (default
/// is the first configured shift type); the occupancy book decides the
/// percentage snapshot (default [`DEFAULT_OCCUPANCY`]); templates whose scope
/// applies to the target are instantiated in order.
///
/// If `previous` is an in-progress session of the same type, its task list,
/// notes, and session id are carried over; otherwise the session is rebuilt
/// with fresh tasks and empty notes. Status is always `Active`.
pub fn derive_shift(
    user: &User,
    today: NaiveDate,
    catalog: &Catalog,
    roster: &Roster,
    occupancy: &OccupancyBook,
    previous: Option<&ShiftData>,
) -> ShiftData {
    let shift_type = resolve_shift_type(user, today, catalog, roster);
    let percentage = occupancy
        .percentage_for(today)
        .unwrap_or(DEFAULT_OCCUPANCY);

    let (id, tasks, notes) = match (SessionPhase::of(previous, &shift_type), previous) {
        (SessionPhase::InProgress, Some(prev)) => {
            (prev.id, prev.tasks.clone(), prev.notes.clone())
        }
        _ => (
            Uuid::new_v4(),
            instantiate_tasks(catalog.templates(), &shift_type),
            String::new(),
        ),
    };

    ShiftData {
        id,
        shift_type,
        date: display_date(today),
        tasks,
        status: ShiftStatus::Active,
        agent_name: user.name.clone(),
        occupancy: percentage,
        notes,
    }
}

/// Owns the single current shift session.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    current: Option<ShiftData>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&ShiftData> {
        self.current.as_ref()
    }

    /// Run [`derive_shift`] with the held session as `previous` and keep the
    /// result. Call on login and after any template/roster/occupancy change.
    pub fn derive_for(
        &mut self,
        user: &User,
        today: NaiveDate,
        catalog: &Catalog,
        roster: &Roster,
        occupancy: &OccupancyBook,
    ) -> &ShiftData {
        let derived = derive_shift(user, today, catalog, roster, occupancy, self.current.as_ref());
        tracing::debug!(
            shift_type = %derived.shift_type,
            tasks = derived.tasks.len(),
            "derived shift session"
        );
        self.current.insert(derived)
    }

    /// Explicit override: always discards previous tasks and notes, with no
    /// continuity check, regardless of roster assignment.
    pub fn start_new(
        &mut self,
        shift_type: &str,
        agent_name: String,
        today: NaiveDate,
        catalog: &Catalog,
        occupancy: &OccupancyBook,
    ) -> &ShiftData {
        let shift = ShiftData {
            id: Uuid::new_v4(),
            shift_type: shift_type.to_string(),
            date: display_date(today),
            tasks: instantiate_tasks(catalog.templates(), shift_type),
            status: ShiftStatus::Active,
            agent_name,
            occupancy: occupancy
                .percentage_for(today)
                .unwrap_or(DEFAULT_OCCUPANCY),
            notes: String::new(),
        };
        tracing::info!(shift_type, tasks = shift.tasks.len(), "started new shift");
        self.current.insert(shift)
    }

    /// Flip completion on the task with the given id. The held session is
    /// replaced wholesale with an updated value, never mutated in place, so a
    /// reader holding the previous value never sees a half-updated list.
    /// Returns `None` when there is no session or no matching task.
    pub fn toggle_task(&mut self, task_id: Uuid) -> Option<&ShiftData> {
        let current = self.current.as_ref()?;
        if !current.tasks.iter().any(|t| t.id == task_id) {
            tracing::debug!(%task_id, "toggle for unknown task id ignored");
            return None;
        }
        let mut next = current.clone();
        for task in &mut next.tasks {
            if task.id == task_id {
                task.is_completed = !task.is_completed;
                task.timestamp = task.is_completed.then(chrono::Utc::now);
            }
        }
        Some(self.current.insert(next))
    }

    /// Replace the session's free-text notes verbatim. No validation, no
    /// length limit.
    pub fn update_notes(&mut self, text: impl Into<String>) -> Option<&ShiftData> {
        let current = self.current.as_mut()?;
        current.notes = text.into();
        Some(current)
    }

    /// Mark the session completed. No archive or finalize semantics beyond
    /// the status flag.
    pub fn complete_shift(&mut self) -> Option<&ShiftData> {
        let current = self.current.as_mut()?;
        current.status = ShiftStatus::Completed;
        Some(current)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewAssignment, NewTemplate, NewUser, TemplateScope, UserRole};

    fn today() -> NaiveDate {
        "2026-08-21".parse().unwrap()
    }

    fn template(label: &str, scope: TemplateScope) -> NewTemplate {
        NewTemplate {
            label: label.to_string(),
            category: "Front Desk Operations".to_string(),
            scope,
        }
    }

    fn shift_scope(name: &str) -> TemplateScope {
        TemplateScope::Shift(name.to_string())
    }

    /// Catalog with Morning/Afternoon/Night, one ALL template, one Morning
    /// template, one Night template, and a single user. Returns the catalog
    /// and the user.
    fn fixture() -> (Catalog, User) {
        let mut catalog = Catalog::new();
        catalog.add_shift_type("Morning");
        catalog.add_shift_type("Afternoon");
        catalog.add_shift_type("Night");
        catalog.add_template(template("Read Logbook & Handover", TemplateScope::All));
        catalog.add_template(template("Print Arrivals Report", shift_scope("Morning")));
        catalog.add_template(template("Run Night Audit", shift_scope("Night")));
        let id = catalog
            .add_user(NewUser {
                username: "Anna.K".to_string(),
                name: "Anna Kowalski".to_string(),
                role: UserRole::Agent,
                initials: "AK".to_string(),
                color: "bg-teal-100".to_string(),
                password: "password123".to_string(),
            })
            .unwrap();
        let user = catalog.user(id).unwrap().clone();
        (catalog, user)
    }

    fn assign(roster: &mut Roster, user: &User, shift_type: &str) {
        roster.assign(NewAssignment {
            date: today(),
            shift_type: shift_type.to_string(),
            user_id: user.id,
        });
    }

    #[test]
    fn derives_tasks_matching_all_or_target_in_template_order() {
        let (catalog, user) = fixture();
        let mut roster = Roster::new();
        assign(&mut roster, &user, "Morning");

        let shift = derive_shift(&user, today(), &catalog, &roster, &OccupancyBook::new(), None);

        assert_eq!(shift.shift_type, "Morning");
        let labels: Vec<_> = shift.tasks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["Read Logbook & Handover", "Print Arrivals Report"]);
        assert!(shift.tasks.iter().all(|t| !t.is_completed));
    }

    #[test]
    fn unassigned_user_defaults_to_first_configured_shift_type() {
        let (catalog, user) = fixture();

        let shift = derive_shift(
            &user,
            today(),
            &catalog,
            &Roster::new(),
            &OccupancyBook::new(),
            None,
        );

        assert_eq!(shift.shift_type, "Morning");
    }

    #[test]
    fn empty_catalog_still_derives_a_session() {
        let mut catalog = Catalog::new();
        let id = catalog
            .add_user(NewUser {
                username: "Anna.K".to_string(),
                name: "Anna Kowalski".to_string(),
                role: UserRole::Agent,
                initials: "AK".to_string(),
                color: "bg-teal-100".to_string(),
                password: "password123".to_string(),
            })
            .unwrap();
        let user = catalog.user(id).unwrap().clone();

        let shift = derive_shift(
            &user,
            today(),
            &catalog,
            &Roster::new(),
            &OccupancyBook::new(),
            None,
        );

        assert_eq!(shift.shift_type, FALLBACK_SHIFT_TYPE);
        assert!(shift.tasks.is_empty());
    }

    #[test]
    fn missing_occupancy_record_defaults_to_75() {
        let (catalog, user) = fixture();

        let shift = derive_shift(
            &user,
            today(),
            &catalog,
            &Roster::new(),
            &OccupancyBook::new(),
            None,
        );

        assert_eq!(shift.occupancy, DEFAULT_OCCUPANCY);
    }

    #[test]
    fn occupancy_record_for_today_is_snapshotted() {
        let (catalog, user) = fixture();
        let mut book = OccupancyBook::new();
        book.set(crate::models::DailyOccupancy {
            date: today(),
            percentage: 92,
            notes: "Full House expected".to_string(),
            is_high_season: true,
        });

        let shift = derive_shift(&user, today(), &catalog, &Roster::new(), &book, None);

        assert_eq!(shift.occupancy, 92);
    }

    #[test]
    fn continuity_same_type_keeps_tasks_notes_and_session_id() {
        let (catalog, user) = fixture();
        let mut roster = Roster::new();
        assign(&mut roster, &user, "Morning");
        let book = OccupancyBook::new();

        let mut manager = SessionManager::new();
        manager.derive_for(&user, today(), &catalog, &roster, &book);
        let first_task = manager.current().unwrap().tasks[0].id;
        manager.toggle_task(first_task);
        manager.update_notes("buggy 3 needs charging");
        let before = manager.current().unwrap().clone();

        // Incidental recompute (e.g. template list reloaded).
        let after = manager
            .derive_for(&user, today(), &catalog, &roster, &book)
            .clone();

        assert_eq!(after.id, before.id);
        assert_eq!(after.tasks, before.tasks);
        assert_eq!(after.notes, "buggy 3 needs charging");
        assert!(after.tasks[0].is_completed);
    }

    #[test]
    fn type_change_rebuilds_tasks_and_resets_notes() {
        let (catalog, user) = fixture();
        let mut roster = Roster::new();
        assign(&mut roster, &user, "Morning");
        let book = OccupancyBook::new();

        let mut manager = SessionManager::new();
        manager.derive_for(&user, today(), &catalog, &roster, &book);
        let morning_task = manager.current().unwrap().tasks[0].id;
        manager.toggle_task(morning_task);
        manager.update_notes("handover pending");
        let previous = manager.current().unwrap().clone();

        // Roster changed: same user now on Night.
        roster.unassign(today(), "Morning");
        assign(&mut roster, &user, "Night");
        let after = manager
            .derive_for(&user, today(), &catalog, &roster, &book)
            .clone();

        assert_eq!(after.shift_type, "Night");
        assert_ne!(after.id, previous.id);
        assert!(after.tasks.iter().all(|t| !t.is_completed));
        assert_eq!(after.notes, "");
        let labels: Vec<_> = after.tasks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["Read Logbook & Handover", "Run Night Audit"]);
    }

    #[test]
    fn previous_shift_with_zero_tasks_is_rebuilt() {
        let (catalog, user) = fixture();
        let mut roster = Roster::new();
        assign(&mut roster, &user, "Morning");

        let previous = ShiftData {
            id: Uuid::new_v4(),
            shift_type: "Morning".to_string(),
            date: display_date(today()),
            tasks: Vec::new(),
            status: ShiftStatus::Active,
            agent_name: user.name.clone(),
            occupancy: DEFAULT_OCCUPANCY,
            notes: String::new(),
        };

        let shift = derive_shift(
            &user,
            today(),
            &catalog,
            &roster,
            &OccupancyBook::new(),
            Some(&previous),
        );

        assert_eq!(shift.tasks.len(), 2);
        assert_ne!(shift.id, previous.id);
    }

    #[test]
    fn session_phase_transitions() {
        let (catalog, user) = fixture();
        let mut roster = Roster::new();
        assign(&mut roster, &user, "Morning");
        let shift = derive_shift(&user, today(), &catalog, &roster, &OccupancyBook::new(), None);

        assert_eq!(SessionPhase::of(None, "Morning"), SessionPhase::Fresh);
        assert_eq!(
            SessionPhase::of(Some(&shift), "Morning"),
            SessionPhase::InProgress
        );
        assert_eq!(SessionPhase::of(Some(&shift), "Night"), SessionPhase::Fresh);
    }

    #[test]
    fn instantiating_the_same_template_twice_never_reuses_task_ids() {
        let (catalog, _) = fixture();

        let first = instantiate_tasks(catalog.templates(), "Morning");
        let second = instantiate_tasks(catalog.templates(), "Morning");

        for task in &first {
            assert!(second.iter().all(|t| t.id != task.id));
        }
    }

    #[test]
    fn toggle_twice_restores_the_original_session() {
        let (catalog, user) = fixture();
        let mut roster = Roster::new();
        assign(&mut roster, &user, "Morning");

        let mut manager = SessionManager::new();
        manager.derive_for(&user, today(), &catalog, &roster, &OccupancyBook::new());
        let original = manager.current().unwrap().clone();
        let task_id = original.tasks[1].id;

        manager.toggle_task(task_id);
        assert!(manager.current().unwrap().tasks[1].is_completed);
        assert!(manager.current().unwrap().tasks[1].timestamp.is_some());

        manager.toggle_task(task_id);
        assert_eq!(*manager.current().unwrap(), original);
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let (catalog, user) = fixture();
        let mut manager = SessionManager::new();
        manager.derive_for(&user, today(), &catalog, &Roster::new(), &OccupancyBook::new());
        let before = manager.current().unwrap().clone();

        assert!(manager.toggle_task(Uuid::new_v4()).is_none());
        assert_eq!(*manager.current().unwrap(), before);
    }

    #[test]
    fn start_new_discards_progress_without_continuity_check() {
        let (catalog, user) = fixture();
        let mut roster = Roster::new();
        assign(&mut roster, &user, "Morning");
        let book = OccupancyBook::new();

        let mut manager = SessionManager::new();
        manager.derive_for(&user, today(), &catalog, &roster, &book);
        let morning = manager.current().unwrap().clone();
        for task in &morning.tasks {
            manager.toggle_task(task.id);
        }
        manager.update_notes("two done");

        let night = manager
            .start_new("Night", user.name.clone(), today(), &catalog, &book)
            .clone();

        assert_eq!(night.shift_type, "Night");
        assert_ne!(night.id, morning.id);
        assert!(night.tasks.iter().all(|t| !t.is_completed));
        assert_eq!(night.notes, "");
        assert_eq!(night.status, ShiftStatus::Active);
        let labels: Vec<_> = night.tasks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["Read Logbook & Handover", "Run Night Audit"]);
    }

    #[test]
    fn start_new_same_type_also_rebuilds() {
        let (catalog, user) = fixture();
        let book = OccupancyBook::new();

        let mut manager = SessionManager::new();
        manager.derive_for(&user, today(), &catalog, &Roster::new(), &book);
        let first = manager.current().unwrap().clone();
        manager.toggle_task(first.tasks[0].id);

        let restarted = manager
            .start_new("Morning", user.name.clone(), today(), &catalog, &book)
            .clone();

        assert_ne!(restarted.id, first.id);
        assert!(restarted.tasks.iter().all(|t| !t.is_completed));
    }

    #[test]
    fn update_notes_is_verbatim() {
        let (catalog, user) = fixture();
        let mut manager = SessionManager::new();
        manager.derive_for(&user, today(), &catalog, &Roster::new(), &OccupancyBook::new());

        manager.update_notes("  spaces kept  \nand newlines\n");
        assert_eq!(
            manager.current().unwrap().notes,
            "  spaces kept  \nand newlines\n"
        );
    }

    #[test]
    fn complete_shift_only_flips_status() {
        let (catalog, user) = fixture();
        let mut manager = SessionManager::new();
        manager.derive_for(&user, today(), &catalog, &Roster::new(), &OccupancyBook::new());
        let before = manager.current().unwrap().clone();

        let after = manager.complete_shift().unwrap().clone();

        assert_eq!(after.status, ShiftStatus::Completed);
        assert_eq!(after.tasks, before.tasks);
        assert_eq!(after.id, before.id);
    }

    #[test]
    fn operations_without_a_session_are_noops() {
        let mut manager = SessionManager::new();
        assert!(manager.toggle_task(Uuid::new_v4()).is_none());
        assert!(manager.update_notes("x").is_none());
        assert!(manager.complete_shift().is_none());
    }

    #[test]
    fn spec_scenario_all_plus_morning() {
        // templates: ALL, Morning, Night; user assigned Morning today.
        let (catalog, user) = fixture();
        let mut roster = Roster::new();
        assign(&mut roster, &user, "Morning");

        let shift = derive_shift(&user, today(), &catalog, &roster, &OccupancyBook::new(), None);

        assert_eq!(shift.tasks.len(), 2);
        assert!(shift.tasks.iter().all(|t| !t.is_completed));
        assert_eq!(shift.agent_name, "Anna Kowalski");
        assert_eq!(shift.status, ShiftStatus::Active);
        assert_eq!(shift.date, "21 August 2026");
    }

    #[test]
    fn double_booked_user_resolves_to_earliest_configured_type() {
        let (catalog, user) = fixture();
        let mut roster = Roster::new();
        assign(&mut roster, &user, "Night");
        assign(&mut roster, &user, "Afternoon");

        let shift = derive_shift(&user, today(), &catalog, &roster, &OccupancyBook::new(), None);

        assert_eq!(shift.shift_type, "Afternoon");
    }
}
