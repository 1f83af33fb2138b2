use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewTemplate, NewUser, TaskTemplate, User};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("username '{0}' is already taken")]
    DuplicateUsername(String),
}

/// Reference/configuration data: shift type names, task categories, task
/// templates, and user records.
///
/// Shift types and categories are plain strings with no surrogate id;
/// templates keep insertion order because template order defines task order
/// on a derived shift. No cross-store referential integrity is enforced:
/// removing a category or shift type leaves templates and roster assignments
/// that reference it untouched, and derivation tolerates the dangling names
/// through its default fallbacks.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    shift_types: Vec<String>,
    categories: Vec<String>,
    templates: Vec<TaskTemplate>,
    users: Vec<User>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Shift types ---

    pub fn shift_types(&self) -> &[String] {
        &self.shift_types
    }

    /// First configured shift type; the derivation default.
    pub fn default_shift_type(&self) -> Option<&str> {
        self.shift_types.first().map(String::as_str)
    }

    /// Add-if-absent: duplicate names are rejected at write time rather than
    /// tolerated at read time. Returns whether the name was added.
    pub fn add_shift_type(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.shift_types.iter().any(|s| *s == name) {
            tracing::debug!(shift_type = %name, "shift type already present, skipping");
            return false;
        }
        self.shift_types.push(name);
        true
    }

    /// Delete by value. Templates and assignments referencing the name are
    /// left as-is.
    pub fn remove_shift_type(&mut self, name: &str) -> bool {
        let before = self.shift_types.len();
        self.shift_types.retain(|s| s != name);
        self.shift_types.len() != before
    }

    // --- Categories ---

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn add_category(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.categories.iter().any(|c| *c == name) {
            tracing::debug!(category = %name, "category already present, skipping");
            return false;
        }
        self.categories.push(name);
        true
    }

    pub fn remove_category(&mut self, name: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c != name);
        self.categories.len() != before
    }

    // --- Templates ---

    pub fn templates(&self) -> &[TaskTemplate] {
        &self.templates
    }

    pub fn add_template(&mut self, input: NewTemplate) -> Uuid {
        let id = Uuid::new_v4();
        self.templates.push(TaskTemplate {
            id,
            label: input.label,
            category: input.category,
            scope: input.scope,
        });
        id
    }

    /// Replace the template with the same id. Already-instantiated shift
    /// tasks are copies and are not affected.
    pub fn update_template(&mut self, template: TaskTemplate) -> bool {
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(slot) => {
                *slot = template;
                true
            }
            None => false,
        }
    }

    pub fn remove_template(&mut self, id: Uuid) -> bool {
        let before = self.templates.len();
        self.templates.retain(|t| t.id != id);
        self.templates.len() != before
    }

    // --- Users ---

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
    }

    pub fn add_user(&mut self, input: NewUser) -> Result<Uuid, StoreError> {
        if self.find_by_username(&input.username).is_some() {
            return Err(StoreError::DuplicateUsername(input.username));
        }
        let id = Uuid::new_v4();
        self.users.push(User {
            id,
            username: input.username,
            name: input.name,
            role: input.role,
            initials: input.initials,
            color: input.color,
            password: input.password,
        });
        Ok(id)
    }

    /// Replace the user with the same id, keeping usernames unique against
    /// all other users.
    pub fn update_user(&mut self, user: User) -> Result<bool, StoreError> {
        let taken = self
            .users
            .iter()
            .any(|u| u.id != user.id && u.username.eq_ignore_ascii_case(&user.username));
        if taken {
            return Err(StoreError::DuplicateUsername(user.username));
        }
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removing a user does not cascade into roster assignments or past
    /// shifts; orphaned references are tolerated downstream.
    pub fn remove_user(&mut self, id: Uuid) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }
}
