use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reusable task definition. Templates are the source of truth for which
/// tasks appear on a shift; instantiated tasks are copies, so editing or
/// removing a template never touches shifts that already exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub id: Uuid,
    pub label: String,
    pub category: String,
    pub scope: TemplateScope,
}

/// Which shift types a template applies to: one named shift type, or every
/// shift type via the `ALL` sentinel (serialized exactly as the string
/// `"ALL"` for compatibility with exported data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateScope {
    All,
    Shift(String),
}

impl TemplateScope {
    pub fn applies_to(&self, shift_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Shift(s) => s == shift_type,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "ALL",
            Self::Shift(s) => s,
        }
    }
}

impl From<String> for TemplateScope {
    fn from(s: String) -> Self {
        if s == "ALL" {
            Self::All
        } else {
            Self::Shift(s)
        }
    }
}

impl From<TemplateScope> for String {
    fn from(scope: TemplateScope) -> Self {
        scope.as_str().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTemplate {
    pub label: String,
    pub category: String,
    pub scope: TemplateScope,
}
