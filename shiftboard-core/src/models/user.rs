use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Unique case-insensitively across the catalog.
    pub username: String,
    pub name: String,
    pub role: UserRole,
    pub initials: String,
    /// Avatar color tag, opaque to the core.
    pub color: String,
    /// Plain text by design: the login gate is a gating screen, not a
    /// security boundary.
    pub password: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    FrontOfficeManager,
    AssistantManager,
    SeniorAgent,
    Agent,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FrontOfficeManager => "front_office_manager",
            Self::AssistantManager => "assistant_manager",
            Self::SeniorAgent => "senior_agent",
            Self::Agent => "agent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "front_office_manager" => Some(Self::FrontOfficeManager),
            "assistant_manager" => Some(Self::AssistantManager),
            "senior_agent" => Some(Self::SeniorAgent),
            "agent" => Some(Self::Agent),
            _ => None,
        }
    }

    /// Human-readable label for the shell.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FrontOfficeManager => "Front Office Manager",
            Self::AssistantManager => "Asst. Front Office Manager",
            Self::SeniorAgent => "Senior Guest Service Agent",
            Self::Agent => "Guest Service Agent",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub role: UserRole,
    pub initials: String,
    pub color: String,
    pub password: String,
}
