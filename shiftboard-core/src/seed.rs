//! Built-in demo dataset: three users, the standard shift types and
//! categories, twelve task templates, a roster for today, and three weeks of
//! occupancy around today.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::models::{
    DailyOccupancy, NewAssignment, NewTemplate, NewUser, ShiftAssignment, TemplateScope, UserRole,
};
use crate::store::{Catalog, OccupancyBook, Roster};

pub const DEMO_PASSWORD: &str = "password123";

pub fn catalog() -> Catalog {
    let mut catalog = Catalog::new();

    for shift_type in ["Morning", "Afternoon", "Night"] {
        catalog.add_shift_type(shift_type);
    }
    for category in [
        "Front Desk Operations",
        "Lobby & Ambiance",
        "Guest Relations",
        "Back Office & Reports",
        "Health & Safety",
    ] {
        catalog.add_category(category);
    }

    let template = |label: &str, category: &str, scope: TemplateScope| NewTemplate {
        label: label.to_string(),
        category: category.to_string(),
        scope,
    };
    let shift = |name: &str| TemplateScope::Shift(name.to_string());

    // Common
    catalog.add_template(template(
        "Read Logbook & Handover",
        "Front Desk Operations",
        TemplateScope::All,
    ));
    catalog.add_template(template(
        "Check Float/Cash",
        "Front Desk Operations",
        TemplateScope::All,
    ));
    catalog.add_template(template(
        "Lobby Cleanliness Check",
        "Lobby & Ambiance",
        TemplateScope::All,
    ));
    // Morning
    catalog.add_template(template(
        "Print Arrivals Report",
        "Back Office & Reports",
        shift("Morning"),
    ));
    catalog.add_template(template(
        "Check VIP Amenities Setup",
        "Guest Relations",
        shift("Morning"),
    ));
    catalog.add_template(template(
        "Morning Briefing",
        "Front Desk Operations",
        shift("Morning"),
    ));
    catalog.add_template(template(
        "Buggy Battery Check",
        "Health & Safety",
        shift("Morning"),
    ));
    catalog.add_template(template(
        "Confirm Seaplane Transfers",
        "Back Office & Reports",
        shift("Morning"),
    ));
    // Afternoon
    catalog.add_template(template(
        "Review Departures for Tomorrow",
        "Back Office & Reports",
        shift("Afternoon"),
    ));
    catalog.add_template(template(
        "Check Room Allocations",
        "Front Desk Operations",
        shift("Afternoon"),
    ));
    // Night
    catalog.add_template(template(
        "Run Night Audit",
        "Back Office & Reports",
        shift("Night"),
    ));
    catalog.add_template(template(
        "Print Newspaper Summary",
        "Guest Relations",
        shift("Night"),
    ));

    let user = |username: &str, name: &str, role: UserRole, initials: &str, color: &str| NewUser {
        username: username.to_string(),
        name: name.to_string(),
        role,
        initials: initials.to_string(),
        color: color.to_string(),
        password: DEMO_PASSWORD.to_string(),
    };
    // Usernames are distinct by construction, so these cannot fail.
    let _ = catalog.add_user(user(
        "Ahmed.Ihsaan",
        "Ahmed Ihsaan",
        UserRole::FrontOfficeManager,
        "AI",
        "bg-purple-100 text-purple-600",
    ));
    let _ = catalog.add_user(user(
        "Michael.Chen",
        "Michael Chen",
        UserRole::AssistantManager,
        "MC",
        "bg-blue-100 text-blue-600",
    ));
    let _ = catalog.add_user(user(
        "Ahmed.R",
        "Ahmed R.",
        UserRole::SeniorAgent,
        "AR",
        "bg-teal-100 text-teal-600",
    ));

    catalog
}

/// Today's roster: the three demo users on Morning, Afternoon, and Night in
/// catalog order.
pub fn roster(catalog: &Catalog, today: NaiveDate) -> Roster {
    let mut roster = Roster::new();
    let pairs = [
        ("Ahmed.Ihsaan", "Morning"),
        ("Michael.Chen", "Afternoon"),
        ("Ahmed.R", "Night"),
    ];
    for (username, shift_type) in pairs {
        if let Some(user) = catalog.find_by_username(username) {
            roster.assign(NewAssignment {
                date: today,
                shift_type: shift_type.to_string(),
                user_id: user.id,
            });
        }
    }
    roster
}

/// One record per day from a week back through two weeks ahead. Percentages
/// are derived from the day number so the dataset is stable across runs.
pub fn occupancy(today: NaiveDate) -> OccupancyBook {
    let mut book = OccupancyBook::new();
    for offset in -7i64..14 {
        let date = if offset < 0 {
            today.checked_sub_days(Days::new(offset.unsigned_abs()))
        } else {
            today.checked_add_days(Days::new(offset as u64))
        };
        let Some(date) = date else { continue };
        let percentage = 60 + ((date.num_days_from_ce() as u32 * 13) % 30) as u8;
        book.set(DailyOccupancy {
            date,
            percentage,
            notes: if offset == 0 {
                "Full House expected".to_string()
            } else {
                String::new()
            },
            is_high_season: false,
        });
    }
    book
}

/// Snapshot of the whole seed dataset, for the `seed` CLI export.
#[derive(Debug, Serialize)]
pub struct SeedDataset {
    pub catalog: Catalog,
    pub roster: Vec<ShiftAssignment>,
    pub occupancy: Vec<DailyOccupancy>,
}

pub fn dataset(today: NaiveDate) -> SeedDataset {
    let catalog = catalog();
    let roster = roster(&catalog, today);
    let occupancy = occupancy(today);
    let mut assignments: Vec<_> = roster.iter().cloned().collect();
    assignments.sort_by(|a, b| (a.date, a.shift_type.clone()).cmp(&(b.date, b.shift_type.clone())));
    SeedDataset {
        catalog,
        roster: assignments,
        occupancy: occupancy.iter().cloned().collect(),
    }
}
