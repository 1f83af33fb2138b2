//! Core library for the shift board.
//!
//! This crate provides the domain models, the reference-data stores, and the
//! shift session manager, independent of any presentation shell.
//!
//! # Usage
//!
//! ```
//! use shiftboard_core::{auth, seed, session::SessionManager};
//!
//! let catalog = seed::catalog();
//! let today = chrono::NaiveDate::from_ymd_opt(2026, 8, 21).unwrap();
//! let roster = seed::roster(&catalog, today);
//! let occupancy = seed::occupancy(today);
//!
//! let user = auth::verify(&catalog, "Ahmed.Ihsaan", "password123")?;
//! let mut session = SessionManager::new();
//! let shift = session.derive_for(&user, today, &catalog, &roster, &occupancy);
//! assert_eq!(shift.shift_type, "Morning");
//! # Ok::<(), shiftboard_core::auth::AuthError>(())
//! ```

pub mod auth;
pub mod config;
pub mod models;
pub mod seed;
pub mod session;
pub mod store;

// Re-export commonly used types at crate root
pub use auth::{AuthError, LoginGate};
pub use config::AppConfig;
pub use session::SessionManager;
pub use store::{Catalog, OccupancyBook, Roster, StoreError};
