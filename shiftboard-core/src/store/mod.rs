mod catalog;
mod occupancy;
mod roster;

pub use catalog::{Catalog, StoreError};
pub use occupancy::OccupancyBook;
pub use roster::Roster;
