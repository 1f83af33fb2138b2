mod occupancy;
mod roster;
mod shift;
mod task;
mod template;
mod user;

pub use occupancy::*;
pub use roster::*;
pub use shift::*;
pub use task::*;
pub use template::*;
pub use user::*;
