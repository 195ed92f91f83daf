pub mod activities;
pub mod campers;
pub mod details;
pub mod signups;

pub use activities::ActivityRow;
pub use campers::CamperRow;
pub use details::{ActivityDetail, CamperDetail};
pub use signups::SignupRow;
