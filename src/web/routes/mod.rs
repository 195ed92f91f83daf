pub mod activities;
pub mod campers;
pub mod home;
pub mod signups;
