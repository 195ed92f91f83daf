pub mod activity_repo;
pub mod camper_repo;
pub mod pool;
pub mod signup_repo;

pub use pool::{connect, connect_in_memory};
