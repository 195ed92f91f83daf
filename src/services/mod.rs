pub mod activity_service;
pub mod camper_service;
pub mod seed_service;
pub mod signup_service;
pub mod validation;
