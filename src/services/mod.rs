pub mod agent;
pub mod api;
pub mod carbon_api;
pub mod mock;
pub mod profile_api;
pub mod retry;
