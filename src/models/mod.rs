pub mod carbon;
pub mod error;
pub mod profile;
pub mod session;
pub mod tab;
