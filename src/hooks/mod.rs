pub mod use_session;
