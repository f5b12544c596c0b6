pub mod date_window;
pub mod role_policy;
pub mod validation;
