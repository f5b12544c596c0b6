pub mod auth;
pub mod bootstrap;
pub mod pages;
pub mod policy;
pub mod users;
