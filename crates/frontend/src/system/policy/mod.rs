//! Role policy application: the engine, its disposable guards, and the
//! guard installers for the live page.

pub mod engine;
pub mod guards;
pub mod host;
pub mod subscription;

pub use engine::RolePolicyEngine;
pub use host::PolicyHost;
pub use subscription::Subscription;
