pub mod details;
pub mod list;
pub mod picker;

pub use list::UsersPanel;
pub use list::UsersViewModel;
