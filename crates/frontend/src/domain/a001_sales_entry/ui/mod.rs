pub mod form;
pub mod list;
pub mod view;
pub mod view_model;

pub use view::SalesPanel;
pub use view_model::SalesViewModel;
