pub mod form;
pub mod list;
pub mod view;
pub mod view_model;

pub use view::ExpensesPanel;
pub use view_model::ExpensesViewModel;
