pub mod statement;
pub mod view;
pub mod view_model;

pub use view::SalaryPanel;
pub use view_model::SalaryViewModel;
