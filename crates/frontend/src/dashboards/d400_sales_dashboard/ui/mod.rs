pub mod view;
pub mod view_model;

pub use view::SalesDashboard;
pub use view_model::DashboardViewModel;
