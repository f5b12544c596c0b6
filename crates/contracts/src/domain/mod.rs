pub mod a001_sales_entry;
pub mod a002_expense_entry;
pub mod a003_salary_statement;
pub mod common;
