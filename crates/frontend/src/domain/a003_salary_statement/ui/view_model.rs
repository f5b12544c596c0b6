use chrono::Datelike;
use contracts::domain::a003_salary_statement::aggregate::{SalaryStatement, SalaryStatementDraft};
use contracts::shared::date_window::format_date_input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::statement::statement_text;
use crate::domain::a003_salary_statement::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::today;
use crate::shared::export::download_text;

#[derive(Clone, Copy)]
pub struct SalaryViewModel {
    ctx: AppGlobalContext,
    pub form: RwSignal<SalaryStatementDraft>,
    pub statement: RwSignal<Option<SalaryStatement>>,
    pub generating: RwSignal<bool>,
}

/// Employee blank, incentive and base at zero, period month-to-date.
fn default_draft() -> SalaryStatementDraft {
    let day = today();
    let first = day.with_day(1).unwrap_or(day);
    SalaryStatementDraft {
        from_date: format_date_input(first),
        to_date: format_date_input(day),
        ..SalaryStatementDraft::default()
    }
}

impl SalaryViewModel {
    pub fn new(ctx: AppGlobalContext) -> Self {
        Self {
            ctx,
            form: RwSignal::new(default_draft()),
            statement: RwSignal::new(None),
            generating: RwSignal::new(false),
        }
    }

    pub fn reset(&self) {
        self.clear();
    }

    pub fn generate(self) {
        if self.generating.get_untracked() {
            return;
        }
        let request = match self.form.with_untracked(|f| f.validate()) {
            Ok(request) => request,
            Err(e) => {
                self.ctx.notices.error(e.to_string());
                return;
            }
        };

        self.generating.set(true);
        spawn_local(async move {
            let result = api::generate_statement(&self.ctx.api(), &request).await;
            self.generating.set(false);
            match result {
                Ok(statement) => {
                    log::info!(
                        "Salary statement generated for {} ({} - {})",
                        statement.employee_username,
                        statement.from_date,
                        statement.to_date
                    );
                    self.statement.set(Some(statement));
                }
                Err(e) => self.ctx.handle_error("Failed to generate salary statement", &e),
            }
        });
    }

    pub fn clear(&self) {
        self.form.set(default_draft());
        self.statement.set(None);
    }

    pub fn print(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.print() {
                log::error!("Print failed: {:?}", e);
            }
        }
    }

    pub fn download(&self) {
        let Some(statement) = self.statement.get_untracked() else {
            return;
        };
        let text = statement_text(&statement, today());
        match download_text(&text, &statement.download_file_name(), "text/plain") {
            Ok(()) => self.ctx.notices.success("Salary statement downloaded!"),
            Err(e) => self.ctx.notices.error(e),
        }
    }
}
