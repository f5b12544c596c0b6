use contracts::domain::a002_expense_entry::aggregate::ExpenseType;
use leptos::prelude::*;
use thaw::*;

use super::form::ExpenseEntryForm;
use super::list::ExpensesTable;
use super::view_model::ExpensesViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::system::users::ui::picker::SalesRepSelect;

#[component]
#[allow(non_snake_case)]
pub fn ExpensesPanel() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let vm = use_context::<ExpensesViewModel>().expect("ExpensesViewModel not found in context");
    let debounce_ms = ctx.config().search_debounce_ms;

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Expenses"</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.export_csv()>
                        {icon("download")}
                        "Export CSV"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.reload()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            <ExpenseEntryForm vm=vm />

            <div class="filter-bar">
                <label class="form-group">
                    <span>"From"</span>
                    <input
                        type="date"
                        prop:value=move || vm.filter.get().from_date
                        on:change=move |ev| vm.filter.update(|f| f.from_date = event_target_value(&ev))
                    />
                </label>
                <label class="form-group">
                    <span>"To"</span>
                    <input
                        type="date"
                        prop:value=move || vm.filter.get().to_date
                        on:change=move |ev| vm.filter.update(|f| f.to_date = event_target_value(&ev))
                    />
                </label>
                <label class="form-group">
                    <span>"Type"</span>
                    <select
                        prop:value=move || vm.filter.get().expense_type
                        on:change=move |ev| vm.filter.update(|f| f.expense_type = event_target_value(&ev))
                    >
                        <option value="">"All Types"</option>
                        {ExpenseType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.code()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form-group">
                    <span>"Advance To"</span>
                    <SalesRepSelect
                        value=Signal::derive(move || vm.filter.get().advance_to_username)
                        on_change=move |value: String| vm.filter.update(|f| f.advance_to_username = value)
                        placeholder="All Employees"
                    />
                </label>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.reload()>
                    "Filter"
                </Button>
            </div>

            <SearchInput
                on_change=move |query: String| vm.search.set(query)
                debounce_ms=debounce_ms
                placeholder="Search expenses..."
            />

            <Show when=move || vm.loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>
            <ExpensesTable rows=Signal::derive(move || vm.visible_rows()) />
        </div>
    }
}
