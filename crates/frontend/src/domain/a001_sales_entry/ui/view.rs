use contracts::domain::a001_sales_entry::aggregate::PaymentType;
use contracts::shared::role_policy::RolePolicy;
use leptos::prelude::*;
use thaw::*;

use super::form::SalesEntryForm;
use super::list::SalesTable;
use super::view_model::SalesViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::system::users::ui::picker::SalesRepSelect;

#[component]
#[allow(non_snake_case)]
pub fn SalesPanel() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let vm = use_context::<SalesViewModel>().expect("SalesViewModel not found in context");

    let policy_flag = move |read: fn(&RolePolicy) -> bool| {
        Signal::derive(move || ctx.policy.with(|p| p.as_ref().is_some_and(read)))
    };
    let show_form = policy_flag(|p| p.sales_entry_form);
    let show_rep_filter = policy_flag(|p| p.sales_rep_filter);
    let show_created_by = policy_flag(|p| p.created_by_column);
    let debounce_ms = ctx.config().search_debounce_ms;

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Sales"</h1>
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

            <Show when=move || show_form.get()>
                <SalesEntryForm vm=vm />
            </Show>

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
                <Show when=move || show_rep_filter.get()>
                    <label class="form-group">
                        <span>"Sales Rep"</span>
                        <SalesRepSelect
                            value=Signal::derive(move || vm.filter.get().sales_rep_username)
                            on_change=move |value: String| vm.filter.update(|f| f.sales_rep_username = value)
                            placeholder="All Sales Reps"
                        />
                    </label>
                </Show>
                <label class="form-group">
                    <span>"Payment"</span>
                    <select
                        prop:value=move || vm.filter.get().payment_type
                        on:change=move |ev| vm.filter.update(|f| f.payment_type = event_target_value(&ev))
                    >
                        <option value="">"All Payment Types"</option>
                        {PaymentType::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.code()>{p.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.apply_filter()>
                    "Filter"
                </Button>
            </div>

            <SearchInput
                on_change=move |query: String| vm.search.set(query)
                debounce_ms=debounce_ms
                placeholder="Search sales..."
            />

            <Show when=move || vm.loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>
            <SalesTable
                rows=Signal::derive(move || vm.visible_rows())
                show_created_by=show_created_by
            />
        </div>
    }
}
