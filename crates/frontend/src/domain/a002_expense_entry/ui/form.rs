use contracts::domain::a002_expense_entry::aggregate::ExpenseType;
use contracts::shared::validation::{parse_number, validate_amount};
use leptos::prelude::*;

use super::view_model::ExpensesViewModel;
use crate::shared::icons::icon;
use crate::system::users::ui::picker::SalesRepSelect;

#[component]
#[allow(non_snake_case)]
pub fn ExpenseEntryForm(vm: ExpensesViewModel) -> impl IntoView {
    let needs_recipient = move || vm.form.with(|f| f.requires_advance_recipient());
    let amount_invalid = move || {
        vm.form.with(|f| {
            !f.amount.trim().is_empty()
                && parse_number(&f.amount).map_or(true, |n| validate_amount(n).is_err())
        })
    };

    view! {
        <form
            class="entry-form"
            id="expense-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <h2 class="section-title">"New Expense"</h2>
            <div class="entry-form__grid">
                <div class="form-group">
                    <label for="expense-type">"Type"</label>
                    <select
                        id="expense-type"
                        prop:value=move || vm.form.get().expense_type
                        on:change=move |ev| vm.set_type(event_target_value(&ev))
                    >
                        <option value="">"Select Type"</option>
                        {ExpenseType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.code()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="expense-amount">"Amount (₹)"</label>
                    <input
                        type="number"
                        id="expense-amount"
                        min="1"
                        step="0.01"
                        class:invalid=amount_invalid
                        prop:value=move || vm.form.get().amount
                        on:input=move |ev| vm.form.update(|f| f.amount = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="expense-date">"Date"</label>
                    <input
                        type="date"
                        id="expense-date"
                        prop:value=move || vm.form.get().date
                        on:change=move |ev| vm.form.update(|f| f.date = event_target_value(&ev))
                    />
                </div>

                <Show when=needs_recipient>
                    <div class="form-group">
                        <label for="advance-to">"Advance To"</label>
                        <SalesRepSelect
                            id="advance-to"
                            value=Signal::derive(move || vm.form.get().advance_to_username)
                            on_change=move |value: String| vm.form.update(|f| f.advance_to_username = value)
                            placeholder="Select Employee"
                        />
                    </div>
                </Show>

                <div class="form-group form-group--wide">
                    <label for="expense-description">"Description"</label>
                    <textarea
                        id="expense-description"
                        rows="2"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="entry-form__actions">
                <button type="submit" class="button button--primary" disabled=move || vm.saving.get()>
                    {icon("plus")}
                    {move || if vm.saving.get() { "Saving..." } else { "Add Expense" }}
                </button>
                <button type="button" class="button button--secondary" on:click=move |_| vm.clear()>
                    "Clear"
                </button>
            </div>
        </form>
    }
}
