use contracts::domain::a001_sales_entry::aggregate::PaymentType;
use contracts::shared::validation::{parse_number, validate_amount, validate_bill_number};
use leptos::prelude::*;
use thaw::*;

use super::view_model::SalesViewModel;
use crate::shared::icons::icon;
use crate::system::users::ui::picker::SalesRepSelect;

/// Inline feedback only flags non-empty values.
fn bill_invalid(value: &str) -> bool {
    !value.is_empty() && validate_bill_number(value).is_err()
}

fn amount_invalid(value: &str) -> bool {
    !value.trim().is_empty()
        && parse_number(value)
            .map(|n| validate_amount(n).is_err())
            .unwrap_or(true)
}

#[component]
#[allow(non_snake_case)]
pub fn SalesEntryForm(vm: SalesViewModel) -> impl IntoView {
    let bounds = move || vm.datetime_bounds();

    view! {
        <form
            class="entry-form"
            id="sales-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <h2 class="section-title">"New Sale"</h2>
            <div class="entry-form__grid">
                <div class="form-group">
                    <label for="sales-rep">"Sales Rep"</label>
                    <SalesRepSelect
                        id="sales-rep"
                        value=Signal::derive(move || vm.form.get().sales_rep_username)
                        on_change=move |value: String| vm.form.update(|f| f.sales_rep_username = value)
                        placeholder="Select Sales Rep"
                    />
                </div>

                <div class="form-group">
                    <label for="sale-date-time">"Date & Time"</label>
                    <input
                        type="datetime-local"
                        id="sale-date-time"
                        min=move || bounds().map(|(min, _)| min)
                        max=move || bounds().map(|(_, max)| max)
                        prop:value=move || vm.form.get().date_time
                        on:change=move |ev| vm.set_date_time(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="bill-number">"Bill Number"</label>
                    <div class="input-with-action">
                        <input
                            type="text"
                            id="bill-number"
                            placeholder="Letters and numbers only"
                            class:invalid=move || vm.form.with(|f| bill_invalid(&f.bill_number))
                            prop:value=move || vm.form.get().bill_number
                            on:input=move |ev| vm.form.update(|f| f.bill_number = event_target_value(&ev))
                        />
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| vm.auto_bill_number()
                        >
                            "Auto-generate"
                        </Button>
                    </div>
                </div>

                <div class="form-group">
                    <label for="sale-amount">"Amount (₹)"</label>
                    <input
                        type="number"
                        id="sale-amount"
                        min="1"
                        step="0.01"
                        class:invalid=move || vm.form.with(|f| amount_invalid(&f.amount))
                        prop:value=move || vm.form.get().amount
                        on:input=move |ev| vm.form.update(|f| f.amount = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="payment-type">"Payment Type"</label>
                    <select
                        id="payment-type"
                        prop:value=move || vm.form.get().payment_type
                        on:change=move |ev| vm.form.update(|f| f.payment_type = event_target_value(&ev))
                    >
                        <option value="">"Select Payment Type"</option>
                        {PaymentType::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.code()>{p.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="entry-form__actions">
                <button type="submit" class="button button--primary" disabled=move || vm.saving.get()>
                    {icon("plus")}
                    {move || if vm.saving.get() { "Saving..." } else { "Add Sale" }}
                </button>
                <button type="button" class="button button--secondary" on:click=move |_| vm.clear()>
                    "Clear"
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_not_flagged() {
        assert!(!bill_invalid(""));
        assert!(!amount_invalid(""));
    }

    #[test]
    fn bad_values_are_flagged() {
        assert!(bill_invalid("AB-12"));
        assert!(!bill_invalid("AB12"));
        assert!(amount_invalid("0"));
        assert!(amount_invalid("abc"));
        assert!(!amount_invalid("1500"));
    }
}
