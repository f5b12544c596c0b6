/// Free-text table search: the row filter and the debounced search box
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Rows that can be matched against a search query
pub trait Searchable {
    /// Text of the row as rendered in the table
    fn search_text(&self) -> String;

    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.trim().to_lowercase();
        filter.is_empty() || self.search_text().to_lowercase().contains(&filter)
    }
}

/// Keeps the rows whose rendered text contains the query (case-insensitive)
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Search box that reports its value after `debounce_ms` of inactivity
#[component]
pub fn SearchInput(
    /// Receives the settled query
    #[prop(into)]
    on_change: Callback<String>,
    debounce_ms: u32,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    // Replacing the pending timeout drops (and cancels) the previous one
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(debounce_ms, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="table-search">
            <input
                type="text"
                class="table-search__input"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="table-search__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn search_text(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn filter_is_case_insensitive() {
        let rows = [Row("BILL2406 Anita CASH"), Row("B77 Priya ACCOUNT")];
        assert_eq!(filter_list(&rows, "anita"), vec![Row("BILL2406 Anita CASH")]);
        assert_eq!(filter_list(&rows, "account").len(), 1);
    }

    #[test]
    fn blank_query_keeps_everything() {
        let rows = [Row("a"), Row("b")];
        assert_eq!(filter_list(&rows, "  ").len(), 2);
        assert!(filter_list(&rows, "zzz").is_empty());
    }
}
