use crate::shared::components::table::format_currency;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    Currency,
    Count,
}

fn format_value(val: f64, fmt: StatFormat) -> String {
    match fmt {
        StatFormat::Currency => format_currency(val),
        StatFormat::Count => format!("{}", val as i64),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary value (None = not loaded yet)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: StatFormat,
) -> impl IntoView {
    let status_class = move || match (format, value.get()) {
        (StatFormat::Currency, Some(v)) if v < 0.0 => "stat-card stat-card--error",
        _ => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "-".to_string(),
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
