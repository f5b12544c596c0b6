//! Keyboard shortcuts for the whole window.

use contracts::shared::role_policy::AppTab;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use super::refresh::refresh_all;
use super::Panels;
use crate::layout::global_context::{AppGlobalContext, FormCommand, FormRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Navigate(AppTab),
    Submit,
    NewEntry,
    Clear,
    RefreshAll,
}

/// Maps a key press onto an action.
///
/// Ctrl combinations and F5 work everywhere; Alt+digit and Escape are
/// ignored while focus is inside a form field.
pub fn map_shortcut(key: &str, alt: bool, ctrl: bool, in_field: bool) -> Option<ShortcutAction> {
    if key == "F5" {
        return Some(ShortcutAction::RefreshAll);
    }
    if ctrl {
        return match key.to_ascii_lowercase().as_str() {
            "s" => Some(ShortcutAction::Submit),
            "n" => Some(ShortcutAction::NewEntry),
            "r" => Some(ShortcutAction::RefreshAll),
            _ => None,
        };
    }
    if in_field {
        return None;
    }
    if alt {
        let mut chars = key.chars();
        return match (chars.next(), chars.next()) {
            (Some(digit), None) => AppTab::from_shortcut_digit(digit).map(ShortcutAction::Navigate),
            _ => None,
        };
    }
    match key {
        "Escape" => Some(ShortcutAction::Clear),
        _ => None,
    }
}

fn focus_in_field(ev: &KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
}

/// Alt+digit reports `Digit1`.. in `code` on layouts where `key` is a symbol.
fn pressed_key(ev: &KeyboardEvent) -> String {
    let code = ev.code();
    match code.strip_prefix("Digit") {
        Some(digit) if ev.alt_key() => digit.to_string(),
        _ => ev.key(),
    }
}

pub fn install(ctx: AppGlobalContext, panels: Panels) {
    let _ = window_event_listener(leptos::ev::keydown, move |ev: KeyboardEvent| {
        if !ctx.is_authenticated_untracked() {
            return;
        }
        let ctrl = ev.ctrl_key() || ev.meta_key();
        let Some(action) = map_shortcut(&pressed_key(&ev), ev.alt_key(), ctrl, focus_in_field(&ev))
        else {
            return;
        };
        ev.prevent_default();
        log::debug!("Shortcut {:?}", action);

        match action {
            ShortcutAction::Navigate(tab) => {
                ctx.navigate(tab);
            }
            ShortcutAction::Submit => ctx.request_form(FormCommand::Submit),
            ShortcutAction::NewEntry => {
                if matches!(ctx.active_tab.get_untracked(), AppTab::Sales | AppTab::Expenses) {
                    ctx.request_form(FormCommand::Clear);
                }
            }
            ShortcutAction::Clear => ctx.request_form(FormCommand::Clear),
            ShortcutAction::RefreshAll => refresh_all(ctx, panels),
        }
    });

    Effect::new(move |_| {
        if let Some(request) = ctx.form_request.get() {
            dispatch(panels, request);
            ctx.form_request.set(None);
        }
    });
}

/// Whether the form on `tab` answers `command`.
///
/// Only the sales and expense forms submit from the keyboard; any form clears.
pub fn handles(tab: AppTab, command: FormCommand) -> bool {
    match command {
        FormCommand::Submit => matches!(tab, AppTab::Sales | AppTab::Expenses),
        FormCommand::Clear => tab != AppTab::Dashboard,
    }
}

fn dispatch(panels: Panels, request: FormRequest) {
    if !handles(request.tab, request.command) {
        log::debug!("{:?} ignored on {}", request.command, request.tab.key());
        return;
    }
    match (request.tab, request.command) {
        (AppTab::Sales, FormCommand::Submit) => panels.sales.submit(),
        (AppTab::Expenses, FormCommand::Submit) => panels.expenses.submit(),
        (AppTab::Sales, FormCommand::Clear) => panels.sales.clear(),
        (AppTab::Expenses, FormCommand::Clear) => panels.expenses.clear(),
        (AppTab::Users, FormCommand::Clear) => panels.users.clear(),
        (AppTab::Salary, FormCommand::Clear) => panels.salary.clear(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_digits_navigate_outside_fields() {
        assert_eq!(
            map_shortcut("2", true, false, false),
            Some(ShortcutAction::Navigate(AppTab::Sales))
        );
        assert_eq!(
            map_shortcut("5", true, false, false),
            Some(ShortcutAction::Navigate(AppTab::Salary))
        );
        assert_eq!(map_shortcut("6", true, false, false), None);
        assert_eq!(map_shortcut("2", true, false, true), None);
    }

    #[test]
    fn ctrl_combinations_work_inside_fields() {
        assert_eq!(map_shortcut("s", false, true, true), Some(ShortcutAction::Submit));
        assert_eq!(map_shortcut("S", false, true, false), Some(ShortcutAction::Submit));
        assert_eq!(map_shortcut("n", false, true, true), Some(ShortcutAction::NewEntry));
        assert_eq!(map_shortcut("r", false, true, true), Some(ShortcutAction::RefreshAll));
        assert_eq!(map_shortcut("x", false, true, false), None);
    }

    #[test]
    fn plain_keys() {
        assert_eq!(map_shortcut("Escape", false, false, false), Some(ShortcutAction::Clear));
        assert_eq!(map_shortcut("Escape", false, false, true), None);
        assert_eq!(map_shortcut("F5", false, false, true), Some(ShortcutAction::RefreshAll));
        assert_eq!(map_shortcut("a", false, false, false), None);
    }

    #[test]
    fn keyboard_submit_limited_to_entry_forms() {
        assert!(handles(AppTab::Sales, FormCommand::Submit));
        assert!(handles(AppTab::Expenses, FormCommand::Submit));
        assert!(!handles(AppTab::Users, FormCommand::Submit));
        assert!(!handles(AppTab::Salary, FormCommand::Submit));
        assert!(!handles(AppTab::Dashboard, FormCommand::Submit));
    }

    #[test]
    fn escape_clears_every_form() {
        for tab in [AppTab::Sales, AppTab::Expenses, AppTab::Users, AppTab::Salary] {
            assert!(handles(tab, FormCommand::Clear));
        }
        assert!(!handles(AppTab::Dashboard, FormCommand::Clear));
    }
}
