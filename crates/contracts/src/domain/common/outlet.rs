use crate::system::auth::{Role, UserInfo};

/// Pseudo-outlet meaning "no outlet filter".
pub const ALL_OUTLETS: &str = "All Outlets";

/// Physical stores known to the back office.
pub const OUTLETS: &[&str] = &["SKY_BLUE_WOMEN"];

/// Outlet chosen in the owner's selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutletSelection(String);

impl Default for OutletSelection {
    fn default() -> Self {
        Self(ALL_OUTLETS.to_string())
    }
}

impl OutletSelection {
    /// Selector options in display order.
    pub fn choices() -> Vec<&'static str> {
        std::iter::once(ALL_OUTLETS)
            .chain(OUTLETS.iter().copied())
            .collect()
    }

    /// Accepts only known choices; anything else falls back to all outlets.
    pub fn from_choice(value: &str) -> Self {
        if Self::choices().contains(&value) {
            Self(value.to_string())
        } else {
            Self::default()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_OUTLETS
    }

    /// Outlet that data requests are scoped to for `user`.
    ///
    /// Only owners pick freely; everyone else is pinned to their own outlet.
    pub fn effective_for(&self, user: &UserInfo) -> String {
        match user.role {
            Role::Owner => self.0.clone(),
            _ => user.outlet.clone(),
        }
    }

    /// Value of the `outlet` query parameter for list and stats endpoints.
    ///
    /// Non-owners are scoped server-side, so they never send the parameter.
    pub fn query_param_for(&self, user: &UserInfo) -> Option<String> {
        match user.role {
            Role::Owner if !self.is_all() => Some(self.0.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: Some(1),
            username: "u".into(),
            full_name: "U".into(),
            role,
            outlet: "SKY_BLUE_WOMEN".into(),
            is_active: None,
        }
    }

    #[test]
    fn default_is_all_outlets() {
        let selection = OutletSelection::default();
        assert!(selection.is_all());
        assert_eq!(selection.query_param_for(&user(Role::Owner)), None);
    }

    #[test]
    fn owner_selection_becomes_query_param() {
        let selection = OutletSelection::from_choice("SKY_BLUE_WOMEN");
        assert_eq!(
            selection.query_param_for(&user(Role::Owner)).as_deref(),
            Some("SKY_BLUE_WOMEN")
        );
    }

    #[test]
    fn manager_is_pinned_to_own_outlet() {
        let selection = OutletSelection::default();
        let manager = user(Role::Manager);
        assert_eq!(selection.effective_for(&manager), "SKY_BLUE_WOMEN");
        assert_eq!(selection.query_param_for(&manager), None);
    }

    #[test]
    fn unknown_choice_falls_back() {
        assert!(OutletSelection::from_choice("MOON_MEN").is_all());
    }
}
