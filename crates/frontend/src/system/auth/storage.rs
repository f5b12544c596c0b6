use contracts::system::auth::UserInfo;
use web_sys::window;

const TOKEN_KEY: &str = "authToken";
const USER_KEY: &str = "currentUser";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist token and profile after a successful login
pub fn save_session(token: &str, user: &UserInfo) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => {
                let _ = storage.set_item(USER_KEY, &json);
            }
            Err(e) => log::error!("Failed to serialize current user: {}", e),
        }
    }
}

/// Stored token and profile; corrupt or partial state is cleared
pub fn load_session() -> Option<(String, UserInfo)> {
    let storage = get_local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let raw_user = storage.get_item(USER_KEY).ok()??;
    match parse_stored_user(&raw_user) {
        Some(user) => Some((token, user)),
        None => {
            log::warn!("Stored session is corrupt, clearing it");
            clear_session();
            None
        }
    }
}

pub fn parse_stored_user(raw: &str) -> Option<UserInfo> {
    serde_json::from_str(raw).ok()
}

/// Remove token and profile
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_user_round_trips_through_camel_case() {
        let raw = r#"{"id":1,"username":"admin","fullName":"Owner","role":"OWNER","outlet":"SKY_BLUE_WOMEN"}"#;
        let user = parse_stored_user(raw).unwrap();
        assert_eq!(user.full_name, "Owner");
        assert!(parse_stored_user("{not json").is_none());
    }
}
