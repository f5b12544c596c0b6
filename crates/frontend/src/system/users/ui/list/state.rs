use contracts::system::users::{User, UserDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_error::ApiError;
use crate::system::users::{api, directory};

/// Users tab: the account list and the "add user" form.
#[derive(Clone, Copy)]
pub struct UsersViewModel {
    ctx: AppGlobalContext,
    pub rows: RwSignal<Vec<User>>,
    pub form: RwSignal<UserDraft>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl UsersViewModel {
    pub fn new(ctx: AppGlobalContext) -> Self {
        Self {
            ctx,
            rows: RwSignal::new(Vec::new()),
            form: RwSignal::new(UserDraft::default()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn reset(&self) {
        self.rows.set(Vec::new());
        self.clear();
    }

    pub async fn load(self) -> Result<(), ApiError> {
        self.loading.set(true);
        let result = api::fetch_users(&self.ctx.api()).await;
        self.loading.set(false);
        let users = result?;
        log::debug!("Loaded {} users", users.len());
        self.rows.set(users);
        Ok(())
    }

    pub fn reload(self) {
        spawn_local(async move {
            if let Err(e) = self.load().await {
                self.ctx.handle_error("Failed to load user data", &e);
            }
        });
    }

    /// User list and sales-rep directory, after a create or remove.
    async fn refresh_after_change(self) {
        if let Err(e) = self.load().await {
            self.ctx.handle_error("Failed to load user data", &e);
        }
        if let Err(e) = directory::reload_sales_reps(self.ctx).await {
            self.ctx.handle_error("Failed to load sales reps", &e);
        }
    }

    pub fn submit(self) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = match self.form.with_untracked(|f| f.validate()) {
            Ok(dto) => dto,
            Err(e) => {
                self.ctx.notices.error(e.to_string());
                return;
            }
        };

        self.saving.set(true);
        spawn_local(async move {
            let result = api::create_user(&self.ctx.api(), &dto).await;
            self.saving.set(false);
            match result {
                Ok(_) => {
                    log::info!("User {} created as {}", dto.username, dto.role);
                    self.clear();
                    self.ctx.notices.success(format!(
                        "User added successfully! Default password: {}",
                        dto.role.default_password()
                    ));
                    self.refresh_after_change().await;
                }
                Err(e) => self.ctx.handle_error("Failed to add user", &e),
            }
        });
    }

    /// Asks for confirmation, then removes the account. `admin` is refused.
    pub fn remove(self, user: User) {
        if user.is_protected() {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to remove this user?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api::delete_user(&self.ctx.api(), user.id).await {
                Ok(_) => {
                    log::info!("User {} removed", user.username);
                    self.refresh_after_change().await;
                    self.ctx.notices.success("User removed successfully!");
                }
                Err(e) => self.ctx.handle_error("Failed to remove user", &e),
            }
        });
    }

    pub fn clear(&self) {
        self.form.set(UserDraft::default());
    }
}
