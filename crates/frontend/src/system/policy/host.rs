use contracts::shared::role_policy::RolePolicy;
use leptos::prelude::*;

use super::engine::RolePolicyEngine;
use super::guards::{install_guards, GuardTargets};
use crate::layout::global_context::AppGlobalContext;

/// Binds the policy engine to the live inputs of the page.
#[derive(Clone, Copy)]
pub struct PolicyHost {
    engine: StoredValue<RolePolicyEngine, LocalStorage>,
    targets: StoredValue<GuardTargets, LocalStorage>,
}

impl PolicyHost {
    pub fn new(targets: GuardTargets) -> Self {
        Self {
            engine: StoredValue::new_local(RolePolicyEngine::new()),
            targets: StoredValue::new_local(targets),
        }
    }

    /// Enters `policy`, or tears the current one down when there is none.
    pub fn apply(&self, policy: Option<RolePolicy>) {
        let targets = self.targets.get_value();
        self.engine.update_value(|engine| match policy {
            Some(policy) => engine.enter(policy, |p| install_guards(p, &targets)),
            None => {
                engine.teardown();
            }
        });
    }

    /// Re-applies whenever the context's policy changes.
    pub fn follow(self, ctx: AppGlobalContext) {
        Effect::new(move |_| {
            let policy = ctx.policy.get();
            self.apply(policy);
        });
    }
}
