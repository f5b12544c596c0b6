//! Transient banners shown above the active panel.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "alert alert--success",
            NoticeKind::Error => "alert alert--error",
            NoticeKind::Warning => "alert alert--warning",
            NoticeKind::Info => "alert alert--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub message: String,
}

/// Queue of visible notices; each expires after `lifetime_ms`.
#[derive(Clone, Copy)]
pub struct NoticeCenter {
    items: RwSignal<Vec<Notice>>,
    lifetime_ms: u32,
}

impl NoticeCenter {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            lifetime_ms,
        }
    }

    pub fn items(&self) -> Signal<Vec<Notice>> {
        self.items.into()
    }

    pub fn push(&self, kind: NoticeKind, message: impl Into<String>) {
        let notice = Notice {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = notice.id;
        self.items.update(|items| items.push(notice));

        let items = self.items;
        let lifetime_ms = self.lifetime_ms;
        spawn_local(async move {
            TimeoutFuture::new(lifetime_ms).await;
            items.try_update(|items| items.retain(|n| n.id != id));
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(NoticeKind::Warning, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeKind::Info, message);
    }
}

#[component]
pub fn NoticeStack(notices: NoticeCenter) -> impl IntoView {
    view! {
        <div class="notice-stack">
            <For
                each=move || notices.items().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.class() on:click=move |_| notices.dismiss(id)>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
