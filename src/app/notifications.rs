use leptos::prelude::*;

use super::state::PageState;
use crate::notify::Notification;

#[component]
pub fn NotificationStack() -> impl IntoView {
    let state = expect_context::<PageState>();
    let items = move || state.notifications.with(|list| list.iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=items
                key=|n: &Notification| (n.id, n.leaving)
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class_name() class:leaving=n.leaving role="status">
                            <div class="notification-content">
                                <i class=n.kind.icon_class()></i>
                                <span>{n.message}</span>
                            </div>
                            <button
                                class="notification-close"
                                aria-label="Dismiss"
                                on:click=move |_| state.dismiss(id)
                            >
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
