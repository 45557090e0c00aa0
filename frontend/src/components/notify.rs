//! Toast notifications.
//!
//! One notifier per dashboard; messages auto-dismiss after 3 seconds.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Notifier {
    message: RwSignal<Option<(String, bool)>>, // message, is_error
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    pub fn success(&self, msg: impl Into<String>) {
        self.message.set(Some((msg.into(), false)));
    }

    pub fn error(&self, msg: impl Into<String>) {
        self.message.set(Some((msg.into(), true)));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NotificationToast(notifier: Notifier) -> impl IntoView {
    let message = notifier.message;

    // Clear after 3 seconds
    Effect::new(move |_| {
        if message.get().is_some() {
            set_timeout(
                move || message.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let (_, is_err) = message.get().unwrap();
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || message.get().unwrap().0}</span>
                </div>
            </div>
        </Show>
    }
}
