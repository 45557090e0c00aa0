//! Notice posting dialog.

use campuslink_shared::{Notice, Priority, forms};
use leptos::prelude::*;

use crate::components::icons::Plus;
use crate::util;

fn priority_from(value: &str) -> Priority {
    match value {
        "low" => Priority::Low,
        "high" => Priority::High,
        _ => Priority::Medium,
    }
}

#[component]
pub fn NoticeDialog(
    open: RwSignal<bool>,
    /// Shown as the notice author.
    posted_by: String,
    #[prop(into)] on_post: Callback<Notice>,
    busy: Signal<bool>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (priority, set_priority) = signal(Priority::Medium);
    let (for_students, set_for_students) = signal(true);
    let (for_teachers, set_for_teachers) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                set_title.set(String::new());
                set_content.set(String::new());
                set_priority.set(Priority::Medium);
                set_for_students.set(true);
                set_for_teachers.set(false);
                set_error_msg.set(None);
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = forms::validate_notice(&title.get(), &content.get()) {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        let mut audience = Vec::new();
        if for_students.get() {
            audience.push("student".to_string());
        }
        if for_teachers.get() {
            audience.push("teacher".to_string());
        }
        if audience.is_empty() {
            set_error_msg.set(Some("Select at least one audience".to_string()));
            return;
        }

        set_error_msg.set(None);
        on_post.run(Notice {
            id: forms::make_id("N", util::now_ms()),
            title: title.get().trim().to_string(),
            content: content.get().trim().to_string(),
            posted_by: posted_by.clone(),
            posted_date: util::today(),
            priority: priority.get(),
            target_audience: audience,
        });
    };

    view! {
        <button class="btn btn-primary gap-2" on:click=move |_| open.set(true)>
            <Plus attr:class="h-4 w-4" /> "Post notice"
        </button>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Post notice"</h3>

                <form on:submit=on_submit class="space-y-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="notice_title" class="label">
                            <span class="label-text">"Title"</span>
                        </label>
                        <input
                            id="notice_title"
                            required
                            type="text"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=title
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label for="notice_content" class="label">
                            <span class="label-text">"Content"</span>
                        </label>
                        <textarea
                            id="notice_content"
                            required
                            on:input=move |ev| set_content.set(event_target_value(&ev))
                            prop:value=content
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Priority"</span>
                        </label>
                        <select
                            class="select select-bordered w-full"
                            on:change=move |ev| set_priority.set(priority_from(&event_target_value(&ev)))
                        >
                            <option value="low">"Low"</option>
                            <option value="medium" selected>"Medium"</option>
                            <option value="high">"High"</option>
                        </select>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <label class="label cursor-pointer">
                            <span class="label-text">"Students"</span>
                            <input
                                type="checkbox"
                                class="checkbox checkbox-primary"
                                prop:checked=for_students
                                on:change=move |ev| set_for_students.set(event_target_checked(&ev))
                            />
                        </label>
                        <label class="label cursor-pointer">
                            <span class="label-text">"Teachers"</span>
                            <input
                                type="checkbox"
                                class="checkbox checkbox-primary"
                                prop:checked=for_teachers
                                on:change=move |ev| set_for_teachers.set(event_target_checked(&ev))
                            />
                        </label>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || busy.get() class="btn btn-primary">
                            "Post"
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
