//! Complaint submission dialog (student).

use campuslink_shared::{Complaint, ComplaintStatus, ComplaintType, forms};
use leptos::prelude::*;

use crate::components::icons::Plus;
use crate::util;

fn complaint_type_from(value: &str) -> ComplaintType {
    match value {
        "private" => ComplaintType::Private,
        _ => ComplaintType::Public,
    }
}

#[component]
pub fn ComplaintDialog(
    open: RwSignal<bool>,
    /// Submitter's user id.
    submitted_by: String,
    submitted_by_name: String,
    #[prop(into)] on_submit: Callback<Complaint>,
    busy: Signal<bool>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (complaint_type, set_complaint_type) = signal(ComplaintType::Public);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                set_title.set(String::new());
                set_description.set(String::new());
                set_complaint_type.set(ComplaintType::Public);
                set_error_msg.set(None);
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_form_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = forms::validate_complaint(&title.get(), &description.get()) {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        set_error_msg.set(None);
        on_submit.run(Complaint {
            id: forms::make_id("C", util::now_ms()),
            title: title.get().trim().to_string(),
            description: description.get().trim().to_string(),
            complaint_type: complaint_type.get(),
            status: ComplaintStatus::Pending,
            submitted_by: submitted_by.clone(),
            submitted_by_name: submitted_by_name.clone(),
            submitted_date: util::today(),
            assigned_to: None,
            votes: 0,
            voted_by: Vec::new(),
            response: None,
            resolved_date: None,
        });
    };

    view! {
        <button class="btn btn-primary gap-2" on:click=move |_| open.set(true)>
            <Plus attr:class="h-4 w-4" /> "New complaint"
        </button>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Submit complaint"</h3>

                <form on:submit=on_form_submit class="space-y-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="complaint_title" class="label">
                            <span class="label-text">"Title"</span>
                        </label>
                        <input
                            id="complaint_title"
                            required
                            type="text"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=title
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label for="complaint_description" class="label">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="complaint_description"
                            required
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=description
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Visibility"</span>
                        </label>
                        <select
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                set_complaint_type.set(complaint_type_from(&event_target_value(&ev)))
                            }
                        >
                            <option value="public">"Public (open for voting)"</option>
                            <option value="private">"Private (admins only)"</option>
                        </select>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || busy.get() class="btn btn-primary">
                            "Submit"
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
