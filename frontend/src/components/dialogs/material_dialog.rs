//! Study material upload dialog (teacher).
//!
//! The demo backend stores a placeholder file URL; no actual upload
//! happens here.

use campuslink_shared::{StudyMaterial, forms};
use leptos::prelude::*;

use crate::components::icons::Plus;
use crate::util;

#[component]
pub fn MaterialDialog(
    open: RwSignal<bool>,
    /// Uploader's display name.
    uploaded_by: String,
    #[prop(into)] on_add: Callback<StudyMaterial>,
    busy: Signal<bool>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let (title, set_title) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (subject_code, set_subject_code) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                set_title.set(String::new());
                set_subject.set(String::new());
                set_subject_code.set(String::new());
                set_description.set(String::new());
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
        if let Err(e) = forms::validate_material(&title.get(), &subject.get(), &subject_code.get()) {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        let code = subject_code.get().trim().to_uppercase();
        set_error_msg.set(None);
        on_add.run(StudyMaterial {
            id: forms::make_id("M", util::now_ms()),
            title: title.get().trim().to_string(),
            subject: subject.get().trim().to_string(),
            subject_code: code,
            description: description.get().trim().to_string(),
            file_url: "/files/placeholder.pdf".to_string(),
            uploaded_by: uploaded_by.clone(),
            uploaded_date: util::today(),
            semester: 6,
            department: "Computer Science".to_string(),
        });
    };

    view! {
        <button class="btn btn-primary gap-2" on:click=move |_| open.set(true)>
            <Plus attr:class="h-4 w-4" /> "Upload material"
        </button>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Upload study material"</h3>

                <form on:submit=on_submit class="space-y-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="material_title" class="label">
                            <span class="label-text">"Title"</span>
                        </label>
                        <input
                            id="material_title"
                            required
                            type="text"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=title
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="material_subject" class="label">
                                <span class="label-text">"Subject"</span>
                            </label>
                            <input
                                id="material_subject"
                                required
                                type="text"
                                placeholder="Data Structures"
                                on:input=move |ev| set_subject.set(event_target_value(&ev))
                                prop:value=subject
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="material_code" class="label">
                                <span class="label-text">"Subject code"</span>
                            </label>
                            <input
                                id="material_code"
                                required
                                type="text"
                                placeholder="CS301"
                                on:input=move |ev| set_subject_code.set(event_target_value(&ev))
                                prop:value=subject_code
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="material_description" class="label">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="material_description"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=description
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || busy.get() class="btn btn-primary">
                            "Upload"
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
