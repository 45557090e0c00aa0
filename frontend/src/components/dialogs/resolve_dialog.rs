//! Complaint resolution dialog (admin).

use campuslink_shared::{Complaint, forms};
use leptos::prelude::*;

#[component]
pub fn ResolveDialog(
    /// Complaint being resolved; `None` keeps the dialog closed.
    target: RwSignal<Option<Complaint>>,
    /// Receives `(complaint_id, response)`.
    #[prop(into)]
    on_resolve: Callback<(String, String)>,
    busy: Signal<bool>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let (response, set_response) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        if target.get().is_some() {
            set_response.set(String::new());
            set_error_msg.set(None);
        }
        if let Some(dialog) = dialog_ref.get() {
            if target.get().is_some() {
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
        let Some(row) = target.get_untracked() else {
            return;
        };
        if let Err(e) = forms::require("Response", &response.get()) {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        set_error_msg.set(None);
        on_resolve.run((row.id, response.get().trim().to_string()));
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| target.set(None)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Resolve complaint"</h3>
                <p class="py-2 text-base-content/70">
                    {move || target.get().map(|row| row.title).unwrap_or_default()}
                </p>
                <p class="text-sm text-base-content/60 whitespace-pre-wrap">
                    {move || target.get().map(|row| row.description).unwrap_or_default()}
                </p>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="resolve_response" class="label">
                            <span class="label-text">"Response"</span>
                        </label>
                        <textarea
                            id="resolve_response"
                            required
                            on:input=move |ev| set_response.set(event_target_value(&ev))
                            prop:value=response
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| target.set(None)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || busy.get() class="btn btn-primary">
                            "Mark resolved"
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
