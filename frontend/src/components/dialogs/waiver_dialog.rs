//! Attendance waiver dialog (admin).
//!
//! Waiving marks the record fully attended on the backend; the reason is
//! recorded with the request.

use campuslink_shared::{Attendance, AttendanceWaiver, forms};
use leptos::prelude::*;

#[component]
pub fn WaiverDialog(
    /// Record being waived; `None` keeps the dialog closed.
    target: RwSignal<Option<Attendance>>,
    #[prop(into)] on_waive: Callback<AttendanceWaiver>,
    busy: Signal<bool>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let (reason, set_reason) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        if target.get().is_some() {
            set_reason.set(String::new());
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
        if let Err(e) = forms::validate_waiver(&reason.get()) {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        set_error_msg.set(None);
        on_waive.run(AttendanceWaiver {
            student_id: row.student_id,
            subject_code: row.subject_code,
            reason: reason.get().trim().to_string(),
        });
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| target.set(None)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Waive attendance shortfall"</h3>
                <p class="py-2 text-base-content/70">
                    {move || {
                        target
                            .get()
                            .map(|row| {
                                format!(
                                    "{} — {} ({:.1}% attended)",
                                    row.student_name,
                                    row.subject,
                                    row.percentage,
                                )
                            })
                            .unwrap_or_default()
                    }}
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="waiver_reason" class="label">
                            <span class="label-text">"Reason"</span>
                        </label>
                        <textarea
                            id="waiver_reason"
                            required
                            placeholder="Medical leave, approved by department"
                            on:input=move |ev| set_reason.set(event_target_value(&ev))
                            prop:value=reason
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| target.set(None)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || busy.get() class="btn btn-primary">
                            "Waive"
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
