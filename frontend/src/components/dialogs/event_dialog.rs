//! Event creation dialog.

use campuslink_shared::{Event, EventType, forms};
use leptos::prelude::*;

use crate::components::icons::Plus;
use crate::util;

/// Form state bundle.
///
/// `RwSignal` fields make the whole struct `Copy`, so it moves freely
/// into the event handlers.
#[derive(Clone, Copy)]
struct FormState {
    title: RwSignal<String>,
    description: RwSignal<String>,
    date: RwSignal<String>,
    time: RwSignal<String>,
    location: RwSignal<String>,
    event_type: RwSignal<EventType>,
    registration_required: RwSignal<bool>,
}

impl FormState {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            time: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            event_type: RwSignal::new(EventType::Academic),
            registration_required: RwSignal::new(true),
        }
    }

    fn reset(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.date.set(String::new());
        self.time.set(String::new());
        self.location.set(String::new());
        self.event_type.set(EventType::Academic);
        self.registration_required.set(true);
    }

    fn to_event(&self) -> Result<Event, forms::FormError> {
        forms::validate_event(
            &self.title.get(),
            &self.description.get(),
            &self.location.get(),
            &self.time.get(),
        )?;
        let date = forms::parse_date("Date", &self.date.get())?;
        Ok(Event {
            id: forms::make_id("E", util::now_ms()),
            title: self.title.get().trim().to_string(),
            description: self.description.get().trim().to_string(),
            date,
            time: self.time.get().trim().to_string(),
            location: self.location.get().trim().to_string(),
            event_type: self.event_type.get(),
            registration_required: self.registration_required.get(),
            registered_users: Vec::new(),
        })
    }
}

fn event_type_from(value: &str) -> EventType {
    match value {
        "cultural" => EventType::Cultural,
        "sports" => EventType::Sports,
        "holiday" => EventType::Holiday,
        _ => EventType::Academic,
    }
}

#[component]
pub fn EventDialog(
    /// Owned by the parent so a successful mutation can close the dialog
    /// while a failed one leaves the form intact for retry.
    open: RwSignal<bool>,
    #[prop(into)] on_add: Callback<Event>,
    busy: Signal<bool>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let state = FormState::new();
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                state.reset();
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
        match state.to_event() {
            Ok(event) => {
                set_error_msg.set(None);
                on_add.run(event);
            }
            Err(e) => set_error_msg.set(Some(e.to_string())),
        }
    };

    view! {
        <button class="btn btn-primary gap-2" on:click=move |_| open.set(true)>
            <Plus attr:class="h-4 w-4" /> "New event"
        </button>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Create event"</h3>

                <form on:submit=on_submit class="space-y-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="event_title" class="label">
                            <span class="label-text">"Title"</span>
                        </label>
                        <input
                            id="event_title"
                            required
                            type="text"
                            placeholder="Tech Symposium 2026"
                            on:input=move |ev| state.title.set(event_target_value(&ev))
                            prop:value=move || state.title.get()
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label for="event_description" class="label">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="event_description"
                            required
                            on:input=move |ev| state.description.set(event_target_value(&ev))
                            prop:value=move || state.description.get()
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="event_date" class="label">
                                <span class="label-text">"Date"</span>
                            </label>
                            <input
                                id="event_date"
                                required
                                type="date"
                                on:input=move |ev| state.date.set(event_target_value(&ev))
                                prop:value=move || state.date.get()
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="event_time" class="label">
                                <span class="label-text">"Time"</span>
                            </label>
                            <input
                                id="event_time"
                                required
                                type="text"
                                placeholder="09:00 AM"
                                on:input=move |ev| state.time.set(event_target_value(&ev))
                                prop:value=move || state.time.get()
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="event_location" class="label">
                                <span class="label-text">"Location"</span>
                            </label>
                            <input
                                id="event_location"
                                required
                                type="text"
                                placeholder="Main Auditorium"
                                on:input=move |ev| state.location.set(event_target_value(&ev))
                                prop:value=move || state.location.get()
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Type"</span>
                            </label>
                            <select
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    state.event_type.set(event_type_from(&event_target_value(&ev)))
                                }
                            >
                                <option value="academic">"Academic"</option>
                                <option value="cultural">"Cultural"</option>
                                <option value="sports">"Sports"</option>
                                <option value="holiday">"Holiday"</option>
                            </select>
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label cursor-pointer">
                            <span class="label-text">"Registration required"</span>
                            <input
                                type="checkbox"
                                class="toggle toggle-primary"
                                prop:checked=move || state.registration_required.get()
                                on:change=move |ev| {
                                    state.registration_required.set(event_target_checked(&ev))
                                }
                            />
                        </label>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || busy.get() class="btn btn-primary">
                            "Create event"
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
