//! Waitlist signup card
//!
//! Binds the inputs to a [`SignupForm`] held in a signal and runs the submit
//! flow in the browser.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::config::Config;
use crate::core::waitlist::{SignupField, SignupForm, WaitlistClient, WaitlistService};
use crate::ui::common::SubmissionMessage;

const INPUT_CLASS: &str = "mt-1 w-full rounded-lg border border-slate-300 bg-white/90 px-3 py-2 \
                           focus:outline-none focus:ring-2 focus:ring-indigo-500";

/// Waitlist form component
#[component]
pub fn WaitlistForm() -> impl IntoView {
    let form = RwSignal::new(SignupForm::new());
    let client = WaitlistClient::new(Config::global());

    let submitting = Memo::new(move |_| form.with(SignupForm::is_submitting));
    let result = Signal::derive(move || form.with(|f| f.result().cloned()));

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(request) = form.try_update(SignupForm::begin_submit).flatten() else {
            return;
        };

        let client = client.clone();
        spawn_local(async move {
            let outcome = client.join(&request).await;
            form.update(|f| f.finish_submit(outcome));
        });
    };

    view! {
        <div class="bg-white/80 backdrop-blur rounded-2xl border border-slate-200 shadow-xl shadow-indigo-100/30 p-6 sm:p-8">
            <h2 class="text-2xl font-semibold text-slate-900">"Join the waitlist"</h2>
            <p class="mt-2 text-slate-600 text-sm">"Get early access and product updates."</p>

            <form on:submit=on_submit class="mt-6 space-y-4">
                <div>
                    <label for="waitlist-email" class="block text-sm font-medium text-slate-700">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="waitlist-email"
                        name="email"
                        autocomplete="email"
                        required
                        placeholder="you@domain.com"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.field(SignupField::Email).to_string())
                        on:input=move |ev| {
                            form.update(|f| f.update_field(SignupField::Email, event_target_value(&ev)));
                        }
                    />
                </div>

                <div>
                    <label for="waitlist-name" class="block text-sm font-medium text-slate-700">
                        "Name " <OptionalHint />
                    </label>
                    <input
                        type="text"
                        id="waitlist-name"
                        name="name"
                        autocomplete="name"
                        placeholder="Ada Lovelace"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.field(SignupField::Name).to_string())
                        on:input=move |ev| {
                            form.update(|f| f.update_field(SignupField::Name, event_target_value(&ev)));
                        }
                    />
                </div>

                <div>
                    <label for="waitlist-referrer" class="block text-sm font-medium text-slate-700">
                        "How did you hear about re:collect? " <OptionalHint />
                    </label>
                    <input
                        type="text"
                        id="waitlist-referrer"
                        name="referrer"
                        placeholder="Twitter, friend, newsletter..."
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.field(SignupField::Referrer).to_string())
                        on:input=move |ev| {
                            form.update(|f| f.update_field(SignupField::Referrer, event_target_value(&ev)));
                        }
                    />
                </div>

                <div>
                    <label for="waitlist-notes" class="block text-sm font-medium text-slate-700">
                        "Notes " <OptionalHint />
                    </label>
                    <textarea
                        id="waitlist-notes"
                        name="notes"
                        rows=3
                        placeholder="Anything you'd like us to know?"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.field(SignupField::Notes).to_string())
                        on:input=move |ev| {
                            form.update(|f| f.update_field(SignupField::Notes, event_target_value(&ev)));
                        }
                    ></textarea>
                </div>

                <SubmissionMessage result=result />

                <button
                    type="submit"
                    class="w-full inline-flex items-center justify-center gap-2 rounded-lg bg-indigo-600 text-white
                           px-4 py-2 font-medium hover:bg-indigo-700 transition-colors disabled:opacity-60"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Joining…" } else { "Join waitlist" }}
                </button>
                <p class="text-xs text-slate-500 text-center">
                    "We respect your inbox. Unsubscribe anytime."
                </p>
            </form>
        </div>
    }
}

#[component]
fn OptionalHint() -> impl IntoView {
    view! { <span class="text-slate-400 font-normal">"(optional)"</span> }
}
