//! Message components for displaying submission outcomes

use leptos::prelude::*;

use crate::core::waitlist::SubmissionResult;

const SUCCESS_CLASS: &str = "bg-emerald-50 text-emerald-700 border-emerald-200";
const ERROR_CLASS: &str = "bg-rose-50 text-rose-700 border-rose-200";

/// Submission result message
/// Shows the message when Some, hidden when None; success and error only
/// differ in color
#[component]
pub fn SubmissionMessage(
    /// Result of the last submit attempt
    #[prop(into)]
    result: Signal<Option<SubmissionResult>>,
) -> impl IntoView {
    move || {
        result.get().map(|result| {
            let (tone, role) = if result.is_success() {
                (SUCCESS_CLASS, "status")
            } else {
                (ERROR_CLASS, "alert")
            };

            view! {
                <div
                    class=format!("{} border rounded-lg px-3 py-2 text-sm", tone)
                    role=role
                >
                    {result.message().to_string()}
                </div>
            }
        })
    }
}
