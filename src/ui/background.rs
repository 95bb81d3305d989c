use leptos::prelude::*;

/// Decorative animated backdrop: gradient field, grid, floating blobs and a
/// vignette. Animations live in the landing page styles.
#[component]
pub fn Background() -> impl IntoView {
    view! {
        <div aria-hidden="true" class="pointer-events-none absolute inset-0 overflow-hidden">
            <div class="absolute inset-0 recollect-animated-gradient"></div>

            <div class="absolute inset-0 recollect-grid-overlay opacity-60"></div>

            <div class="absolute -top-24 -left-24 h-80 w-80 rounded-full bg-indigo-400/40 recollect-blob recollect-blob-1"></div>
            <div class="absolute top-1/3 -right-24 h-96 w-96 rounded-full bg-pink-400/30 recollect-blob recollect-blob-2"></div>
            <div class="absolute bottom-0 left-1/2 -translate-x-1/2 h-96 w-96 rounded-full bg-emerald-400/30 recollect-blob recollect-blob-3"></div>

            <div class="absolute inset-0 recollect-vignette"></div>
        </div>
    }
}
