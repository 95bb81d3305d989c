//! Landing page component
//!
//! The re:collect marketing page:
//! - SEO meta tags
//! - Header with brand mark and tagline
//! - Hero copy with the feature list
//! - Waitlist signup card
//! - Footer
//! - Decorative animated background

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::background::Background;
use crate::ui::waitlist_form::WaitlistForm;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        // SEO Meta Tags
        <SeoMeta />

        <div class="relative min-h-screen overflow-hidden bg-gradient-to-br from-slate-50 via-white to-indigo-50">
            <Background />

            <Header />

            <main class="relative z-10 max-w-6xl mx-auto px-6 pt-6 pb-24 grid lg:grid-cols-2 gap-12 items-center">
                // Hero Section
                <section>
                    <div class="inline-flex items-center gap-2 rounded-full border border-slate-200/70 bg-white/70
                                backdrop-blur px-3 py-1 text-xs text-slate-600 shadow-sm">
                        <span class="h-2 w-2 rounded-full bg-emerald-500"></span>
                        "Private beta"
                    </div>

                    <h1 class="mt-4 text-4xl sm:text-5xl font-semibold leading-tight text-slate-900">
                        "Remember people, not tabs."
                    </h1>
                    <p class="mt-4 text-lg text-slate-600">
                        "re:collect is your relationship OS, a quiet, always-on assistant that captures context, \
                         resurfaces the right details, and helps you show up thoughtfully for the people who matter."
                    </p>

                    <ul class="mt-6 space-y-3 text-slate-700">
                        <FeatureItem text="Automatic context capture across meetings and notes" />
                        <FeatureItem text="Smart reminders to reach out when it matters" />
                        <FeatureItem text="A searchable second brain for your network" />
                    </ul>
                </section>

                // Waitlist Section
                <section id="waitlist">
                    <WaitlistForm />
                </section>
            </main>

            // Footer
            <Footer />

            // CSS Animations
            <LandingStyles />
        </div>
    }
}

/// Header component with brand mark and tagline
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="relative z-10 max-w-6xl mx-auto px-6 py-8 flex items-center justify-between">
            <div class="flex items-center gap-2">
                <Logo />
                <span class="font-semibold text-xl text-slate-800 tracking-tight">"re:collect"</span>
            </div>
            <div class="text-sm text-slate-500">"Second brain for your relationships"</div>
        </header>
    }
}

/// Logo component
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="h-8 w-8 rounded-md bg-indigo-600 text-white grid place-items-center font-bold">
            "r"
        </div>
    }
}

/// Feature bullet with a check mark
#[component]
fn FeatureItem(text: &'static str) -> impl IntoView {
    view! {
        <li class="flex items-start gap-3">
            <span class="mt-1 h-5 w-5 rounded-full bg-indigo-100 text-indigo-700 grid place-items-center text-xs">
                "✓"
            </span>
            {text}
        </li>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text="re:collect - Second brain for your relationships" />

        // Basic meta tags
        <Meta name="description" content="re:collect captures context, resurfaces the right details, and helps you show up thoughtfully for the people who matter. Join the waitlist for early access." />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="re:collect - Remember people, not tabs." />
        <Meta property="og:description" content="A quiet, always-on assistant for your relationships. Join the private beta waitlist." />
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="relative z-10 max-w-6xl mx-auto px-6 pb-10 text-sm text-slate-500">
            <div class="border-t border-slate-200/70 pt-6 flex flex-col sm:flex-row items-center justify-between gap-4">
                <span>{format!("© {} re:collect", year)}</span>
                <span class="text-slate-400">"Crafted for thoughtful connectors"</span>
            </div>
        </footer>
    }
}

/// chrono's `wasmbind` support reads the browser clock under hydrate
fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

/// Styles for the animated background
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Animated gradient field */
            @keyframes recollect-gradient-shift {
                0% { background-position: 0% 50%; }
                50% { background-position: 100% 50%; }
                100% { background-position: 0% 50%; }
            }

            .recollect-animated-gradient {
                background: linear-gradient(120deg, rgba(99, 102, 241, 0.12), rgba(236, 72, 153, 0.10), rgba(16, 185, 129, 0.10), rgba(99, 102, 241, 0.12));
                background-size: 300% 300%;
                animation: recollect-gradient-shift 18s ease-in-out infinite;
            }

            /* Soft grid for depth */
            .recollect-grid-overlay {
                background-image:
                    linear-gradient(rgba(15, 23, 42, 0.04) 1px, transparent 1px),
                    linear-gradient(90deg, rgba(15, 23, 42, 0.04) 1px, transparent 1px);
                background-size: 32px 32px;
            }

            /* Floating blobs */
            @keyframes recollect-float {
                0%, 100% { transform: translate(0, 0) scale(1); }
                33% { transform: translate(30px, -40px) scale(1.05); }
                66% { transform: translate(-20px, 20px) scale(0.95); }
            }

            .recollect-blob {
                filter: blur(64px);
                animation: recollect-float 20s ease-in-out infinite;
            }

            .recollect-blob-1 { animation-delay: 0s; }
            .recollect-blob-2 { animation-delay: -6s; animation-duration: 24s; }
            .recollect-blob-3 { animation-delay: -12s; animation-duration: 28s; }

            /* Vignette mask to focus center content */
            .recollect-vignette {
                background: radial-gradient(ellipse at center, transparent 55%, rgba(248, 250, 252, 0.9) 100%);
            }

            @media (prefers-reduced-motion: reduce) {
                .recollect-animated-gradient,
                .recollect-blob {
                    animation: none;
                }
            }
            "#
        </style>
    }
}
