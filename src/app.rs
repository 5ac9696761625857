mod contact;
mod document;
mod header;
mod homepage;
mod projects;

use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use projects::ProjectPage;

const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-bodyColor text-lightText font-bodyFont">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Alan Shabrandi - {title}") />

        <Router>
            <Header />
            <main class="w-full px-4">
                <div class="max-w-screen-xl mx-auto">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/projects/:id") view=ProjectPage />
                    </Routes>
                </div>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = chrono::DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.format("%b %e, %Y").to_string())
        .unwrap_or_default();
    view! {
        <footer class="w-full py-8 text-center text-sm text-gray-500">
            <p>"© Alan Shabrandi. Built with Rust & Leptos."</p>
            <p class="mt-1">"Last updated " {built}</p>
        </footer>
    }
}
