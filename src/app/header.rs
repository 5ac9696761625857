use leptos::prelude::*;

struct NavLink {
    title: &'static str,
    anchor: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { title: "Home", anchor: "home" },
    NavLink { title: "Features", anchor: "features" },
    NavLink { title: "Projects", anchor: "projects" },
    NavLink { title: "Experiences", anchor: "experiences" },
    NavLink { title: "Skills", anchor: "skills" },
    NavLink { title: "Education", anchor: "education" },
    NavLink { title: "Contact", anchor: "contact" },
];

const LINK_CLASS: &str = "flex items-center gap-2 text-base font-bold px-3 py-2 rounded-lg bg-clip-text text-transparent bg-gradient-to-r from-pink-400 via-purple-400 to-blue-400 transition-all duration-300 hover:scale-105 hover:brightness-125";

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="w-full h-20 sticky top-0 z-50 bg-[rgba(255,255,255,0.05)] backdrop-blur-xl border-b border-white/20 flex justify-between items-center font-titleFont px-6 shadow-lg">
            <nav class="hidden mdl:flex justify-center items-center w-full">
                <ul class="flex gap-8 lg:gap-12">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li class=LINK_CLASS>
                                    <a href=format!("/#{}", link.anchor)>{link.title}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <button
                class="mdl:hidden w-12 h-12 flex items-center justify-center rounded-full bg-gradient-to-tr from-pink-500 to-purple-500 text-white text-2xl shadow-lg hover:scale-110 transition-transform duration-300"
                aria-label="Toggle menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <Show when=move || menu_open.get()>
                // clicking the dimmed page closes the menu
                <div
                    class="fixed inset-0 bg-black/50 backdrop-blur-sm z-40"
                    on:click=move |_| set_menu_open.set(false)
                />
                <aside class="fixed top-0 left-0 w-4/5 h-screen bg-[rgba(0,0,0,0.6)] backdrop-blur-xl p-6 overflow-y-auto z-50 rounded-r-3xl shadow-2xl shadow-pink-500/40 border border-white/20">
                    <div class="flex flex-col gap-8 py-4 relative">
                        <p class="text-2xl font-bold text-center text-designColor">"Alan Shabrandi"</p>
                        <ul class="flex flex-col gap-4 mt-4">
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li class=LINK_CLASS>
                                            <a
                                                href=format!("/#{}", link.anchor)
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {link.title}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <button
                            class="absolute top-0 right-0 text-white/70 hover:text-pink-400 text-3xl"
                            aria-label="Close menu"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            "×"
                        </button>
                    </div>
                </aside>
            </Show>
        </header>
    }
}
