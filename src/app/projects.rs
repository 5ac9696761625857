use std::sync::{Arc, Mutex};

use leptos::{either::*, ev, prelude::*};
use leptos_meta::Title;
use leptos_router::{
    hooks::{use_navigate, use_params_map},
    NavigateOptions,
};
use leptos_use::{use_document, use_event_listener, use_window};

use super::document::BrowserDocument;
use crate::overlay::{CloseReason, OverlayController};
use crate::projects::{
    present_route_param, Catalog, Lightbox, MediaItem, Presentation, ProjectId, ProjectRecord,
};

#[derive(Clone)]
struct SharedOverlay(Arc<Mutex<OverlayController<BrowserDocument>>>);

impl SharedOverlay {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(OverlayController::new(BrowserDocument))))
    }

    fn open(&self, id: ProjectId) -> Option<ProjectId> {
        let mut overlay = self.0.lock().expect("should be able to lock overlay");
        overlay.open(id);
        overlay.selected()
    }

    fn close(&self, reason: CloseReason) -> bool {
        self.0
            .lock()
            .map(|mut overlay| overlay.close(reason))
            .unwrap_or(false)
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let catalog = Catalog::bundled();
    let shared = SharedOverlay::new();
    let overlay = StoredValue::new(shared.clone());
    let (selected, set_selected) = signal(None::<ProjectId>);

    // scroll must never stay locked once the section is gone
    on_cleanup(move || {
        shared.close(CloseReason::Teardown);
    });

    let open = move |id: ProjectId| {
        let now = overlay.with_value(|o| o.open(id));
        set_selected.set(now);
    };
    let close = move |reason: CloseReason| {
        if overlay.try_with_value(|o| o.close(reason)).unwrap_or(false) {
            set_selected.try_set(None);
        }
    };

    _ = use_event_listener(use_window(), ev::popstate, move |_| {
        close(CloseReason::HistoryBack)
    });
    _ = use_event_listener(use_document(), ev::keydown, move |e| {
        if e.key() == "Escape" {
            close(CloseReason::Explicit);
        }
    });

    let open_page = move |record: &'static ProjectRecord| {
        close(CloseReason::Replaced);
        let navigate = use_navigate();
        navigate(
            &record.href(),
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    view! {
        <section id="projects" class="w-full py-20 border-b border-gray-800">
            <SectionTitle title="VISIT MY PORTFOLIO" des="My Projects" />
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-8 xl:gap-12">
                {catalog
                    .iter()
                    .map(|record| {
                        let id = record.id;
                        view! {
                            <button
                                class="text-left cursor-pointer transition-transform duration-300 hover:scale-105"
                                on:click=move |_| open(id)
                            >
                                <ProjectCard record />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                selected
                    .get()
                    .and_then(|id| catalog.find_by_id(id))
                    .map(|record| {
                        view! {
                            <div
                                class="fixed inset-0 z-50 flex items-center justify-center bg-black/20 backdrop-blur-md p-4 animate-fade-in"
                                on:click=move |_| close(CloseReason::Backdrop)
                            >
                                <div
                                    class="relative w-full max-w-6xl bg-white/5 backdrop-blur-xl border border-white/10 rounded-3xl shadow-2xl overflow-hidden max-h-[90vh] p-6"
                                    role="dialog"
                                    aria-modal="true"
                                    on:click=|e| e.stop_propagation()
                                >
                                    <button
                                        class="absolute top-4 right-4 text-gray-300 hover:text-white text-3xl z-50 cursor-pointer"
                                        aria-label="Close"
                                        on:click=move |_| close(CloseReason::Explicit)
                                    >
                                        "×"
                                    </button>
                                    <div class="overflow-y-auto max-h-[80vh] scroll-smooth">
                                        <ProjectSummary record />
                                        <a
                                            href=record.href()
                                            class="inline-block mt-6 text-designColor hover:underline"
                                            on:click=move |e| {
                                                e.prevent_default();
                                                open_page(record);
                                            }
                                        >
                                            "View full project page →"
                                        </a>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[component]
pub fn SectionTitle(title: &'static str, des: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 font-titleFont mb-14">
            <h3 class="text-sm uppercase font-light text-designColor tracking-wide">{title}</h3>
            <h1 class="text-4xl md:text-5xl text-gray-300 font-bold capitalize">{des}</h1>
        </div>
    }
}

#[component]
fn ProjectCard(record: &'static ProjectRecord) -> impl IntoView {
    view! {
        <div class="w-full p-4 xl:px-12 h-auto xl:py-10 rounded-lg shadow-shadowOne flex flex-col bg-gradient-to-r from-bodyColor to-[#202327] group">
            {record
                .cover()
                .map(|src| {
                    view! {
                        <div class="w-full h-[80%] overflow-hidden rounded-lg">
                            <img
                                class="w-full h-60 object-cover group-hover:scale-110 duration-300"
                                src=src
                                alt=record.title.clone()
                            />
                        </div>
                    }
                })}
            <div class="w-full mt-5 flex flex-col gap-6">
                <h3 class="text-base uppercase text-designColor font-normal">{record.title.clone()}</h3>
                <p class="text-sm tracking-wide mt-3 hover:text-gray-100 duration-300">
                    {record.short_description.clone()}
                </p>
            </div>
        </div>
    }
}

#[component]
fn BulletList(heading: &'static str, items: &'static [String]) -> impl IntoView {
    (!items.is_empty())
        .then(|| {
            view! {
                <div>
                    <h2 class="text-xl md:text-2xl font-semibold mb-2 text-gradient">{heading}</h2>
                    <ul class="list-disc list-inside space-y-1 text-gray-300">
                        {items.iter().map(|item| view! { <li>{item.clone()}</li> }).collect_view()}
                    </ul>
                </div>
            }
        })
}

/// Everything about a project except its media.
#[component]
fn ProjectSummary(record: &'static ProjectRecord) -> impl IntoView {
    let chips = [record.role.as_deref(), record.company.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    let links = &record.links;
    view! {
        <div class="space-y-6 text-gray-200">
            <h1 class="text-3xl md:text-4xl font-bold text-gradient">{record.title.clone()}</h1>
            <p class="text-gray-400">{record.short_description.clone()}</p>
            <p class="text-gray-300">{record.description.clone()}</p>
            {(!chips.is_empty())
                .then(|| {
                    view! {
                        <div class="flex flex-wrap gap-2 md:gap-4 text-sm md:text-base text-gray-300">
                            {chips
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <span class="px-3 py-1 rounded-full bg-gray-800 font-medium">
                                            {c}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            <BulletList heading="Key Features" items=&record.features />
            <BulletList heading="Technical Highlights" items=&record.technical_highlights />
            {(!record.tech_stack.is_empty())
                .then(|| {
                    view! {
                        <div>
                            <h2 class="text-xl md:text-2xl font-semibold mb-2 text-gradient">
                                "Tech Stack"
                            </h2>
                            <div class="flex flex-wrap gap-2">
                                {record
                                    .tech_stack
                                    .iter()
                                    .map(|tech| {
                                        view! {
                                            <span class="px-3 py-1 rounded-full bg-gradient-to-r from-purple-500 to-pink-500 text-white text-sm font-medium">
                                                {tech.clone()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}
            {(!links.demos.is_empty())
                .then(|| {
                    view! {
                        <div>
                            <h2 class="text-xl md:text-2xl font-semibold mb-2 text-gradient">
                                "Demo Links"
                            </h2>
                            <ul class="space-y-2">
                                {links
                                    .demos
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <li>
                                                <a
                                                    href=link.clone()
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="text-blue-400 hover:text-blue-300 hover:underline break-all"
                                                >
                                                    "↗ "
                                                    {link.clone()}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })}
            <div class="flex gap-4 mt-4">
                {links
                    .github()
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 bg-gradient-to-r from-purple-500 to-pink-500 text-white rounded-xl hover:scale-105 transition-transform duration-300"
                            >
                                "GitHub"
                            </a>
                        }
                    })}
                {links
                    .live()
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 border border-designColor text-designColor rounded-xl hover:scale-105 transition-transform duration-300"
                            >
                                "Live Demo"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let project_id = move || params.get().get("id").unwrap_or_default();

    move || match present_route_param(Catalog::bundled(), &project_id()) {
        Presentation::Found(detail) => Either::Left(view! {
            <Title text=detail.record.title.clone() />
            <div class="py-8 max-w-7xl mx-auto">
                <MediaGallery media=detail.media />
                <div class="mt-10">
                    <ProjectSummary record=detail.record />
                </div>
            </div>
        }),
        Presentation::NotFound => {
            #[cfg(feature = "ssr")]
            if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
                res.set_status(http::StatusCode::NOT_FOUND);
            }
            Either::Right(view! {
                <Title text="Project not found" />
                <p class="p-8">"Project not found!"</p>
            })
        }
    }
}

#[component]
fn MediaGallery(media: Vec<MediaItem>) -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::new(media.len()));
    let media = StoredValue::new(media);

    _ = use_event_listener(use_document(), ev::keydown, move |e| {
        if !lightbox.with_untracked(Lightbox::is_open) {
            return;
        }
        match e.key().as_str() {
            "Escape" => lightbox.update(Lightbox::close),
            "ArrowRight" => lightbox.update(Lightbox::next),
            "ArrowLeft" => lightbox.update(Lightbox::prev),
            _ => {}
        }
    });

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {media
                .read_value()
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, item)| {
                    let icon = if item.is_video() { "▶" } else { "⤢" };
                    view! {
                        <button
                            class="relative rounded-md overflow-hidden cursor-pointer group"
                            on:click=move |_| {
                                lightbox
                                    .update(|l| {
                                        l.open(index);
                                    })
                            }
                        >
                            <MediaView item preview=true />
                            <span class="absolute inset-0 flex items-center justify-center text-white text-3xl opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                                {icon}
                            </span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
        {move || {
            lightbox
                .get()
                .current()
                .and_then(|i| media.with_value(|m| m.get(i).cloned()))
                .map(|item| {
                    view! {
                        <div
                            class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm"
                            on:click=move |_| lightbox.update(Lightbox::close)
                        >
                            <div class="relative w-full h-full flex items-center justify-center" on:click=|e| e.stop_propagation()>
                                <button
                                    class="absolute top-4 right-4 text-white text-3xl z-50 cursor-pointer"
                                    aria-label="Close"
                                    on:click=move |_| lightbox.update(Lightbox::close)
                                >
                                    "×"
                                </button>
                                <button
                                    class="absolute left-4 text-white text-4xl cursor-pointer"
                                    aria-label="Previous"
                                    on:click=move |_| lightbox.update(Lightbox::prev)
                                >
                                    "‹"
                                </button>
                                <MediaView item preview=false />
                                <button
                                    class="absolute right-4 text-white text-4xl cursor-pointer"
                                    aria-label="Next"
                                    on:click=move |_| lightbox.update(Lightbox::next)
                                >
                                    "›"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn MediaView(item: MediaItem, preview: bool) -> impl IntoView {
    let class = if preview {
        "w-full rounded-md transition-transform duration-300 group-hover:scale-105 group-hover:blur-sm"
    } else {
        "max-h-full max-w-full object-contain"
    };
    match item {
        MediaItem::Image { source } => Either::Left(view! { <img src=source alt="" class=class /> }),
        MediaItem::Video { source, poster } => Either::Right(view! {
            <video class=class controls=!preview poster=poster>
                <source src=source type="video/mp4" />
            </video>
        }),
    }
}
