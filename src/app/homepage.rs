use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::use_interval_fn;

use super::contact::ContactSection;
use super::projects::{ProjectsSection, SectionTitle};

const ROLES: [&str; 3] = ["Professional Coder.", "Full Stack Developer.", "UI Designer."];
const ROLE_INTERVAL_MS: u64 = 2500;

static FEATURES: [(&str, &str); 6] = [
    (
        "App Development",
        "Build scalable mobile and web applications using modern technologies.",
    ),
    (
        "Frontend Development",
        "Develop responsive, user-friendly, and high-performance web interfaces using modern frontend technologies.",
    ),
    (
        "Backend Development",
        "Develop secure and efficient server-side logic using modern backend frameworks.",
    ),
    (
        "SEO Optimisation",
        "Optimise websites to improve search engine ranking and increase organic traffic.",
    ),
    (
        "Database Management",
        "Design and maintain robust database systems for scalable applications.",
    ),
    (
        "Business Strategy",
        "Plan and execute projects with a focus on business goals and measurable outcomes.",
    ),
];

struct Job {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    date: &'static str,
    des: &'static str,
}

static JOBS: [Job; 2] = [
    Job {
        title: "Senior Frontend Developer",
        company: "Hamrah Aval + Mobin Tadbir Sharif",
        location: "Tehran / Iran",
        date: "02/2022 - Present",
        des: "Since 2022, I have been working as a Senior Frontend Developer at Hamrah Aval and Mobin Tadbir Sharif, collaborating on several joint projects. During this time, I played a key role in large-scale, high-traffic platforms, including a video streaming and sharing service similar to YouTube and Aparat, and a cloud storage solution similar to Google Drive. I have also contributed significantly to the development of various admin panels, gaining valuable experience and advanced skills.",
    },
    Job {
        title: "FullStack JavaScript Developer (React + NestJS) - Remote",
        company: "Bazaryonline Company",
        location: "Kurdistan Region of Iraq",
        date: "03/2019 - 08/2024",
        des: "As a Fullstack Developer at BazaryOnline, I contributed to building Iraq's largest cross-border e-commerce platform, connecting local customers with global suppliers. I designed and implemented a modular backend with NestJS, MongoDB, and Redis, securing the system with JWT authentication, RBAC, and rate-limiting. On the frontend, I developed dynamic React components with TypeScript and integrated real-time WebSocket notifications. This role gave me deep experience in scalable architecture, performance optimization, and delivering reliable, secure, and user-friendly applications.",
    },
];

static SKILLS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Frontend",
        &[
            ("React", "devicon-react-original"),
            ("Next.js", "devicon-nextjs-plain"),
            ("HTML5", "devicon-html5-plain"),
            ("CSS3 / Tailwind", "devicon-css3-plain"),
            ("JavaScript", "devicon-javascript-plain"),
        ],
    ),
    ("Backend", &[("Node.js", "devicon-nodejs-plain")]),
    (
        "Tools & Others",
        &[
            ("TypeScript", "devicon-typescript-plain"),
            ("Tailwind CSS", "devicon-tailwindcss-original"),
        ],
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <Features />
        <ProjectsSection />
        <Experiences />
        <Skills />
        <Education />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let (role, set_role) = signal(0usize);
    // no-op on the server
    _ = use_interval_fn(
        move || set_role.update(|i| *i = (*i + 1) % ROLES.len()),
        ROLE_INTERVAL_MS,
    );

    view! {
        <section
            id="home"
            class="w-full pt-10 pb-20 flex flex-col lgl:flex-row items-center justify-between gap-10 border-b-[1px] border-b-black"
        >
            <div class="w-full lgl:w-1/2 flex flex-col gap-5">
                <h4 class="text-base sm:text-lg font-medium text-gray-300">"WELCOME TO MY WORLD"</h4>
                <h1 class="text-4xl sm:text-5xl lgl:text-6xl font-bold text-white">
                    "Hi, I'm " <span class="text-designColor capitalize">"Alan Shabrandi"</span>
                </h1>
                <h2 class="text-2xl sm:text-3xl lgl:text-4xl font-bold text-white flex items-center">
                    "a" <span class="ml-2 animate-fade-in">{move || ROLES[role.get()]}</span>
                </h2>
                <p class="text-sm sm:text-base font-bodyFont leading-6 tracking-wide">
                    "I build fast, accessible interfaces and the services behind them, from streaming players to cloud storage and cross-border commerce."
                </p>
            </div>
            <div class="w-full lgl:w-1/2 flex justify-center items-center">
                <img
                    class="w-[250px] sm:w-[300px] lgl:w-[450px] h-[350px] sm:h-[400px] object-cover rounded-full"
                    src="/images/banner.svg"
                    alt="Alan Shabrandi"
                />
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section id="features" class="w-full py-20 border-b-[1px] border-b-black">
            <SectionTitle title="Features" des="What I Do" />
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6 xl:gap-12">
                {FEATURES
                    .iter()
                    .map(|(title, des)| {
                        view! {
                            <div class="w-full px-12 h-80 py-10 rounded-lg shadow-shadowOne flex items-center bg-gradient-to-r from-bodyColor to-[#202327] group hover:bg-gradient-to-b hover:from-black hover:to-[#1e2024] transition-colors duration-100">
                                <div class="flex flex-col gap-4">
                                    <h2 class="text-2xl md:text-3xl font-bold text-white">
                                        {*title}
                                    </h2>
                                    <p class="text-gray-300">{*des}</p>
                                    <span class="text-3xl text-designColor group-hover:translate-x-2 transition-transform duration-300">
                                        "→"
                                    </span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Experiences() -> impl IntoView {
    view! {
        <section id="experiences" class="w-full py-20 border-b-[1px] border-b-black">
            <SectionTitle title="5+ YEARS OF EXPERIENCE" des="My Experiences" />
            <div class="flex flex-col gap-4 text-center md:text-left">
                <p class="text-sm text-gradient tracking-[4px]">"2020 - 2025"</p>
                <h2 class="text-4xl font-bold text-gradient">"Job Experience"</h2>
            </div>
            <div class="mt-14 w-full h-max border-l-[6px] border-l-black border-opacity-30 flex flex-col gap-10">
                {JOBS
                    .iter()
                    .map(|job| {
                        view! {
                            <div class="w-full h-1/3 group flex">
                                <div class="w-10 h-[6px] bg-opacity-20 mt-16 relative">
                                    <span class="absolute w-5 h-5 rounded-full -top-2 -left-3 flex justify-center items-center bg-black bg-opacity-60">
                                        <span class="w-3 h-3 rounded-full bg-bodyColor inline-flex group-hover:bg-designColor duration-300"></span>
                                    </span>
                                </div>
                                <div class="w-full bg-black bg-opacity-20 hover:bg-opacity-30 duration-300 rounded-lg p-4 lgl:px-10 flex flex-col justify-center gap-6 lgl:gap-10 shadow-shadowOne">
                                    <div class="flex flex-col lgl:flex-row justify-between gap-4 lgl:gap-0 lgl:items-center">
                                        <div>
                                            <h3 class="text-xl md:text-2xl font-semibold group-hover:text-white duration-300">
                                                {job.title}
                                            </h3>
                                            <p class="text-sm mt-2 text-gray-400 group-hover:text-white duration-300">
                                                {job.company} " ⋅ " {job.location}
                                            </p>
                                        </div>
                                        <p class="px-4 py-2 text-designColor bg-black bg-opacity-25 rounded-lg flex justify-center items-center shadow-shadowOne text-sm font-medium">
                                            {job.date}
                                        </p>
                                    </div>
                                    <p class="text-sm md:text-base font-medium text-gray-400 group-hover:text-gray-300 duration-300">
                                        {job.des}
                                    </p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="w-full py-20 border-b-[1px] border-b-black">
            <SectionTitle title="My Skills" des="Technologies I Use" />
            {SKILLS
                .iter()
                .map(|(category, skills)| {
                    view! {
                        <div class="mb-12">
                            <h2 class="text-2xl md:text-3xl font-bold text-designColor mb-6">
                                {*category}
                            </h2>
                            <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                                {skills
                                    .iter()
                                    .map(|(name, icon)| {
                                        view! {
                                            <div class="flex flex-col items-center gap-4 bg-black bg-opacity-20 rounded-lg p-6 shadow-shadowOne hover:scale-110 transition-transform duration-300">
                                                <i class=format!("text-5xl text-designColor {icon}")></i>
                                                <h3 class="text-xl font-semibold text-white">{*name}</h3>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn Education() -> impl IntoView {
    view! {
        <section id="education" class="w-full py-20 border-b-[1px] border-b-black">
            <SectionTitle title="My Education" des="Academic Background" />
            <div class="w-full mt-10 bg-white/5 backdrop-blur-md border border-white/10 rounded-2xl p-6 md:p-10 shadow-lg">
                <h3 class="text-2xl md:text-3xl font-bold text-gradient">
                    "B.Sc. in Geographic Information Systems (GIS)"
                </h3>
                <p class="text-gray-400 mt-2 text-sm md:text-base">
                    "K. N. Toosi University of Technology - Tehran, Iran"
                </p>
                <p class="text-designColor mt-2 px-3 py-1 bg-black bg-opacity-20 inline-block rounded-lg text-sm font-medium">
                    "2014 - 2018"
                </p>
                <p class="text-gray-300 mt-4 text-sm md:text-base leading-relaxed">
                    "Specialized in spatial data analysis, mapping technologies, and geospatial databases. Gained strong experience in designing and managing GIS systems while integrating them with modern IT solutions, and explored how location-based data can drive web platforms and interactive applications."
                </p>
            </div>
        </section>
    }
}
