use leptos::{either::*, ev::SubmitEvent, prelude::*, task::spawn_local};

use super::projects::SectionTitle;
use crate::contact::{
    ContactForm, Field, GatewayError, SubmissionGateway, SubmissionStatus, SubmitAttempt,
    TemplateParams, SUCCESS_DISPLAY,
};

#[server]
pub async fn send_contact_message(params: TemplateParams) -> Result<(), ServerFnError> {
    use crate::contact::{FormErrors, FormState};
    use crate::relay::ContactRelay;

    // the browser already checked, but the relay only takes valid messages
    let state = FormState::from(&params);
    if !state.is_complete() || !FormErrors::from_state(&state).is_empty() {
        tracing::warn!("rejected contact message with invalid fields");
        return Err(ServerFnError::new("Please fix the highlighted fields below."));
    }

    let relay = use_context::<ContactRelay>()
        .ok_or_else(|| ServerFnError::new("Contact relay unavailable"))?;
    relay
        .send(params)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Browser side of the gateway: hands the message to the server, which holds
/// the relay credentials.
struct ServerRelay;

impl SubmissionGateway for ServerRelay {
    async fn send(&self, params: TemplateParams) -> Result<(), GatewayError> {
        send_contact_message(params)
            .await
            .map_err(|e| GatewayError::Server(e.to_string()))
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let dismiss_timer = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(Some(handle)) = dismiss_timer.try_get_value() {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(SubmitAttempt::Dispatch(params)) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        spawn_local(async move {
            let res = ServerRelay.send(params).await;
            // the section may be gone by now
            let Some(ticket) = form.try_update(|f| f.finish_submit(res)).flatten() else {
                return;
            };
            let dismiss = move || {
                form.try_update(|f| f.dismiss_success(ticket));
            };
            match set_timeout_with_handle(dismiss, SUCCESS_DISPLAY) {
                Ok(handle) => {
                    dismiss_timer.try_update_value(|t| {
                        if let Some(old) = t.replace(handle) {
                            old.clear();
                        }
                    });
                }
                Err(e) => log::warn!("couldn't schedule success dismissal: {e:?}"),
            }
        });
    };

    let locked = move || form.with(ContactForm::is_locked);

    view! {
        <section id="contact" class="w-full py-20 border-b-[1px] border-b-black">
            <div class="flex justify-center items-center text-center">
                <SectionTitle title="CONTACT" des="Contact With Me" />
            </div>
            <div class="w-full flex flex-col lgl:flex-row justify-between gap-8">
                <ContactLeft />
                <div class="w-full lgl:w-[60%] py-10 bg-gradient-to-r from-[#1e2024] to-[#23272b] flex flex-col gap-8 p-4 lgl:p-8 rounded-lg shadow-shadowOne">
                    {move || {
                        form.with(|f| match f.status() {
                            SubmissionStatus::Error(failure) => {
                                Some(
                                    Either::Left(
                                        view! {
                                            <p class="py-3 text-center text-base tracking-wide text-orange-500 animate-fade-in">
                                                {failure.banner().to_string()}
                                            </p>
                                        },
                                    ),
                                )
                            }
                            SubmissionStatus::Success => {
                                Some(
                                    Either::Right(
                                        view! {
                                            <p class="py-3 text-center text-base tracking-wide text-green-500 animate-fade-in">
                                                "Your message has been sent successfully!"
                                            </p>
                                        },
                                    ),
                                )
                            }
                            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
                        })
                    }}
                    <form class="w-full flex flex-col gap-4 lgl:gap-6 py-2 lgl:py-5" on:submit=on_submit>
                        <div class="w-full flex flex-col lgl:flex-row gap-10">
                            <FormField form field=Field::Name />
                            <FormField form field=Field::Phone />
                        </div>
                        <FormField form field=Field::Email />
                        <FormField form field=Field::Subject />
                        <FormField form field=Field::Message />
                        <button
                            type="submit"
                            class="w-full h-12 bg-designColor rounded-lg text-black text-base uppercase tracking-wider hover:brightness-110 transition-all duration-300 disabled:opacity-60"
                            disabled=locked
                        >
                            {move || if locked() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let error = move || form.with(|f| f.error(field));
    let locked = move || form.with(ContactForm::is_locked);
    let class = move || {
        let base = if field == Field::Message { "contactTextArea" } else { "contactInput" };
        if error().is_some() {
            format!("{base} outline-designColor border-red-500")
        } else {
            base.to_string()
        }
    };
    let on_input = move |ev: leptos::ev::Event| {
        let v = event_target_value(&ev);
        form.update(|f| {
            f.set_field(field, v);
        });
    };
    let input_type = match field {
        Field::Email => "email",
        Field::Phone => "tel",
        _ => "text",
    };

    view! {
        <div class="w-full flex flex-col gap-1 relative">
            <label for=field.as_str() class="text-sm text-gray-400 uppercase tracking-wide">
                {field.label()}
            </label>
            {if field == Field::Message {
                Either::Left(
                    view! {
                        <textarea
                            id=field.as_str()
                            name=field.as_str()
                            rows=6
                            class=class
                            prop:value=value
                            on:input=on_input
                            disabled=locked
                        />
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            id=field.as_str()
                            name=field.as_str()
                            type=input_type
                            class=class
                            prop:value=value
                            on:input=on_input
                            disabled=locked
                        />
                    },
                )
            }}
            {move || {
                error()
                    .map(|msg| {
                        view! { <span class="text-xs text-red-500 absolute top-full mt-1">{msg}</span> }
                    })
            }}
        </div>
    }
}

#[component]
fn ContactLeft() -> impl IntoView {
    view! {
        <div class="w-full lgl:w-[35%] h-full bg-gradient-to-r from-[#1e2024] to-[#23272b] p-4 lgl:p-8 rounded-lg shadow-shadowOne flex flex-col gap-8 justify-center">
            <img
                class="w-full h-64 object-cover rounded-lg mb-2"
                src="/images/contact.svg"
                alt="Alan Shabrandi"
            />
            <div class="flex flex-col gap-4">
                <h3 class="text-3xl font-bold text-white">"Alan Shabrandi"</h3>
                <p class="text-lg font-normal text-gray-400">"MERN Stack Developer"</p>
                <p class="text-base text-gray-400 tracking-wide">
                    "Have a project in mind or a role to fill? Send a message and I'll get back to you."
                </p>
                <p class="text-base text-gray-400 flex items-center gap-2">
                    "Phone: " <span class="text-lightText">"+98 9911582801"</span>
                </p>
                <p class="text-base text-gray-400 flex items-center gap-2">
                    "Email: " <span class="text-lightText">"alan.shabrandi@gmail.com"</span>
                </p>
            </div>
            <div class="flex flex-col gap-4">
                <h2 class="text-base uppercase font-titleFont mb-4">"Find me in"</h2>
                <div class="flex gap-4">
                    <a
                        href="https://t.me/AlanShabrandi"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bannerIcon hover:text-designColor transition-colors duration-300"
                        aria-label="Telegram"
                    >
                        <i class="devicon-telegram-plain"></i>
                    </a>
                    <a
                        href="https://linkedin.com"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bannerIcon hover:text-designColor transition-colors duration-300"
                        aria-label="LinkedIn"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </div>
            </div>
        </div>
    }
}
