use std::time::Duration;

use leptos::either::Either;
use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;

use crate::contact::{
    validate, DeliverMessage, Field, FormFields, LogDelivery, SubmissionState, ValidationErrors,
};

use super::reveal::Reveal;

/// How long the success card stays up before the form clears itself.
const RESET_DELAY: Duration = Duration::from_secs(3);

struct ContactMethod {
    label: &'static str,
    value: &'static str,
    href: &'static str,
    icon: &'static str,
    color: &'static str,
}

static CONTACT_METHODS: [ContactMethod; 4] = [
    ContactMethod {
        label: "Email",
        value: "sppirana007@gmail.com",
        href: "mailto:sppirana007@gmail.com",
        icon: "extra-email",
        color: "text-red-500",
    },
    ContactMethod {
        label: "Phone",
        value: "+94 706310123",
        href: "tel:+94706310123",
        icon: "extra-phone",
        color: "text-green-500",
    },
    ContactMethod {
        label: "LinkedIn",
        value: "piranavan-sivanesan",
        href: "https://linkedin.com/in/piranavan-sivanesan",
        icon: "devicon-linkedin-plain",
        color: "text-blue-600",
    },
    ContactMethod {
        label: "GitHub",
        value: "sppirana",
        href: "https://github.com/sppirana",
        icon: "devicon-github-plain",
        color: "text-gray-900",
    },
];

/// Contact section: info cards plus the message form.
///
/// The view is a pure function of three signals (fields, errors, state);
/// the validation and submission semantics are those of
/// [`crate::contact::ContactFormController`], driven here through signals so
/// Leptos can re-render on each transition.
#[component]
pub fn Contact() -> impl IntoView {
    let (fields, set_fields) = signal(FormFields::default());
    let (errors, set_errors) = signal(ValidationErrors::default());
    let (state, set_state) = signal(SubmissionState::Editing);
    let reset_handle = StoredValue::new(None::<TimeoutHandle>);

    let clear_pending_reset = move || {
        reset_handle.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
    };

    // A torn-down form must not reset state that no longer exists.
    on_cleanup(clear_pending_reset);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let new_errors = fields.with_untracked(validate);
        if !new_errors.is_empty() {
            set_errors(new_errors);
            return;
        }
        set_errors(ValidationErrors::default());

        // Fire-and-forget: a backend failure is logged, not shown.
        if let Err(err) = LogDelivery.deliver(fields.get_untracked()) {
            log::warn!("contact delivery failed (not surfaced to the form): {err}");
        }
        set_state(SubmissionState::Submitted);

        clear_pending_reset();
        let handle = set_timeout_with_handle(
            move || {
                set_fields(FormFields::default());
                set_state(SubmissionState::Editing);
                reset_handle.set_value(None);
            },
            RESET_DELAY,
        );
        reset_handle.set_value(handle.ok());
    };

    view! {
        <section id="contact" class="py-20 bg-gradient-to-br from-gray-50 to-primary-50">
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold font-heading mb-4">
                            "Get In " <span class="text-gradient">"Touch"</span>
                        </h2>
                        <div class="w-24 h-1 bg-gradient-to-r from-primary-600 to-secondary-600 mx-auto rounded-full mb-4"></div>
                        <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                            "Have a question or want to work together? Feel free to reach out!"
                        </p>
                    </div>
                    <div class="max-w-6xl mx-auto grid lg:grid-cols-2 gap-12">
                        <ContactInfo />
                        <div class="glass-effect rounded-2xl p-8">
                            <h3 class="text-2xl font-bold font-heading text-gray-900 mb-6">
                                "Send a Message"
                            </h3>
                            {move || match state() {
                                SubmissionState::Submitted => Either::Left(view! { <SuccessCard /> }),
                                SubmissionState::Editing => {
                                    Either::Right(
                                        view! {
                                            <form on:submit=on_submit novalidate=true class="space-y-4">
                                                <FieldInput
                                                    field=Field::Name
                                                    label="Name *"
                                                    placeholder="Your name"
                                                    fields=fields
                                                    set_fields=set_fields
                                                    errors=errors
                                                    set_errors=set_errors
                                                />
                                                <FieldInput
                                                    field=Field::Email
                                                    label="Email *"
                                                    placeholder="your.email@example.com"
                                                    fields=fields
                                                    set_fields=set_fields
                                                    errors=errors
                                                    set_errors=set_errors
                                                />
                                                <FieldInput
                                                    field=Field::Subject
                                                    label="Subject *"
                                                    placeholder="What's this about?"
                                                    fields=fields
                                                    set_fields=set_fields
                                                    errors=errors
                                                    set_errors=set_errors
                                                />
                                                <FieldInput
                                                    field=Field::Message
                                                    label="Message *"
                                                    placeholder="Your message..."
                                                    multiline=true
                                                    fields=fields
                                                    set_fields=set_fields
                                                    errors=errors
                                                    set_errors=set_errors
                                                />
                                                <button
                                                    type="submit"
                                                    class="w-full px-6 py-4 bg-gradient-to-r from-primary-600 to-primary-700 text-white rounded-lg font-semibold shadow-lg hover:shadow-xl transition-all duration-300"
                                                >
                                                    "Send Message ✈"
                                                </button>
                                            </form>
                                        },
                                    )
                                }
                            }}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h3 class="text-2xl font-bold font-heading text-gray-900 mb-6">
                    "Contact Information"
                </h3>
                <p class="text-gray-600 mb-8">
                    "Feel free to reach out through any of these channels. I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision."
                </p>
            </div>
            <div class="space-y-4">
                {CONTACT_METHODS
                    .iter()
                    .map(|method| {
                        view! {
                            <a
                                href=method.href
                                target=method.href.starts_with("http").then_some("_blank")
                                rel=method.href.starts_with("http").then_some("noopener noreferrer")
                                class="glass-effect rounded-xl p-4 flex items-center space-x-4 group hover:shadow-lg transition-all"
                            >
                                <div class=format!(
                                    "flex-shrink-0 w-12 h-12 {} bg-gray-100 rounded-lg flex items-center justify-center group-hover:scale-110 transition-transform",
                                    method.color,
                                )>
                                    <i class=format!("{} text-xl", method.icon)></i>
                                </div>
                                <div>
                                    <p class="text-sm text-gray-500 font-medium">{method.label}</p>
                                    <p class="text-gray-900 font-semibold">{method.value}</p>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="bg-gradient-to-r from-primary-500 to-secondary-500 rounded-xl p-6 text-white mt-8">
                <h4 class="font-bold text-lg mb-2">"📍 Location"</h4>
                <p>"Colombo 6, Sri Lanka"</p>
                <p class="text-sm mt-2 opacity-90">"Available for remote opportunities worldwide"</p>
            </div>
        </div>
    }
}

#[component]
fn SuccessCard() -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 rounded-lg p-6 text-center">
            <div class="text-green-600 text-5xl mb-4">"✓"</div>
            <h4 class="text-green-800 font-bold text-xl mb-2">"Message Sent!"</h4>
            <p class="text-green-600">"Thank you for reaching out. I'll get back to you soon!"</p>
        </div>
    }
}

/// One labelled input (or textarea) bound to a form field, with its
/// validation message underneath. Editing the field dismisses its error
/// immediately without re-validating the rest of the form.
#[component]
fn FieldInput(
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] multiline: bool,
    fields: ReadSignal<FormFields>,
    set_fields: WriteSignal<FormFields>,
    errors: ReadSignal<ValidationErrors>,
    set_errors: WriteSignal<ValidationErrors>,
) -> impl IntoView {
    let value = move || fields.with(|f| f.get(field).to_string());
    let error = move || errors.with(|e| e.get(field));
    let input_class = move || {
        let border = if error().is_some() {
            "border-red-500"
        } else {
            "border-gray-300"
        };
        format!(
            "w-full px-4 py-3 rounded-lg border {border} focus:ring-2 focus:ring-primary-500 focus:border-transparent transition-all"
        )
    };
    let on_edit = move |new_value: String| {
        set_fields.update(|f| f.set(field, new_value));
        set_errors.update(|e| e.dismiss(field));
    };

    view! {
        <div>
            <label for=field.as_str() class="block text-sm font-medium text-gray-700 mb-2">
                {label}
            </label>
            {if multiline {
                Either::Left(
                    view! {
                        <textarea
                            id=field.as_str()
                            name=field.as_str()
                            rows="5"
                            prop:value=value
                            on:input=move |ev| on_edit(event_target_value(&ev))
                            class=move || format!("{} resize-none", input_class())
                            placeholder=placeholder
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            type=input_type(field)
                            id=field.as_str()
                            name=field.as_str()
                            prop:value=value
                            on:input=move |ev| on_edit(event_target_value(&ev))
                            class=input_class
                            placeholder=placeholder
                        />
                    },
                )
            }}
            {move || {
                error().map(|message| view! { <p class="text-red-500 text-sm mt-1">{message}</p> })
            }}
        </div>
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        _ => "text",
    }
}
