//! Contact form.
//!
//! Field values, errors and the submit state machine live in
//! [`ContactController`]. The inputs write through to it and render from a
//! signal the controller keeps up to date.

use std::rc::Rc;

use kamora::config::ContactConfig;
use kamora::content::{ChannelKind, ContactInfo, service_slug};
use kamora::{ContactController, ContactForm, Field, Section, SimulatedSubmitter, SubmitOutcome, Timers};
use leptos::prelude::*;

use crate::components::icons::{ICON_CHECK, ICON_CLOCK, ICON_ENVELOPE, ICON_MAP_PIN, ICON_PHONE};
use crate::components::{Button, ButtonSize, Card, CardVariant, Icon, Scale};
use crate::timers::LeptosTimers;

type Controller = StoredValue<ContactController, LocalStorage>;

const INPUT: &str = "w-full px-4 py-3 rounded-lg border focus:ring-2 focus:ring-primary focus:border-transparent transition-colors";

fn input_class(form: RwSignal<ContactForm>, field: Field, extra: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        let border = if form.with(|f| f.error(field).is_some()) {
            "border-red-500"
        } else {
            "border-gray-300"
        };
        format!("{INPUT} {border} {extra}")
    }
}

#[component]
fn FieldError(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error(field)).map(|err| {
            view! { <p class="text-red-500 text-sm mt-1">{err.to_string()}</p> }
        })
    }
}

#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    controller: Controller,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.as_str() class="block text-sm font-medium text-gray-700 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=field.as_str()
                name=field.as_str()
                placeholder=placeholder
                class=input_class(form, field, "")
                prop:value=move || form.with(|f| f.fields().get(field).to_owned())
                prop:disabled=move || form.with(ContactForm::is_submitting)
                on:input=move |ev| {
                    controller.with_value(|contact| contact.set_field(field, event_target_value(&ev)));
                }
            />
            <FieldError form=form field=field />
        </div>
    }
}

#[component]
fn ContactFormCard(form: RwSignal<ContactForm>, controller: Controller, services: Vec<String>) -> impl IntoView {
    let submitting = Memo::new(move |_| form.with(ContactForm::is_submitting));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(contact) = controller.try_get_value() else {
            return;
        };
        leptos::task::spawn_local(async move {
            if let SubmitOutcome::Failed(err) = contact.submit().await {
                crate::warn(&format!("contact: {err}"));
            }
        });
    };

    view! {
        <form on:submit=on_submit class="bg-white rounded-2xl shadow-xl p-8" novalidate>
            <h3 class="text-2xl font-bold text-gray-900 mb-6">"Send us a message"</h3>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <TextField form=form controller=controller field=Field::Name label="Full Name *" placeholder="John Doe" />
                <TextField form=form controller=controller field=Field::Email label="Email Address *" input_type="email" placeholder="john@example.com" />
                <TextField form=form controller=controller field=Field::Company label="Company" placeholder="Acme Inc." />
                <TextField form=form controller=controller field=Field::Phone label="Phone Number" input_type="tel" placeholder="+1 (555) 123-4567" />
            </div>

            <div class="mt-6">
                <label for="service" class="block text-sm font-medium text-gray-700 mb-2">
                    "Service Interested In"
                </label>
                <select
                    id="service"
                    name="service"
                    class=format!("{INPUT} border-gray-300")
                    prop:value=move || form.with(|f| f.fields().service.clone())
                    prop:disabled=move || submitting.get()
                    on:change=move |ev| {
                        controller.with_value(|contact| contact.set_field(Field::Service, event_target_value(&ev)));
                    }
                >
                    {services
                        .into_iter()
                        .map(|service| {
                            let slug = service_slug(&service);
                            view! { <option value=slug>{service}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="mt-6">
                <label for="message" class="block text-sm font-medium text-gray-700 mb-2">
                    "Message *"
                </label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    placeholder="Tell us about your project..."
                    class=input_class(form, Field::Message, "resize-none")
                    prop:value=move || form.with(|f| f.fields().message.clone())
                    prop:disabled=move || submitting.get()
                    on:input=move |ev| {
                        controller.with_value(|contact| contact.set_field(Field::Message, event_target_value(&ev)));
                    }
                ></textarea>
                <FieldError form=form field=Field::Message />
            </div>

            {move || {
                form.with(|f| f.last_failure().map(ToString::to_string)).map(|failure| {
                    view! {
                        <p class="mt-6 text-red-500 text-sm">
                            {format!("We couldn't send your message ({failure}). Please try again.")}
                        </p>
                    }
                })
            }}

            <div class="mt-8">
                <Button
                    button_type="submit"
                    size=ButtonSize::Large
                    disabled=submitting
                    loading=submitting
                    class="w-full"
                >
                    "Send Message"
                </Button>
            </div>
        </form>
    }
}

#[component]
fn ContactDetails(info: ContactInfo) -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h3 class="text-2xl font-bold text-gray-900 mb-6">"Contact Information"</h3>
                <p class="text-gray-600 mb-8">
                    "Feel free to reach out to us through any of the following channels. We're always here to help and answer your questions."
                </p>
            </div>

            {info
                .channels
                .into_iter()
                .map(|channel| {
                    let icon = match channel.kind {
                        ChannelKind::Email => ICON_ENVELOPE,
                        ChannelKind::Phone => ICON_PHONE,
                        ChannelKind::Address => ICON_MAP_PIN,
                    };
                    view! {
                        <a
                            href=channel.href
                            class="flex items-start space-x-4 p-6 bg-white rounded-lg shadow-lg hover:shadow-xl transition-shadow duration-200"
                        >
                            <div class="w-12 h-12 bg-primary bg-opacity-10 rounded-lg flex items-center justify-center flex-shrink-0">
                                <Icon path=icon class="text-primary" />
                            </div>
                            <div>
                                <h4 class="font-semibold text-gray-900 mb-1">{channel.label}</h4>
                                <p class="text-gray-600">{channel.value}</p>
                            </div>
                        </a>
                    }
                })
                .collect_view()}

            <Card variant=CardVariant::Gradient shadow=Scale::None hover=false>
                <h4 class="text-xl font-semibold mb-4 flex items-center gap-2">
                    <Icon path=ICON_CLOCK />
                    "Business Hours"
                </h4>
                <div class="space-y-2">
                    {info.hours.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                </div>
            </Card>
        </div>
    }
}

#[component]
fn ThankYou(controller: Controller) -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto text-center">
            <div class="bg-white rounded-2xl shadow-xl p-12">
                <div class="w-20 h-20 bg-green-100 rounded-full flex items-center justify-center mx-auto mb-6">
                    <Icon path=ICON_CHECK size="32" class="text-green-500" />
                </div>
                <h3 class="text-3xl font-bold text-gray-900 mb-4">"Thank You for Your Message!"</h3>
                <p class="text-lg text-gray-600 mb-8">
                    "We've received your message and will get back to you within 24 hours. We're excited to work with you!"
                </p>
                <Button
                    size=ButtonSize::Large
                    on_click=Callback::new(move |_| controller.with_value(ContactController::reset))
                >
                    "Send Another Message"
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn Contact(info: ContactInfo, config: ContactConfig) -> impl IntoView {
    let timers: Rc<dyn Timers> = Rc::new(LeptosTimers);
    let submitter = Rc::new(SimulatedSubmitter::new(timers.clone(), config.submit_delay()));
    let contact = ContactController::new(submitter, timers, config.submit_timeout());

    let form = RwSignal::new(contact.form());
    contact.on_change(move |next| form.set(next.clone()));
    let controller: Controller = StoredValue::new_local(contact);

    let submitted = Memo::new(move |_| form.with(ContactForm::is_submitted));
    let info = StoredValue::new(info);

    view! {
        <section id=Section::Contact.anchor() class="py-20 bg-gray-50">
            <div class="container mx-auto px-6">
                <Show
                    when=move || submitted.get()
                    fallback=move || view! {
                        <div class="text-center mb-16">
                            <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">"Get In Touch"</h2>
                            <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                                "Ready to start your next project? We'd love to hear from you. Send us a message and we'll respond as soon as possible."
                            </p>
                        </div>
                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                            <ContactFormCard
                                form=form
                                controller=controller
                                services=info.with_value(|info| info.services.clone())
                            />
                            <ContactDetails info=info.get_value() />
                        </div>
                    }
                >
                    <ThankYou controller=controller />
                </Show>
            </div>
        </section>
    }
}
