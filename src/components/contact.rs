use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::{Toast, ToastMessage};
use crate::config::CONTACT_SUBMIT_DELAY_MS;
use crate::content::{CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_HREF, LOCATION};
use crate::hooks::in_view::{use_in_view, InViewOptions};

#[derive(Serialize, Clone, Default, PartialEq, Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Error, PartialEq)]
pub enum ContactError {
    #[error("{0:?} is required")]
    Missing(ContactField),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

impl ContactForm {
    pub fn with(mut self, field: ContactField, value: String) -> Self {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
        self
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Subject, &self.subject),
            (ContactField::Message, &self.message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ContactError::Missing(field));
            }
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Something before an `@`, and a dot somewhere after it that isn't the last character.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let (section_ref, in_view) = use_in_view(InViewOptions::once());
    let form = use_state(ContactForm::default);
    let is_submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let toast = use_state(|| None::<ToastMessage>);

    let on_input = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set((*form).clone().with(field, input.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set((*form).clone().with(ContactField::Message, input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let error = error.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            if let Err(err) = form.validate() {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            is_submitting.set(true);

            let payload = (*form).clone();
            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let toast = toast.clone();
            spawn_local(async move {
                debug!(
                    "Simulating contact submission: {}",
                    serde_json::to_string(&payload).unwrap_or_default()
                );
                TimeoutFuture::new(CONTACT_SUBMIT_DELAY_MS).await;
                info!("Contact message from {} accepted", payload.email);
                toast.set(Some(ToastMessage::following(
                    (*toast).as_ref(),
                    "Message sent!",
                    "I'll get back to you as soon as possible.",
                )));
                form.set(ContactForm::default());
                is_submitting.set(false);
            });
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    html! {
        <section id="contact" class="section-spacing" ref={section_ref}>
            <div class="container-custom">
                <div class="section-header">
                    <h2 class={classes!("section-title", "gradient-text", "fade", in_view.then(|| "shown"))}>
                        {"Let's Work Together"}
                    </h2>
                    <p class={classes!("section-subtitle", "fade", "delayed", in_view.then(|| "shown"))}>
                        {"Get in touch to discuss your project"}
                    </p>
                </div>

                <div class="contact-grid">
                    <div class={classes!("contact-info", "card", "slide-left", in_view.then(|| "shown"))}>
                        <h3>{"Contact Information"}</h3>
                        <div class="contact-row">
                            <span class="contact-icon">{"✉"}</span>
                            <div>
                                <h4>{"Email"}</h4>
                                <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                            </div>
                        </div>
                        <div class="contact-row">
                            <span class="contact-icon">{"☎"}</span>
                            <div>
                                <h4>{"Phone"}</h4>
                                <a href={CONTACT_PHONE_HREF}>{CONTACT_PHONE}</a>
                            </div>
                        </div>
                        <div class="contact-row">
                            <span class="contact-icon">{"⌖"}</span>
                            <div>
                                <h4>{"Location"}</h4>
                                <p>{LOCATION}</p>
                            </div>
                        </div>
                        <div class="contact-callout gradient-bg">
                            <h4>{"Get in Touch"}</h4>
                            <p>{"Fill out the form and I'll get back to you as soon as possible. Let's create something amazing together!"}</p>
                        </div>
                    </div>

                    <form class={classes!("contact-form", "card", "slide-right", in_view.then(|| "shown"))} {onsubmit}>
                        <div class="form-row">
                            <div class="form-field">
                                <label for="name">{"Name"}</label>
                                <input id="name" name="name" placeholder="Your name" required={true}
                                    value={form.name.clone()} oninput={on_input(ContactField::Name)} />
                            </div>
                            <div class="form-field">
                                <label for="email">{"Email"}</label>
                                <input id="email" name="email" type="email" placeholder="Your email" required={true}
                                    value={form.email.clone()} oninput={on_input(ContactField::Email)} />
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="subject">{"Subject"}</label>
                            <input id="subject" name="subject" placeholder="Project inquiry" required={true}
                                value={form.subject.clone()} oninput={on_input(ContactField::Subject)} />
                        </div>
                        <div class="form-field">
                            <label for="message">{"Message"}</label>
                            <textarea id="message" name="message" rows="5" placeholder="Tell me about your project..." required={true}
                                value={form.message.clone()} oninput={on_message} />
                        </div>
                        {
                            if let Some(err) = (*error).as_ref() {
                                html! { <div class="form-error">{err}</div> }
                            } else {
                                html! {}
                            }
                        }
                        <button type="submit" class="submit-button gradient-bg" disabled={*is_submitting}>
                            { if *is_submitting { "Sending..." } else { "Send Message" } }
                        </button>
                    </form>
                </div>
            </div>
            {
                if let Some(message) = (*toast).clone() {
                    let id = message.id;
                    html! { <Toast key={id} {message} on_dismiss={dismiss_toast} /> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 2fr 3fr;
                    gap: 2rem;
                }
                .contact-info h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1.5rem; }
                .contact-row { display: flex; align-items: flex-start; margin-bottom: 1.5rem; }
                .contact-icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: rgba(99, 102, 241, 0.1);
                    color: #6366f1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-right: 1rem;
                }
                .contact-row h4 { font-size: 0.875rem; color: #6b7280; margin-bottom: 0.25rem; }
                .contact-callout { margin-top: 2rem; padding: 1.5rem; border-radius: 0.75rem; color: #fff; }
                .contact-callout h4 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.75rem; }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                .form-field { display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 1.5rem; }
                .form-field label { font-size: 0.875rem; font-weight: 500; }
                .form-field input, .form-field textarea {
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    padding: 0.625rem 0.75rem;
                    font: inherit;
                }
                .form-error { color: #dc2626; margin-bottom: 1rem; }
                .submit-button {
                    width: 100%;
                    padding: 1rem;
                    font-size: 1.125rem;
                    color: #fff;
                    border: none;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .submit-button:disabled { opacity: 0.7; cursor: wait; }
                .slide-left { opacity: 0; transform: translateX(-2rem); transition: all 0.5s ease; }
                .slide-right { opacity: 0; transform: translateX(2rem); transition: all 0.5s ease 0.2s; }
                .slide-left.shown, .slide-right.shown { opacity: 1; transform: translateX(0); }
                @media (max-width: 1024px) {
                    .contact-grid { grid-template-columns: 1fr; }
                    .form-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
