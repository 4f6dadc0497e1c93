use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::content::{CONTACT_CHANNELS, PROPERTY_TYPES, SERVICE_OPTIONS};
use crate::state::contact::{
    ContactFormState, FormField, FormPhase, SimulatedGateway, SubmissionGateway, SubmitError,
};

/// Shared handle to the gateway that receives finished requests.
#[derive(Clone)]
pub struct GatewayHandle(pub Rc<dyn SubmissionGateway>);

impl PartialEq for GatewayHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for GatewayHandle {
    fn default() -> Self {
        Self(Rc::new(SimulatedGateway {
            delay_ms: config::submit_delay_ms(),
        }))
    }
}

#[derive(Properties, PartialEq)]
struct FloatingInputProps {
    id: &'static str,
    field: FormField,
    #[prop_or("text")]
    input_type: &'static str,
    value: String,
    #[prop_or_default]
    required: bool,
    on_change: Callback<(FormField, String)>,
}

#[function_component(FloatingInput)]
fn floating_input(props: &FloatingInputProps) -> Html {
    let focused = use_state(|| false);
    let raised = *focused || !props.value.is_empty();

    let oninput = {
        let on_change = props.on_change.clone();
        let field = props.field;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };
    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };

    html! {
        <div class={classes!("floating-field", (*focused).then(|| "focused"))}>
            <input
                id={props.id}
                type={props.input_type}
                value={props.value.clone()}
                required={props.required}
                {oninput}
                {onfocus}
                {onblur}
            />
            <label for={props.id} class={classes!(raised.then(|| "raised"))}>
                {props.field.label()}
                if props.required { {" *"} }
            </label>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    #[prop_or_default]
    pub gateway: GatewayHandle,
}

pub enum ContactMsg {
    SetField(FormField, String),
    ToggleService(&'static str),
    Submit,
    Finished(Result<(), SubmitError>),
    Reset,
}

pub struct ContactSection {
    form: ContactFormState,
}

impl Component for ContactSection {
    type Message = ContactMsg;
    type Properties = ContactSectionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactFormState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::SetField(field, value) => {
                self.form.set_field(field, value);
                true
            }
            ContactMsg::ToggleService(service) => {
                self.form.toggle_service(service);
                true
            }
            ContactMsg::Submit => {
                let request = match self.form.begin_submit() {
                    Some(request) => request,
                    None => {
                        debug!("Submit ignored, missing: {:?}", self.form.missing_required());
                        return false;
                    }
                };
                info!("Sending contact request with {} service(s)", request.services.len());
                let pending = ctx.props().gateway.0.submit(request);
                // Scope drops the message if the section unmounts first
                ctx.link().send_future(async move { ContactMsg::Finished(pending.await) });
                true
            }
            ContactMsg::Finished(outcome) => {
                if let Err(e) = &outcome {
                    warn!("Contact request failed: {}", e);
                }
                self.form.finish_submit(outcome);
                true
            }
            ContactMsg::Reset => {
                self.form.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="contact-section" id="contact">
                <style>{CONTACT_CSS}</style>
                <div class="section-inner">
                    <div class="contact-header">
                        <div>
                            <p class="section-kicker"><span class="kicker-line"></span>{"Get In Touch"}</p>
                            <h2>{"Let's Secure "}<span class="accent">{"Your Property."}</span></h2>
                        </div>
                        <p class="section-lede">
                            {"Fill out the form below and our team will reach out within 2 hours to schedule your free no-obligation security assessment."}
                        </p>
                    </div>

                    <div class="contact-grid">
                        <div class="contact-card">
                            <div class="contact-card-bar"></div>
                            {
                                match self.form.phase() {
                                    FormPhase::Submitted => self.view_success(ctx),
                                    _ => self.view_form(ctx),
                                }
                            }
                        </div>
                        { self.view_sidebar() }
                    </div>
                </div>
            </section>
        }
    }
}

impl ContactSection {
    fn view_success(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="contact-success">
                <div class="success-icon">{"✓"}</div>
                <h3>{"Message Received!"}</h3>
                <p>
                    {"Thanks for reaching out. One of our security specialists will contact you within 2 hours to discuss your needs and schedule your free assessment."}
                </p>
                <div class="success-badges">
                    { for ["Licensed & Insured", "No Obligation", "Free Assessment"].iter().map(|b| html! {
                        <span class="success-badge">{*b}</span>
                    }) }
                </div>
                <button class="contact-reset" onclick={ctx.link().callback(|_| ContactMsg::Reset)}>
                    {"Submit another request"}
                </button>
            </div>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = &self.form;
        let on_change = link.callback(|(field, value): (FormField, String)| ContactMsg::SetField(field, value));
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let on_property = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactMsg::SetField(FormField::PropertyType, select.value())
        });
        let on_message = link.callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::SetField(FormField::Message, area.value())
        });
        let missing = form.missing_required();
        let error = match form.phase() {
            FormPhase::Failed(message) => Some(message),
            _ => None,
        };

        html! {
            <form class="contact-form" {onsubmit}>
                if let Some(message) = &error {
                    <div class="contact-error" role="alert">
                        <strong>{"Your request wasn't sent. "}</strong>
                        {message.clone()}
                    </div>
                }

                <div class="field-row">
                    <FloatingInput id="contact-name" field={FormField::Name} value={form.name.clone()} required=true on_change={on_change.clone()} />
                    <FloatingInput id="contact-email" field={FormField::Email} input_type="email" value={form.email.clone()} required=true on_change={on_change.clone()} />
                </div>

                <div class="field-row">
                    <FloatingInput id="contact-phone" field={FormField::Phone} input_type="tel" value={form.phone.clone()} on_change={on_change.clone()} />
                    <div class="floating-field select-field">
                        <select id="contact-property" onchange={on_property}>
                            <option value="" disabled=true selected={form.property_type.is_empty()}></option>
                            { for PROPERTY_TYPES.iter().map(|p| html! {
                                <option value={*p} selected={form.property_type == *p}>{*p}</option>
                            }) }
                        </select>
                        <label for="contact-property" class={classes!((!form.property_type.is_empty()).then(|| "raised"))}>
                            {FormField::PropertyType.label()}
                        </label>
                    </div>
                </div>

                <fieldset class="service-chips">
                    <legend>{"Services you're interested in"}</legend>
                    { for SERVICE_OPTIONS.iter().map(|service| {
                        let service: &'static str = *service;
                        let selected = form.has_service(service);
                        html! {
                            <button
                                type="button"
                                class={classes!("service-chip", selected.then(|| "selected"))}
                                aria-pressed={selected.to_string()}
                                onclick={link.callback(move |_| ContactMsg::ToggleService(service))}
                            >
                                if selected { {"✓ "} }
                                {service}
                            </button>
                        }
                    }) }
                </fieldset>

                <div class="floating-field textarea-field">
                    <textarea
                        id="contact-message"
                        rows="4"
                        value={form.message.clone()}
                        oninput={on_message}
                    />
                    <label for="contact-message" class={classes!((!form.message.is_empty()).then(|| "raised"))}>
                        {FormField::Message.label()}
                    </label>
                </div>

                <button
                    type="submit"
                    class={classes!("contact-submit", (!form.can_submit()).then(|| "disabled"))}
                    disabled={!form.can_submit()}
                >
                    if form.submitting {
                        <span class="submit-spinner"></span>
                        {"Sending..."}
                    } else if error.is_some() {
                        {"Try Again →"}
                    } else {
                        {"Send My Request →"}
                    }
                </button>

                if !missing.is_empty() {
                    <p class="contact-hint">
                        {format!(
                            "Please add your {} to send the request.",
                            missing.iter().map(|f| f.label().to_lowercase()).collect::<Vec<_>>().join(" and "),
                        )}
                    </p>
                } else {
                    <p class="contact-hint">{"We typically respond within 2 hours · No spam, ever."}</p>
                }
            </form>
        }
    }

    fn view_sidebar(&self) -> Html {
        html! {
            <aside class="contact-sidebar">
                { for CONTACT_CHANNELS.iter().map(|channel| html! {
                    <a href={channel.href} class="channel-card">
                        <span class="channel-glyph">{channel.glyph}</span>
                        <div>
                            <p class="channel-label">{channel.label}</p>
                            <p class="channel-value">{channel.value}</p>
                            <p class="channel-sub">{channel.sub}</p>
                        </div>
                    </a>
                }) }
                <div class="trust-card">
                    <p class="trust-title">{"Your info is safe with us."}</p>
                    <p class="trust-text">
                        {"We never share your details with third parties. Your request goes directly to our team. No spam, no sales calls from strangers."}
                    </p>
                    <div class="trust-badges">
                        { for ["Licensed & Insured", "No Obligation", "5-Year Warranty"].iter().map(|b| html! {
                            <span class="trust-badge">{*b}</span>
                        }) }
                    </div>
                </div>
            </aside>
        }
    }
}

const CONTACT_CSS: &str = r#"
.contact-section {
    position: relative;
    background: #F4F5F7;
    padding: 6rem 1.5rem;
}

.contact-header {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
    align-items: end;
    margin-bottom: 3rem;
}

.contact-header h2 {
    font-size: clamp(2.6rem, 5vw, 4rem);
    line-height: 0.95;
    font-weight: 900;
    text-transform: uppercase;
    color: #1C1C1F;
    margin: 1rem 0 0;
}

.contact-grid {
    display: grid;
    grid-template-columns: 1fr 340px;
    gap: 2.5rem;
    align-items: start;
}

.contact-card {
    background: #ffffff;
    border-radius: 20px;
    overflow: hidden;
    box-shadow: 0 20px 50px rgba(28, 28, 31, 0.08);
}

.contact-card-bar {
    height: 3px;
    background: linear-gradient(to right, #D92B2B, #ff6b6b, #D92B2B);
}

.contact-form {
    padding: 2rem;
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
}

.contact-error {
    background: rgba(217, 43, 43, 0.08);
    border: 1px solid rgba(217, 43, 43, 0.3);
    color: #991b1b;
    border-radius: 12px;
    padding: 0.9rem 1rem;
    font-size: 0.85rem;
}

.field-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}

.floating-field {
    position: relative;
}

.floating-field input,
.floating-field select,
.floating-field textarea {
    width: 100%;
    box-sizing: border-box;
    background: #F4F5F7;
    border: 1px solid #E5E7EB;
    border-radius: 12px;
    padding: 1.5rem 1rem 0.5rem;
    font-size: 0.9rem;
    color: #1C1C1F;
    outline: none;
    transition: border-color 0.2s ease, box-shadow 0.2s ease, background 0.2s ease;
    font-family: inherit;
}

.floating-field.focused input,
.floating-field select:focus,
.floating-field textarea:focus {
    border-color: #D92B2B;
    box-shadow: 0 0 0 3px rgba(217, 43, 43, 0.15);
    background: #ffffff;
}

.floating-field label {
    position: absolute;
    left: 1rem;
    top: 50%;
    transform: translateY(-50%);
    font-size: 0.9rem;
    font-weight: 600;
    color: #6B7280;
    pointer-events: none;
    transition: all 0.2s ease;
}

.textarea-field label {
    top: 1.2rem;
}

.floating-field label.raised,
.floating-field.focused label {
    top: 0.6rem;
    transform: none;
    font-size: 0.6rem;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: #D92B2B;
}

.service-chips {
    border: none;
    padding: 0;
    margin: 0;
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.service-chips legend {
    font-size: 0.7rem;
    font-weight: 800;
    text-transform: uppercase;
    letter-spacing: 0.12em;
    color: #1C1C1F;
    margin-bottom: 0.75rem;
}

.service-chip {
    padding: 0.5rem 0.9rem;
    border-radius: 999px;
    border: 1px solid #E5E7EB;
    background: #F4F5F7;
    color: #1C1C1F;
    font-size: 0.75rem;
    font-weight: 700;
    cursor: pointer;
    transition: all 0.2s ease;
}

.service-chip.selected {
    background: #D92B2B;
    border-color: #D92B2B;
    color: #ffffff;
}

.contact-submit {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
    padding: 1rem;
    border: none;
    border-radius: 12px;
    background: #D92B2B;
    color: #ffffff;
    font-weight: 900;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    cursor: pointer;
    transition: all 0.2s ease;
}

.contact-submit.disabled {
    background: rgba(107, 114, 128, 0.3);
    color: #6B7280;
    cursor: not-allowed;
}

.submit-spinner {
    width: 16px;
    height: 16px;
    border: 3px solid currentColor;
    border-right-color: transparent;
    border-radius: 50%;
    animation: spinSlow 0.8s linear infinite;
}

.contact-hint {
    text-align: center;
    font-size: 0.75rem;
    color: #6B7280;
    margin: 0;
}

.contact-success {
    padding: 3rem 2rem;
    text-align: center;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
    animation: successPop 0.5s ease forwards;
}

.success-icon {
    width: 80px;
    height: 80px;
    border-radius: 50%;
    background: rgba(217, 43, 43, 0.1);
    color: #D92B2B;
    font-size: 2.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
}

.contact-success h3 {
    font-size: 2rem;
    font-weight: 900;
    text-transform: uppercase;
    color: #1C1C1F;
    margin: 0;
}

.contact-success p {
    color: #6B7280;
    max-width: 440px;
    line-height: 1.6;
}

.success-badges,
.trust-badges {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.5rem;
}

.success-badge,
.trust-badge {
    font-size: 0.7rem;
    font-weight: 700;
    padding: 0.35rem 0.75rem;
    border-radius: 999px;
    background: #F4F5F7;
    color: #1C1C1F;
}

.contact-reset {
    margin-top: 0.5rem;
    background: none;
    border: 2px solid #1C1C1F;
    border-radius: 10px;
    padding: 0.75rem 1.25rem;
    font-weight: 800;
    text-transform: uppercase;
    cursor: pointer;
}

.contact-sidebar {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.channel-card {
    display: flex;
    gap: 1rem;
    align-items: center;
    background: #ffffff;
    border: 1px solid #E5E7EB;
    border-radius: 16px;
    padding: 1.1rem 1.25rem;
    text-decoration: none;
    transition: border-color 0.2s ease, transform 0.2s ease;
}

.channel-card:hover {
    border-color: rgba(217, 43, 43, 0.35);
    transform: translateX(4px);
}

.channel-glyph {
    width: 44px;
    height: 44px;
    border-radius: 12px;
    background: rgba(217, 43, 43, 0.1);
    color: #D92B2B;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.2rem;
}

.channel-card p {
    margin: 0;
}

.channel-label {
    font-size: 0.65rem;
    font-weight: 800;
    text-transform: uppercase;
    letter-spacing: 0.12em;
    color: #6B7280;
}

.channel-value {
    font-weight: 900;
    color: #1C1C1F;
}

.channel-sub {
    font-size: 0.75rem;
    color: #6B7280;
}

.trust-card {
    background: #1C1C1F;
    border-radius: 16px;
    padding: 1.5rem;
}

.trust-title {
    color: #ffffff;
    font-weight: 900;
    margin: 0 0 0.5rem;
}

.trust-text {
    color: rgba(255, 255, 255, 0.55);
    font-size: 0.8rem;
    line-height: 1.6;
}

.trust-card .trust-badges {
    justify-content: flex-start;
}

.trust-card .trust-badge {
    background: rgba(255, 255, 255, 0.08);
    color: #ffffff;
}

@keyframes successPop {
    0% { opacity: 0; transform: scale(0.85) translateY(12px); }
    100% { opacity: 1; transform: scale(1) translateY(0); }
}

@keyframes spinSlow {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

@media (max-width: 900px) {
    .contact-header,
    .contact-grid,
    .field-row {
        grid-template-columns: 1fr;
    }
}
"#;
