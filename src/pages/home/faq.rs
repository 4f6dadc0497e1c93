use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{self, DENSE_SECTION_IN_VIEW_THRESHOLD};
use crate::content::{FaqEntry, FAQS};
use crate::hooks::{reveal_style, use_in_view};
use crate::state::faq::{count, CategoryFilter, FaqFilterState};
use crate::Route;

#[derive(Properties, PartialEq)]
struct AccordionItemProps {
    entry: FaqEntry,
    index: usize,
    is_open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(AccordionItem)]
fn accordion_item(props: &AccordionItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="faq-number">{format!("{:02}", props.index + 1)}</span>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <span class="faq-tag">{props.entry.category.label()}</span>
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), DENSE_SECTION_IN_VIEW_THRESHOLD);
    let state = use_state(FaqFilterState::default);

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |index: usize| {
            let mut next = *state;
            next.toggle_item(index);
            state.set(next);
        })
    };

    let select = |filter: CategoryFilter| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("FAQ filter -> {}", filter.label());
            let mut next = *state;
            next.select_category(filter);
            state.set(next);
        })
    };

    let visible = state.visible(&FAQS);

    html! {
        <section ref={node} class="faq-section" id="faq">
            <style>{FAQ_CSS}</style>
            <div class="faq-watermark" aria-hidden="true">{"FAQ"}</div>
            <div class="section-inner faq-layout">
                <aside class="faq-sidebar">
                    <div style={reveal_style(in_view, 0.0, 18)}>
                        <p class="section-kicker"><span class="kicker-line"></span>{"FAQ"}</p>
                        <h2>{"Got Questions? "}<span class="accent">{"We've Got"}</span>{" Answers."}</h2>
                        <p class="section-lede">
                            {"Everything you need to know about working with Tomsburg Surveillance, from first call to long-term support."}
                        </p>
                    </div>

                    <div style={reveal_style(in_view, 0.1, 18)}>
                        <p class="filter-title">{"Filter by topic"}</p>
                        <div class="faq-filters">
                            { for CategoryFilter::CHOICES.iter().map(|filter| {
                                let filter = *filter;
                                html! {
                                    <button
                                        class={classes!("faq-filter", (state.active == filter).then(|| "active"))}
                                        onclick={select(filter)}
                                    >
                                        {filter.label()}
                                        if let CategoryFilter::Only(category) = filter {
                                            <span class="filter-count">{count(&FAQS, category)}</span>
                                        }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>

                    <div class="faq-help-card" style={reveal_style(in_view, 0.2, 18)}>
                        <p class="help-title">{"Still have questions?"}</p>
                        <p class="help-text">
                            {"Our team is standing by. Call, email, or request a free callback and we'll answer everything."}
                        </p>
                        <a href={config::PHONE_HREF} class="help-call">{format!("Call {}", config::PHONE_DISPLAY)}</a>
                        <Link<Route> to={Route::Contact} classes="help-quote">
                            {"Request a Callback →"}
                        </Link<Route>>
                    </div>
                </aside>

                <div class="faq-list" style={reveal_style(in_view, 0.15, 24)}>
                    if visible.is_empty() {
                        <p class="faq-empty">{"No questions in this topic yet."}</p>
                    }
                    { for visible.iter().enumerate().map(|(index, entry)| html! {
                        <AccordionItem
                            key={entry.question}
                            entry={**entry}
                            {index}
                            is_open={state.is_open(index, &FAQS)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                    if state.active != CategoryFilter::All {
                        <button class="faq-show-all" onclick={select(CategoryFilter::All)}>
                            {format!("Show all {} questions", FAQS.len())}
                        </button>
                    }
                </div>
            </div>
        </section>
    }
}

const FAQ_CSS: &str = r#"
.faq-section {
    position: relative;
    background: #ffffff;
    padding: 6rem 1.5rem;
    overflow: hidden;
}

.faq-watermark {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    font-size: clamp(8rem, 20vw, 18rem);
    font-weight: 900;
    color: rgba(28, 28, 31, 0.025);
    pointer-events: none;
    user-select: none;
}

.faq-layout {
    position: relative;
    display: grid;
    grid-template-columns: 320px 1fr;
    gap: 4rem;
}

.faq-sidebar {
    position: sticky;
    top: 7rem;
    align-self: start;
    display: flex;
    flex-direction: column;
    gap: 2rem;
}

.faq-sidebar h2 {
    font-size: clamp(2.4rem, 4vw, 3.4rem);
    line-height: 0.93;
    font-weight: 900;
    text-transform: uppercase;
    color: #1C1C1F;
    margin: 1rem 0;
}

.filter-title {
    font-size: 0.7rem;
    font-weight: 800;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    color: #1C1C1F;
}

.faq-filters {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.faq-filter {
    padding: 0.5rem 1rem;
    border-radius: 999px;
    border: 1px solid #E5E7EB;
    background: #F4F5F7;
    color: #1C1C1F;
    font-size: 0.7rem;
    font-weight: 800;
    text-transform: uppercase;
    cursor: pointer;
    transition: all 0.2s ease;
}

.faq-filter.active {
    background: #D92B2B;
    border-color: #D92B2B;
    color: #ffffff;
    box-shadow: 0 4px 14px rgba(217, 43, 43, 0.30);
}

.filter-count {
    margin-left: 0.4rem;
    font-size: 0.6rem;
    opacity: 0.6;
}

.faq-help-card {
    background: #1C1C1F;
    border-radius: 18px;
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.help-title {
    color: #ffffff;
    font-weight: 900;
    font-size: 1.1rem;
    margin: 0;
}

.help-text {
    color: rgba(255, 255, 255, 0.5);
    font-size: 0.8rem;
    line-height: 1.6;
}

.help-call,
.help-quote {
    text-align: center;
    text-decoration: none;
    font-weight: 800;
    font-size: 0.8rem;
    padding: 0.75rem;
    border-radius: 10px;
}

.help-call {
    background: #D92B2B;
    color: #ffffff;
}

.help-quote {
    border: 1px solid rgba(255, 255, 255, 0.15);
    color: #ffffff;
}

.faq-item {
    border: 1px solid #E5E7EB;
    border-radius: 14px;
    margin-bottom: 0.75rem;
    overflow: hidden;
    transition: border-color 0.3s ease, box-shadow 0.3s ease;
}

.faq-item.open {
    border-color: rgba(217, 43, 43, 0.3);
    box-shadow: 0 10px 30px rgba(28, 28, 31, 0.06);
}

.faq-question {
    width: 100%;
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 1.25rem 1.5rem;
    background: none;
    border: none;
    text-align: left;
    cursor: pointer;
    font-size: 1rem;
    font-weight: 800;
    color: #1C1C1F;
}

.faq-number {
    color: #D92B2B;
    font-size: 0.8rem;
}

.question-text {
    flex: 1;
}

.toggle-icon {
    width: 28px;
    height: 28px;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #F4F5F7;
    color: #D92B2B;
    transition: transform 0.3s ease, background 0.3s ease;
}

.faq-item.open .toggle-icon {
    background: #D92B2B;
    color: #ffffff;
    transform: rotate(180deg);
}

.faq-answer {
    max-height: 0;
    overflow: hidden;
    padding: 0 1.5rem;
    transition: max-height 0.4s ease, padding 0.4s ease;
}

.faq-item.open .faq-answer {
    max-height: 600px;
    padding: 0 1.5rem 1.5rem;
}

.faq-tag {
    display: inline-block;
    font-size: 0.6rem;
    font-weight: 800;
    text-transform: uppercase;
    letter-spacing: 0.12em;
    color: #D92B2B;
    background: rgba(217, 43, 43, 0.08);
    padding: 0.2rem 0.5rem;
    border-radius: 999px;
}

.faq-answer p {
    color: #6B7280;
    line-height: 1.7;
    font-size: 0.9rem;
}

.faq-empty {
    color: #6B7280;
}

.faq-show-all {
    margin-top: 1rem;
    background: none;
    border: none;
    color: #D92B2B;
    font-weight: 800;
    cursor: pointer;
}

@media (max-width: 900px) {
    .faq-layout {
        grid-template-columns: 1fr;
    }

    .faq-sidebar {
        position: static;
    }
}
"#;
