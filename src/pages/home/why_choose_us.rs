use yew::prelude::*;

use crate::config::SECTION_IN_VIEW_THRESHOLD;
use crate::content::REASONS;
use crate::hooks::{reveal_style, use_hover, use_in_view};

#[derive(Properties, PartialEq)]
struct ReasonProps {
    index: usize,
    revealed: bool,
}

#[function_component(ReasonItem)]
fn reason_item(props: &ReasonProps) -> Html {
    let hover = use_hover();
    let reason = &REASONS[props.index];

    html! {
        <li
            class={classes!("reason", hover.active.then(|| "hovered"))}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
            style={reveal_style(props.revealed, 0.2 + props.index as f64 * 0.08, 18)}
        >
            <span class="reason-number">{format!("{:02}", props.index + 1)}</span>
            <span class="reason-glyph">{reason.glyph}</span>
            <div>
                <h3>{reason.title}</h3>
                <p>{reason.blurb}</p>
            </div>
            <span class="reason-arrow">{"→"}</span>
        </li>
    }
}

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), SECTION_IN_VIEW_THRESHOLD);

    html! {
        <section ref={node} class="why-section" id="why-choose-us">
            <style>{WHY_CSS}</style>
            <div class="section-inner why-grid">
                <div class="why-intro" style={reveal_style(in_view, 0.0, 18)}>
                    <p class="section-kicker"><span class="kicker-line"></span>{"Why Choose Us"}</p>
                    <h2>{"Security Done "}<span class="accent">{"Right."}</span></h2>
                    <p class="section-lede">
                        {"We're not a call center that farms out installs. Every technician on your job is ours: trained, certified and accountable."}
                    </p>
                    <div class="why-seal">
                        <div class="seal-ring"></div>
                        <div class="seal-core">
                            <span class="seal-number">{"15+"}</span>
                            <span class="seal-label">{"Years Protecting the Tri-State"}</span>
                        </div>
                    </div>
                </div>
                <ul class="reason-list">
                    { for (0..REASONS.len()).map(|index| html! {
                        <ReasonItem {index} revealed={in_view} />
                    }) }
                </ul>
            </div>
        </section>
    }
}

const WHY_CSS: &str = r#"
.why-section {
    background: #ffffff;
    padding: 6rem 1.5rem;
}

.why-grid {
    display: grid;
    grid-template-columns: 1fr 1.2fr;
    gap: 4rem;
    align-items: center;
}

.why-intro h2 {
    font-size: clamp(2.4rem, 5vw, 3.8rem);
    line-height: 0.95;
    font-weight: 900;
    color: #1C1C1F;
    text-transform: uppercase;
    margin: 1rem 0;
}

.why-seal {
    position: relative;
    width: 200px;
    height: 200px;
    margin-top: 2.5rem;
}

.seal-ring {
    position: absolute;
    inset: 0;
    border: 2px dashed rgba(217, 43, 43, 0.4);
    border-radius: 50%;
    animation: wcu-spin 18s linear infinite;
}

.seal-core {
    position: absolute;
    inset: 18px;
    border-radius: 50%;
    background: #1C1C1F;
    color: #ffffff;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 1rem;
}

.seal-number {
    font-size: 2.4rem;
    font-weight: 900;
    color: #D92B2B;
}

.seal-label {
    font-size: 0.65rem;
    text-transform: uppercase;
    letter-spacing: 0.12em;
}

.reason-list {
    list-style: none;
    padding: 0;
    margin: 0;
}

.reason {
    display: grid;
    grid-template-columns: 2.5rem 3rem 1fr 1.5rem;
    align-items: center;
    gap: 1rem;
    padding: 1.25rem 0;
    border-bottom: 1px solid #F4F5F7;
}

.reason-number {
    font-weight: 900;
    color: #E5E7EB;
    transition: color 0.2s ease;
}

.reason-glyph {
    width: 48px;
    height: 48px;
    border-radius: 12px;
    background: #ffffff;
    border: 1px solid #E5E7EB;
    display: flex;
    align-items: center;
    justify-content: center;
    transition: background 0.2s ease;
}

.reason h3 {
    margin: 0;
    font-size: 1.05rem;
    font-weight: 900;
    color: #1C1C1F;
}

.reason p {
    margin: 0.2rem 0 0;
    font-size: 0.85rem;
    color: #6B7280;
}

.reason-arrow {
    color: transparent;
    transform: translateX(-6px);
    transition: color 0.2s ease, transform 0.2s ease;
}

.reason.hovered .reason-number,
.reason.hovered .reason-arrow {
    color: #D92B2B;
}

.reason.hovered .reason-glyph {
    background: #D92B2B;
    border-color: #D92B2B;
}

.reason.hovered .reason-arrow {
    transform: translateX(0);
}

@keyframes wcu-spin {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

@media (max-width: 900px) {
    .why-grid {
        grid-template-columns: 1fr;
    }
}
"#;
