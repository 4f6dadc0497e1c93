use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{HEADER_IN_VIEW_THRESHOLD, SECTION_IN_VIEW_THRESHOLD};
use crate::content::STEPS;
use crate::hooks::{reveal_style, use_hover, use_in_view};
use crate::Route;

#[derive(Properties, PartialEq)]
struct StepProps {
    index: usize,
}

fn step_classes(index: usize, hovered: bool) -> Classes {
    // Alternate sides on wide screens
    let side = if index % 2 == 0 { "left" } else { "right" };
    classes!("timeline-step", side, hovered.then(|| "hovered"))
}

#[function_component(TimelineStep)]
fn timeline_step(props: &StepProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), SECTION_IN_VIEW_THRESHOLD);
    let hover = use_hover();
    let step = &STEPS[props.index];

    html! {
        <li
            ref={node}
            class={step_classes(props.index, hover.active)}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
            style={reveal_style(in_view, 0.1, 28)}
        >
            <span class="step-marker">{step.number}</span>
            <div class="step-card">
                <p class="step-duration">{step.duration}</p>
                <h3>{step.title}</h3>
                <p class="step-subtitle">{step.subtitle}</p>
                <p class="step-description">{step.description}</p>
                <ul class="step-details">
                    { for step.details.iter().map(|d| html! { <li>{*d}</li> }) }
                </ul>
            </div>
        </li>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let header_ref = use_node_ref();
    let header_in_view = use_in_view(header_ref.clone(), HEADER_IN_VIEW_THRESHOLD);
    let cta_ref = use_node_ref();
    let cta_in_view = use_in_view(cta_ref.clone(), HEADER_IN_VIEW_THRESHOLD);

    html! {
        <section class="process-section" id="how-it-works">
            <style>{PROCESS_CSS}</style>
            <div class="section-inner">
                <div ref={header_ref} class="section-header centered" style={reveal_style(header_in_view, 0.0, 18)}>
                    <p class="section-kicker"><span class="kicker-line"></span>{"How It Works"}</p>
                    <h2>{"From First Call to "}<span class="accent">{"Full Coverage."}</span></h2>
                    <p class="section-lede">
                        {"A clear five-step process with no surprises, so you always know what happens next."}
                    </p>
                </div>

                <ol class="timeline">
                    { for (0..STEPS.len()).map(|index| html! { <TimelineStep {index} /> }) }
                </ol>

                <div ref={cta_ref} class="process-cta" style={reveal_style(cta_in_view, 0.1, 18)}>
                    <Link<Route> to={Route::Contact} classes="process-cta-button">
                        {"Start With a Free Consultation →"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

const PROCESS_CSS: &str = r#"
.process-section {
    background: #F4F5F7;
    padding: 6rem 1.5rem;
}

.timeline {
    list-style: none;
    padding: 0;
    margin: 0 auto;
    max-width: 1000px;
    position: relative;
}

.timeline::before {
    content: '';
    position: absolute;
    top: 0;
    bottom: 0;
    left: 50%;
    width: 2px;
    background: linear-gradient(to bottom, transparent, rgba(217, 43, 43, 0.4), transparent);
}

.timeline-step {
    position: relative;
    width: 50%;
    padding: 1.5rem 3rem;
    box-sizing: border-box;
}

.timeline-step.left {
    margin-right: 50%;
}

.timeline-step.right {
    margin-left: 50%;
}

.step-marker {
    position: absolute;
    top: 2rem;
    width: 44px;
    height: 44px;
    border-radius: 50%;
    background: #1C1C1F;
    color: #ffffff;
    font-weight: 900;
    display: flex;
    align-items: center;
    justify-content: center;
    transition: background 0.3s ease;
}

.timeline-step.left .step-marker {
    right: -22px;
}

.timeline-step.right .step-marker {
    left: -22px;
}

.timeline-step.hovered .step-marker {
    background: #D92B2B;
}

.step-card {
    background: #ffffff;
    border: 1px solid #E5E7EB;
    border-radius: 16px;
    padding: 1.75rem;
    transition: box-shadow 0.3s ease, border-color 0.3s ease;
}

.timeline-step.hovered .step-card {
    border-color: rgba(217, 43, 43, 0.35);
    box-shadow: 0 16px 36px rgba(28, 28, 31, 0.08);
}

.step-duration {
    display: inline-block;
    font-size: 0.65rem;
    font-weight: 800;
    text-transform: uppercase;
    letter-spacing: 0.12em;
    color: #D92B2B;
    background: rgba(217, 43, 43, 0.08);
    padding: 0.3rem 0.6rem;
    border-radius: 999px;
    margin: 0;
}

.step-card h3 {
    font-size: 1.3rem;
    font-weight: 900;
    color: #1C1C1F;
    margin: 0.75rem 0 0.25rem;
}

.step-subtitle {
    font-weight: 700;
    color: #1C1C1F;
    font-size: 0.9rem;
}

.step-description {
    color: #6B7280;
    line-height: 1.6;
    font-size: 0.9rem;
}

.step-details {
    list-style: none;
    padding: 0;
    margin: 0;
}

.step-details li {
    font-size: 0.8rem;
    color: #1C1C1F;
    padding: 0.2rem 0;
}

.step-details li::before {
    content: '✓ ';
    color: #D92B2B;
    font-weight: 900;
}

.process-cta {
    text-align: center;
    margin-top: 3rem;
}

.process-cta-button {
    display: inline-block;
    background: #1C1C1F;
    color: #ffffff;
    text-decoration: none;
    text-transform: uppercase;
    font-weight: 800;
    font-size: 0.85rem;
    padding: 1rem 1.6rem;
    border-radius: 12px;
}

@media (max-width: 800px) {
    .timeline::before {
        left: 22px;
    }

    .timeline-step,
    .timeline-step.left,
    .timeline-step.right {
        width: 100%;
        margin: 0;
        padding: 1rem 0 1rem 3.5rem;
    }

    .timeline-step.left .step-marker,
    .timeline-step.right .step-marker {
        left: 0;
        right: auto;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::step_classes;

    #[test]
    fn steps_alternate_sides_and_mark_hover() {
        let first = step_classes(0, false);
        assert!(first.contains("left"));
        assert!(!first.contains("hovered"));

        let second = step_classes(1, true);
        assert!(second.contains("right"));
        assert!(second.contains("hovered"));
    }
}
