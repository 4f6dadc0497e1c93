use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{HEADER_IN_VIEW_THRESHOLD, SECTION_IN_VIEW_THRESHOLD};
use crate::content::{Service, SERVICES};
use crate::hooks::{reveal_style, use_hover, use_in_view};
use crate::Route;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    index: usize,
}

fn card_classes(service: &Service, hovered: bool) -> Classes {
    classes!(
        "service-card",
        service.featured.then(|| "featured"),
        hovered.then(|| "hovered"),
    )
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), SECTION_IN_VIEW_THRESHOLD);
    let hover = use_hover();
    let service: &Service = &SERVICES[props.index];

    html! {
        <article
            ref={node}
            class={card_classes(service, hover.active)}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
            style={reveal_style(in_view, (props.index % 3) as f64 * 0.1, 24)}
        >
            <div class="service-top">
                <span class="service-id">{service.id}</span>
                if service.featured {
                    <span class="service-flag">{"Most Requested"}</span>
                }
            </div>
            <h3>{service.title}</h3>
            <p class="service-tagline">{service.tagline}</p>
            <p class="service-description">{service.description}</p>
            <ul class="service-features">
                { for service.features.iter().map(|f| html! { <li>{*f}</li> }) }
            </ul>
            <Link<Route> to={Route::Contact} classes="service-link">
                {"Request a quote →"}
            </Link<Route>>
        </article>
    }
}

#[function_component(HomeServices)]
pub fn home_services() -> Html {
    let header_ref = use_node_ref();
    let header_in_view = use_in_view(header_ref.clone(), HEADER_IN_VIEW_THRESHOLD);
    let cta_ref = use_node_ref();
    let cta_in_view = use_in_view(cta_ref.clone(), HEADER_IN_VIEW_THRESHOLD);

    html! {
        <section class="services-section" id="services">
            <style>{SERVICES_CSS}</style>
            <div class="section-inner">
                <div ref={header_ref} class="section-header" style={reveal_style(header_in_view, 0.0, 18)}>
                    <p class="section-kicker"><span class="kicker-line"></span>{"What We Do"}</p>
                    <h2>{"Security Solutions "}<span class="accent">{"Built to Protect."}</span></h2>
                    <p class="section-lede">
                        {"From a single doorbell camera to a multi-site enterprise network, every system is designed, installed and supported by our own certified team."}
                    </p>
                </div>

                <div class="services-grid">
                    { for (0..SERVICES.len()).map(|index| html! { <ServiceCard {index} /> }) }
                </div>

                <div ref={cta_ref} class="services-cta" style={reveal_style(cta_in_view, 0.1, 18)}>
                    <p>{"Not sure what you need? Our free on-site assessment will tell you exactly that."}</p>
                    <Link<Route> to={Route::Contact} classes="services-cta-button">
                        {"Book a Free Assessment"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

const SERVICES_CSS: &str = r#"
.services-section {
    background: #ffffff;
    padding: 6rem 1.5rem;
}

.services-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}

.service-card {
    border: 1px solid #E5E7EB;
    border-radius: 18px;
    padding: 2rem;
    background: #ffffff;
    display: flex;
    flex-direction: column;
    transition: box-shadow 0.3s ease, border-color 0.3s ease, transform 0.3s ease;
}

.service-card.hovered {
    border-color: rgba(217, 43, 43, 0.35);
    box-shadow: 0 18px 40px rgba(28, 28, 31, 0.10);
}

.service-card.featured {
    background: #1C1C1F;
    border-color: #1C1C1F;
    color: #ffffff;
}

.service-top {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.service-id {
    font-size: 2.2rem;
    font-weight: 900;
    color: #D92B2B;
}

.service-flag {
    font-size: 0.65rem;
    font-weight: 800;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    background: #D92B2B;
    color: #ffffff;
    padding: 0.3rem 0.6rem;
    border-radius: 999px;
}

.service-card h3 {
    font-size: 1.35rem;
    font-weight: 900;
    margin: 1rem 0 0.25rem;
}

.service-tagline {
    color: #D92B2B;
    font-weight: 700;
    font-size: 0.9rem;
}

.service-description {
    color: #6B7280;
    line-height: 1.6;
    font-size: 0.9rem;
}

.service-card.featured .service-description {
    color: rgba(255, 255, 255, 0.65);
}

.service-features {
    list-style: none;
    padding: 0;
    margin: 1rem 0 1.5rem;
}

.service-features li {
    padding: 0.3rem 0 0.3rem 1.25rem;
    position: relative;
    font-size: 0.85rem;
}

.service-features li::before {
    content: '';
    position: absolute;
    left: 0;
    top: 0.75rem;
    width: 6px;
    height: 6px;
    border-radius: 50%;
    background: #D92B2B;
}

.service-link {
    margin-top: auto;
    color: #D92B2B;
    font-weight: 800;
    text-decoration: none;
    font-size: 0.85rem;
}

.services-cta {
    margin-top: 3rem;
    display: flex;
    flex-wrap: wrap;
    gap: 1.5rem;
    align-items: center;
    justify-content: space-between;
    background: #F4F5F7;
    border-radius: 18px;
    padding: 2rem;
}

.services-cta p {
    color: #1C1C1F;
    font-weight: 700;
    margin: 0;
}

.services-cta-button {
    background: #D92B2B;
    color: #ffffff;
    text-decoration: none;
    text-transform: uppercase;
    font-weight: 800;
    font-size: 0.8rem;
    padding: 0.9rem 1.4rem;
    border-radius: 10px;
}

@media (max-width: 1000px) {
    .services-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (max-width: 640px) {
    .services-grid {
        grid-template-columns: 1fr;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::card_classes;
    use crate::content::SERVICES;

    #[test]
    fn hover_and_featured_classes_follow_state() {
        let featured = SERVICES.iter().find(|s| s.featured).unwrap();
        let plain = SERVICES.iter().find(|s| !s.featured).unwrap();

        let resting = card_classes(plain, false);
        assert!(resting.contains("service-card"));
        assert!(!resting.contains("hovered"));
        assert!(!resting.contains("featured"));

        let hovered = card_classes(featured, true);
        assert!(hovered.contains("hovered"));
        assert!(hovered.contains("featured"));
    }
}
