use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::{FOOTER_COLUMNS, SOCIALS, TRUST_BADGES};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-cta-band">
                <div class="footer-cta-inner">
                    <div>
                        <p class="footer-cta-kicker">{"Ready to get protected?"}</p>
                        <h3>{"Get Your Free Security Assessment Today."}</h3>
                    </div>
                    <Link<Route> to={Route::Contact} classes="footer-cta-button">
                        {"Get a Free Quote →"}
                    </Link<Route>>
                </div>
            </div>

            <div class="footer-body">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        <img src={config::LOGO_SRC} alt="Tomsburg Surveillance Logo" />
                        <span class="footer-logo-name">{"TOMSBURG"}</span>
                    </Link<Route>>
                    <p class="footer-tagline">
                        {"Professional security camera installation for commercial and residential properties. Trusted by 500+ clients across the Tri-State area."}
                    </p>
                    <ul class="footer-contact">
                        <li><a href={config::PHONE_HREF}>{config::PHONE_DISPLAY}</a></li>
                        <li><a href={config::EMAIL_HREF}>{config::EMAIL}</a></li>
                        <li>{"New York, NJ & Connecticut"}</li>
                        <li>{"Mon-Sat 8AM-6PM · 24/7 Emergency"}</li>
                    </ul>
                </div>

                { for FOOTER_COLUMNS.iter().map(|column| html! {
                    <div class="footer-column">
                        <h4>{column.heading}</h4>
                        <ul>
                            { for column.links.iter().map(|(label, href)| html! {
                                <li><a href={*href}>{*label}</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>

            <div class="footer-badges">
                { for TRUST_BADGES.iter().map(|badge| html! {
                    <span class="footer-badge">{"✓ "}{*badge}</span>
                }) }
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, config::BUSINESS_NAME)}</p>
                <div class="footer-socials">
                    { for SOCIALS.iter().map(|(label, href)| html! {
                        <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*label}>{*label}</a>
                    }) }
                </div>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
.site-footer {
    background: #1C1C1F;
    color: rgba(255, 255, 255, 0.7);
}

.footer-cta-band {
    background: #D92B2B;
    padding: 2.5rem 1.5rem;
}

.footer-cta-inner {
    max-width: 1280px;
    margin: 0 auto;
    display: flex;
    flex-wrap: wrap;
    gap: 1.5rem;
    align-items: center;
    justify-content: space-between;
}

.footer-cta-kicker {
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-size: 0.7rem;
    font-weight: 700;
    color: rgba(255, 255, 255, 0.75);
}

.footer-cta-inner h3 {
    color: #ffffff;
    font-size: 1.8rem;
    font-weight: 900;
    margin: 0.4rem 0 0;
}

.footer-cta-button {
    background: #ffffff;
    color: #D92B2B;
    font-weight: 800;
    text-transform: uppercase;
    text-decoration: none;
    padding: 0.9rem 1.6rem;
    border-radius: 10px;
}

.footer-body {
    max-width: 1280px;
    margin: 0 auto;
    padding: 4rem 1.5rem 2rem;
    display: grid;
    grid-template-columns: 1.6fr repeat(3, 1fr);
    gap: 2.5rem;
}

.footer-logo {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    text-decoration: none;
}

.footer-logo img {
    width: 40px;
    height: 40px;
}

.footer-logo-name {
    color: #ffffff;
    font-weight: 900;
    letter-spacing: 0.12em;
}

.footer-tagline {
    margin: 1.25rem 0;
    line-height: 1.6;
    font-size: 0.9rem;
}

.site-footer ul {
    list-style: none;
    padding: 0;
    margin: 0;
}

.site-footer li {
    padding: 0.35rem 0;
    font-size: 0.9rem;
}

.site-footer a {
    color: rgba(255, 255, 255, 0.7);
    text-decoration: none;
    transition: color 0.2s ease;
}

.site-footer a:hover {
    color: #ffffff;
}

.footer-column h4 {
    color: #ffffff;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    font-size: 0.75rem;
    margin-bottom: 1rem;
}

.footer-badges {
    max-width: 1280px;
    margin: 0 auto;
    padding: 1.5rem;
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
    border-top: 1px solid rgba(255, 255, 255, 0.08);
}

.footer-badge {
    font-size: 0.75rem;
    font-weight: 700;
    padding: 0.4rem 0.8rem;
    border: 1px solid rgba(255, 255, 255, 0.12);
    border-radius: 999px;
}

.footer-bottom {
    max-width: 1280px;
    margin: 0 auto;
    padding: 1.5rem;
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    gap: 1rem;
    font-size: 0.8rem;
}

.footer-socials {
    display: flex;
    gap: 1rem;
}

@media (max-width: 900px) {
    .footer-body {
        grid-template-columns: 1fr 1fr;
    }
}

@media (max-width: 560px) {
    .footer-body {
        grid-template-columns: 1fr;
    }
}
"#;
