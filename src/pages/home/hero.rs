use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const CAMERA_FEEDS: [(&str, &str); 4] = [
    ("CAM-01", "Front Entrance"),
    ("CAM-02", "Parking Lot"),
    ("CAM-03", "Server Room"),
    ("CAM-04", "Loading Dock"),
];

const STATS: [(&str, &str); 3] = [
    ("500+", "Systems Installed"),
    ("98%", "Client Satisfaction"),
    ("15+", "Years Experience"),
];

const HERO_BADGES: [&str; 3] = ["Licensed & Insured", "24/7 Support", "5-Year Warranty"];

fn clock_now() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[derive(Properties, PartialEq)]
struct CameraFeedProps {
    label: &'static str,
    location: &'static str,
    timestamp: String,
    delay: f64,
}

#[function_component(CameraFeedCard)]
fn camera_feed_card(props: &CameraFeedProps) -> Html {
    html! {
        <div class="feed-card" style={format!("animation-delay: {}s;", props.delay)}>
            <div class="feed-screen">
                <div class="feed-grid"></div>
                <div class="feed-scanline"></div>
                <span class="feed-rec"><span class="rec-dot"></span>{"REC"}</span>
                <span class="feed-time">{props.timestamp.clone()}</span>
            </div>
            <div class="feed-meta">
                <span class="feed-label">{props.label}</span>
                <span class="feed-location">{props.location}</span>
            </div>
        </div>
    }
}

#[function_component(HomeHero)]
pub fn home_hero() -> Html {
    let mounted = use_state(|| false);
    let timestamp = use_state(clock_now);

    {
        let mounted = mounted.clone();
        let timestamp = timestamp.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                let interval = Interval::new(1_000, move || {
                    timestamp.set(clock_now());
                });
                // Dropping the interval cancels it
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <section class={classes!("hero", mounted.then(|| "mounted"))} id="home">
            <style>{HERO_CSS}</style>
            <div class="hero-backdrop"></div>
            <div class="hero-inner">
                <div class="hero-copy">
                    <p class="hero-kicker"><span class="kicker-line"></span>{"Professional Security Systems"}</p>
                    <h1>
                        {"Protect What"}<br />
                        {"Matters "}<span class="text-shimmer">{"Most."}</span>
                    </h1>
                    <p class="hero-lede">
                        {"Tomsburg Surveillance designs and installs cutting-edge security camera systems for commercial and residential properties. 24/7 monitoring. Expert installation. Total peace of mind."}
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Contact} classes="hero-primary">
                            {"Get a Free Quote →"}
                        </Link<Route>>
                        <Link<Route> to={Route::Services} classes="hero-secondary">
                            {"View Services"}
                        </Link<Route>>
                    </div>
                    <div class="hero-badges">
                        { for HERO_BADGES.iter().map(|badge| html! {
                            <span class="hero-badge">{"✓ "}{*badge}</span>
                        }) }
                    </div>
                    <div class="hero-stats">
                        { for STATS.iter().map(|(value, label)| html! {
                            <div class="hero-stat">
                                <span class="stat-value">{*value}</span>
                                <span class="stat-label">{*label}</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="hero-monitor">
                    <div class="monitor-bar">
                        <span class="monitor-live"><span class="rec-dot"></span>{"LIVE"}</span>
                        <span class="monitor-res">{"4K UHD"}</span>
                    </div>
                    <div class="monitor-grid">
                        { for CAMERA_FEEDS.iter().enumerate().map(|(i, (label, location))| html! {
                            <CameraFeedCard
                                label={*label}
                                location={*location}
                                timestamp={(*timestamp).clone()}
                                delay={0.5 + i as f64 * 0.15}
                            />
                        }) }
                    </div>
                    <div class="monitor-status">
                        <span class="status-dot"></span>{"All systems operational"}
                    </div>
                </div>
            </div>
            <a href="#services" class="hero-scroll">{"Scroll"}</a>
        </section>
    }
}

const HERO_CSS: &str = r#"
.hero {
    position: relative;
    min-height: 100vh;
    padding: 9rem 1.5rem 5rem;
    background: #F4F5F7;
    overflow: hidden;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    background-image:
        radial-gradient(rgba(217, 43, 43, 0.12) 1px, transparent 1px);
    background-size: 28px 28px;
    pointer-events: none;
}

.hero-inner {
    position: relative;
    max-width: 1280px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1.1fr 1fr;
    gap: 3rem;
    align-items: center;
}

.hero-copy > * {
    opacity: 0;
    transform: translateY(18px);
    transition: opacity 0.7s ease, transform 0.7s ease;
}

.hero.mounted .hero-copy > * {
    opacity: 1;
    transform: translateY(0);
}

.hero.mounted .hero-copy > *:nth-child(2) { transition-delay: 0.1s; }
.hero.mounted .hero-copy > *:nth-child(3) { transition-delay: 0.2s; }
.hero.mounted .hero-copy > *:nth-child(4) { transition-delay: 0.3s; }
.hero.mounted .hero-copy > *:nth-child(5) { transition-delay: 0.45s; }
.hero.mounted .hero-copy > *:nth-child(6) { transition-delay: 0.55s; }

.hero-kicker {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    color: #D92B2B;
    text-transform: uppercase;
    letter-spacing: 0.22em;
    font-size: 0.7rem;
    font-weight: 700;
}

.hero h1 {
    font-size: clamp(2.8rem, 6vw, 5.2rem);
    line-height: 0.95;
    font-weight: 900;
    color: #1C1C1F;
    text-transform: uppercase;
    margin: 1rem 0;
}

.text-shimmer {
    color: #D92B2B;
}

.hero-lede {
    color: #6B7280;
    max-width: 520px;
    line-height: 1.7;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    margin: 2rem 0 1.5rem;
}

.hero-primary,
.hero-secondary {
    text-decoration: none;
    text-transform: uppercase;
    font-weight: 800;
    font-size: 0.85rem;
    padding: 1rem 1.6rem;
    border-radius: 12px;
}

.hero-primary {
    background: #D92B2B;
    color: #ffffff;
}

.hero-secondary {
    border: 2px solid #1C1C1F;
    color: #1C1C1F;
}

.hero-badges {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.hero-badge {
    background: #ffffff;
    border: 1px solid #E5E7EB;
    border-radius: 999px;
    padding: 0.4rem 0.8rem;
    font-size: 0.75rem;
    font-weight: 700;
    color: #1C1C1F;
}

.hero-stats {
    display: flex;
    gap: 2.5rem;
    margin-top: 2rem;
}

.hero-stat {
    display: flex;
    flex-direction: column;
}

.stat-value {
    font-size: 2rem;
    font-weight: 900;
    color: #1C1C1F;
}

.stat-label {
    font-size: 0.75rem;
    color: #6B7280;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.hero-monitor {
    background: #1C1C1F;
    border-radius: 20px;
    padding: 1rem;
    box-shadow: 0 30px 60px rgba(28, 28, 31, 0.25);
}

.monitor-bar,
.monitor-status {
    display: flex;
    justify-content: space-between;
    align-items: center;
    color: rgba(255, 255, 255, 0.7);
    font-size: 0.7rem;
    font-weight: 700;
    letter-spacing: 0.15em;
    padding: 0.25rem 0.5rem 0.75rem;
}

.monitor-status {
    justify-content: flex-start;
    gap: 0.5rem;
    padding: 0.75rem 0.5rem 0.25rem;
}

.monitor-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 0.75rem;
}

.feed-card {
    opacity: 0;
    animation: fadeSlideUp 0.7s ease forwards;
    border-radius: 12px;
    overflow: hidden;
    background: #2a2a2e;
}

.feed-screen {
    position: relative;
    aspect-ratio: 16 / 10;
    background: linear-gradient(160deg, #2f3136 0%, #151517 100%);
    overflow: hidden;
}

.feed-grid {
    position: absolute;
    inset: 0;
    background-image:
        linear-gradient(rgba(217, 43, 43, 0.3) 1px, transparent 1px),
        linear-gradient(90deg, rgba(217, 43, 43, 0.3) 1px, transparent 1px);
    background-size: 20px 20px;
    opacity: 0.15;
}

.feed-scanline {
    position: absolute;
    left: 0;
    right: 0;
    height: 2px;
    background: rgba(217, 43, 43, 0.5);
    animation: scan 3s linear infinite;
}

.feed-rec,
.feed-time {
    position: absolute;
    top: 0.5rem;
    font-size: 0.6rem;
    font-weight: 700;
    color: #ffffff;
}

.feed-rec {
    left: 0.5rem;
    display: flex;
    align-items: center;
    gap: 0.3rem;
}

.feed-time {
    right: 0.5rem;
    font-family: monospace;
}

.rec-dot,
.status-dot {
    width: 6px;
    height: 6px;
    border-radius: 50%;
    background: #D92B2B;
    animation: blink 1.2s ease-in-out infinite;
}

.status-dot {
    background: #22c55e;
}

.feed-meta {
    display: flex;
    justify-content: space-between;
    padding: 0.5rem 0.75rem;
    font-size: 0.65rem;
    color: rgba(255, 255, 255, 0.6);
}

.feed-label {
    color: #ffffff;
    font-weight: 800;
}

.hero-scroll {
    position: absolute;
    bottom: 1.5rem;
    left: 50%;
    transform: translateX(-50%);
    color: #6B7280;
    font-size: 0.7rem;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    text-decoration: none;
}

@keyframes fadeSlideUp {
    from { opacity: 0; transform: translateY(16px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes scan {
    from { top: 0; }
    to { top: 100%; }
}

@keyframes blink {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.2; }
}

@media (max-width: 900px) {
    .hero-inner {
        grid-template-columns: 1fr;
    }
}
"#;
