/// Reset, fonts and the section scaffolding shared by every page.
pub const BASE_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Barlow:wght@400;600;700;800;900&display=swap');

*,
*::before,
*::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: 'Barlow', system-ui, -apple-system, sans-serif;
    background: #ffffff;
    color: #1C1C1F;
    -webkit-font-smoothing: antialiased;
}

img {
    max-width: 100%;
    display: block;
}

button {
    font-family: inherit;
}

.site-main {
    min-height: 100vh;
}

.section-inner {
    max-width: 1200px;
    margin: 0 auto;
}

.section-header {
    margin-bottom: 3.5rem;
    max-width: 640px;
}

.section-header.centered {
    margin-left: auto;
    margin-right: auto;
    text-align: center;
}

.section-header h2 {
    font-size: clamp(2.4rem, 5vw, 3.8rem);
    line-height: 0.95;
    font-weight: 900;
    text-transform: uppercase;
    color: #1C1C1F;
    margin: 1rem 0;
}

.section-kicker {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    margin: 0;
    font-size: 0.7rem;
    font-weight: 800;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    color: #D92B2B;
}

.section-header.centered .section-kicker {
    justify-content: center;
}

.kicker-line {
    display: inline-block;
    width: 32px;
    height: 2px;
    background: #D92B2B;
}

.accent {
    color: #D92B2B;
}

.section-lede {
    color: #6B7280;
    font-size: 1rem;
    line-height: 1.7;
    max-width: 560px;
}

.section-header.centered .section-lede {
    margin-left: auto;
    margin-right: auto;
}

.not-found {
    min-height: 70vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 8rem 1.5rem 4rem;
    gap: 1rem;
}

.not-found-code {
    font-size: clamp(6rem, 18vw, 12rem);
    font-weight: 900;
    line-height: 1;
    color: rgba(28, 28, 31, 0.08);
    margin: 0;
}

.not-found h1 {
    font-size: 2rem;
    font-weight: 900;
    text-transform: uppercase;
    margin: 0;
}

.not-found-home {
    background: #D92B2B;
    color: #ffffff;
    text-decoration: none;
    font-weight: 800;
    text-transform: uppercase;
    padding: 0.9rem 1.5rem;
    border-radius: 12px;
}

.page-spacer {
    height: 5rem;
}

@media (prefers-reduced-motion: reduce) {
    *,
    *::before,
    *::after {
        animation-duration: 0.01ms !important;
        transition-duration: 0.01ms !important;
    }
}
"#;
