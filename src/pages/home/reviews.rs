use yew::prelude::*;

use crate::config::SECTION_IN_VIEW_THRESHOLD;
use crate::content::{average_rating, marquee_rows, Review, REVIEWS};
use crate::hooks::{reveal_style, use_in_view};

fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn review_card(review: &Review) -> Html {
    html! {
        <figure class="review-card">
            <div class="review-head">
                <span class="review-avatar" style={format!("background: {};", review.color)}>
                    {review.initials}
                </span>
                <div>
                    <p class="review-name">{review.name}</p>
                    <p class="review-role">{format!("{} · {}", review.role, review.company)}</p>
                </div>
            </div>
            <p class="review-stars" aria-label={format!("{} out of 5 stars", review.rating)}>
                {stars(review.rating)}
            </p>
            <blockquote>{review.text}</blockquote>
            <figcaption class="review-date">{review.date}</figcaption>
        </figure>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), SECTION_IN_VIEW_THRESHOLD);
    let rows = marquee_rows();

    html! {
        <section ref={node} class="reviews-section" id="testimonials">
            <style>{REVIEWS_CSS}</style>
            <div class="section-inner">
                <div class="section-header centered" style={reveal_style(in_view, 0.0, 18)}>
                    <p class="section-kicker"><span class="kicker-line"></span>{"Testimonials"}</p>
                    <h2>{"Trusted by "}<span class="accent">{"500+ Clients."}</span></h2>
                    <p class="review-summary">
                        <span class="review-stars">{stars(5)}</span>
                        {format!(" {:.1} average from {} verified reviews", average_rating(), REVIEWS.len())}
                    </p>
                </div>
            </div>

            <div class="marquee" style={reveal_style(in_view, 0.2, 24)}>
                { for rows.iter().enumerate().map(|(i, row)| html! {
                    <div class={classes!("marquee-row", (i % 2 == 1).then(|| "reverse"))}>
                        // Rendered twice so the strip loops without a gap
                        <div class="marquee-track">
                            { for row.iter().chain(row.iter()).map(review_card) }
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

const REVIEWS_CSS: &str = r#"
.reviews-section {
    background: #F4F5F7;
    padding: 6rem 0;
    overflow: hidden;
}

.review-summary {
    color: #6B7280;
    font-weight: 600;
}

.marquee {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    mask-image: linear-gradient(to right, transparent, #000 8%, #000 92%, transparent);
}

.marquee-row {
    overflow: hidden;
}

.marquee-track {
    display: flex;
    gap: 1.5rem;
    width: max-content;
    animation: marquee 45s linear infinite;
}

.marquee-row.reverse .marquee-track {
    animation-direction: reverse;
}

.marquee-row:hover .marquee-track {
    animation-play-state: paused;
}

.review-card {
    width: 360px;
    margin: 0;
    background: #ffffff;
    border: 1px solid #E5E7EB;
    border-radius: 16px;
    padding: 1.5rem;
}

.review-head {
    display: flex;
    gap: 0.75rem;
    align-items: center;
}

.review-avatar {
    width: 42px;
    height: 42px;
    border-radius: 50%;
    color: #ffffff;
    font-weight: 800;
    display: flex;
    align-items: center;
    justify-content: center;
}

.review-name {
    margin: 0;
    font-weight: 800;
    color: #1C1C1F;
}

.review-role {
    margin: 0;
    font-size: 0.75rem;
    color: #6B7280;
}

.review-stars {
    color: #D92B2B;
    letter-spacing: 0.1em;
}

.review-card blockquote {
    margin: 0.5rem 0 1rem;
    color: #1C1C1F;
    line-height: 1.6;
    font-size: 0.9rem;
}

.review-date {
    font-size: 0.7rem;
    color: #6B7280;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

@keyframes marquee {
    from { transform: translateX(0); }
    to { transform: translateX(-50%); }
}
"#;

#[cfg(test)]
mod tests {
    use super::stars;

    #[test]
    fn star_strip_is_always_five_wide() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
