use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::config::BUSINESS_NAME;
use crate::pages::home::{
    contact::ContactSection, faq::FaqSection, hero::HomeHero, how_it_works::HowItWorks,
    reviews::Testimonials, services::HomeServices, why_choose_us::WhyChooseUs,
};
use crate::Route;

fn page_title(page: &str) -> String {
    format!("{} | {}", page, BUSINESS_NAME)
}

#[function_component(Home)]
pub fn home() -> Html {
    use_title(page_title("Security Cameras & Access Control"));

    html! {
        <>
            <HomeHero />
            <HomeServices />
            <HowItWorks />
            <WhyChooseUs />
            <Testimonials />
            <FaqSection />
            <ContactSection />
        </>
    }
}

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    use_title(page_title("Services"));

    html! {
        <>
            <div class="page-spacer"></div>
            <HomeServices />
            <HowItWorks />
        </>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    use_title(page_title("Contact"));

    html! {
        <>
            <div class="page-spacer"></div>
            <ContactSection />
            <FaqSection />
        </>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_title(page_title("Page Not Found"));

    html! {
        <section class="not-found">
            <p class="not-found-code">{"404"}</p>
            <h1>{"Nothing to see here."}</h1>
            <p class="section-lede">{"The page you were looking for has moved or never existed."}</p>
            <Link<Route> to={Route::Home} classes="not-found-home">
                {"Back to Home"}
            </Link<Route>>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::page_title;

    #[test]
    fn titles_carry_business_name() {
        assert_eq!(page_title("Contact"), "Contact | Tomsburg Surveillance");
    }
}
