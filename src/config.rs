
/// Below this offset the header is always shown.
pub const NAV_REVEAL_OFFSET: f64 = 80.0;

/// Past this offset the header switches to its condensed, shadowed style.
pub const NAV_SCROLLED_OFFSET: f64 = 20.0;

pub const SECTION_IN_VIEW_THRESHOLD: f64 = 0.1;
pub const DENSE_SECTION_IN_VIEW_THRESHOLD: f64 = 0.08;
pub const HEADER_IN_VIEW_THRESHOLD: f64 = 0.2;

pub const BUSINESS_NAME: &str = "Tomsburg Surveillance";
pub const PHONE_DISPLAY: &str = "(555) 123-4567";
pub const PHONE_HREF: &str = "tel:+15551234567";
pub const EMAIL: &str = "info@tomsburg.com";
pub const EMAIL_HREF: &str = "mailto:info@tomsburg.com";
pub const LOGO_SRC: &str = "/images/toms_logo600x600.png";

pub const RELEASE_SUBMIT_DELAY_MS: u32 = 1500;

#[cfg(debug_assertions)]
pub fn submit_delay_ms() -> u32 {
    300  // Keep local iteration snappy
}

#[cfg(not(debug_assertions))]
pub fn submit_delay_ms() -> u32 {
    RELEASE_SUBMIT_DELAY_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_delay_never_exceeds_release_wait() {
        assert!(submit_delay_ms() > 0);
        assert!(submit_delay_ms() <= RELEASE_SUBMIT_DELAY_MS);
        #[cfg(not(debug_assertions))]
        assert_eq!(submit_delay_ms(), RELEASE_SUBMIT_DELAY_MS);
    }
}
