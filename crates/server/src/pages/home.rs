use handlebars::RenderError;
use serde::Serialize;
use shared::content::{
    Partner, ServiceHighlight, Testimonial, COMPANY_NAME, PARTNERS, PRIMARY_EMAIL, PRIMARY_PHONE,
    SERVICE_HIGHLIGHTS, TESTIMONIALS,
};

use super::{Templates, HOME};

/// Client-side rotation period for the testimonial carousel.
const ROTATE_MS: u64 = 5000;

/// Index of the testimonial to show first; anything out of range falls
/// back to the first one.
pub fn testimonial_index(requested: Option<usize>) -> usize {
    requested.filter(|i| *i < TESTIMONIALS.len()).unwrap_or(0)
}

#[derive(Serialize)]
struct CarouselDot {
    index: usize,
    number: usize,
    current: bool,
}

#[derive(Serialize)]
struct HomeContext {
    partners: &'static [Partner],
    services: &'static [ServiceHighlight],
    testimonial: &'static Testimonial,
    stars: String,
    rotate_ms: u64,
    dots: Vec<CarouselDot>,
    company: &'static str,
    email: &'static str,
    phone: &'static str,
}

pub fn render_home(templates: &Templates, testimonial: usize) -> Result<String, RenderError> {
    let current = testimonial_index(Some(testimonial));
    let shown = &TESTIMONIALS[current];
    let context = HomeContext {
        partners: &PARTNERS,
        services: &SERVICE_HIGHLIGHTS,
        testimonial: shown,
        stars: "\u{2605}".repeat(usize::from(shown.rating)),
        rotate_ms: ROTATE_MS,
        dots: (0..TESTIMONIALS.len())
            .map(|index| CarouselDot {
                index,
                number: index + 1,
                current: index == current,
            })
            .collect(),
        company: COMPANY_NAME,
        email: PRIMARY_EMAIL,
        phone: PRIMARY_PHONE,
    };
    templates.render(HOME, &context)
}
