use handlebars::RenderError;
use serde::Serialize;
use shared::content::NAV_ITEMS;

use super::{Templates, LAYOUT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Contact,
    NotFound,
}

impl Page {
    fn href(self) -> Option<&'static str> {
        match self {
            Page::Home => Some("/"),
            Page::About => Some("/about"),
            Page::Contact => Some("/contact"),
            Page::NotFound => None,
        }
    }
}

#[derive(Serialize)]
struct NavLink {
    href: &'static str,
    label: &'static str,
    current: bool,
}

#[derive(Serialize)]
struct LayoutContext<'a> {
    brand: &'a str,
    title: &'a str,
    nav: Vec<NavLink>,
    content: &'a str,
}

/// Wraps already-rendered page content in the document shell and the
/// floating navbar.
pub fn render_page(
    templates: &Templates,
    brand: &str,
    page: Page,
    title: &str,
    content: &str,
) -> Result<String, RenderError> {
    let active = page.href();
    let nav = NAV_ITEMS
        .iter()
        .map(|item| NavLink {
            href: item.href,
            label: item.label,
            current: Some(item.href) == active,
        })
        .collect();
    templates.render(
        LAYOUT,
        &LayoutContext {
            brand,
            title,
            nav,
            content,
        },
    )
}
