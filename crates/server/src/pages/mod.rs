//! Server-rendered markup for the three site pages.
//!
//! Markup lives in `templates/*.hbs` and is rendered through handlebars,
//! which HTML-escapes every `{{value}}` interpolation. Only the layout's
//! `{{{content}}}` slot takes pre-rendered markup.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;
use tracing::error;

pub mod about;
pub mod contact;
pub mod home;
pub mod layout;

const LAYOUT: &str = "layout";
const HOME: &str = "home";
const ABOUT: &str = "about";
const CONTACT: &str = "contact";
const NOT_FOUND: &str = "not_found";

/// Registered page templates, shared by every request.
pub struct Templates {
    handlebars: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut hb = Handlebars::new();
        hb.register_template_string(LAYOUT, include_str!("../../templates/layout.hbs"))?;
        hb.register_template_string(HOME, include_str!("../../templates/home.hbs"))?;
        hb.register_template_string(ABOUT, include_str!("../../templates/about.hbs"))?;
        hb.register_template_string(CONTACT, include_str!("../../templates/contact.hbs"))?;
        hb.register_template_string(NOT_FOUND, include_str!("../../templates/not_found.hbs"))?;
        Ok(Self { handlebars: hb })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        self.handlebars.render(name, data)
    }
}

/// A template failed to render. Logged and answered with a bare 500.
#[derive(Debug)]
pub struct PageError(RenderError);

impl From<RenderError> for PageError {
    fn from(err: RenderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "page render failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

#[derive(Serialize)]
struct NotFoundContext<'a> {
    path: &'a str,
}

pub fn render_not_found(templates: &Templates, path: &str) -> Result<String, RenderError> {
    templates.render(NOT_FOUND, &NotFoundContext { path })
}

#[cfg(test)]
pub(crate) fn test_templates() -> Templates {
    Templates::new().expect("templates register")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_parses() {
        let templates = test_templates();
        for name in [LAYOUT, HOME, ABOUT, CONTACT, NOT_FOUND] {
            assert!(templates.handlebars.has_template(name), "{name}");
        }
    }

    #[test]
    fn not_found_escapes_the_requested_path() {
        let html = render_not_found(&test_templates(), r#"/<script>alert("x")</script>"#)
            .expect("render");
        assert!(html.contains("/&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
