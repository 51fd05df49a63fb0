use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{StatusCode, Uri},
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use shared::{
    domain::{FormFields, ValidationErrors},
    error::{ApiError, ErrorCode},
    protocol::{ContactAck, Lead, CONTACT_API_ROUTE},
};
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{debug, info};

mod config;
mod pages;

use config::load_settings;
use pages::{
    about::{render_about, AboutTab},
    contact::{render_contact, ContactView},
    home::{render_home, testimonial_index},
    layout::{render_page, Page},
    render_not_found, PageError, Templates,
};

struct AppState {
    brand_name: String,
    templates: Templates,
    leads: broadcast::Sender<Lead>,
}

impl AppState {
    fn new(brand_name: impl Into<String>) -> Result<Self, handlebars::TemplateError> {
        let (leads, _) = broadcast::channel(64);
        Ok(Self {
            brand_name: brand_name.into(),
            templates: Templates::new()?,
            leads,
        })
    }

    fn page(&self, page: Page, title: &str, content: &str) -> Result<Html<String>, PageError> {
        Ok(Html(render_page(
            &self.templates,
            &self.brand_name,
            page,
            title,
            content,
        )?))
    }

    /// Records an accepted submission and hands it to whoever is listening
    /// for leads. Delivery itself happens outside this server.
    fn accept_lead(&self, fields: FormFields) -> Lead {
        let lead = Lead::accept(fields);
        info!(
            lead_id = %lead.lead_id,
            service = %lead.fields.service,
            has_company = !lead.fields.company.trim().is_empty(),
            "contact lead accepted"
        );
        if self.leads.send(lead.clone()).is_err() {
            debug!(lead_id = %lead.lead_id, "no lead subscribers attached");
        }
        lead
    }
}

// Both take raw strings so a garbled query renders the default view
// instead of a 400.
#[derive(Debug, Deserialize)]
struct HomeQuery {
    testimonial: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AboutQuery {
    tab: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings()?;
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let state = AppState::new(settings.brand_name.clone())?;
    let app = build_router(Arc::new(state), settings.max_body_bytes);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, brand = %settings.brand_name, "site server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(home))
        .route("/about", get(about))
        .route("/contact", get(contact_page).post(submit_contact_form))
        .route(CONTACT_API_ROUTE, post(submit_contact_api))
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn home(
    State(state): State<Arc<AppState>>,
    Query(q): Query<HomeQuery>,
) -> Result<Html<String>, PageError> {
    let requested = q.testimonial.and_then(|raw| raw.parse().ok());
    let content = render_home(&state.templates, testimonial_index(requested))?;
    state.page(Page::Home, "Home", &content)
}

async fn about(
    State(state): State<Arc<AppState>>,
    Query(q): Query<AboutQuery>,
) -> Result<Html<String>, PageError> {
    let tab = AboutTab::from_query(q.tab.as_deref());
    let content = render_about(&state.templates, tab)?;
    state.page(Page::About, "About", &content)
}

async fn contact_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let content = render_contact(&state.templates, &ContactView::default())?;
    state.page(Page::Contact, "Contact", &content)
}

async fn submit_contact_form(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<FormFields>,
) -> Result<(StatusCode, Html<String>), PageError> {
    let (status, view) = match check_fields(&fields) {
        Ok(()) => {
            state.accept_lead(fields);
            (StatusCode::OK, ContactView::accepted())
        }
        Err(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactView::rejected(fields, errors),
        ),
    };
    let content = render_contact(&state.templates, &view)?;
    Ok((status, state.page(Page::Contact, "Contact", &content)?))
}

async fn submit_contact_api(
    State(state): State<Arc<AppState>>,
    body: Result<Json<FormFields>, JsonRejection>,
) -> Result<Json<ContactAck>, (StatusCode, Json<ApiError>)> {
    let Json(fields) = body.map_err(|rejection| {
        (
            rejection.status(),
            Json(ApiError::new(ErrorCode::MalformedBody, rejection.body_text())),
        )
    })?;
    check_fields(&fields).map_err(|errors| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiError::invalid_form(errors)),
        )
    })?;
    Ok(Json(state.accept_lead(fields).ack()))
}

fn check_fields(fields: &FormFields) -> Result<(), ValidationErrors> {
    let errors = fields.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        debug!(errors = errors.len(), "contact submission failed validation");
        Err(errors)
    }
}

async fn not_found(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<(StatusCode, Html<String>), PageError> {
    let content = render_not_found(&state.templates, uri.path())?;
    Ok((
        StatusCode::NOT_FOUND,
        state.page(Page::NotFound, "Not Found", &content)?,
    ))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
