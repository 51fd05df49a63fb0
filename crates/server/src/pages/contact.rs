use handlebars::RenderError;
use serde::Serialize;
use shared::{
    content::{ContactChannel, Office, CONTACT_CHANNELS, OFFICES, PRIMARY_PHONE, SERVICE_OPTIONS},
    domain::{FieldName, FormFields, ValidationErrors},
};

use super::{Templates, CONTACT};

/// What the contact form shows: the values to prefill, inline errors, and
/// whether the success banner is up.
#[derive(Debug, Clone, Default)]
pub struct ContactView {
    pub fields: FormFields,
    pub errors: ValidationErrors,
    pub submitted: bool,
}

impl ContactView {
    pub fn rejected(fields: FormFields, errors: ValidationErrors) -> Self {
        Self {
            fields,
            errors,
            submitted: false,
        }
    }

    pub fn accepted() -> Self {
        Self {
            submitted: true,
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
struct InputContext<'a> {
    name: FieldName,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: &'a str,
    error: Option<&'a str>,
}

#[derive(Serialize)]
struct ServiceOption<'a> {
    value: &'a str,
    selected: bool,
}

#[derive(Serialize)]
struct SelectContext<'a> {
    options: Vec<ServiceOption<'a>>,
    error: Option<&'a str>,
}

#[derive(Serialize)]
struct TextAreaContext<'a> {
    value: &'a str,
    error: Option<&'a str>,
}

#[derive(Serialize)]
struct ContactContext<'a> {
    channels: &'static [ContactChannel],
    offices: &'static [Office],
    phone: &'static str,
    submitted: bool,
    rows: [[InputContext<'a>; 2]; 2],
    service: SelectContext<'a>,
    message: TextAreaContext<'a>,
}

impl ContactView {
    fn input(
        &self,
        name: FieldName,
        label: &'static str,
        input_type: &'static str,
        placeholder: &'static str,
    ) -> InputContext<'_> {
        InputContext {
            name,
            label,
            input_type,
            placeholder,
            value: self.fields.get(name),
            error: self.errors.get(name),
        }
    }
}

pub fn render_contact(templates: &Templates, view: &ContactView) -> Result<String, RenderError> {
    let current_service = view.fields.get(FieldName::Service);
    let context = ContactContext {
        channels: &CONTACT_CHANNELS,
        offices: &OFFICES,
        phone: PRIMARY_PHONE,
        submitted: view.submitted,
        rows: [
            [
                view.input(FieldName::Name, "Full Name *", "text", "John Doe"),
                view.input(FieldName::Email, "Email Address *", "email", "john@example.com"),
            ],
            [
                view.input(FieldName::Phone, "Phone Number", "tel", "+1 (555) 123-4567"),
                view.input(FieldName::Company, "Company Name", "text", "Your Company"),
            ],
        ],
        service: SelectContext {
            options: SERVICE_OPTIONS
                .iter()
                .map(|option| ServiceOption {
                    value: *option,
                    selected: *option == current_service,
                })
                .collect(),
            error: view.errors.get(FieldName::Service),
        },
        message: TextAreaContext {
            value: view.fields.get(FieldName::Message),
            error: view.errors.get(FieldName::Message),
        },
    };
    templates.render(CONTACT, &context)
}
