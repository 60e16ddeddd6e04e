use super::icon;
use crate::static_routes::root;
use interfacing::{FieldDescriptor, FieldValues, ValidationErrors};
use maud::{html, Markup};

/// What the form shows besides its fields: earlier input and failed rules.
#[derive(Default, Clone, Copy)]
pub struct FormState<'a> {
    pub values: Option<&'a dyn FieldValues>,
    pub errors: Option<&'a ValidationErrors>,
}

impl<'a> FormState<'a> {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn submitted(values: &'a dyn FieldValues, errors: Option<&'a ValidationErrors>) -> Self {
        Self {
            values: Some(values),
            errors,
        }
    }

    // Masked values are never written back into markup.
    fn value(&self, field: &FieldDescriptor) -> Option<&'a str> {
        if field.masked {
            return None;
        }
        self.values.and_then(|values| values.value(field.name))
    }

    fn error(&self, field: &FieldDescriptor) -> Option<&'static str> {
        self.errors.and_then(|errors| errors.message_for(field.name))
    }
}

pub fn login_form(fields: &[FieldDescriptor], state: FormState<'_>) -> Markup {
    html! {
        form.login-form action=(root::LOGIN) method="post" {
            @for field in fields {
                (form_item(field, state))
            }
            div.form-item {
                button.login-form-button type="submit" { "Submit" }
            }
        }
    }
}

fn form_item(field: &FieldDescriptor, state: FormState<'_>) -> Markup {
    let error = state.error(field);

    html! {
        div.form-item.form-item-has-error[error.is_some()] {
            span.input-affix-wrapper {
                span.input-prefix { (icon(field.icon)) }
                input
                    type=(field.input_type())
                    name=(field.name)
                    placeholder=(field.placeholder)
                    aria-label=(field.placeholder)
                    value=[state.value(field)]
                    required[field.required];
            }
            @if let Some(message) = error {
                div.form-item-explain-error role="alert" { (message) }
            }
        }
    }
}
