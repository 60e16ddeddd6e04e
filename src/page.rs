use crate::components::{login_form, FormState};
use interfacing::LOGIN_FIELDS;
use maud::{html, Markup, DOCTYPE};

#[derive(Debug, Clone)]
pub struct PageMetadata {
    pub title: String,
}

pub fn document(metadata: &PageMetadata, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (metadata.title) }
            }
            body {
                (body)
            }
        }
    }
}

pub fn login(metadata: &PageMetadata, state: FormState<'_>) -> Markup {
    document(metadata, login_form(LOGIN_FIELDS, state))
}
