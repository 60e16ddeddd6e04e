pub use crate::{
    components::FormState,
    page,
    startup::AppState,
};
pub use interfacing::{validate, LoginSubmission, LOGIN_FIELDS};

pub use axum::{
    extract::{rejection::FormRejection, Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
