use crate::routes::imports::*;

/// Re-renders the login page with the outcome of the required-field rules.
///
/// Nothing is done with a complete submission besides showing the form again.
#[tracing::instrument(
    name = "Validate login form",
    skip(state, maybe_form),
    fields(username = tracing::field::Empty, missing = tracing::field::Empty)
)]
#[axum_macros::debug_handler]
pub async fn submit_login(
    State(state): State<AppState>,
    maybe_form: Result<Form<LoginSubmission>, FormRejection>,
) -> Response {
    let submission = match maybe_form {
        Ok(Form(submission)) => submission,
        Err(rejection) => {
            tracing::warn!("Form is rejected: {}", rejection);
            LoginSubmission::default()
        }
    };

    if let Some(username) = &submission.username {
        tracing::Span::current().record("username", &tracing::field::display(username));
    }

    let outcome = validate(LOGIN_FIELDS, &submission);

    let (status, errors) = match &outcome {
        Ok(()) => (StatusCode::OK, None),
        Err(errors) => {
            tracing::Span::current().record("missing", &tracing::field::display(errors));
            (StatusCode::UNPROCESSABLE_ENTITY, Some(errors))
        }
    };

    let html = page::login(&state.metadata, FormState::submitted(&submission, errors));

    (status, Html(html.into_string())).into_response()
}
