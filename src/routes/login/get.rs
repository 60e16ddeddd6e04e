use crate::routes::imports::*;

#[tracing::instrument(name = "Render login page", skip(state))]
pub async fn login_page(State(state): State<AppState>) -> Html<String> {
    Html(page::login(&state.metadata, FormState::blank()).into_string())
}
