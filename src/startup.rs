use crate::{
    conf::Conf,
    error::{ServeError, ServeResult},
    page::PageMetadata,
    static_routes::{api, root},
    trace::request_trace_layer,
};

use axum::{routing::get, Router};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub metadata: Arc<PageMetadata>,
}

pub fn router() -> Router<AppState> {
    use crate::routes::*;

    let api_router = Router::new().route(api::HEALTH_CHECK, get(health_check));

    Router::new()
        .route(root::LOGIN, get(login_page).post(submit_login))
        .nest(api::SCOPE, api_router)
        .layer(request_trace_layer())
}

pub struct Application {
    port: u16,
    host: String,
    server: std::pin::Pin<Box<dyn std::future::Future<Output = hyper::Result<()>> + Send>>,
}

impl Application {
    pub fn build(conf: &Conf) -> ServeResult<Self> {
        let address = format!("{}:{}", conf.host, conf.port);
        let listener =
            std::net::TcpListener::bind(&address).map_err(|source| ServeError::Bind {
                address: address.clone(),
                source,
            })?;
        let port = listener
            .local_addr()
            .map_err(ServeError::LocalAddr)?
            .port();
        tracing::info!(env = %conf.env, "Listening on http://{}:{}", conf.host, port);

        let state = AppState {
            metadata: Arc::new(PageMetadata {
                title: conf.page.title.clone(),
            }),
        };

        let app = router().with_state(state);

        let server = axum::Server::from_tcp(listener)?.serve(app.into_make_service());

        Ok(Self {
            port,
            host: conf.host.clone(),
            server: Box::pin(server),
        })
    }

    // needs to consume to produce 1 server max
    pub async fn server(self) -> ServeResult<()> {
        Ok(self.server.await?)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}
