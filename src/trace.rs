// Request tracing
//

use hyper::http::HeaderValue;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Sequential `x-request-id` values, shared across clones of the layer.
#[derive(Clone, Default)]
pub struct RequestIdProducer {
    counter: Arc<AtomicU64>,
}

impl tower_http::request_id::MakeRequestId for RequestIdProducer {
    fn make_request_id<B>(
        &mut self,
        _request: &hyper::http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let request_id = self.counter.fetch_add(1, Ordering::SeqCst);

        Some(tower_http::request_id::RequestId::new(HeaderValue::from(
            request_id,
        )))
    }
}

type MakeRequestSpan = fn(&hyper::Request<hyper::Body>) -> tracing::Span;

fn make_request_span(request: &hyper::Request<hyper::Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|id| id.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        version = ?request.version(),
        request_id = %request_id,
    )
}

pub fn request_trace_layer() -> tower::ServiceBuilder<
    tower::layer::util::Stack<
        tower_http::request_id::PropagateRequestIdLayer,
        tower::layer::util::Stack<
            tower_http::trace::TraceLayer<
                tower_http::classify::SharedClassifier<
                    tower_http::classify::ServerErrorsAsFailures,
                >,
                MakeRequestSpan,
            >,
            tower::layer::util::Stack<
                tower_http::request_id::SetRequestIdLayer<RequestIdProducer>,
                tower::layer::util::Identity,
            >,
        >,
    >,
> {
    use tower_http::{
        trace::{DefaultOnRequest, DefaultOnResponse},
        LatencyUnit, ServiceBuilderExt,
    };

    tower::ServiceBuilder::new()
        .set_x_request_id(RequestIdProducer::default())
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(make_request_span as MakeRequestSpan)
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(tracing::Level::INFO)
                        .latency_unit(LatencyUnit::Seconds),
                ),
        )
        .propagate_x_request_id()
}
