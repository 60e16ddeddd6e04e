use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{
    filter,
    fmt::MakeWriter,
    layer::{Layer, SubscriberExt},
    EnvFilter, Registry,
};

static CRATE_NAME: &str = "greekosystem";

pub struct TracingSubscriber {
    name: String,
    pretty: bool,
}

impl TracingSubscriber {
    pub fn new<T>(name: T) -> Self
    where
        T: AsRef<str>,
    {
        Self {
            name: name.as_ref().to_string(),
            pretty: false,
        }
    }

    /// Human readable multi-line output instead of bunyan JSON.
    pub fn pretty(mut self, value: bool) -> Self {
        self.pretty = value;
        self
    }

    /// Creates a [`tracing::Subscriber`] configured to format logs with [`Bunyan`]
    ///
    /// [`Bunyan`]: https://docs.rs/tracing-bunyan-formatter/latest/tracing_bunyan_formatter/
    pub fn build<Sink>(self, sink: Sink) -> Box<dyn Subscriber + Sync + Send>
    where
        Sink: for<'a> MakeWriter<'a> + Sync + Send + 'static,
    {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let target_filter = filter::Targets::new()
            .with_default(tracing::Level::INFO)
            .with_target(CRATE_NAME, tracing::Level::DEBUG)
            .with_target("tower_http::trace", tracing::Level::INFO)
            .with_target("mio::poll", filter::LevelFilter::OFF);

        if self.pretty {
            Box::new(
                Registry::default().with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(sink)
                        .with_filter(target_filter)
                        .with_filter(env_filter),
                ),
            )
        } else {
            let skip_fields = ["file", "line"];

            let formatting_layer = BunyanFormattingLayer::new(self.name, sink)
                .skip_fields(skip_fields.into_iter().map(|s| s.to_owned()))
                .expect("unable to build the bunyan formatting layer");

            Box::new(
                Registry::default().with(JsonStorageLayer).with(
                    formatting_layer
                        .with_filter(target_filter)
                        .with_filter(env_filter),
                ),
            )
        }
    }
}

/// Sets `subscriber` as the global default [`tracing::Subscriber`].
pub fn init_global_default(subscriber: impl Subscriber + Sync + Send + 'static) {
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}
