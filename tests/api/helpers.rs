use greekosystem::conf::{Conf, Env, EnvConf};
use greekosystem::startup::Application;
use greekosystem::static_routes::{api, root};
use greekosystem::telemetry;
use once_cell::sync::Lazy;
use reqwest::Response;

static TRACING: Lazy<()> = Lazy::new(|| {
    let subscriber = telemetry::TracingSubscriber::new("testing");

    if std::env::var("TEST_LOG").is_ok() {
        telemetry::init_global_default(subscriber.build(std::io::stdout));
    } else {
        telemetry::init_global_default(subscriber.build(std::io::sink));
    };
});

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let conf = Conf::new(Env::Local, EnvConf::test_default());

    let application = Application::build(&conf).expect("Failed to build application.");

    let address = format!("http://{}:{}", application.host(), application.port());

    let _ = tokio::spawn(application.server());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address,
        api_client,
    }
}

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_login(&self) -> Response {
        self.api_client
            .get(format!("{}{}", self.address, root::LOGIN))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login(&self, body: &[(&str, &str)]) -> Response {
        self.api_client
            .post(format!("{}{}", self.address, root::LOGIN))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_health_check(&self) -> Response {
        self.api_client
            .get(format!("{}{}{}", self.address, api::SCOPE, api::HEALTH_CHECK))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub const REQUIRED_MESSAGES: [&str; 4] = [
    "Please input your Username!",
    "Please input your email!",
    "Please input your phone number!",
    "Please input your Password!",
];

pub const FILLED_FORM: [(&str, &str); 4] = [
    ("username", "zeus"),
    ("email", "zeus@olymp.gr"),
    ("phone number", "+30 210 0000000"),
    ("password", "thunderbolt"),
];
