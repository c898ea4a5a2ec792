use std::sync::LazyLock;

use cookieless_analytics::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

// ensure the `tracing` task is only initialized once using `LazyLock`
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub _port: u16,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_visit<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(format!("{}/log", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    // the older page scripts post to /post instead of /log
    pub async fn post_visit_legacy<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(format!("{}/post", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_stats(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/get", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_stats_legacy(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/stats", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn generic_request(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/health_check", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    LazyLock::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.port = 0;
        c
    };

    // launch as background task
    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");

    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address: format!("http://localhost:{application_port}"),
        _port: application_port,
        api_client: client,
    }
}

pub fn sample_payload(fingerprint: &str) -> serde_json::Value {
    serde_json::json!({
        "fingerprint": fingerprint,
        "screen": "1920x1080",
        "userAgent": "Mozilla/5.0 (X11; Linux x86_64) test-agent"
    })
}
