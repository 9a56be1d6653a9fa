use std::{
    cell::RefCell,
    net::TcpListener,
    sync::{Mutex, Once},
};

use reqwest::{Client, Url};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use crate::{
    error::LoadError,
    source::{FragmentSource, NAVBAR_PATH},
};

/// Client ignoring any proxy configured in the environment, since tests talk to loopback.
pub fn test_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}

/// Start a site answering `GET /navbar.html` exactly once with `response`.
///
/// The expectation is checked when the returned server is dropped.
pub async fn navbar_site(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(NAVBAR_PATH))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

pub fn site_url(server: &MockServer) -> Url {
    Url::parse(&server.uri()).unwrap()
}

/// URL of a loopback site on which nothing listens.
pub fn closed_port_site() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/")).unwrap()
}

/// In-memory fragment source, answering every request with the same markup or status.
pub struct StaticSource {
    answer: Result<String, u16>,
    requested: Mutex<Vec<String>>,
}

impl StaticSource {
    pub fn markup(markup: &str) -> Self {
        Self {
            answer: Ok(markup.to_string()),
            requested: Mutex::default(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            answer: Err(status),
            requested: Mutex::default(),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl FragmentSource for StaticSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        self.requested.lock().unwrap().push(path.to_string());
        match &self.answer {
            Ok(markup) => Ok(markup.clone()),
            Err(status) => Err(LoadError::Fetch { status: *status }),
        }
    }
}

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            RECORDS.with_borrow_mut(|r| r.push((record.level(), record.args().to_string())));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Start recording what this crate logs on the current thread, forgetting earlier records.
pub fn capture_logs() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with_borrow_mut(Vec::clear);
}

/// Messages logged at `level` since the last call to [`capture_logs`].
pub fn logged(level: log::Level) -> Vec<String> {
    RECORDS.with_borrow(|r| {
        r.iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}

pub fn logged_errors() -> Vec<String> {
    logged(log::Level::Error)
}

/// Every message logged since the last call to [`capture_logs`], in order.
pub fn logged_all() -> Vec<String> {
    RECORDS.with_borrow(|r| r.iter().map(|(_, msg)| msg.clone()).collect())
}
