#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use sheetmail::config::{Config, MailConfig, SheetsConfig, DEFAULT_CORS_ORIGINS};
use sheetmail::notify::{Notifier, NotifyError};
use sheetmail::sheets::{AppendSummary, RecordStore, Row, StoreError};
use sheetmail::state::AppState;
use sheetmail::submission::Submission;

pub const HEADER_ROW: [&str; 6] = [
    "Nome Completo",
    "Email",
    "Telefone",
    "Servico de Interesse",
    "Mensagem",
    "Data de Envio",
];

/// In-memory sheet. Starts with a header row like the real spreadsheet.
#[derive(Default)]
pub struct FakeStore {
    pub rows: Mutex<Vec<Vec<String>>>,
    pub fail: bool,
}

impl FakeStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn with_rows(n: usize) -> Self {
        let rows = (1..=n)
            .map(|i| {
                vec![
                    format!("Cliente {i}"),
                    format!("c{i}@x.com"),
                    format!("{i}{i}{i}"),
                    "Pintura".to_string(),
                    String::new(),
                    format!("0{}/01/2024 10:00:00", i % 10),
                ]
            })
            .collect();
        Self {
            rows: Mutex::new(rows),
            fail: false,
        }
    }

    pub fn appended(&self) -> Vec<Vec<String>> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for FakeStore {
    async fn append(&self, row: &[String]) -> Result<AppendSummary, StoreError> {
        if self.fail {
            return Err(StoreError::Write("quota exceeded".to_string()));
        }
        self.rows.lock().unwrap().push(row.to_vec());
        Ok(AppendSummary {
            updated_rows: 1,
            updated_cells: row.len() as u64,
        })
    }

    async fn fetch_all(&self) -> Result<Vec<Row>, StoreError> {
        if self.fail {
            return Err(StoreError::Read("quota exceeded".to_string()));
        }
        let mut all: Vec<Row> = vec![HEADER_ROW.iter().map(|h| json!(h)).collect()];
        all.extend(
            self.rows
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.iter().map(|c| json!(c)).collect::<Row>()),
        );
        Ok(all)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NotifierMode {
    #[default]
    Deliver,
    Reject,
    Panic,
}

#[derive(Default)]
pub struct FakeNotifier {
    pub sent: Mutex<Vec<Submission>>,
    pub mode: NotifierMode,
}

impl FakeNotifier {
    pub fn new(mode: NotifierMode) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            mode,
        }
    }

    pub fn sent(&self) -> Vec<Submission> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn send(&self, submission: &Submission) -> Result<(), NotifyError> {
        match self.mode {
            NotifierMode::Deliver => {
                self.sent.lock().unwrap().push(submission.clone());
                Ok(())
            }
            NotifierMode::Reject => Err(NotifyError::Delivery("535 authentication failed".into())),
            NotifierMode::Panic => panic!("mail transport blew up"),
        }
    }
}

pub fn test_config(debug: bool) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        debug,
        log_level: "warn".to_string(),
        max_body_size: 16 * 1024,
        cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        sheets: SheetsConfig {
            credentials_file: None,
            spreadsheet_id: None,
            append_range: "Página1!A1".to_string(),
            read_range: "Página1!A:F".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
        },
        mail: MailConfig {
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: 2525,
            sender: Some("site@example.com".to_string()),
            password: Some("app-password".to_string()),
            recipient: Some("owner@example.com".to_string()),
        },
    }
}

/// A running server wired to in-memory collaborators.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Option<Arc<FakeStore>>,
    pub notifier: Arc<FakeNotifier>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a JSON body to the contact endpoint, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/excel/salvar"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a raw body with the given content type, return (body, status).
    pub async fn submit_raw(&self, content_type: &str, data: &'static str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/excel/salvar"))
            .header("content-type", content_type)
            .body(data)
            .send()
            .await
            .expect("submit raw failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub fn stored_rows(&self) -> Vec<Vec<String>> {
        self.store.as_ref().map(|s| s.appended()).unwrap_or_default()
    }
}

pub struct Options {
    pub store: Option<FakeStore>,
    pub notifier: NotifierMode,
    pub debug: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            store: Some(FakeStore::default()),
            notifier: NotifierMode::Deliver,
            debug: false,
        }
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(Options::default()).await
}

pub async fn spawn_app_with(opts: Options) -> TestApp {
    let store = opts.store.map(Arc::new);
    let notifier = Arc::new(FakeNotifier::new(opts.notifier));

    let state = Arc::new(AppState {
        config: test_config(opts.debug),
        store: store.clone().map(|s| s as Arc<dyn RecordStore>),
        notifier: notifier.clone(),
    });

    let app = sheetmail::build_app(state);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        store,
        notifier,
    }
}

pub fn valid_submission() -> Value {
    json!({
        "Nome Completo": "Ana",
        "Email": "a@x.com",
        "Telefone": "111",
        "Servico de Interesse": "Pintura",
    })
}
