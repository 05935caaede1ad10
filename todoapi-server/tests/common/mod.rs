//! Test harness: a disposable PostgreSQL container behind the app router.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use sqlx::PgPool;
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::testcontainers::runners::AsyncRunner;
use testcontainers_modules::testcontainers::ContainerAsync;
use tower::ServiceExt;

use todoapi_server::db::{schema, DbConnection};
use todoapi_server::{
    build_router, AppState, ConnectionFactory, ConnectionOptions, DbError, PgConnectionFactory,
};

/// Connection factory backed by a container that lives as long as it does.
pub struct ContainerConnectionFactory {
    inner: PgConnectionFactory,
    _container: ContainerAsync<Postgres>,
}

impl ContainerConnectionFactory {
    pub async fn start() -> Self {
        Self::start_with(ConnectionOptions::default()).await
    }

    pub async fn start_with(options: ConnectionOptions) -> Self {
        let container = Postgres::default()
            .start()
            .await
            .expect("failed to start postgres container");
        let host = container.get_host().await.expect("container host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("container port");

        let url = format!("postgres://postgres:postgres@{host}:{port}/postgres");
        let inner = PgConnectionFactory::open(&url, options)
            .await
            .expect("failed to connect to container");

        Self {
            inner,
            _container: container,
        }
    }

    pub fn pool(&self) -> &PgPool {
        self.inner.pool()
    }
}

#[async_trait]
impl ConnectionFactory for ContainerConnectionFactory {
    async fn connect(&self) -> Result<DbConnection, DbError> {
        self.inner.connect().await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("response body is not the expected JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Router over a freshly initialised database.
pub struct TestApp {
    pub router: Router,
    pub db: Arc<ContainerConnectionFactory>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(ConnectionOptions::default()).await
    }

    pub async fn spawn_with(options: ConnectionOptions) -> Self {
        let db = Arc::new(ContainerConnectionFactory::start_with(options).await);
        schema::initialize(db.as_ref())
            .await
            .expect("schema initialization failed");

        let router = build_router(AppState::new(db.clone()));
        Self { router, db }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(value) => builder
                .header("content-type", "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn row_count(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todo_items")
            .fetch_one(self.db.pool())
            .await
            .unwrap();
        count
    }
}

const WORDS: &[&str] = &[
    "milk", "bread", "laundry", "taxes", "garden", "email", "dentist", "groceries", "invoice",
    "backup",
];

/// Random `{"itemName", "isComplete"}` payload.
pub fn fake_item() -> Value {
    let mut rng = rand::thread_rng();
    let word = WORDS.choose(&mut rng).copied().unwrap_or("chore");
    json!({
        "itemName": format!("{}-{}", word, rng.gen_range(0..100_000)),
        "isComplete": rng.gen_bool(0.5),
    })
}
