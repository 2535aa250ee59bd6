//! Real TCP servers for exercising the HTTP client end to end.

use axum::Router;
use url::Url;

/// Serve `app` on an ephemeral localhost port and return its base URL.
pub async fn spawn_test_server(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    Url::parse(&format!("http://{addr}")).expect("test server url")
}

/// Base URL where nothing listens.
pub fn unreachable_base_url() -> Url {
    Url::parse("http://127.0.0.1:1").expect("static url")
}
