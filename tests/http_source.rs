#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use std::{net::TcpListener, time::Duration};
use userfetch::{
    FetchConfig, FetchError, UserSource,
    users::{HttpUserSource, NETWORK_MESSAGE, TIMEOUT_MESSAGE},
    widget::{Handles, MemoryElement, RequestState, TRIGGER_LABEL, UserFetchWidget},
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn source(server: &MockServer, timeout_ms: u64) -> HttpUserSource {
    let config = FetchConfig::new(&format!("{}/users", server.uri()), timeout_ms).unwrap();
    HttpUserSource::new(config).unwrap()
}

fn handles() -> Handles<MemoryElement> {
    Handles {
        trigger: MemoryElement::with_text(TRIGGER_LABEL),
        output: MemoryElement::new(),
        loading: MemoryElement::hidden(),
        error: MemoryElement::hidden(),
    }
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("Accept", "application/json"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_users_decodes_records_in_order() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv",
             "address": {"city": "Wisokyburgh"}},
            {"id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz"}
        ])),
    )
    .await;

    let users = source(&server, 2_000).fetch_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, 2);
    assert_eq!(users[0].city(), "Wisokyburgh");
    assert_eq!(users[1].id, 1);
    assert_eq!(users[1].city(), "City not available");
}

#[tokio::test]
async fn fetch_users_sends_user_agent() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(json!([]))).await;

    source(&server, 2_000).fetch_users().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let agent = requests[0]
        .headers
        .get("user-agent")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(agent.starts_with("userfetch/"), "user agent was {agent}");
}

#[tokio::test]
async fn null_body_is_an_empty_list() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_raw("null", "application/json"),
    )
    .await;

    let users = source(&server, 2_000).fetch_users().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn not_found_is_an_http_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(404)).await;

    let err = source(&server, 2_000).fetch_users().await.unwrap_err();
    assert_eq!(err, FetchError::Http { status: 404 });
}

#[tokio::test]
async fn invalid_json_is_a_parse_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"),
    )
    .await;

    let err = source(&server, 2_000).fetch_users().await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)), "got {err:?}");
    assert!(err.user_message().starts_with("Error: "));
}

#[tokio::test]
async fn slow_response_times_out() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!([]))
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let err = source(&server, 200).fetch_users().await.unwrap_err();
    assert_eq!(err, FetchError::Timeout(Duration::from_millis(200)));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // Bind then drop to get a local port with nothing listening.
    let port = match TcpListener::bind("127.0.0.1:0") {
        Ok(listener) => listener.local_addr().unwrap().port(),
        Err(_) => {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
    };
    let config = FetchConfig::new(&format!("http://127.0.0.1:{port}/users"), 2_000).unwrap();

    let err = HttpUserSource::new(config)
        .unwrap()
        .fetch_users()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
    assert_eq!(err.user_message(), NETWORK_MESSAGE);
}

#[tokio::test]
async fn widget_renders_cards_from_server() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "<b>Bold</b>", "email": "bold@example.com",
             "address": {"city": "Tom & Jerry"}},
            {"id": 2, "name": "Plain", "email": "plain@example.com"},
            {"id": 3, "name": "Third", "email": "third@example.com",
             "address": {"city": "Gwenborough"}}
        ])),
    )
    .await;

    let widget = UserFetchWidget::new(source(&server, 2_000), handles());
    widget.fetch_and_display_users().await;

    assert_eq!(widget.state(), RequestState::Success);
    let html = widget.handles().output.html();
    assert!(html.contains("Found 3 users"));
    assert_eq!(html.matches(r#"class="user-card""#).count(), 3);
    assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    assert!(!html.contains("<b>Bold</b>"));
    assert!(html.contains("Tom &amp; Jerry"));
    assert!(html.contains("City not available"));
    assert!(!widget.handles().trigger.is_disabled());
    assert!(widget.handles().loading.is_hidden());
    assert!(widget.handles().error.is_hidden());
}

#[tokio::test]
async fn widget_shows_timeout_and_reenables_trigger() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!([]))
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let widget = UserFetchWidget::new(source(&server, 200), handles());
    widget.fetch_and_display_users().await;

    assert_eq!(widget.state(), RequestState::Failed);
    assert_eq!(widget.handles().error.text(), TIMEOUT_MESSAGE);
    assert!(!widget.handles().error.is_hidden());
    assert!(!widget.handles().trigger.is_disabled());
    assert_eq!(widget.handles().trigger.text(), TRIGGER_LABEL);
    assert!(widget.handles().loading.is_hidden());
    assert_eq!(widget.handles().output.html(), "");
}

#[tokio::test]
async fn widget_shows_http_status() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(404)).await;

    let widget = UserFetchWidget::new(source(&server, 2_000), handles());
    widget.fetch_and_display_users().await;

    assert_eq!(widget.state(), RequestState::Failed);
    assert_eq!(
        widget.handles().error.text(),
        "Error: HTTP error! Status: 404"
    );
    assert!(!widget.handles().trigger.is_disabled());
}
