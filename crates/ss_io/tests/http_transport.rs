//! HttpTransport against a local warp server standing in for the classifier.

use std::time::Duration;

use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::Filter;

use ss_core::{AnalysisRequest, FormInput, ServiceReply};
use ss_io::{AnalysisTransport, HttpTransport, TransportError};

/// Bind `filter` on an ephemeral port and return the analyze URL.
macro_rules! serve {
    ($filter:expr) => {{
        let (addr, server) = warp::serve($filter).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        format!("http://{addr}/api/analyze")
    }};
}

fn request(text: &str, age: Option<&str>) -> AnalysisRequest {
    AnalysisRequest::from_form(&FormInput {
        text: Some(text.into()),
        age: age.map(Into::into),
        gender: None,
    })
    .unwrap()
}

#[tokio::test]
async fn posts_json_and_decodes_recommendation() {
    let route = warp::post()
        .and(warp::path!("api" / "analyze"))
        .and(warp::header::exact_ignore_case("content-type", "application/json"))
        .and(warp::body::json())
        .map(|body: Value| {
            // Echo the received fields back through `reason` so the test sees the wire body.
            warp::reply::json(&json!({
                "sport": "Swimming",
                "confidence": 87,
                "reason": format!("{}|{}|{}", body["text"], body["age"], body["gender"]),
                "additional_recommendations": [
                    {"sport": "Running", "confidence": 62},
                    {"sport": "Cycling", "confidence": 55}
                ]
            }))
        });
    let url = serve!(route);

    let t = HttpTransport::new(url, None).unwrap();
    let reply = t.analyze(&request("  quiet, persistent  ", Some("29"))).await.unwrap();
    let ServiceReply::Recommendation(r) = reply else { panic!("expected recommendation") };
    assert_eq!(r.sport, "Swimming");
    assert_eq!(r.reason.as_deref(), Some(r#""quiet, persistent"|29|null"#));
    assert_eq!(r.alternatives.len(), 2);
    assert_eq!(r.alternatives[1].sport, "Cycling");
}

#[tokio::test]
async fn structured_error_is_a_rejection() {
    let route = warp::post().and(warp::path!("api" / "analyze")).map(|| {
        warp::reply::with_status(
            warp::reply::json(&json!({"error": "Text too short"})),
            StatusCode::BAD_REQUEST,
        )
    });
    let url = serve!(route);

    let t = HttpTransport::new(url, None).unwrap();
    assert_eq!(
        t.analyze(&request("hi", None)).await.unwrap(),
        ServiceReply::Rejected("Text too short".into())
    );
}

#[tokio::test]
async fn html_error_page_is_a_body_error() {
    let route = warp::post().and(warp::path!("api" / "analyze")).map(|| {
        warp::reply::with_status(
            warp::reply::html("<h1>Internal Server Error</h1>"),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    });
    let url = serve!(route);

    let t = HttpTransport::new(url, None).unwrap();
    assert!(matches!(t.analyze(&request("text", None)).await, Err(TransportError::Body(_))));
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    // Bind then drop a listener to get a port nobody is serving.
    let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let t = HttpTransport::new(format!("http://127.0.0.1:{port}/api/analyze"), None).unwrap();
    assert!(matches!(t.analyze(&request("text", None)).await, Err(TransportError::Network(_))));
}

#[tokio::test]
async fn configured_timeout_surfaces_as_timeout() {
    let route = warp::post().and(warp::path!("api" / "analyze")).and_then(|| async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok::<_, warp::Rejection>(warp::reply::json(&json!({"sport": "Chess", "confidence": 91})))
    });
    let url = serve!(route);

    let t = HttpTransport::new(url, Some(Duration::from_millis(150))).unwrap();
    assert_eq!(t.analyze(&request("text", None)).await, Err(TransportError::Timeout));
}
