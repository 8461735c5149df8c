#![allow(dead_code)]

use decor8ai_api::{Api, ClientConfig};
use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-key-123";

pub fn api_for(server: &MockServer) -> Api {
    let config = ClientConfig::new(API_KEY)
        .unwrap()
        .with_base_url(server.uri())
        .unwrap();
    Api::new(config).unwrap()
}

pub fn success() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "error": "",
        "message": "Successfully generated designs.",
        "info": {
            "images": [{
                "uuid": "81133196-4477-4cdd-834a-89f5482bb9d0",
                "url": "https://prod-files.decor8.ai/81133196.jpg",
                "width": 768,
                "height": 512
            }]
        }
    }))
}

/// Returns the raw body of the only request the server received.
pub async fn single_request_body(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    String::from_utf8_lossy(&requests[0].body).into_owned()
}
