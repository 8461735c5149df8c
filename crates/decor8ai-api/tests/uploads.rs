mod common;

use std::{io::Write, time::Duration};

use common::{api_for, single_request_body, success, API_KEY};
use decor8ai_api::{
    Api, ClientConfig, Error, ErrorKind, GenerateDesignsRequest, ImageSource, SourceFetchError,
};
use serde_json::json;
use wiremock::{
    matchers::{header_exists, method, path},
    Mock, MockServer, ResponseTemplate,
};

const IMAGE_PART: &str =
    "Content-Disposition: form-data; name=\"input_image\"; filename=\"input_image.jpg\"";

fn text_part(name: &str, value: &str) -> String {
    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
}

#[tokio::test]
async fn upscale_uploads_bytes_and_scale_factor() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upscale_image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "",
            "message": "Successfully upscaled image.",
            "info": {"upscaled_image": "aGVsbG8="}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let response = api
        .upscale_image(b"jpeg-bytes".to_vec(), Some(4))
        .await
        .unwrap();
    assert_eq!(response.upscaled_image().unwrap().unwrap(), b"hello");

    let body = single_request_body(&server).await;
    assert!(body.contains(IMAGE_PART));
    assert!(body.contains("Content-Type: image/jpeg\r\n\r\njpeg-bytes\r\n"));
    assert!(body.contains(&text_part("scale_factor", "4")));
}

#[tokio::test]
async fn upscale_defaults_to_factor_two() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upscale_image"))
        .respond_with(success())
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.upscale_image(vec![1u8, 2, 3], None).await.unwrap();

    let body = single_request_body(&server).await;
    assert!(body.contains(&text_part("scale_factor", "2")));
}

#[tokio::test]
async fn generate_designs_streams_file_and_sends_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_designs"))
        .respond_with(success())
        .expect(1)
        .mount(&server)
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"bytes from disk").unwrap();

    let api = api_for(&server);
    let mut request = GenerateDesignsRequest::new(file.path(), "bedroom", "japandi");
    request.with_num_images(0).with_seed(0);
    api.generate_designs(request).await.unwrap();

    let body = single_request_body(&server).await;
    assert!(body.contains(IMAGE_PART));
    assert!(body.contains("bytes from disk"));
    assert!(body.contains(&text_part("room_type", "bedroom")));
    assert!(body.contains(&text_part("design_style", "japandi")));
    assert!(body.contains(&text_part("num_images", "1")));
    assert!(body.contains(&text_part("seed", "0")));
    assert!(!body.contains("name=\"color_scheme\""));
}

#[tokio::test]
async fn remote_url_is_downloaded_once_then_uploaded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(403))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/photos/room.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"remote image".to_vec()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/prime_the_room_walls"))
        .respond_with(success())
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let source = format!("{}/photos/room.jpg", server.uri());
    assert!(matches!(
        ImageSource::from(source.as_str()),
        ImageSource::RemoteUrl(_)
    ));
    api.prime_the_room_walls(source.as_str()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let upload = String::from_utf8_lossy(&requests[1].body);
    assert!(upload.contains(IMAGE_PART));
    assert!(upload.contains("remote image"));
}

#[tokio::test]
async fn failed_download_is_a_source_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(success())
        .expect(0)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .upscale_image(ImageSource::url(format!("{}/missing.jpg", server.uri())), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceFetch);
    assert!(matches!(
        err,
        Error::SourceFetch {
            source: SourceFetchError::Status(status),
            ..
        } if status.as_u16() == 404
    ));
}

#[tokio::test]
async fn missing_file_is_reported_before_upload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(success())
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.jpg");

    let api = api_for(&server);
    let err = api.prime_the_room_walls(missing.as_path()).await.unwrap_err();
    match err {
        Error::SourceFetch { location, source } => {
            assert_eq!(location, missing.display().to_string());
            assert!(matches!(source, SourceFetchError::Io(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn directory_is_not_an_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(success())
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();

    let api = api_for(&server);
    let err = api.prime_the_room_walls(dir.path()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceFetch);
    assert!(matches!(
        err,
        Error::SourceFetch {
            source: SourceFetchError::Io(ref io),
            ..
        } if io.kind() == std::io::ErrorKind::InvalidInput
    ));
}

fn api_with_timeout(server: &MockServer, timeout: Duration) -> Api {
    let config = ClientConfig::new(API_KEY)
        .unwrap()
        .with_base_url(server.uri())
        .unwrap()
        .with_timeout(timeout);
    Api::new(config).unwrap()
}

#[tokio::test]
async fn timeout_applies_to_api_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/prime_walls_for_room"))
        .respond_with(success().set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let api = api_with_timeout(&server, Duration::from_millis(200));
    let err = api
        .prime_walls_for_room("https://x/room.png")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(matches!(err, Error::Transport(ref e) if e.is_timeout()));
}

#[tokio::test]
async fn timeout_applies_to_image_downloads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow.jpg"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"late".to_vec())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(success())
        .expect(0)
        .mount(&server)
        .await;

    let api = api_with_timeout(&server, Duration::from_millis(200));
    let err = api
        .upscale_image(format!("{}/slow.jpg", server.uri()), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceFetch);
    assert!(matches!(
        err,
        Error::SourceFetch {
            source: SourceFetchError::Request(ref e),
            ..
        } if e.is_timeout()
    ));
}
