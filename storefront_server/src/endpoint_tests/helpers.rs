use actix_web::{
    body::MessageBody,
    http::{header, StatusCode},
    test,
    test::TestRequest,
    web::ServiceConfig,
    App,
};
use serde_json::Value;

use crate::config::UrlConfig;

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// The URL configuration every endpoint test app runs with.
pub fn test_urls() -> UrlConfig {
    UrlConfig { frontend_url: "https://shop.test".to_string(), backend_url: "https://api.shop.test".to_string() }
}

pub async fn get_request(path: &str, configure: fn(&mut ServiceConfig)) -> TestResponse {
    send(TestRequest::get().uri(path), configure).await
}

pub async fn post_request(path: &str, body: Value, configure: fn(&mut ServiceConfig)) -> TestResponse {
    send(TestRequest::post().uri(path).set_json(body), configure).await
}

pub async fn post_empty_request(path: &str, configure: fn(&mut ServiceConfig)) -> TestResponse {
    send(TestRequest::post().uri(path), configure).await
}

pub async fn delete_request(path: &str, body: Value, configure: fn(&mut ServiceConfig)) -> TestResponse {
    send(TestRequest::delete().uri(path).set_json(body), configure).await
}

async fn send(req: TestRequest, configure: fn(&mut ServiceConfig)) -> TestResponse {
    let app = App::new().configure(configure);
    let service = test::init_service(app).await;
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let location = res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()).map(String::from);
    let (_, res) = res.into_parts();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    TestResponse { status, location, body }
}
