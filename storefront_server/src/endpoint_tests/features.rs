use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::{TimeZone, Utc};
use cloudinary_tools::CloudinaryApiError;
use commerce_engine::{db_types::FeatureImage, traits::FeatureApiError, FeaturesApi};
use serde_json::json;

use super::helpers::{delete_request, get_request, post_request};
use crate::{
    endpoint_tests::mocks::{MockFeatureDb, MockImageHost},
    routes::{AddFeatureRoute, DeleteFeatureRoute, GetFeaturesRoute},
};

const IMAGE_URL: &str = "https://res.cloudinary.com/demo/image/upload/v1700000000/q7xj2kfe8dmzpw4hbv1s.jpg";

fn test_image(id: i64) -> FeatureImage {
    FeatureImage {
        id,
        image_url: IMAGE_URL.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
    }
}

#[actix_web::test]
async fn adding_a_feature_image_returns_the_stored_record() {
    let _ = env_logger::try_init().ok();
    let res = post_request("/add", json!({"imageUrl": IMAGE_URL}), configure_add).await;
    assert_eq!(res.status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&res.body).expect("Invalid JSON body");
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["id"], 7);
    assert_eq!(value["data"]["image_url"], IMAGE_URL);
}

fn configure_add(cfg: &mut ServiceConfig) {
    let mut db = MockFeatureDb::new();
    db.expect_insert_feature_image().returning(|url| {
        let mut image = test_image(7);
        image.image_url = url.to_string();
        Ok(image)
    });
    cfg.service(AddFeatureRoute::<MockFeatureDb>::new()).app_data(web::Data::new(FeaturesApi::new(db)));
}

#[actix_web::test]
async fn listing_feature_images_returns_all_records() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/get", configure_get).await;
    assert_eq!(res.status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&res.body).expect("Invalid JSON body");
    assert_eq!(value["data"].as_array().map(|a| a.len()), Some(2));
}

fn configure_get(cfg: &mut ServiceConfig) {
    let mut db = MockFeatureDb::new();
    db.expect_fetch_feature_images().returning(|| Ok(vec![test_image(1), test_image(2)]));
    cfg.service(GetFeaturesRoute::<MockFeatureDb>::new()).app_data(web::Data::new(FeaturesApi::new(db)));
}

#[actix_web::test]
async fn deleting_a_feature_image_destroys_the_hosted_asset() {
    let _ = env_logger::try_init().ok();
    let res = delete_request("/delete", json!({"id": 7, "imageUrl": IMAGE_URL}), configure_delete).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Feature image deleted!"), "Unexpected body: {}", res.body);
}

fn configure_delete(cfg: &mut ServiceConfig) {
    let mut db = MockFeatureDb::new();
    db.expect_delete_feature_image().times(1).returning(|_| Ok(()));
    let mut host = MockImageHost::new();
    host.expect_destroy_image().times(1).returning(|_| Ok(()));
    cfg.service(DeleteFeatureRoute::<MockFeatureDb, MockImageHost>::new())
        .app_data(web::Data::new(FeaturesApi::new(db)))
        .app_data(web::Data::new(host));
}

#[actix_web::test]
async fn deleting_a_missing_feature_image_is_a_404() {
    let _ = env_logger::try_init().ok();
    let res = delete_request("/delete", json!({"id": 99, "imageUrl": IMAGE_URL}), configure_delete_missing).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

fn configure_delete_missing(cfg: &mut ServiceConfig) {
    let mut db = MockFeatureDb::new();
    db.expect_delete_feature_image().returning(|id| Err(FeatureApiError::ImageNotFound(id)));
    let mut host = MockImageHost::new();
    host.expect_destroy_image().returning(|_| Ok(()));
    cfg.service(DeleteFeatureRoute::<MockFeatureDb, MockImageHost>::new())
        .app_data(web::Data::new(FeaturesApi::new(db)))
        .app_data(web::Data::new(host));
}

#[actix_web::test]
async fn a_failed_asset_destroy_leaves_the_record_alone() {
    let _ = env_logger::try_init().ok();
    let res = delete_request("/delete", json!({"id": 7, "imageUrl": IMAGE_URL}), configure_delete_host_down).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    let value: serde_json::Value = serde_json::from_str(&res.body).expect("Invalid JSON body");
    assert_eq!(value["success"], false);
    assert_eq!(value["message"], "Some error occured!");
}

fn configure_delete_host_down(cfg: &mut ServiceConfig) {
    let db = MockFeatureDb::new();
    // delete_feature_image must NOT be called when the destroy fails.
    let mut host = MockImageHost::new();
    host.expect_destroy_image()
        .returning(|_| Err(CloudinaryApiError::QueryError { status: 401, message: "Invalid signature".to_string() }));
    cfg.service(DeleteFeatureRoute::<MockFeatureDb, MockImageHost>::new())
        .app_data(web::Data::new(FeaturesApi::new(db)))
        .app_data(web::Data::new(host));
}
