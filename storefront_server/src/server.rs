use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use cloudinary_tools::CloudinaryApi;
use commerce_engine::{FeaturesApi, OrderFlowApi, OrdersApi, SqliteDatabase};
use sslcommerz_tools::SslCommerzApi;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{
        health,
        AddFeatureRoute,
        CancelPaymentRoute,
        CreateOrderRoute,
        DeleteFeatureRoute,
        FailPaymentRoute,
        GetFeaturesRoute,
        OrderDetailsRoute,
        OrderListRoute,
        SuccessPaymentRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let gateway = SslCommerzApi::new(config.sslcommerz_config.clone())
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let image_host = CloudinaryApi::new(config.cloudinary_config.clone())
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = HttpServer::new(move || {
        let order_flow_api = OrderFlowApi::new(db.clone());
        let orders_api = OrdersApi::new(db.clone());
        let features_api = FeaturesApi::new(db.clone());
        let app = App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("sfs::access_log"))
            .app_data(web::Data::new(order_flow_api))
            .app_data(web::Data::new(orders_api))
            .app_data(web::Data::new(features_api))
            .app_data(web::Data::new(gateway.clone()))
            .app_data(web::Data::new(image_host.clone()))
            .app_data(web::Data::new(config.urls.clone()));
        let order_scope = web::scope("/api/shop/order")
            .service(CreateOrderRoute::<SqliteDatabase, SslCommerzApi>::new())
            .service(SuccessPaymentRoute::<SqliteDatabase>::new())
            .service(FailPaymentRoute::<SqliteDatabase>::new())
            .service(CancelPaymentRoute::<SqliteDatabase>::new())
            .service(OrderListRoute::<SqliteDatabase>::new())
            .service(OrderDetailsRoute::<SqliteDatabase>::new());
        let feature_scope = web::scope("/api/common/feature")
            .service(AddFeatureRoute::<SqliteDatabase>::new())
            .service(GetFeaturesRoute::<SqliteDatabase>::new())
            .service(DeleteFeatureRoute::<SqliteDatabase, CloudinaryApi>::new());
        app.service(health).service(order_scope).service(feature_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
