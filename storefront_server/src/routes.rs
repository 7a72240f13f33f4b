//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause the
//! current worker to stop processing new requests. Any long, non-cpu-bound operation (e.g. I/O, database operations,
//! etc.) must therefore be expressed as futures or asynchronous functions so that worker threads can interleave them.
use actix_web::{get, http::header, web, HttpResponse, Responder};
use cloudinary_tools::HostedImages;
use commerce_engine::{
    db_types::OrderId,
    traits::{FeatureCatalog, OrderFlowError, OrderManagement, ShopDatabase},
    FeaturesApi,
    OrderFlowApi,
    OrdersApi,
};
use log::*;
use sslcommerz_tools::PaymentSessions;

use crate::{
    config::UrlConfig,
    data_objects::{AddFeatureRequest, CreateOrderRequest, DataResponse, DeleteFeatureRequest, JsonResponse},
    errors::ServerError,
    helpers::{build_session_request, cancel_redirect, failed_redirect, success_redirect},
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//--------------------------------------------  Create order  --------------------------------------------------
route!(create_order => Post "/create" impl ShopDatabase, PaymentSessions);
/// Route handler for drafting a new order and opening a payment session.
///
/// The draft is persisted first (pending/pending, no payment URL) and the gateway session is
/// opened afterwards, so a gateway outage leaves a retryable order behind rather than losing the
/// draft. The response body is the bare gateway URL; the frontend redirects the shopper there.
pub async fn create_order<B, G>(
    api: web::Data<OrderFlowApi<B>>,
    gateway: web::Data<G>,
    urls: web::Data<UrlConfig>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, ServerError>
where
    B: ShopDatabase,
    G: PaymentSessions,
{
    let draft = body.into_inner();
    trace!("💻️ Received create order request for user {}", draft.user_id);
    let user = api.user_for_order(&draft.user_id).await?;
    let order = api.process_new_order(draft.into_new_order()).await?;
    let session = build_session_request(&order, &user, &urls);
    let payment_url = gateway.create_session(session).await?;
    api.attach_payment_url(&order.order_id, &payment_url).await?;
    debug!("💻️ Order [{}] drafted, redirecting shopper to the gateway", order.order_id);
    Ok(HttpResponse::Ok().content_type("text/plain").body(payment_url))
}

//------------------------------------------  Gateway callbacks  -----------------------------------------------
route!(success_payment => Post "/success/{order_id}" impl ShopDatabase);
/// Route handler for the gateway's success callback.
///
/// Settlement is atomic in the engine. A replayed callback is a no-op there; the shopper is
/// redirected to the same landing page either way.
pub async fn success_payment<B: ShopDatabase>(
    api: web::Data<OrderFlowApi<B>>,
    urls: web::Data<UrlConfig>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServerError> {
    let order_id = OrderId(path.into_inner());
    trace!("💻️ Received success callback for order [{order_id}]");
    let order = match api.confirm_paid(&order_id).await {
        Ok(order) => order,
        Err(OrderFlowError::OrderModificationNoOp) => {
            debug!("💻️ Success callback for order [{order_id}] was a replay");
            api.db()
                .fetch_order_by_order_id(&order_id)
                .await?
                .ok_or_else(|| ServerError::NoRecordFound(format!("Order {order_id} does not exist")))?
        },
        Err(e) => return Err(e.into()),
    };
    Ok(redirect(success_redirect(&order, &urls)))
}

route!(fail_payment => Post "/fail/{order_id}" impl ShopDatabase);
/// Route handler for the gateway's failure callback. The order is reset so the shopper can try
/// again from their order history.
pub async fn fail_payment<B: ShopDatabase>(
    api: web::Data<OrderFlowApi<B>>,
    urls: web::Data<UrlConfig>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServerError> {
    let order_id = OrderId(path.into_inner());
    trace!("💻️ Received failure callback for order [{order_id}]");
    let order = api.mark_failed(&order_id).await?;
    Ok(redirect(failed_redirect(&order, &urls)))
}

route!(cancel_payment => Post "/cancel/{order_id}" impl ShopDatabase);
/// Route handler for the gateway's cancellation callback. Cancellation is terminal; a replayed
/// callback redirects without touching the order again.
pub async fn cancel_payment<B: ShopDatabase>(
    api: web::Data<OrderFlowApi<B>>,
    urls: web::Data<UrlConfig>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServerError> {
    let order_id = OrderId(path.into_inner());
    trace!("💻️ Received cancel callback for order [{order_id}]");
    match api.mark_cancelled(&order_id).await {
        Ok(_) | Err(OrderFlowError::OrderModificationNoOp) => Ok(redirect(cancel_redirect(&urls))),
        Err(e) => Err(e.into()),
    }
}

//--------------------------------------------  Order queries  -------------------------------------------------
route!(order_list => Get "/list/{user_id}" impl OrderManagement);
/// Route handler for a user's order history, newest first. A user with no orders at all gets a
/// 404 rather than an empty list; the frontend relies on this.
pub async fn order_list<B: OrderManagement>(
    api: web::Data<OrdersApi<B>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServerError> {
    let user_id = path.into_inner();
    trace!("💻️ Received order list request for user {user_id}");
    let history = api.history_for_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(DataResponse::new(history.orders)))
}

route!(order_details => Get "/details/{order_id}" impl OrderManagement);
pub async fn order_details<B: OrderManagement>(
    api: web::Data<OrdersApi<B>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServerError> {
    let order_id = OrderId(path.into_inner());
    trace!("💻️ Received order details request for [{order_id}]");
    let details = api
        .order_details(&order_id)
        .await?
        .ok_or_else(|| ServerError::NoRecordFound(format!("Order {order_id} does not exist")))?;
    Ok(HttpResponse::Ok().json(DataResponse::new(details)))
}

//-------------------------------------------  Feature images  -------------------------------------------------
route!(add_feature => Post "/add" impl FeatureCatalog);
pub async fn add_feature<B: FeatureCatalog>(
    api: web::Data<FeaturesApi<B>>,
    body: web::Json<AddFeatureRequest>,
) -> Result<HttpResponse, ServerError> {
    let request = body.into_inner();
    trace!("💻️ Received add feature image request");
    let image = api.add_image(&request.image_url).await?;
    Ok(HttpResponse::Ok().json(DataResponse::new(image)))
}

route!(get_features => Get "/get" impl FeatureCatalog);
pub async fn get_features<B: FeatureCatalog>(api: web::Data<FeaturesApi<B>>) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received list feature images request");
    let images = api.list_images().await?;
    Ok(HttpResponse::Ok().json(DataResponse::new(images)))
}

route!(delete_feature => Delete "/delete" impl FeatureCatalog, HostedImages);
/// Route handler for deleting a feature image. The hosted asset is destroyed first; only then is
/// the catalog record removed, so a failed destroy leaves the record (and the retry path) intact.
pub async fn delete_feature<B, H>(
    api: web::Data<FeaturesApi<B>>,
    host: web::Data<H>,
    body: web::Json<DeleteFeatureRequest>,
) -> Result<HttpResponse, ServerError>
where
    B: FeatureCatalog,
    H: HostedImages,
{
    let request = body.into_inner();
    trace!("💻️ Received delete feature image request for {}", request.id);
    host.destroy_image(&request.image_url).await?;
    api.remove_image(request.id).await?;
    Ok(HttpResponse::Ok().json(JsonResponse::success("Feature image deleted!")))
}

fn redirect(url: String) -> HttpResponse {
    HttpResponse::Found().insert_header((header::LOCATION, url)).finish()
}
