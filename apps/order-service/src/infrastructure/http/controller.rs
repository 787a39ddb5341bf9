//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::middleware::cors_layer;
use super::response::HealthResponse;
use crate::application::dto::{OrderCreationDto, OrderDto};
use crate::application::use_cases::{
    CreateOrderUseCase, DeleteOrderUseCase, GetOrderUseCase, ListOrdersUseCase,
    UpdateOrderUseCase,
};
use crate::domain::order::OrderRepository;
use crate::domain::shared::OrderId;

/// Application state shared across handlers.
pub struct AppState<O>
where
    O: OrderRepository,
{
    /// Use case for listing orders.
    pub list_orders: Arc<ListOrdersUseCase<O>>,
    /// Use case for fetching one order.
    pub get_order: Arc<GetOrderUseCase<O>>,
    /// Use case for creating orders.
    pub create_order: Arc<CreateOrderUseCase<O>>,
    /// Use case for replacing orders.
    pub update_order: Arc<UpdateOrderUseCase<O>>,
    /// Use case for deleting orders.
    pub delete_order: Arc<DeleteOrderUseCase<O>>,
    /// Prometheus handle backing `/metrics` (None when metrics are disabled).
    pub metrics: Option<PrometheusHandle>,
    /// Application version.
    pub version: String,
}

impl<O> AppState<O>
where
    O: OrderRepository,
{
    /// Wire every use case to the same repository.
    pub fn new(order_repo: Arc<O>, version: impl Into<String>) -> Self {
        Self {
            list_orders: Arc::new(ListOrdersUseCase::new(Arc::clone(&order_repo))),
            get_order: Arc::new(GetOrderUseCase::new(Arc::clone(&order_repo))),
            create_order: Arc::new(CreateOrderUseCase::new(Arc::clone(&order_repo))),
            update_order: Arc::new(UpdateOrderUseCase::new(Arc::clone(&order_repo))),
            delete_order: Arc::new(DeleteOrderUseCase::new(order_repo)),
            metrics: None,
            version: version.into(),
        }
    }

    /// Serve `/metrics` from `handle`.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl<O> Clone for AppState<O>
where
    O: OrderRepository,
{
    fn clone(&self) -> Self {
        Self {
            list_orders: Arc::clone(&self.list_orders),
            get_order: Arc::clone(&self.get_order),
            create_order: Arc::clone(&self.create_order),
            update_order: Arc::clone(&self.update_order),
            delete_order: Arc::clone(&self.delete_order),
            metrics: self.metrics.clone(),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
///
/// Browser access is limited to `allowed_origin`.
pub fn create_router<O>(state: AppState<O>, allowed_origin: HeaderValue) -> Router
where
    O: OrderRepository + 'static,
{
    Router::new()
        .route("/health", get(health_check::<O>))
        .route("/metrics", get(metrics_handler::<O>))
        .route("/orders", get(list_orders::<O>).post(create_order::<O>))
        .route(
            "/orders/{id}",
            get(get_order::<O>)
                .put(update_order::<O>)
                .delete(delete_order::<O>),
        )
        .layer(cors_layer(allowed_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<O>(State(state): State<AppState<O>>) -> impl IntoResponse
where
    O: OrderRepository,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Prometheus metrics endpoint.
async fn metrics_handler<O>(State(state): State<AppState<O>>) -> impl IntoResponse
where
    O: OrderRepository,
{
    state.metrics.as_ref().map_or_else(
        || {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [(header::CONTENT_TYPE, "text/plain")],
                "Metrics not initialized".to_string(),
            )
        },
        |handle| {
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
                handle.render(),
            )
        },
    )
}

/// `GET /orders`
async fn list_orders<O>(
    State(state): State<AppState<O>>,
) -> Result<Json<Vec<OrderDto>>, ApiError>
where
    O: OrderRepository,
{
    let orders = state.list_orders.execute().await?;
    Ok(Json(orders))
}

/// `GET /orders/{id}`
async fn get_order<O>(
    State(state): State<AppState<O>>,
    Path(id): Path<String>,
) -> Result<Json<OrderDto>, ApiError>
where
    O: OrderRepository,
{
    let order = state.get_order.execute(&OrderId::new(id)).await?;
    Ok(Json(order))
}

/// `POST /orders`
async fn create_order<O>(
    State(state): State<AppState<O>>,
    payload: Result<Json<OrderCreationDto>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    O: OrderRepository,
{
    let Json(request) = payload?;
    let order = state.create_order.execute(request).await?;
    let location = format!("/orders/{}", order.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(order),
    ))
}

/// `PUT /orders/{id}`
async fn update_order<O>(
    State(state): State<AppState<O>>,
    Path(id): Path<String>,
    payload: Result<Json<OrderCreationDto>, JsonRejection>,
) -> Result<Json<OrderDto>, ApiError>
where
    O: OrderRepository,
{
    let Json(request) = payload?;
    let order = state
        .update_order
        .execute(&OrderId::new(id), request)
        .await?;
    Ok(Json(order))
}

/// `DELETE /orders/{id}`
async fn delete_order<O>(
    State(state): State<AppState<O>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    O: OrderRepository,
{
    state.delete_order.execute(&OrderId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::ErrorResponse;
    use crate::infrastructure::persistence::InMemoryOrderRepository;
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use tower::ServiceExt;

    const ORIGIN: &str = "http://localhost:5173";

    fn create_test_app() -> (Router, Arc<InMemoryOrderRepository>) {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let state = AppState::new(Arc::clone(&repo), "1.0.0-test");
        let app = create_router(state, HeaderValue::from_static(ORIGIN));
        (app, repo)
    }

    fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let (app, _) = create_test_app();

        let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = body_json(response).await;
        assert_eq!(health.version, "1.0.0-test");
    }

    #[tokio::test]
    async fn metrics_unavailable_without_handle() {
        let (app, _) = create_test_app();

        let response = app.oneshot(empty_request("GET", "/metrics")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn metrics_rendered_with_handle() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
            .build_recorder()
            .handle();
        let state = AppState::new(repo, "test").with_metrics(handle);
        let app = create_router(state, HeaderValue::from_static(ORIGIN));

        let response = app.oneshot(empty_request("GET", "/metrics")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_returns_created_with_location() {
        let (app, repo) = create_test_app();
        let body = serde_json::json!({"client": "Acme", "date": "2024-01-01", "total": 10.5});

        let response = app
            .oneshot(json_request("POST", "/orders", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let order: OrderDto = body_json(response).await;
        assert_eq!(location, format!("/orders/{}", order.id));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn create_with_blank_client_is_bad_request() {
        let (app, repo) = create_test_app();
        let body = serde_json::json!({"client": " ", "date": "2024-01-01", "total": 10});

        let response = app
            .oneshot(json_request("POST", "/orders", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.error, "Please provide a client name");
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn create_with_malformed_json_is_bad_request() {
        let (app, repo) = create_test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/orders")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = body_json(response).await;
        assert!(!error.error.is_empty());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn create_with_invalid_date_is_bad_request() {
        let (app, _) = create_test_app();
        let body = serde_json::json!({"client": "Acme", "date": "someday", "total": 1});

        let response = app
            .oneshot(json_request("POST", "/orders", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(empty_request("GET", "/orders/does-not-exist"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.error, "Order does-not-exist not found");
    }

    #[tokio::test]
    async fn delete_unknown_is_not_found() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(empty_request("DELETE", "/orders/does-not-exist"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cors_preflight_allows_configured_origin() {
        let (app, _) = create_test_app();
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/orders")
            .header(header::ORIGIN, ORIGIN)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            ORIGIN
        );
    }

    #[tokio::test]
    async fn cors_rejects_other_origin() {
        let (app, _) = create_test_app();
        let request = Request::builder()
            .method("GET")
            .uri("/orders")
            .header(header::ORIGIN, "http://evil.example.com")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }
}
