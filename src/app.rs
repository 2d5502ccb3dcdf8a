use axum::{Router, http::HeaderName};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{app_state::AppState, check::handlers, health};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "seocheck",
        description = "Fetches a page and scores its SEO metadata against a fixed checklist"
    ),
    tags(
        (name = "seo", description = "Page analysis"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Builds the HTTP application: API routes, OpenAPI document, Swagger UI,
/// request ids and request tracing.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(handlers::check_page))
        .routes(routes!(health::health_check))
        .with_state(state)
        .split_for_parts();

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
}
