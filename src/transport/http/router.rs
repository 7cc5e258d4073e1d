use crate::domain::model::{
    Category, CategoryPatch, Contact, ContactPatch, ContactStatus, Photo, PhotoPatch,
    Photographer, PhotographerPatch, Service, ServicePatch, Testimonial, TestimonialPatch,
};
use crate::domain::Pagination;
use crate::transport::http::handlers::{
    categories, contact, health, photographer, photos, services, testimonials,
};
use crate::transport::http::types::{
    ApiResponse, AppState, ErrorResponse, HealthResponse, ReadinessResponse,
};
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Photographique API",
        description = "Content API for the photography portfolio site"
    ),
    paths(
        health::health_check_handler,
        health::readiness_handler,
        photographer::get_photographer_handler,
        photographer::update_photographer_handler,
        categories::list_categories_handler,
        categories::get_category_handler,
        categories::create_category_handler,
        photos::list_photos_handler,
        photos::list_photos_by_category_handler,
        photos::create_photo_handler,
        testimonials::list_testimonials_handler,
        testimonials::create_testimonial_handler,
        contact::create_contact_handler,
        contact::list_contacts_handler,
        services::list_services_handler,
        services::create_service_handler
    ),
    components(schemas(
        ApiResponse,
        ErrorResponse,
        HealthResponse,
        ReadinessResponse,
        Pagination,
        Photographer,
        PhotographerPatch,
        Category,
        CategoryPatch,
        Photo,
        PhotoPatch,
        Testimonial,
        TestimonialPatch,
        Contact,
        ContactPatch,
        ContactStatus,
        Service,
        ServicePatch
    ))
)]
pub struct ApiDoc;

/// Photos carry their image inline, so request bodies get a generous cap.
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// API routes with the request body cap; no CORS or tracing.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::readiness_handler))
        .route("/api", get(health::health_check_handler))
        .route("/api/", get(health::health_check_handler))
        .route(
            "/api/photographer",
            get(photographer::get_photographer_handler)
                .put(photographer::update_photographer_handler),
        )
        .route(
            "/api/categories",
            get(categories::list_categories_handler).post(categories::create_category_handler),
        )
        .route(
            "/api/categories/:category_id",
            get(categories::get_category_handler),
        )
        .route(
            "/api/photos",
            get(photos::list_photos_handler).post(photos::create_photo_handler),
        )
        .route(
            "/api/photos/category/:category_id",
            get(photos::list_photos_by_category_handler),
        )
        .route(
            "/api/testimonials",
            get(testimonials::list_testimonials_handler)
                .post(testimonials::create_testimonial_handler),
        )
        .route(
            "/api/contact",
            get(contact::list_contacts_handler).post(contact::create_contact_handler),
        )
        .route(
            "/api/services",
            get(services::list_services_handler).post(services::create_service_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(app_state)
}

/// Routes plus Swagger UI, permissive CORS and request tracing.
pub fn build_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
