/// OpenAPI documentation for the community service
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers::auth::AuthResponse;
use crate::models::forum::{
    CreatePostRequest, CreateThreadRequest, ForumCategory, ForumPost, ForumThread,
    LockThreadRequest, PostWithAuthor, ThreadWithAuthor,
};
use crate::models::report::{
    CreateReportRequest, Report, ReportSeverity, ReportStatus, ReportTarget, UpdateReportRequest,
};
use crate::models::resource::{CreateResourceRequest, Resource, ResourceCategory};
use crate::models::user::{LoginRequest, RegisterRequest, User, UserRole};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Community Service API",
        version = "1.0.0",
        description = "Moderated community platform backend. Provides forum threads and posts, curated educational resources, and an abuse-reporting workflow. All user-submitted content passes through a safety evaluator before publication; flagged submissions are queued for moderator review automatically.",
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "auth", description = "Registration, login, and session info"),
        (name = "forum", description = "Forum categories, threads, and posts"),
        (name = "resources", description = "Curated educational resources"),
        (name = "reports", description = "Abuse reports and moderation workflow"),
        (name = "uploads", description = "Presigned attachment upload URLs"),
    ),
    components(schemas(
        User,
        UserRole,
        RegisterRequest,
        LoginRequest,
        AuthResponse,
        ForumCategory,
        ForumThread,
        ThreadWithAuthor,
        ForumPost,
        PostWithAuthor,
        CreateThreadRequest,
        CreatePostRequest,
        LockThreadRequest,
        ResourceCategory,
        Resource,
        CreateResourceRequest,
        Report,
        ReportTarget,
        ReportSeverity,
        ReportStatus,
        CreateReportRequest,
        UpdateReportRequest,
    )),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token from /api/v1/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
