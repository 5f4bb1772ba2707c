use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use community_service::config::Config;
use community_service::handlers::{self, uploads::Uploader};
use community_service::middleware::JwtAuthMiddleware;
use community_service::openapi::ApiDoc;
use community_service::services::ContentGate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

async fn health_summary(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "community-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "community-service"
        })),
    }
}

async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

async fn openapi_json(doc: web::Data<utoipa::openapi::OpenApi>) -> actix_web::Result<HttpResponse> {
    let body = serde_json::to_string(&*doc).map_err(|e| {
        tracing::error!("OpenAPI serialization failed: {}", e);
        actix_web::error::ErrorInternalServerError("OpenAPI serialization error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting community-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.environment);

    // Initialize database connection pool and run migrations
    let pool = match PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::error!("Migration failed: {:#}", e);
        eprintln!("ERROR: Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Connected to database, migrations applied");

    let uploader = match config.storage.clone() {
        Some(storage) => Some(Uploader::from_config(storage).await),
        None => None,
    };
    if uploader.is_some() {
        tracing::info!("Object storage configured, uploads enabled");
    } else {
        tracing::warn!("Object storage not configured, uploads disabled");
    }

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let jwt_secret = config.jwt_secret.clone();
    let cors_allowed_origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in cors_allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let openapi_doc = ApiDoc::openapi();

        App::new()
            .app_data(web::Data::new(openapi_doc))
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(ContentGate::default()))
            .app_data(web::Data::new(uploader.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route(
                "/metrics",
                web::get().to(community_service::metrics::serve_metrics),
            )
            .route("/api/v1/openapi.json", web::get().to(openapi_json))
            // Health check endpoints
            .route("/api/v1/health", web::get().to(health_summary))
            .route("/api/v1/health/live", web::get().to(liveness_check))
            // Auth
            .route("/api/v1/auth/register", web::post().to(handlers::auth::register))
            .route("/api/v1/auth/login", web::post().to(handlers::auth::login))
            .service(
                web::resource("/api/v1/auth/me")
                    .wrap(JwtAuthMiddleware::new(jwt_secret.clone()))
                    .route(web::get().to(handlers::auth::me)),
            )
            // Forum: listing is public, writes authenticate via the
            // AuthUser extractor or the scoped middleware
            .route(
                "/api/v1/forum/categories",
                web::get().to(handlers::forum::get_categories),
            )
            .service(
                web::resource("/api/v1/forum/threads")
                    .route(web::get().to(handlers::forum::list_threads))
                    .route(web::post().to(handlers::forum::create_thread)),
            )
            .route(
                "/api/v1/forum/threads/{thread_id}",
                web::get().to(handlers::forum::get_thread),
            )
            .service(
                web::scope("/api/v1/forum/threads/{thread_id}")
                    .wrap(JwtAuthMiddleware::new(jwt_secret.clone()))
                    .route("/posts", web::post().to(handlers::forum::create_post))
                    .route("/lock", web::patch().to(handlers::forum::lock_thread)),
            )
            // Resources: listing is public, creation is moderator-only
            .route(
                "/api/v1/resources/categories",
                web::get().to(handlers::resources::get_categories),
            )
            .service(
                web::resource("/api/v1/resources")
                    .route(web::get().to(handlers::resources::list_resources))
                    .route(web::post().to(handlers::resources::create_resource)),
            )
            .route(
                "/api/v1/resources/{resource_id}",
                web::get().to(handlers::resources::get_resource),
            )
            // Reports and uploads require authentication throughout
            .service(
                web::scope("/api/v1/reports")
                    .wrap(JwtAuthMiddleware::new(jwt_secret.clone()))
                    .service(
                        web::resource("")
                            .route(web::post().to(handlers::reports::create_report))
                            .route(web::get().to(handlers::reports::list_reports)),
                    )
                    .route("/mine", web::get().to(handlers::reports::list_my_reports))
                    .route(
                        "/{report_id}",
                        web::patch().to(handlers::reports::update_report),
                    ),
            )
            .service(
                web::scope("/api/v1/uploads")
                    .wrap(JwtAuthMiddleware::new(jwt_secret.clone()))
                    .route(
                        "/signed-url",
                        web::post().to(handlers::uploads::create_signed_url),
                    ),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
