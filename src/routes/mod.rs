mod account;
mod health;
mod swagger;
use crate::database::{self, AccountRepository, InMemoryDatabase, PostgreDatabase};
use health::health_checker_handler;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{AppState, Config};

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::get,
    Router,
};
use std::sync::Arc;

/// Picks the storage backend from the configuration and builds the application router
pub async fn make_app(config: Config) -> anyhow::Result<Router> {
    let accounts: Arc<dyn AccountRepository> = match &config.db_url {
        Some(db_url) => {
            info!("Connecting to PostgreSQL...");
            let pool = database::connect_sqlx(db_url).await?;
            info!("Connected to PostgreSQL!");
            let db = PostgreDatabase::new(pool);
            db.ensure_schema().await?;
            Arc::new(db)
        }
        None => {
            warn!("DATABASE_URL is not set, accounts are kept in memory only");
            Arc::new(InMemoryDatabase::new())
        }
    };

    if !std::path::Path::new(&config.static_dir).is_dir() {
        warn!(
            "Static directory '{}' does not exist, no front-end will be served",
            config.static_dir
        );
    }

    build_router(Arc::new(AppState { accounts, config }))
}

pub fn build_router(state: Arc<AppState>) -> anyhow::Result<Router> {
    let cors = match &state.config.cors_origin {
        Some(origin) => Some(
            CorsLayer::new()
                .allow_origin(HeaderValue::from_str(origin)?)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([ACCEPT, CONTENT_TYPE]),
        ),
        None => None,
    };

    let mut ret = Router::new()
        .route("/api", get(health_checker_handler))
        .route("/api/health", get(health_checker_handler))
        .route("/api/info", get(swagger::api_info_handler))
        .nest("/banque/comptes", account::account_routes())
        .merge(swagger::build_documentation())
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http());
    if let Some(cors) = cors {
        ret = ret.layer(cors);
    }

    Ok(ret)
}


#[cfg(test)]
mod tests {
    use std::fs;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::test_support::test_app_with;
    use crate::Config;

    #[tokio::test]
    async fn front_end_files_are_served_from_the_static_dir() {
        let dir = std::env::temp_dir().join(format!("banque-static-{}", std::process::id()));
        fs::create_dir_all(dir.join("js")).unwrap();
        fs::write(dir.join("js").join("app.js"), "const API_BASE_URL = '/banque/comptes';").unwrap();

        let app = test_app_with(Config {
            static_dir: dir.to_string_lossy().into_owned(),
            ..Config::default()
        });

        let request = Request::builder().uri("/js/app.js").body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"const API_BASE_URL = '/banque/comptes';");

        let request = Request::builder().uri("/js/missing.js").body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        fs::remove_dir_all(&dir).ok();
    }
}
