//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use lumohub_app::ports::Gateway;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the light API under `/api` and gateway maintenance under `/admin`.
/// When `static_dir` is set, unmatched paths are served from it so the web
/// client can be hosted by the same process. Includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level.
pub fn build<G>(state: AppState<G>, static_dir: Option<&Path>) -> Router
where
    G: Gateway + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .nest("/admin", crate::api::admin_routes());

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use lumohub_app::cache::LightCache;
    use lumohub_app::services::command_service::CommandService;
    use lumohub_app::services::query_service::QueryService;
    use lumohub_app::usage::SceneUsage;
    use lumohub_domain::error::{LumoError, TransportError};
    use lumohub_domain::group::{Group, SUPER_GROUP_NAME};
    use lumohub_domain::id::{LightId, SceneId};
    use lumohub_domain::light::{Light, Spectrum};
    use lumohub_domain::operation::{GroupOperation, LightOperation};
    use lumohub_domain::scene::Scene;
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubGateway {
        calls: AtomicUsize,
        offline: bool,
    }

    impl StubGateway {
        fn answer(&self) -> Result<(), LumoError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.offline {
                Err(TransportError::NotConnected.into())
            } else {
                Ok(())
            }
        }
    }

    impl Gateway for StubGateway {
        async fn operate_light(&self, _: &Light, _: LightOperation) -> Result<(), LumoError> {
            self.answer()
        }
        async fn operate_group(
            &self,
            _: &Group,
            _: GroupOperation,
            _: bool,
        ) -> Result<(), LumoError> {
            self.answer()
        }
        async fn reboot(&self) -> Result<(), LumoError> {
            self.answer()
        }
    }

    fn seeded_cache() -> Arc<LightCache> {
        let cache = Arc::new(LightCache::new());
        cache.upsert_light(
            Light::builder(LightId::new(1))
                .name("Ceiling")
                .spectrum(Spectrum::White)
                .on(true)
                .dimmer(50)
                .build(),
        );
        cache.upsert_light(
            Light::builder(LightId::new(2))
                .name("Lamp")
                .spectrum(Spectrum::Rgb)
                .color("ff0000")
                .build(),
        );
        cache.upsert_group(Group::new("Kitchen", [LightId::new(1), LightId::new(2)]));
        cache.upsert_group(Group::new(SUPER_GROUP_NAME, [LightId::new(1), LightId::new(2)]));
        cache.upsert_scene(Scene::new(SceneId::new(10), "Relax"));
        cache.upsert_scene(Scene::new(SceneId::new(11), "Focus"));
        cache
    }

    fn app_with(gateway: Arc<StubGateway>) -> Router {
        let cache = seeded_cache();
        let usage = Arc::new(SceneUsage::new());
        let state = AppState::new(
            CommandService::new(Arc::clone(&cache), Arc::clone(&usage), gateway),
            QueryService::new(cache, usage),
        );
        build(state, None)
    }

    fn app() -> Router {
        app_with(Arc::new(StubGateway::default()))
    }

    fn post_request(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::from(body))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app().oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_groups_without_super_group() {
        let response = app().oneshot(get_request("/api/groups")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let groups = body.as_array().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0]["name"], "Kitchen");
        assert_eq!(groups[0]["lights"][0]["spectrum"], "white");
        assert_eq!(groups[0]["lights"][0]["brightness"], 0.5);
        assert_eq!(groups[0]["lights"][1]["color"], "#ff0000");
        assert_eq!(groups[0]["lights"][1]["brightness"], 0.0);
    }

    #[tokio::test]
    async fn should_list_most_used_scene_first() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_request("/api/scenes", "11"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(app.oneshot(get_request("/api/scenes")).await.unwrap()).await;
        assert_eq!(body[0]["name"], "Focus");
        assert_eq!(body[1]["name"], "Relax");
    }

    #[tokio::test]
    async fn should_forward_brightness_to_gateway() {
        let gateway = Arc::new(StubGateway::default());
        let response = app_with(Arc::clone(&gateway))
            .oneshot(post_request("/api/lights/1/brightness", "0.25"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.into_body().collect().await.unwrap().to_bytes().is_empty());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_light() {
        let response = app()
            .oneshot(post_request("/api/lights/99/brightness", "0.5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_temperature_on_rgb_light() {
        let gateway = Arc::new(StubGateway::default());
        let response = app_with(Arc::clone(&gateway))
            .oneshot(post_request("/api/lights/2/temperature", "0.5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_accept_color_with_hash_on_rgb_light() {
        let response = app()
            .oneshot(post_request("/api/lights/2/color", "#00ff00"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_reject_non_numeric_body() {
        let gateway = Arc::new(StubGateway::default());
        let app = app_with(Arc::clone(&gateway));

        let bad_fraction = app
            .clone()
            .oneshot(post_request("/api/lights/1/brightness", "bright"))
            .await
            .unwrap();
        let bad_id = app
            .oneshot(post_request("/api/lights/abc/brightness", "0.5"))
            .await
            .unwrap();

        assert_eq!(bad_fraction.status(), StatusCode::BAD_REQUEST);
        assert_eq!(bad_id.status(), StatusCode::BAD_REQUEST);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_return_service_unavailable_when_gateway_offline() {
        let gateway = Arc::new(StubGateway {
            offline: true,
            ..StubGateway::default()
        });
        let response = app_with(gateway)
            .oneshot(post_request("/api/lights/1/brightness", "0.5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = json_body(response).await;
        assert!(body["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn should_reboot_gateway() {
        let gateway = Arc::new(StubGateway::default());
        let response = app_with(Arc::clone(&gateway))
            .oneshot(post_request("/admin/gateway/reboot", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_serve_static_files_when_directory_configured() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>lumohub</h1>").unwrap();

        let cache = Arc::new(LightCache::new());
        let usage = Arc::new(SceneUsage::new());
        let state = AppState::new(
            CommandService::new(
                Arc::clone(&cache),
                Arc::clone(&usage),
                Arc::new(StubGateway::default()),
            ),
            QueryService::new(cache, usage),
        );
        let response = build(state, Some(dir.path()))
            .oneshot(get_request("/index.html"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
