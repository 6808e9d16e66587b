use actix_web::{http::StatusCode, web, App, HttpRequest, HttpResponse, HttpServer};
use court_scheduler_infra::{Config, CourtContext, HttpCourtScheduleService, StaticTimeSys};
use court_scheduler_sdk::CourtSchedulerSDK;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

pub const API_TOKEN: &str = "secret-token";

// 2026-10-18T12:30:00+02:00
pub const NOW_MILLIS: i64 = 1792319400000;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

/// How the fake court booking API answers
pub struct BackendBehaviour {
    pub availability_status: StatusCode,
    pub unavailability_status: StatusCode,
    /// Holds every request until this many requests are in flight
    pub barrier: Option<Arc<Barrier>>,
}

impl Default for BackendBehaviour {
    fn default() -> Self {
        Self {
            availability_status: StatusCode::CREATED,
            unavailability_status: StatusCode::CREATED,
            barrier: None,
        }
    }
}

struct BackendState {
    behaviour: BackendBehaviour,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl BackendState {
    async fn handle(
        &self,
        req: &HttpRequest,
        body: serde_json::Value,
        status: StatusCode,
    ) -> HttpResponse {
        self.requests.lock().unwrap().push(RecordedRequest {
            path: req.path().to_string(),
            authorization: req
                .headers()
                .get("authorization")
                .and_then(|h| h.to_str().ok())
                .map(String::from),
            body,
        });
        if let Some(barrier) = &self.behaviour.barrier {
            barrier.wait().await;
        }
        HttpResponse::build(status).json(serde_json::json!({}))
    }
}

async fn create_availability(
    req: HttpRequest,
    body: web::Json<serde_json::Value>,
    state: web::Data<BackendState>,
) -> HttpResponse {
    let status = state.behaviour.availability_status;
    state.handle(&req, body.into_inner(), status).await
}

async fn create_unavailability(
    req: HttpRequest,
    body: web::Json<serde_json::Value>,
    state: web::Data<BackendState>,
) -> HttpResponse {
    let status = state.behaviour.unavailability_status;
    state.handle(&req, body.into_inner(), status).await
}

pub struct TestApp {
    pub ctx: CourtContext,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestApp {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn test_context(address: String) -> CourtContext {
    let config = Config {
        api_address: address,
        api_token: Some(API_TOKEN.into()),
        timezone: chrono_tz::Europe::Oslo,
    };
    let sdk = CourtSchedulerSDK::new(config.api_address.clone(), config.api_token.clone());

    CourtContext::new(
        Arc::new(HttpCourtScheduleService::new(sdk)),
        config,
        Arc::new(StaticTimeSys {
            timestamp_millis: NOW_MILLIS,
        }),
    )
}

// Launch a fake court booking API as a background task
pub async fn spawn_app(behaviour: BackendBehaviour) -> TestApp {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(BackendState {
        behaviour,
        requests: requests.clone(),
    });

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(
                web::scope("/api/v1")
                    .route("/court-availabilities", web::post().to(create_availability))
                    .route(
                        "/court-unavailabilities",
                        web::post().to(create_unavailability),
                    ),
            )
    })
    .listen(listener)
    .expect("Failed to listen on port")
    .workers(1)
    .run();
    let _ = actix_web::rt::spawn(server);

    TestApp {
        ctx: test_context(format!("http://127.0.0.1:{}/api/v1", port)),
        requests,
    }
}
