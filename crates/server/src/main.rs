use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Request, State},
    handler::Handler,
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use shared::protocol::{WaitlistResponse, HEALTHZ_ROUTE, WAITLIST_ROUTE};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info, info_span, warn, Instrument};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod api;
mod app_state;
mod config;
mod notifier;

use api::{submit_waitlist, MailSettings, RelayContext, RelayError};
use app_state::AppState;
use config::load_settings;
use notifier::HttpMailApi;

const MAX_BODY_BYTES: usize = 16 * 1024;
const ALLOWED_METHODS: &str = "POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    info!(?settings, "loaded relay settings");
    if settings.mail_account().is_none() {
        warn!("MAIL_USER and/or MAIL_PASSWORD not set; submissions will be refused with a configuration error");
    }

    let notifier = HttpMailApi::new(&settings.mail_api_url)?;
    info!(mail_api = %notifier.endpoint(), "mail notifier ready");
    let state = AppState {
        relay: RelayContext {
            mail: MailSettings::from_settings(&settings),
            notifier: Arc::new(notifier),
        },
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "relay listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(HEALTHZ_ROUTE, get(healthz))
        .route(
            WAITLIST_ROUTE,
            post(http_submit_waitlist.layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)))
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(with_cors_headers))
}

async fn with_cors_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}

async fn healthz() -> &'static str {
    "ok"
}

async fn preflight() -> Json<WaitlistResponse> {
    Json(WaitlistResponse::ok())
}

async fn method_not_allowed() -> (StatusCode, Json<WaitlistResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(WaitlistResponse::error("Method not allowed")),
    )
}

async fn http_submit_waitlist(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> (StatusCode, Json<WaitlistResponse>) {
    let span = info_span!("waitlist_submission", submission_id = %Uuid::new_v4());
    async move {
        match submit_waitlist(&state.relay, &body).await {
            Ok(signup) => {
                info!(domain = signup.domain(), "waitlist signup relayed");
                (StatusCode::OK, Json(WaitlistResponse::ok()))
            }
            Err(err) => {
                match &err {
                    RelayError::SendFailed(_) => error!(error = %err, "waitlist relay failed"),
                    RelayError::MissingConfiguration => error!("waitlist relay is missing mail configuration"),
                    _ => warn!(error = %err, "rejected waitlist submission"),
                }
                (err.status(), Json(WaitlistResponse::error(err.public_message())))
            }
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
