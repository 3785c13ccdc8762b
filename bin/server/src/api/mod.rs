pub mod state;
pub mod text;

use crate::opts::HttpOpts;

use std::time::Duration;

use axum::{
    Router,
    extract::{self, FromRequestParts},
    http::{HeaderValue, Method, Request, StatusCode, header},
    middleware::{self, Next},
    routing::get,
};
use axum_client_ip::ClientIp;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_app(opts: &HttpOpts, state: state::AppState) -> anyhow::Result<Router> {
    let service_info: &'static str = Box::leak(
        serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        })
        .to_string()
        .into_boxed_str(),
    );

    let mut allowed_origins = Vec::with_capacity(opts.origins.len());
    for origin in &opts.origins {
        allowed_origins.push(origin.parse::<HeaderValue>()?);
    }

    Ok(Router::new()
        .route("/infoz", get(move || async move { service_info }))
        .route("/healthz", get(|| async { StatusCode::OK }))
        .merge(text::routes())
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
                .max_age(Duration::from_secs(3600)),
        )
        .layer(
            tower::ServiceBuilder::new()
                .layer(opts.client_ip_source.clone().into_extension())
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            ip = tracing::field::Empty
                        )
                    }),
                )
                .layer(middleware::from_fn(
                    async |request: extract::Request, next: Next| {
                        let (mut parts, body) = request.into_parts();
                        if let Ok(ip) = ClientIp::from_request_parts(&mut parts, &()).await {
                            let span = tracing::Span::current();
                            span.record("ip", ip.0.to_string());
                        }
                        next.run(extract::Request::from_parts(parts, body)).await
                    },
                )),
        )
        .with_state(state))
}
