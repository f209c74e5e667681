use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::error;

use crate::anomaly::{sample_anomalies, AnomalyRecord, TABLE_COLUMNS};
use crate::map::MapView;
use crate::news::{NewsFetcher, NewsPanel};

pub struct AppState {
    pub fetcher: NewsFetcher,
    pub static_dir: String,
}

// Template structs
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub map: MapView,
    pub columns: [&'static str; 4],
    pub anomalies: Vec<AnomalyRecord>,
    pub news: NewsPanel,
}

#[derive(Template)]
#[template(path = "news_panel.html")]
pub struct NewsPanelTemplate {
    pub news: NewsPanel,
}

// Wrapper for HTML responses
struct HtmlTemplate<T>(T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                error!("Failed to render template: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {}", err),
                )
                    .into_response()
            }
        }
    }
}

// Custom error type
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error: {}", self.0),
        )
            .into_response()
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        AppError(err.into())
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(index))
        .route("/news", get(news))
        .route("/health", get(health))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Route handlers
pub async fn index(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let anomalies = sample_anomalies();
    let map = MapView::coastal(&anomalies);
    let news = state.fetcher.panel().await;

    Ok(HtmlTemplate(DashboardTemplate {
        map,
        columns: TABLE_COLUMNS,
        anomalies,
        news,
    }))
}

pub async fn news(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let news = state.fetcher.panel().await;
    Ok(HtmlTemplate(NewsPanelTemplate { news }))
}

pub async fn health() -> impl IntoResponse {
    Html("OK")
}
