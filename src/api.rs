//! REST API for the net cutting service.
//!
//! Exposes the calculation over HTTP as the "Calculate" action of a form:
//! the five values arrive as JSON numbers or as the raw text a user typed.
//! Uses Axum as the web framework and supports CORS.

use axum::extract::Json;
use axum::extract::rejection::JsonRejection;
use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use serde_json::json;
use std::sync::OnceLock;
use tower_http::cors::{Any, CorsLayer};
use utoipa::{OpenApi, ToSchema};

use crate::calculator::{Calculation, RawDimensions, calculate, parse_field};
use crate::config::ApiConfig;
use crate::model::{BoxDimensions, InputField, InvalidInput, NetRectangle, validate_dimension};
use crate::packer::{GridTiling, Orientation};

static OPENAPI_DOC: OnceLock<utoipa::openapi::OpenApi> = OnceLock::new();

// SRI hashes verified against https://unpkg.com/swagger-ui-dist@5.17.14/ on 2025-10-29.
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="utf-8" />
        <title>box-net-cutter API Docs</title>
        <link
            rel="stylesheet"
            href="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui.css"
            integrity="sha384-wxLW6kwyHktdDGr6Pv1zgm/VGJh99lfUbzSn6HNHBENZlCN7W602k9VkGdxuFvPn"
            crossorigin="anonymous"
        />
    </head>
    <body>
        <div id="swagger-ui"></div>
        <script
            src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-bundle.js"
            integrity="sha384-wmyclcVGX/WhUkdkATwhaK1X1JtiNrr2EoYJ+diV3vj4v6OC5yCeSu+yW13SYJep"
            crossorigin="anonymous"
        ></script>
        <script>
            window.onload = function () {
                window.ui = SwaggerUIBundle({
                    url: "/docs/openapi.json",
                    dom_id: "#swagger-ui",
                });
            };
        </script>
    </body>
    </html>"##;

fn openapi_doc() -> &'static utoipa::openapi::OpenApi {
    OPENAPI_DOC.get_or_init(ApiDoc::openapi)
}

/// A single dimension as sent by a client: a JSON number or free text.
#[derive(Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    fn into_text(self) -> String {
        match self {
            RawValue::Number(value) => value.to_string(),
            RawValue::Text(text) => text,
        }
    }

    fn parse(&self, field: InputField) -> Result<f64, InvalidInput> {
        match self {
            RawValue::Number(value) => validate_dimension(*value, field),
            RawValue::Text(text) => validate_dimension(parse_field(text, field)?, field),
        }
    }
}

/// Request structure for the calculate endpoint.
#[derive(Deserialize, Clone, Debug, ToSchema)]
#[schema(
    example = json!({
        "sheet_length": 100.0,
        "sheet_width": "100",
        "box_length": 10.0,
        "box_width": 5.0,
        "box_height": 8.0
    })
)]
pub struct CalculateRequest {
    pub sheet_length: RawValue,
    pub sheet_width: RawValue,
    pub box_length: RawValue,
    pub box_width: RawValue,
    pub box_height: RawValue,
}

impl CalculateRequest {
    fn into_raw_dimensions(self) -> RawDimensions {
        RawDimensions {
            sheet_length: self.sheet_length.into_text(),
            sheet_width: self.sheet_width.into_text(),
            box_length: self.box_length.into_text(),
            box_width: self.box_width.into_text(),
            box_height: self.box_height.into_text(),
        }
    }
}

/// Request structure for the net endpoint.
#[derive(Deserialize, Clone, Debug, ToSchema)]
#[schema(example = json!({ "length": 10.0, "width": 5.0, "height": 8.0 }))]
pub struct NetRequest {
    pub length: RawValue,
    pub width: RawValue,
    pub height: RawValue,
}

impl NetRequest {
    fn into_validated(self) -> Result<BoxDimensions, InvalidInput> {
        Ok(BoxDimensions {
            length: self.length.parse(InputField::BoxLength)?,
            width: self.width.parse(InputField::BoxWidth)?,
            height: self.height.parse(InputField::BoxHeight)?,
        })
    }
}

/// Response of the calculate endpoint.
///
/// # Fields
/// * `total_nets` - Nets that can be cut from the sheet
/// * `net` - Bounding rectangle of one net
/// * `best_orientation` - Orientation that produced `total_nets`
/// * `layouts` - Grid tiling of both orientations, unrotated first
/// * `utilization_percent` - Share of the sheet covered by net rectangles
/// * `sheet_too_small` - Not a single net fits in either orientation
/// * `notice` - Advisory for the user, present when the sheet is too small
#[derive(Serialize, ToSchema)]
pub struct CalculateResponse {
    pub total_nets: u64,
    pub net: NetRectangle,
    pub best_orientation: Orientation,
    pub layouts: Vec<GridTiling>,
    pub utilization_percent: f64,
    pub sheet_too_small: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl CalculateResponse {
    pub fn from_calculation(calculation: &Calculation) -> Self {
        Self {
            total_nets: calculation.total_nets(),
            net: calculation.net,
            best_orientation: calculation.plan.best.orientation,
            layouts: calculation.plan.layouts().to_vec(),
            utilization_percent: calculation.utilization_percent(),
            sheet_too_small: calculation.sheet_too_small(),
            notice: calculation.notice().map(str::to_string),
        }
    }
}

#[derive(Serialize, ToSchema)]
struct ErrorResponse {
    error: String,
    details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: details.into(),
            field: None,
            code: None,
        }
    }
}

fn json_deserialize_error(err: JsonRejection) -> Response {
    warn!("⚠️ Rejected request body: {}", err);
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse::new("Invalid JSON data", err.to_string())),
    )
        .into_response()
}

fn validation_error(err: InvalidInput) -> Response {
    warn!("⚠️ Invalid input: {}", err);
    let mut body = ErrorResponse::new("Invalid input data", err.to_string());
    body.field = Some(err.field().key().to_string());
    body.code = Some(err.code().to_string());
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

#[derive(OpenApi)]
#[openapi(
    paths(handle_calculate, handle_net),
    components(
        schemas(
            CalculateRequest,
            CalculateResponse,
            NetRequest,
            NetRectangle,
            RawValue,
            GridTiling,
            Orientation,
            ErrorResponse
        )
    ),
    tags((name = "nets", description = "Endpoints for box net calculations"))
)]
struct ApiDoc;

/// Builds the application router.
pub fn router(config: &ApiConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .route("/calculate", post(handle_calculate))
        .route("/net", post(handle_net));

    if config.docs_enabled() {
        app = app
            .route("/docs/openapi.json", get(serve_openapi_json))
            .route("/docs", get(serve_openapi_ui));
    }

    app.layer(cors)
}

/// Starts the API server and blocks until it terminates.
pub async fn start_api_server(config: ApiConfig) -> std::io::Result<()> {
    let app = router(&config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        "🚀 Server running on http://{}:{}",
        config.display_host(),
        config.port()
    );
    if config.binds_to_all_interfaces() && config.uses_default_host() {
        info!("💡 Local access: http://localhost:{}", config.port());
    }
    info!("📦 API Endpoints:");
    info!("   - POST /calculate");
    info!("   - POST /net");
    if config.docs_enabled() {
        info!("📑 Documentation:");
        info!("   - GET /docs");
        info!("   - GET /docs/openapi.json");
    }

    axum::serve(listener, app).await
}

/// Handler for POST /calculate endpoint.
///
/// Validates the five dimensions and returns how many nets fit on the sheet.
#[utoipa::path(
    post,
    path = "/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Calculation succeeded", body = CalculateResponse),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "Malformed body or invalid dimensions",
            body = ErrorResponse
        )
    ),
    tag = "nets"
)]
async fn handle_calculate(payload: Result<Json<CalculateRequest>, JsonRejection>) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(err) => return json_deserialize_error(err),
    };

    let raw = request.into_raw_dimensions();
    info!(
        "📥 New calculate request: sheet {}×{}, box {}×{}×{}",
        raw.sheet_length, raw.sheet_width, raw.box_length, raw.box_width, raw.box_height
    );

    let calculation = match calculate(&raw) {
        Ok(calculation) => calculation,
        Err(err) => return validation_error(err),
    };
    info!(
        "📦 Result: {} nets ({})",
        calculation.total_nets(),
        calculation.plan.best.orientation
    );
    if let Some(notice) = calculation.notice() {
        info!("⚠️ {}", notice);
    }

    let response = CalculateResponse::from_calculation(&calculation);
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for POST /net endpoint.
///
/// Returns the bounding rectangle of the cross-shaped net of a box.
#[utoipa::path(
    post,
    path = "/net",
    request_body = NetRequest,
    responses(
        (status = 200, description = "Net bounding rectangle", body = NetRectangle),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "Malformed body or invalid dimensions",
            body = ErrorResponse
        )
    ),
    tag = "nets"
)]
async fn handle_net(payload: Result<Json<NetRequest>, JsonRejection>) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(err) => return json_deserialize_error(err),
    };

    match request.into_validated() {
        Ok(box_dims) => (StatusCode::OK, Json(box_dims.net())).into_response(),
        Err(err) => validation_error(err),
    }
}

async fn serve_openapi_json() -> impl IntoResponse {
    Json(openapi_doc())
}

async fn serve_openapi_ui() -> impl IntoResponse {
    Html(SWAGGER_UI_HTML)
}
