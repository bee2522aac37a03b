//! Airtime top-up endpoint

use actix_web::{http::header, web, HttpResponse};

use tu_core::domain::TopUpRequest;
use tu_core::services::AirtimeProvider;
use tu_shared::types::ErrorBody;

use crate::app::AppState;
use crate::handlers::ApiError;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Handler for POST /api/topup
///
/// # Request Body
///
/// ```json
/// { "phone": "+2348030000000", "amount": 500 }
/// ```
///
/// `amount` may also be a numeric string. The body may be a JSON document
/// whose value is itself a JSON-encoded string.
///
/// # Response
///
/// The provider's top-up body, verbatim: 200 when the provider reported
/// success, 502 otherwise.
///
/// ## Errors
/// - 400 `{"error":"Body must be JSON"}`
/// - 413 `{"error":"Body too large"}` above [`MAX_BODY_BYTES`]
/// - 400 `{"error":"phone & amount required"}`
/// - 502 `{"error":"Could not get Zendit token"}`
/// - 400 `{"error":"Could not detect carrier for this number"}`
/// - 502 `{"error":"Upstream provider request failed"}`
pub async fn topup<P>(
    body: Result<web::Bytes, actix_web::Error>,
    state: web::Data<AppState<P>>,
) -> Result<HttpResponse, ApiError>
where
    P: AirtimeProvider + 'static,
{
    let body = body.map_err(ApiError::from_payload_error)?;
    let request = TopUpRequest::parse(&body)?;
    let outcome = state.topup_service.execute(request).await?;

    let mut response = if outcome.accepted {
        HttpResponse::Ok()
    } else {
        HttpResponse::BadGateway()
    };
    Ok(response.json(outcome.body))
}

/// Any other method on /api/topup. The body is never read.
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "POST"))
        .json(ErrorBody::new("POST only"))
}
