//! SOAP 1.1 endpoint.
//!
//! `POST /soap` takes a document/literal envelope carrying `convert_currency`
//! or `get_rates`. `GET /soap` (usually `GET /soap?wsdl`) returns the WSDL.
//! Every failure is answered with a Fault envelope and HTTP 500.

pub mod envelope;
pub mod fault;
pub mod operation;
pub mod wsdl;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use converto_core::ConversionService;
use tracing::{debug, error, warn};

use crate::AppState;

pub use envelope::{SoapRequest, TARGET_NS};
pub use fault::{Fault, FaultCode};
pub use operation::{SoapOperation, SoapResult};

/// Path the SOAP service is mounted at.
pub const SOAP_PATH: &str = "/soap";

const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Creates the SOAP routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(SOAP_PATH, get(describe).post(dispatch))
        .route("/soap/", get(describe).post(dispatch))
}

/// GET `/soap?wsdl` - Service description.
async fn describe(headers: HeaderMap) -> Response {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");

    xml_response(
        StatusCode::OK,
        wsdl::document(&format!("http://{host}{SOAP_PATH}")),
    )
}

/// POST `/soap` - Run one operation.
async fn dispatch(State(state): State<AppState>, body: Bytes) -> Response {
    match handle(&state.service, &body) {
        Ok(xml) => xml_response(StatusCode::OK, xml),
        Err(fault) => {
            warn!(
                faultcode = fault.code.as_qname(),
                faultstring = %fault.message,
                "SOAP call faulted"
            );
            fault_response(&fault)
        }
    }
}

/// Parses, validates, invokes and renders one call.
pub fn handle(service: &ConversionService, body: &[u8]) -> Result<String, Fault> {
    let xml = std::str::from_utf8(body)
        .map_err(|_| Fault::client("Request body is not valid UTF-8"))?;

    let request = envelope::parse_request(xml)?;
    let operation = SoapOperation::from_request(&request)?;
    debug!(operation = operation.name(), "SOAP call");

    let result = operation.invoke(service)?;

    envelope::write_response(&result).map_err(|e| {
        error!(error = %e, "Failed to render SOAP response");
        Fault::server("Internal error")
    })
}

fn fault_response(fault: &Fault) -> Response {
    match envelope::write_fault(fault) {
        Ok(xml) => xml_response(StatusCode::INTERNAL_SERVER_ERROR, xml),
        Err(e) => {
            error!(error = %e, "Failed to render SOAP fault");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn xml_response(status: StatusCode, xml: String) -> Response {
    (status, [(header::CONTENT_TYPE, XML_CONTENT_TYPE)], xml).into_response()
}
