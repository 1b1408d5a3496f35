//! Request routing. Pure: method, path and raw query in, response out.

use crate::protocol::{SphereData, SphereId};
use http::{header, Method, Response, StatusCode};

pub const SPHERE_DATA_PATH: &str = "/sphere-data";
pub const CORS_ALLOW_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Every `id` value in the query string, form-url-decoded, in order.
pub fn query_id(query: &str) -> Option<SphereId> {
    let values = form_urlencoded::parse(query.as_bytes())
        .filter(|(k, _)| k == "id")
        .map(|(_, v)| v.into_owned())
        .collect();
    SphereId::from_values(values)
}

pub fn handle(method: &Method, path: &str, query: Option<&str>) -> Response<Vec<u8>> {
    if *method == Method::OPTIONS {
        return preflight();
    }
    match (method, path) {
        (&Method::GET | &Method::HEAD, SPHERE_DATA_PATH) => {
            sphere_data(SphereData::for_id(query.and_then(query_id)))
        }
        _ => not_found(method, path),
    }
}

fn sphere_data(data: SphereData) -> Response<Vec<u8>> {
    match serde_json::to_vec(&data) {
        Ok(body) => response(StatusCode::OK, "application/json; charset=utf-8", body),
        Err(e) => {
            log::error!("failed to encode sphere data: {e}");
            response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "text/plain; charset=utf-8",
                b"Internal Server Error".to_vec(),
            )
        }
    }
}

fn preflight() -> Response<Vec<u8>> {
    let mut res = response(StatusCode::NO_CONTENT, "text/plain; charset=utf-8", Vec::new());
    res.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        header::HeaderValue::from_static(CORS_ALLOW_METHODS),
    );
    res.headers_mut().remove(header::CONTENT_TYPE);
    res
}

fn not_found(method: &Method, path: &str) -> Response<Vec<u8>> {
    response(
        StatusCode::NOT_FOUND,
        "text/plain; charset=utf-8",
        format!("Cannot {method} {path}").into_bytes(),
    )
}

pub fn bad_request(reason: &str) -> Response<Vec<u8>> {
    response(
        StatusCode::BAD_REQUEST,
        "text/plain; charset=utf-8",
        format!("Bad Request: {reason}").into_bytes(),
    )
}

fn response(status: StatusCode, content_type: &'static str, body: Vec<u8>) -> Response<Vec<u8>> {
    let mut res = Response::new(body);
    *res.status_mut() = status;
    let headers = res.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static(content_type),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        header::HeaderValue::from_static("*"),
    );
    res
}
