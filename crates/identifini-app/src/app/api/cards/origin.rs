//! Public origin of an incoming request.

use salvo::http::HeaderMap;
use salvo::http::header::HOST;
use salvo::http::uri::Uri;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";
const DEFAULT_SCHEME: &str = "http";

/// ## Summary
/// Returns `scheme://host` as the client addressed this server.
///
/// Reverse proxy headers win over the request's own `Host` and URI. Returns
/// `None` when nothing names a host.
pub fn request_origin(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let host = first_value(headers, X_FORWARDED_HOST)
        .or_else(|| first_value(headers, HOST.as_str()))
        .or_else(|| uri.authority().map(|authority| authority.as_str().to_owned()))?;

    let scheme = first_value(headers, X_FORWARDED_PROTO)
        .or_else(|| uri.scheme_str().map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_SCHEME.to_owned());

    Some(format!("{scheme}://{host}"))
}

/// First entry of a possibly comma-separated header, as proxies chain them.
fn first_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
