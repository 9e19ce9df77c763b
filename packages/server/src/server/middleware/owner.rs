use axum::{extract::Request, middleware::Next, response::Response};

/// Header carrying the caller's identity
pub const OWNER_HEADER: &str = "x-owner";

/// Extension key for the owner taken from the request
///
/// Empty when the header is absent or not valid UTF-8; the create action
/// rejects an empty owner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Owner(pub String);

/// Middleware to extract the owner from the `x-owner` header
pub async fn extract_owner(mut request: Request, next: Next) -> Response {
    let owner = request
        .headers()
        .get(OWNER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_default();

    request.extensions_mut().insert(Owner(owner));

    next.run(request).await
}
