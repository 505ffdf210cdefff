//! Plain-text liveness endpoint.

/// GET / — confirms the server process is up, nothing more.
pub async fn get() -> &'static str {
    "Status server is running!"
}
