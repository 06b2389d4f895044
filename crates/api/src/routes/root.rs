//! Root greeting endpoint.

/// Body returned by `GET /`.
pub const GREETING: &str = "Hello, World!";

/// GET / — returns the plain-text greeting.
pub async fn hello() -> &'static str {
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hello_returns_greeting() {
        assert_eq!(hello().await, "Hello, World!");
    }
}
