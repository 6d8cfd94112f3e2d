//! Shared HTTP response checks.

use crate::error::GenerationError;

/// Check a response for rate limiting and non-success statuses.
///
/// - **429** becomes [`GenerationError::RateLimited`], reading `Retry-After`
///   as seconds (60 if absent or unparseable).
/// - **Other non-success** becomes [`GenerationError::Api`] with the body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GenerationError> {
    if resp.status() == 429 {
        return Err(GenerationError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(GenerationError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, retry_after: Option<&str>, body: &'static str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        if let Some(value) = retry_after {
            builder = builder.header("Retry-After", value);
        }
        reqwest::Response::from(builder.body(body).unwrap())
    }

    #[test]
    fn retry_after_header_is_parsed() {
        assert_eq!(parse_retry_after(&mock_response(429, Some("120"), "")), 120);
        assert_eq!(parse_retry_after(&mock_response(429, None, "")), 60);
        assert_eq!(
            parse_retry_after(&mock_response(429, Some("Wed, 21 Oct 2015 07:28:00 GMT"), "")),
            60
        );
    }

    #[tokio::test]
    async fn rate_limited_response() {
        let err = check_response(mock_response(429, Some("30"), ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn api_error_keeps_status_and_body() {
        let err = check_response(mock_response(403, None, "API key not valid"))
            .await
            .unwrap_err();
        match err {
            GenerationError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(200, None, "{}")).await.is_ok());
    }
}
