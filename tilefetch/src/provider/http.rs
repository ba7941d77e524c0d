//! HTTP client abstraction for testability

use std::time::Duration;

use super::ProviderError;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request, returning the response body.
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError>;
}

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new client with the default timeout.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a new client with a custom per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ProviderError::Http(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| ProviderError::Http(format!("Failed to read response: {}", e)))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Mock HTTP client for testing.
    ///
    /// Serves a scripted sequence of responses and records every requested
    /// URL, so retry behavior can be asserted call by call. Once the
    /// script is exhausted the last response repeats.
    pub struct MockHttpClient {
        responses: Mutex<VecDeque<Result<Vec<u8>, ProviderError>>>,
        requests: Mutex<Vec<String>>,
        fallback: Result<Vec<u8>, ProviderError>,
    }

    impl MockHttpClient {
        /// A mock that always answers with the same response.
        pub fn always(response: Result<Vec<u8>, ProviderError>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
                fallback: response,
            }
        }

        /// A mock that plays back `script` in order, then repeats the
        /// final entry.
        pub fn script(script: Vec<Result<Vec<u8>, ProviderError>>) -> Self {
            let fallback = script
                .last()
                .cloned()
                .unwrap_or_else(|| Err(ProviderError::Http("script empty".to_string())));
            Self {
                responses: Mutex::new(script.into()),
                requests: Mutex::new(Vec::new()),
                fallback,
            }
        }

        /// URLs requested so far, in order.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        /// Number of GETs performed.
        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
            self.requests.lock().unwrap().push(url.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| self.fallback.clone())
        }
    }

    #[test]
    fn test_mock_client_success() {
        let mock = MockHttpClient::always(Ok(vec![1, 2, 3, 4]));

        let result = mock.get("http://example.com");
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(mock.requests(), vec!["http://example.com"]);
    }

    #[test]
    fn test_mock_client_scripted_sequence() {
        let mock = MockHttpClient::script(vec![
            Err(ProviderError::Http("boom".to_string())),
            Ok(vec![9]),
        ]);

        assert!(mock.get("http://example.com/a").is_err());
        assert_eq!(mock.get("http://example.com/b").unwrap(), vec![9]);
        // Script exhausted: last entry repeats
        assert_eq!(mock.get("http://example.com/c").unwrap(), vec![9]);
        assert_eq!(mock.request_count(), 3);
    }
}
