//! # HTTP Transport
//!
//! Blocking POST with bounded retries and exponential backoff.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, Response};
use reqwest::header::RETRY_AFTER;
use reqwest::StatusCode;

use crate::error::SoapError;

/// HTTP statuses worth another attempt
pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Statuses whose `Retry-After` header replaces the backoff delay
pub const RETRY_AFTER_STATUSES: [u16; 2] = [429, 503];

/// Sends a request body and returns the response text
pub trait Transport {
    fn post(&self, url: &str, body: &str, headers: &[(String, String)])
        -> Result<String, SoapError>;
}

/// Retry schedule for transient failures
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Additional attempts after the first one
    pub max_retries: u32,
    /// Delay before the first retry; doubles for each subsequent retry
    pub backoff_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_base: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, backoff_base: Duration) -> Self {
        Self {
            max_retries,
            backoff_base,
        }
    }

    /// Delay before retry number `retry` (1-based): base, 2*base, 4*base...
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(16);
        self.backoff_base * 2u32.pow(exponent)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    pub fn is_retryable_status(&self, status: StatusCode) -> bool {
        RETRYABLE_STATUSES.contains(&status.as_u16())
    }

    pub fn is_transient(&self, error: &reqwest::Error) -> bool {
        error.is_connect() || error.is_timeout()
    }
}

/// Read a `Retry-After` value: delay-seconds or an HTTP date
///
/// Dates in the past mean no wait.
pub fn parse_retry_after(value: &str, now: DateTime<Utc>) -> Option<Duration> {
    let value = value.trim();
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }
    let at = DateTime::parse_from_rfc2822(value).ok()?;
    let wait = at.with_timezone(&Utc) - now;
    Some(wait.to_std().unwrap_or(Duration::ZERO))
}

fn retry_after(response: &Response) -> Option<Duration> {
    if !RETRY_AFTER_STATUSES.contains(&response.status().as_u16()) {
        return None;
    }
    let value = response.headers().get(RETRY_AFTER)?.to_str().ok()?;
    parse_retry_after(value, Utc::now())
}

/// Outcome of a single attempt
enum Attempt {
    Done(String),
    /// Retryable failure, with the delay the server asked for if any
    Retry(SoapError, Option<Duration>),
    Fail(SoapError),
}

/// [`Transport`] over a blocking reqwest client
pub struct HttpTransport {
    client: Client,
    policy: RetryPolicy,
}

impl HttpTransport {
    /// Create a transport whose every attempt is bounded by `timeout`
    pub fn new(timeout: Duration, policy: RetryPolicy) -> Result<Self, SoapError> {
        tracing::debug!("Creating HTTP client with timeout {:?}", timeout);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SoapError::Client)?;
        Ok(Self { client, policy })
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    fn attempt(&self, url: &str, body: &str, headers: &[(String, String)]) -> Attempt {
        let mut request = self.client.post(url).body(body.to_string());
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        match request.send() {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    match response.text() {
                        Ok(text) => Attempt::Done(text),
                        Err(e) => Attempt::Fail(SoapError::Transport(e)),
                    }
                } else if self.policy.is_retryable_status(status) {
                    Attempt::Retry(
                        SoapError::Status {
                            status: status.as_u16(),
                        },
                        retry_after(&response),
                    )
                } else {
                    Attempt::Fail(SoapError::Status {
                        status: status.as_u16(),
                    })
                }
            }
            Err(e) if self.policy.is_transient(&e) => {
                Attempt::Retry(SoapError::Transport(e), None)
            }
            Err(e) => Attempt::Fail(SoapError::Transport(e)),
        }
    }
}

impl Transport for HttpTransport {
    fn post(
        &self,
        url: &str,
        body: &str,
        headers: &[(String, String)],
    ) -> Result<String, SoapError> {
        let max_attempts = self.policy.max_attempts();
        let mut attempt_no = 1;

        loop {
            tracing::debug!("POST {} (attempt {}/{})", url, attempt_no, max_attempts);
            let (error, requested_delay) = match self.attempt(url, body, headers) {
                Attempt::Done(text) => return Ok(text),
                Attempt::Fail(e) => return Err(e),
                Attempt::Retry(e, delay) => (e, delay),
            };

            if attempt_no >= max_attempts {
                tracing::warn!("Giving up on {} after {} attempts: {}", url, attempt_no, error);
                return Err(match error {
                    SoapError::Status { status } => SoapError::RetriesExhausted {
                        attempts: attempt_no,
                        status,
                    },
                    other => other,
                });
            }

            let delay = requested_delay.unwrap_or_else(|| self.policy.delay_for(attempt_no));
            tracing::debug!("Attempt {} failed ({}), retrying in {:?}", attempt_no, error, delay);
            thread::sleep(delay);
            attempt_no += 1;
        }
    }
}
