//! A small SBI HTTP/2+JSON client: deadline, bounded exponential backoff with
//! jitter, and W3C trace-context propagation, shared by every NF that calls a
//! peer (§5 "suspension points", §7 "cross-NF retries").

use crate::error::SbiError;
use crate::trace::{TraceContext, TRACEPARENT_HEADER};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    fn backoff(&self, attempt: u32) -> Duration {
        let exp = self.base_delay.saturating_mul(1 << attempt.min(8));
        let capped = exp.min(self.max_delay);
        let jitter_ms = rand::thread_rng().gen_range(0..=capped.as_millis().max(1) as u64 / 4 + 1);
        capped + Duration::from_millis(jitter_ms)
    }
}

#[derive(Clone)]
pub struct SbiClient {
    http: reqwest::Client,
    retry: RetryPolicy,
}

impl SbiClient {
    pub fn new(deadline: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(deadline)
            .build()
            .expect("reqwest client builds");
        Self {
            http,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        trace: &TraceContext,
    ) -> Result<T, SbiError> {
        self.send_with_retry(reqwest::Method::GET, url, trace, None::<&()>)
            .await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        trace: &TraceContext,
        body: &B,
    ) -> Result<T, SbiError> {
        self.send_with_retry(reqwest::Method::PUT, url, trace, Some(body))
            .await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        trace: &TraceContext,
        body: &B,
    ) -> Result<T, SbiError> {
        self.send_with_retry(reqwest::Method::POST, url, trace, Some(body))
            .await
    }

    pub async fn patch(&self, url: &str, trace: &TraceContext) -> Result<(), SbiError> {
        self.send_with_retry::<(), ()>(reqwest::Method::PATCH, url, trace, None)
            .await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        trace: &TraceContext,
        body: &B,
    ) -> Result<T, SbiError> {
        self.send_with_retry(reqwest::Method::PATCH, url, trace, Some(body))
            .await
    }

    pub async fn delete(&self, url: &str, trace: &TraceContext) -> Result<(), SbiError> {
        self.send_with_retry::<(), ()>(reqwest::Method::DELETE, url, trace, None)
            .await
    }

    async fn send_with_retry<B: Serialize, T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        url: &str,
        trace: &TraceContext,
        body: Option<&B>,
    ) -> Result<T, SbiError> {
        let mut last_err = SbiError::Unreachable("no attempts made".to_string());
        for attempt in 0..self.retry.max_attempts {
            match self.send_once(method.clone(), url, trace, body).await {
                Ok(value) => return Ok(value),
                Err(err) if !err.kind().retriable() => return Err(err),
                Err(err) => {
                    last_err = err;
                    if attempt + 1 < self.retry.max_attempts {
                        tokio::time::sleep(self.retry.backoff(attempt)).await;
                    }
                }
            }
        }
        Err(last_err)
    }

    async fn send_once<B: Serialize, T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        url: &str,
        trace: &TraceContext,
        body: Option<&B>,
    ) -> Result<T, SbiError> {
        let mut req = self
            .http
            .request(method, url)
            .header(TRACEPARENT_HEADER, trace.to_string());
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                SbiError::Timeout(self.http_timeout())
            } else {
                SbiError::Unreachable(e.to_string())
            }
        })?;
        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(SbiError::Problem {
                status: status.as_u16(),
                detail,
            });
        }
        // Callers that expect no body (PATCH/DELETE) instantiate T = ().
        let bytes = resp.bytes().await.map_err(|e| SbiError::Decode(e.to_string()))?;
        if bytes.is_empty() {
            serde_json::from_slice(b"null").map_err(|e| SbiError::Decode(e.to_string()))
        } else {
            serde_json::from_slice(&bytes).map_err(|e| SbiError::Decode(e.to_string()))
        }
    }

    fn http_timeout(&self) -> Duration {
        Duration::from_secs(5)
    }
}
