//! Reqwest-based server-sent event transport.
//!
//! Each subscription runs in its own tokio task: GET the endpoint, report the
//! handshake, then feed the body through [`LineBuffer`] and [`SseParser`] and
//! forward every default `message` event. Any failure, including the server
//! closing the body, is reported once through the sink and ends the task.

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::{classify_reqwest_error, TransportError};
use crate::sse::{LineBuffer, SseParser};
use crate::traits::{EventTransport, TransportHandle, TransportSink};

/// Transport implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
///
/// use battlelog::adapters::ReqwestSseTransport;
/// use battlelog::traits::{EventTransport, TransportSink};
///
/// let transport = ReqwestSseTransport::new(Duration::from_secs(10))?;
/// let mut handle = transport.open("http://localhost:42069/connect?roomid=abc", sink);
/// // ... later
/// handle.close();
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestSseTransport {
    client: reqwest::Client,
}

impl ReqwestSseTransport {
    /// A dial that has not completed within `connect_timeout` fails with
    /// [`TransportError::Timeout`] or [`TransportError::ConnectionFailed`].
    /// Only the handshake is bounded; an open stream may idle forever.
    pub fn new(connect_timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TransportError::ClientBuild {
                message: e.to_string(),
            })?;
        Ok(Self::with_client(client))
    }

    /// Use a custom reqwest::Client (proxies, TLS settings, timeouts).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl EventTransport for ReqwestSseTransport {
    fn open(&self, url: &str, sink: TransportSink) -> Box<dyn TransportHandle> {
        let client = self.client.clone();
        let url = url.to_string();
        let session = sink.session();
        debug!(%session, url = url.as_str(), "Opening event stream");

        let task = tokio::spawn(async move {
            let err = match stream_events(&client, &url, &sink).await {
                Ok(()) => return,
                Err(err) => err,
            };
            warn!(
                session = %sink.session(),
                code = err.error_code(),
                category = %err.category(),
                retryable = err.is_retryable(),
                error = %err,
                "Event stream failed"
            );
            sink.error(err.to_string());
        });

        Box::new(ReqwestSseHandle { task: Some(task) })
    }
}

/// Runs until the stream fails. `Ok` only when the controller side is gone.
async fn stream_events(
    client: &reqwest::Client,
    url: &str,
    sink: &TransportSink,
) -> Result<(), TransportError> {
    let response = client
        .get(url)
        .header(ACCEPT, "text/event-stream")
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await
        .map_err(|e| classify_reqwest_error(&e, url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::HttpStatus {
            status: status.as_u16(),
        });
    }

    info!(session = %sink.session(), "Event stream connected");
    if !sink.opened() {
        return Ok(());
    }

    let mut lines = LineBuffer::new();
    let mut parser = SseParser::new();
    let mut body = response.bytes_stream();

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| classify_reqwest_error(&e, url))?;
        for line in lines.push(&chunk)? {
            let Some(event) = parser.feed_line(&line) else {
                continue;
            };
            if !event.is_message() {
                debug!(kind = event.kind(), "Skipping named event");
                continue;
            }
            if !sink.message(event.data) {
                return Ok(());
            }
        }
    }

    // An event without its terminating blank line is incomplete and dropped.
    if lines.has_pending() {
        debug!("Discarding unterminated line at end of stream");
    }
    Err(TransportError::StreamEnded)
}

/// Handle to a running subscription task.
pub struct ReqwestSseHandle {
    task: Option<JoinHandle<()>>,
}

impl TransportHandle for ReqwestSseHandle {
    fn close(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    fn is_open(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for ReqwestSseHandle {
    fn drop(&mut self) {
        self.close();
    }
}
