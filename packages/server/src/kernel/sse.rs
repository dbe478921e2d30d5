//! SSE plumbing for streaming feeds to clients.
//!
//! Adapts the receiving end of an mpsc channel into an axum SSE response.
//! Each item is serialized to JSON and framed as a bare `data: <JSON>` block;
//! the event discriminator lives inside the payload (a `type` field), so no
//! SSE event name is set. When the client disconnects the response body is
//! dropped, the receiver with it, and the producer's next send fails.

use std::convert::Infallible;

use axum::response::sse::{Event, KeepAlive, Sse};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;

/// Wrap a channel of serializable events as an SSE response.
pub fn sse_response<T>(
    rx: mpsc::Receiver<T>,
) -> Sse<impl futures::Stream<Item = Result<Event, Infallible>>>
where
    T: Serialize + Send + 'static,
{
    let stream = ReceiverStream::new(rx).filter_map(|event| {
        Event::default()
            .json_data(&event)
            .ok()
            .map(Ok::<_, Infallible>)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
