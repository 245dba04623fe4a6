//! Stream of messages from a consumer.

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::stream::{BoxStream, Stream, StreamExt};
use lapin::message::Delivery;

use crate::error::{MqError, MqResult};

/// Messages delivered to one consumer.
///
/// Ends when the channel or connection is closed. With auto-ack disabled,
/// acknowledge each message through `delivery.acker`.
pub struct Deliveries {
    queue: String,
    consumer_tag: String,
    inner: BoxStream<'static, lapin::Result<Delivery>>,
}

impl Deliveries {
    pub(crate) fn new(queue: impl Into<String>, consumer: lapin::Consumer) -> Self {
        Self {
            queue: queue.into(),
            consumer_tag: consumer.tag().to_string(),
            inner: consumer.boxed(),
        }
    }

    /// Queue being consumed.
    pub fn queue(&self) -> &str {
        &self.queue
    }

    /// Consumer tag, generated by the broker unless one was configured.
    pub fn consumer_tag(&self) -> &str {
        &self.consumer_tag
    }
}

impl fmt::Debug for Deliveries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deliveries")
            .field("queue", &self.queue)
            .field("consumer_tag", &self.consumer_tag)
            .finish_non_exhaustive()
    }
}

impl Stream for Deliveries {
    type Item = MqResult<Delivery>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        match this.inner.poll_next_unpin(cx) {
            Poll::Ready(Some(Ok(delivery))) => Poll::Ready(Some(Ok(delivery))),
            Poll::Ready(Some(Err(e))) => Poll::Ready(Some(Err(MqError::delivery(&this.queue, e)))),
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
