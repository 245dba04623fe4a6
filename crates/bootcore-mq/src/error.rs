//! Error types for broker operations.

use thiserror::Error;

/// Result type for broker operations.
pub type MqResult<T> = Result<T, MqError>;

/// Errors that can occur while talking to the broker.
#[derive(Debug, Error)]
pub enum MqError {
    /// The TCP/AMQP connection could not be established.
    #[error("failed to connect to RabbitMQ at {url}: {source}")]
    Connect {
        /// Broker URL with the password redacted.
        url: String,
        /// Underlying error.
        #[source]
        source: lapin::Error,
    },

    /// The channel could not be opened.
    #[error("failed to open a channel: {0}")]
    Channel(#[source] lapin::Error),

    /// A publish was rejected.
    #[error("failed to publish to queue {queue}: {source}")]
    Publish {
        /// Routing key (queue name).
        queue: String,
        /// Underlying error.
        #[source]
        source: lapin::Error,
    },

    /// A queue declaration failed.
    #[error("failed to declare queue {queue}: {source}")]
    DeclareQueue {
        /// Queue name.
        queue: String,
        /// Underlying error.
        #[source]
        source: lapin::Error,
    },

    /// A consumer could not be registered.
    #[error("failed to consume from queue {queue}: {source}")]
    Consume {
        /// Queue name.
        queue: String,
        /// Underlying error.
        #[source]
        source: lapin::Error,
    },

    /// The consumer stream reported an error.
    #[error("delivery from queue {queue} failed: {source}")]
    Delivery {
        /// Queue name.
        queue: String,
        /// Underlying error.
        #[source]
        source: lapin::Error,
    },

    /// Closing the channel or connection failed.
    #[error("failed to close RabbitMQ client: {0}")]
    Close(#[source] lapin::Error),

    /// The client was already closed.
    #[error("client is closed")]
    Closed,
}

impl MqError {
    /// Create a new connect error.
    pub fn connect(url: impl Into<String>, source: lapin::Error) -> Self {
        Self::Connect {
            url: url.into(),
            source,
        }
    }

    /// Create a new publish error.
    pub fn publish(queue: impl Into<String>, source: lapin::Error) -> Self {
        Self::Publish {
            queue: queue.into(),
            source,
        }
    }

    /// Create a new queue declaration error.
    pub fn declare_queue(queue: impl Into<String>, source: lapin::Error) -> Self {
        Self::DeclareQueue {
            queue: queue.into(),
            source,
        }
    }

    /// Create a new consume error.
    pub fn consume(queue: impl Into<String>, source: lapin::Error) -> Self {
        Self::Consume {
            queue: queue.into(),
            source,
        }
    }

    /// Create a new delivery error.
    pub fn delivery(queue: impl Into<String>, source: lapin::Error) -> Self {
        Self::Delivery {
            queue: queue.into(),
            source,
        }
    }

    /// Check if this error came from using a closed client.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}
