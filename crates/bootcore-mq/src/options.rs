//! AMQP flags for declarations, publishes and consumers.
//!
//! Defaults reproduce the plain behavior of a non-durable work queue:
//! every flag is off except consumer auto-acknowledge, and messages are
//! published as `text/plain`.

use lapin::options::{BasicConsumeOptions, BasicPublishOptions, QueueDeclareOptions};
use lapin::types::ShortString;
use lapin::BasicProperties;

/// Default content type of published messages.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Flags for [`MqClient::declare_queue`](crate::MqClient::declare_queue).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueOptions {
    /// Survive broker restarts.
    pub durable: bool,
    /// Delete when the last consumer unsubscribes.
    pub auto_delete: bool,
    /// Restrict to this connection.
    pub exclusive: bool,
    /// Do not wait for the broker's confirmation.
    pub no_wait: bool,
}

impl QueueOptions {
    /// Set `durable`.
    pub fn durable(mut self, durable: bool) -> Self {
        self.durable = durable;
        self
    }

    /// Set `auto_delete`.
    pub fn auto_delete(mut self, auto_delete: bool) -> Self {
        self.auto_delete = auto_delete;
        self
    }

    /// Set `exclusive`.
    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    /// Set `no_wait`.
    pub fn no_wait(mut self, no_wait: bool) -> Self {
        self.no_wait = no_wait;
        self
    }

    pub(crate) fn to_lapin(self) -> QueueDeclareOptions {
        QueueDeclareOptions {
            passive: false,
            durable: self.durable,
            exclusive: self.exclusive,
            auto_delete: self.auto_delete,
            nowait: self.no_wait,
        }
    }
}

/// Flags for [`MqClient::publish`](crate::MqClient::publish).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOptions {
    /// Return unroutable messages.
    pub mandatory: bool,
    /// Return messages that cannot be delivered right away. RabbitMQ
    /// rejects this flag.
    pub immediate: bool,
    /// `content-type` message property.
    pub content_type: String,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            mandatory: false,
            immediate: false,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }
}

impl PublishOptions {
    /// Set `mandatory`.
    pub fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Set `immediate`.
    pub fn immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    /// Set the content type.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub(crate) fn to_lapin(&self) -> BasicPublishOptions {
        BasicPublishOptions {
            mandatory: self.mandatory,
            immediate: self.immediate,
        }
    }

    pub(crate) fn properties(&self) -> BasicProperties {
        BasicProperties::default().with_content_type(ShortString::from(self.content_type.clone()))
    }
}

/// Flags for [`MqClient::consume`](crate::MqClient::consume).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumeOptions {
    /// Let the broker consider messages acknowledged on delivery.
    pub auto_ack: bool,
    /// Be the queue's only consumer.
    pub exclusive: bool,
    /// Skip messages published on this connection.
    pub no_local: bool,
    /// Do not wait for the broker's confirmation.
    pub no_wait: bool,
    /// Consumer tag; empty lets the broker generate one.
    pub consumer_tag: String,
}

impl Default for ConsumeOptions {
    fn default() -> Self {
        Self {
            auto_ack: true,
            exclusive: false,
            no_local: false,
            no_wait: false,
            consumer_tag: String::new(),
        }
    }
}

impl ConsumeOptions {
    /// Set `auto_ack`. With `false`, acknowledge each
    /// [`Delivery`](lapin::message::Delivery) through its `acker`.
    pub fn auto_ack(mut self, auto_ack: bool) -> Self {
        self.auto_ack = auto_ack;
        self
    }

    /// Set `exclusive`.
    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    /// Set `no_local`.
    pub fn no_local(mut self, no_local: bool) -> Self {
        self.no_local = no_local;
        self
    }

    /// Set `no_wait`.
    pub fn no_wait(mut self, no_wait: bool) -> Self {
        self.no_wait = no_wait;
        self
    }

    /// Set the consumer tag.
    pub fn consumer_tag(mut self, tag: impl Into<String>) -> Self {
        self.consumer_tag = tag.into();
        self
    }

    pub(crate) fn to_lapin(&self) -> BasicConsumeOptions {
        BasicConsumeOptions {
            no_local: self.no_local,
            no_ack: self.auto_ack,
            exclusive: self.exclusive,
            nowait: self.no_wait,
        }
    }
}

/// All client options.
///
/// # Example
///
/// ```rust
/// use bootcore_mq::{ConsumeOptions, MqOptions, QueueOptions};
///
/// let options = MqOptions::new()
///     .queue(QueueOptions::default().durable(true))
///     .consume(ConsumeOptions::default().auto_ack(false));
/// assert!(options.queue.durable);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MqOptions {
    /// Queue declaration flags.
    pub queue: QueueOptions,
    /// Publish flags.
    pub publish: PublishOptions,
    /// Consumer flags.
    pub consume: ConsumeOptions,
    /// Connection name shown in the management UI.
    pub connection_name: Option<String>,
}

impl MqOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the queue declaration flags.
    pub fn queue(mut self, queue: QueueOptions) -> Self {
        self.queue = queue;
        self
    }

    /// Set the publish flags.
    pub fn publish(mut self, publish: PublishOptions) -> Self {
        self.publish = publish;
        self
    }

    /// Set the consumer flags.
    pub fn consume(mut self, consume: ConsumeOptions) -> Self {
        self.consume = consume;
        self
    }

    /// Set the connection name.
    pub fn connection_name(mut self, name: impl Into<String>) -> Self {
        self.connection_name = Some(name.into());
        self
    }
}
