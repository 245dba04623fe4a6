//! The client: one connection, one channel.

use lapin::types::FieldTable;
use lapin::{Channel, Connection, ConnectionProperties};
use tracing::{debug, instrument};

use crate::deliveries::Deliveries;
use crate::error::{MqError, MqResult};
use crate::options::MqOptions;
use crate::params::ConnectionParams;

const REPLY_SUCCESS: u16 = 200;

/// A RabbitMQ connection with a single channel.
///
/// Publishes go to the default exchange with the queue name as routing
/// key. Call [`close`](Self::close) when done; it is safe to call more
/// than once.
///
/// # Example
///
/// ```rust,no_run
/// use bootcore_mq::{ConnectionParams, MqClient, MqOptions};
/// use futures_util::StreamExt;
///
/// # async fn run() -> Result<(), bootcore_mq::MqError> {
/// let params = ConnectionParams::new("localhost", 5672, "guest", "guest");
/// let mut client = MqClient::connect(&params, MqOptions::default()).await?;
///
/// client.declare_queue("tiles.render").await?;
/// client.publish("tiles.render", "3/1/2").await?;
///
/// let mut deliveries = client.consume("tiles.render").await?;
/// if let Some(delivery) = deliveries.next().await {
///     println!("{}", String::from_utf8_lossy(&delivery?.data));
/// }
///
/// client.close().await?;
/// # Ok(())
/// # }
/// ```
pub struct MqClient {
    connection: Connection,
    channel: Channel,
    options: MqOptions,
    state: CloseState,
}

impl MqClient {
    /// Connect and open one channel.
    ///
    /// # Errors
    ///
    /// Returns `MqError::Connect` if the broker is unreachable or rejects
    /// the login, and `MqError::Channel` if the channel cannot be opened.
    /// In the latter case the connection is closed before returning.
    #[instrument(skip_all, fields(host = %params.host, port = params.port))]
    pub async fn connect(params: &ConnectionParams, options: MqOptions) -> MqResult<Self> {
        let mut properties = ConnectionProperties::default();
        if let Some(name) = &options.connection_name {
            properties = properties.with_connection_name(name.clone().into());
        }

        let connection = Connection::connect(&params.amqp_url(), properties)
            .await
            .map_err(|e| MqError::connect(params.redacted_url(), e))?;

        let channel = match connection.create_channel().await {
            Ok(channel) => channel,
            Err(e) => {
                // The connection is useless without a channel.
                discard_cleanup_error(
                    "closing connection after channel open failed",
                    connection.close(REPLY_SUCCESS, "channel open failed").await,
                );
                return Err(MqError::Channel(e));
            }
        };

        debug!(channel_id = channel.id(), "connected to broker");
        Ok(Self {
            connection,
            channel,
            options,
            state: CloseState::default(),
        })
    }

    /// Options this client was created with.
    pub fn options(&self) -> &MqOptions {
        &self.options
    }

    /// The underlying channel, for operations not wrapped here.
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Returns `true` once [`close`](Self::close) has run.
    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    /// Publish `message` to `queue` through the default exchange.
    ///
    /// Returns once the frame is sent; publisher confirms are not awaited.
    ///
    /// # Errors
    ///
    /// Returns `MqError::Closed` after [`close`](Self::close), otherwise
    /// `MqError::Publish` if the channel rejects the publish.
    #[instrument(skip(self, message), fields(bytes = message.as_ref().len()))]
    pub async fn publish(&self, queue: &str, message: impl AsRef<[u8]> + Send) -> MqResult<()> {
        self.state.ensure_open()?;
        let publish = &self.options.publish;

        self.channel
            .basic_publish(
                "",
                queue,
                publish.to_lapin(),
                message.as_ref(),
                publish.properties(),
            )
            .await
            .map_err(|e| MqError::publish(queue, e))?;
        Ok(())
    }

    /// Declare `name`, creating it if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `MqError::Closed` after [`close`](Self::close), otherwise
    /// `MqError::DeclareQueue`, for example when the queue exists with
    /// different flags.
    #[instrument(skip(self))]
    pub async fn declare_queue(&self, name: &str) -> MqResult<()> {
        self.state.ensure_open()?;

        let queue = self
            .channel
            .queue_declare(name, self.options.queue.to_lapin(), FieldTable::default())
            .await
            .map_err(|e| MqError::declare_queue(name, e))?;

        debug!(
            messages = queue.message_count(),
            consumers = queue.consumer_count(),
            "queue declared"
        );
        Ok(())
    }

    /// Start consuming `queue`.
    ///
    /// # Errors
    ///
    /// Returns `MqError::Closed` after [`close`](Self::close), otherwise
    /// `MqError::Consume` if the broker refuses the consumer.
    #[instrument(skip(self))]
    pub async fn consume(&self, queue: &str) -> MqResult<Deliveries> {
        self.state.ensure_open()?;
        let consume = &self.options.consume;

        let consumer = self
            .channel
            .basic_consume(
                queue,
                &consume.consumer_tag,
                consume.to_lapin(),
                FieldTable::default(),
            )
            .await
            .map_err(|e| MqError::consume(queue, e))?;

        let deliveries = Deliveries::new(queue, consumer);
        debug!(
            consumer_tag = deliveries.consumer_tag(),
            auto_ack = consume.auto_ack,
            "consumer started"
        );
        Ok(deliveries)
    }

    /// Close the channel, then the connection.
    ///
    /// Both are attempted even if the first fails. Later calls return
    /// `Ok(())` without doing anything. Open consumer streams end.
    ///
    /// # Errors
    ///
    /// Returns `MqError::Close` with the first failure.
    #[instrument(skip(self))]
    pub async fn close(&mut self) -> MqResult<()> {
        if !self.state.begin_close() {
            return Ok(());
        }

        let channel = self.channel.close(REPLY_SUCCESS, "closing").await;
        let connection = self.connection.close(REPLY_SUCCESS, "closing").await;

        debug!("client closed");
        channel.and(connection).map_err(MqError::Close)
    }

}

impl std::fmt::Debug for MqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MqClient")
            .field("channel_id", &self.channel.id())
            .field("options", &self.options)
            .field("closed", &self.state.is_closed())
            .finish_non_exhaustive()
    }
}

/// Open/closed flag shared by every client operation.
#[derive(Debug, Default)]
struct CloseState {
    closed: bool,
}

impl CloseState {
    /// Marks the state closed. Returns `false` if it already was, in which
    /// case there is nothing left to close.
    fn begin_close(&mut self) -> bool {
        !std::mem::replace(&mut self.closed, true)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> MqResult<()> {
        if self.closed {
            Err(MqError::Closed)
        } else {
            Ok(())
        }
    }
}

fn discard_cleanup_error(context: &str, result: lapin::Result<()>) {
    if let Err(e) = result {
        debug!(error = %e, "{context}");
    }
}
