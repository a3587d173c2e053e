//! One-shot mail delivery
//!
//! Configuration comes from environment variables at send time and is never
//! cached between sends. A send is a single blocking attempt with no retry:
//! the message is either fully transmitted or not sent.

pub mod transport;

use thiserror::Error;

pub use transport::SmtpRelay;

/// The environment variables a send requires, in reporting order.
pub const REQUIRED_VARS: [&str; 5] =
    ["SMTP_HOST", "SMTP_PORT", "SMTP_USER", "SMTP_PASS", "SMTP_FROM"];

/// Connection configuration, re-read from the environment on every send.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// One or more environment variables absent. No network attempt was made.
    #[error("missing environment variables: {}", .0.join(", "))]
    MissingConfig(Vec<String>),

    /// A variable is present but unusable (e.g. a non-numeric port).
    #[error("{name} is invalid: {reason}")]
    InvalidConfig { name: &'static str, reason: String },

    /// Any failure at connect, STARTTLS, authenticate, or transmit.
    #[error("delivery failed: {0}")]
    TransportFailure(String),
}

impl MailConfig {
    /// Read the five SMTP_* variables. Fails fast with every missing name;
    /// a variable that is set but blank counts as missing.
    pub fn from_env() -> Result<Self, DeliveryError> {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => Some(value),
            _ => {
                missing.push(name.to_string());
                None
            }
        };

        let host = read("SMTP_HOST");
        let port = read("SMTP_PORT");
        let username = read("SMTP_USER");
        let password = read("SMTP_PASS");
        let from_address = read("SMTP_FROM");

        let (Some(host), Some(port), Some(username), Some(password), Some(from_address)) =
            (host, port, username, password, from_address)
        else {
            return Err(DeliveryError::MissingConfig(missing));
        };

        let port: u16 = port.trim().parse().map_err(|_| DeliveryError::InvalidConfig {
            name: "SMTP_PORT",
            reason: format!("'{}' is not a port number", port.trim()),
        })?;
        if port == 0 {
            return Err(DeliveryError::InvalidConfig {
                name: "SMTP_PORT",
                reason: "port must be 1-65535".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            username,
            password,
            from_address,
        })
    }
}

/// One message on its way out.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// The network edge. Production uses [`SmtpRelay`]; tests count calls.
pub trait MailTransport {
    fn deliver(&self, message: &OutboundMessage, config: &MailConfig)
    -> Result<(), DeliveryError>;
}

/// Send one message: read configuration from the environment, then hand the
/// message to the transport. Configuration failures return before the
/// transport is touched.
pub fn send(
    to: &str,
    subject: &str,
    body: &str,
    transport: &dyn MailTransport,
) -> Result<(), DeliveryError> {
    let config = MailConfig::from_env()?;
    let message = OutboundMessage {
        to: to.to_string(),
        subject: subject.to_string(),
        body: body.to_string(),
    };
    log::info!("sending '{}' to {} via {}:{}", subject, to, config.host, config.port);
    transport.deliver(&message, &config)?;
    log::info!("delivered to {to}");
    Ok(())
}
