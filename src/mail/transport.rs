//! SMTP relay transport
//!
//! One blocking connection per send: STARTTLS upgrade before credentials,
//! authenticate, transmit, close. Every stage failure surfaces as
//! [`DeliveryError::TransportFailure`].

use std::time::Duration;

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use super::{DeliveryError, MailConfig, MailTransport, OutboundMessage};

/// Single attempt, single bound: a dead relay must not hang the caller.
const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Production transport: one message over one STARTTLS-upgraded connection.
pub struct SmtpRelay;

impl MailTransport for SmtpRelay {
    fn deliver(
        &self,
        message: &OutboundMessage,
        config: &MailConfig,
    ) -> Result<(), DeliveryError> {
        let from: Mailbox = config.from_address.parse().map_err(|e| {
            DeliveryError::TransportFailure(format!(
                "invalid From address '{}': {e}",
                config.from_address
            ))
        })?;
        let to: Mailbox = message.to.parse().map_err(|e| {
            DeliveryError::TransportFailure(format!("invalid To address '{}': {e}", message.to))
        })?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .body(message.body.clone())
            .map_err(|e| DeliveryError::TransportFailure(e.to_string()))?;

        let mailer = SmtpTransport::starttls_relay(&config.host)
            .map_err(|e| DeliveryError::TransportFailure(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(config.username.clone(), config.password.clone()))
            .timeout(Some(SEND_TIMEOUT))
            .build();

        mailer
            .send(&email)
            .map(|_| ())
            .map_err(|e| DeliveryError::TransportFailure(e.to_string()))
    }
}
