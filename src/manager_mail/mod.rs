use lettre::message::Mailbox;
use lettre::{Message, SmtpTransport, Transport};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use anyhow::Result;
use thiserror::Error;
use crate::config::MailParameters;
use crate::report::Report;

const SMTP_ENDPOINT: &str = "smtp.gmail.com";
const FROM_NAME: &str = "Pollen Report";

#[derive(Debug)]
pub struct Mail {
    sender: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl Mail {
    /// Returns a new instance of the Mail struct.
    /// The session connects in plaintext and upgrades via STARTTLS when sending.
    ///
    /// # Arguments
    ///
    /// * 'config' - mail configuration parameters
    pub fn new(config: &MailParameters) -> Result<Self, MailError> {
        let credentials = Credentials::new(config.sender.to_owned(), config.password.to_owned());
        let sender = SmtpTransport::starttls_relay(SMTP_ENDPOINT)
            .map_err(|e| MailError::SMTPTransportError(e.to_string()))?
            .credentials(credentials)
            .build();

        let from = format!("{} <{}>", FROM_NAME, config.sender).parse::<Mailbox>()
            .map_err(|e| MailError::ParseError(format!("from address: {}", e)))?;
        let to = config.recipient.parse::<Mailbox>()
            .map_err(|e| MailError::ParseError(format!("to address: {}", e)))?;

        Ok(
            Self {
                sender,
                from,
                to,
            }
        )
    }

    /// Sends a report as an html mail to the configured recipient
    ///
    /// # Arguments
    ///
    /// * 'report' - the rendered report with subject and html body
    pub fn send_report(&self, report: &Report) -> Result<(), MailError> {

        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(report.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(report.html.clone())
            .map_err(|e| MailError::MessageError(e.to_string()))?;

        self.sender.send(&message)
            .map_err(|e| MailError::TransportError(e.to_string()))?;

        Ok(())
    }
}

/// Error depicting errors that occur while sending emails
///
#[derive(Debug, Error)]
pub enum MailError {
    #[error("SMTPTransportError: {0}")]
    SMTPTransportError(String),
    #[error("TransportError: {0}")]
    TransportError(String),
    #[error("ParseError: {0}")]
    ParseError(String),
    #[error("MessageError: {0}")]
    MessageError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(sender: &str, recipient: &str) -> MailParameters {
        MailParameters {
            sender: sender.to_string(),
            password: "secret".to_string(),
            recipient: recipient.to_string(),
        }
    }

    #[test]
    fn builds_transport_and_mailboxes() {
        let mail = Mail::new(&params("sender@example.com", "recipient@example.com")).unwrap();

        assert_eq!(mail.from.email.to_string(), "sender@example.com");
        assert_eq!(mail.from.name.as_deref(), Some(FROM_NAME));
        assert_eq!(mail.to.email.to_string(), "recipient@example.com");
    }

    #[test]
    fn invalid_recipient_address_is_an_error() {
        let err = Mail::new(&params("sender@example.com", "not an address")).unwrap_err();

        assert!(matches!(err, MailError::ParseError(_)));
    }
}
