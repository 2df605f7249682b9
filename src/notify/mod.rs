pub mod templates;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailConfig;
use crate::submission::Submission;

#[derive(Debug, Clone, PartialEq)]
pub enum NotifyError {
    /// A required mail setting is unset; carries the variable name.
    NotConfigured(&'static str),
    Build(String),
    Delivery(String),
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifyError::NotConfigured(var) => write!(f, "Mail not configured: {var} is unset"),
            NotifyError::Build(msg) => write!(f, "Failed to build email: {msg}"),
            NotifyError::Delivery(msg) => write!(f, "Failed to send email: {msg}"),
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, submission: &Submission) -> Result<(), NotifyError>;
}

/// Send the notification and report whether the transport accepted it.
/// Failures are logged here and never propagated.
pub async fn deliver(notifier: &dyn Notifier, submission: &Submission) -> bool {
    match notifier.send(submission).await {
        Ok(()) => {
            tracing::info!("Notification email sent");
            true
        }
        Err(e) => {
            tracing::error!("{e}");
            false
        }
    }
}

/// Sends one plaintext message per submission over a fresh STARTTLS
/// connection to the configured relay.
pub struct SmtpNotifier {
    config: MailConfig,
}

impl SmtpNotifier {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    fn build_transport(
        &self,
        user: &str,
        pass: &str,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, NotifyError> {
        let creds = Credentials::new(user.to_string(), pass.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)
            .map_err(|e| NotifyError::Build(format!("SMTP starttls error: {e}")))?
            .port(self.config.smtp_port)
            .credentials(creds)
            .build();

        Ok(transport)
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, submission: &Submission) -> Result<(), NotifyError> {
        let sender = self
            .config
            .sender
            .as_deref()
            .ok_or(NotifyError::NotConfigured("EMAIL_REMETENTE"))?;
        let password = self
            .config
            .password
            .as_deref()
            .ok_or(NotifyError::NotConfigured("EMAIL_SENHA"))?;
        let recipient = self
            .config
            .recipient
            .as_deref()
            .ok_or(NotifyError::NotConfigured("EMAIL_DESTINATARIO"))?;

        let message = Message::builder()
            .from(
                sender
                    .parse()
                    .map_err(|e| NotifyError::Build(format!("Invalid from address: {e}")))?,
            )
            .to(recipient
                .parse()
                .map_err(|e| NotifyError::Build(format!("Invalid to address: {e}")))?)
            .subject(templates::render_subject(submission))
            .header(ContentType::TEXT_PLAIN)
            .body(templates::render_body(submission))
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        let transport = self.build_transport(sender, password)?;

        transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        Ok(())
    }
}
