use crate::email::application::ports::outgoing::{EmailError, EmailSender, OutgoingEmail};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

/// Where outgoing mail goes. `RUST_ENV=test` talks plain SMTP to a local
/// catcher (Mailpit, MailHog); every other environment uses the TLS relay.
#[derive(Debug, Clone)]
pub enum SmtpConfig {
    Relay {
        server: String,
        username: String,
        password: String,
    },
    Local {
        host: String,
        port: u16,
    },
}

impl SmtpConfig {
    pub fn from_env(rust_env: &str) -> Self {
        if rust_env == "test" {
            return SmtpConfig::Local {
                host: std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: std::env::var("SMTP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(1025),
            };
        }

        SmtpConfig::Relay {
            server: std::env::var("SMTP_SERVER").expect("SMTP_SERVER must be set"),
            username: std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME must be set"),
            password: std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD must be set"),
        }
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    pub fn from_config(config: &SmtpConfig, from_email: &str) -> Result<Self, EmailError> {
        match config {
            SmtpConfig::Relay {
                server,
                username,
                password,
            } => Self::new(server, username, password, from_email),
            SmtpConfig::Local { host, port } => Ok(Self::new_local(host, *port, from_email)),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, EmailError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| EmailError::Transport(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email))
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email)
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, EmailError> {
    address.parse().map_err(|e: lettre::address::AddressError| EmailError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        let mut builder = Message::builder()
            .from(parse_mailbox(&self.from_email)?)
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN);

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(parse_mailbox(reply_to)?);
        }

        let message = builder
            .body(email.body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        self.mailer
            .send(message)
            .await
            .map_err(EmailError::Transport)
    }
}
