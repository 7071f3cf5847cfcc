#[cfg(test)]
pub mod mock_sender;
mod smtp_sender;

pub use smtp_sender::{Mailer, SmtpConfig, SmtpEmailSender};
