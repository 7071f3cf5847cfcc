use crate::email::application::ports::outgoing::{EmailError, EmailSender, OutgoingEmail};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Records every message instead of delivering it. `failing()` makes every
/// send fail with a transport error.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<OutgoingEmail>>>,
    fail: bool,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn get_sent_emails(&self) -> Vec<OutgoingEmail> {
        self.sent_emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        if self.fail {
            return Err(EmailError::Transport("connection refused".to_string()));
        }
        self.sent_emails.lock().unwrap().push(email);
        Ok(())
    }
}
