mod fanout_revalidator;
mod in_memory_revalidator;
mod webhook_revalidator;

pub use fanout_revalidator::FanoutRevalidator;
pub use in_memory_revalidator::{InMemoryRevalidator, StalePath};
pub use webhook_revalidator::{RevalidationConfig, WebhookRevalidator, SECRET_HEADER};
