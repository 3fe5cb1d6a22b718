pub mod credential;
pub mod notifier;

pub use credential::{CredentialProvider, StaticTokenProvider};
pub use notifier::{Notifier, TracingNotifier};
