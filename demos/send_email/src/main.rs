//! Sends one email using an API key from the environment.
//!
//! ```bash
//! SENDLIX_API_KEY=secret.123 cargo run -p send_email -- recipient@example.com
//! ```

use anyhow::{Context, Result};
use sendlix::client::{ApiKeyAuth, ClientConfig, EmailClient};
use sendlix::core::{AdditionalOptions, EmailAddress, MailContent, MailOptions};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sendlix_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_key = std::env::var("SENDLIX_API_KEY").context("SENDLIX_API_KEY is not set")?;
    let recipient = std::env::args()
        .nth(1)
        .context("usage: send_email <recipient>")?;
    let sender = std::env::var("SENDLIX_SENDER").unwrap_or_else(|_| "sender@example.com".into());

    let config = ClientConfig::from_env();
    let auth = Arc::new(ApiKeyAuth::with_config(&api_key, &config)?);
    let client = EmailClient::new(auth, Some(config))?;

    let options = MailOptions {
        from: EmailAddress::with_name(sender, "Sendlix Demo"),
        to: vec![recipient.as_str().into()],
        subject: "Hello from Rust".to_string(),
        content: MailContent {
            html: "<h1>Hello</h1><p>Sent with the Sendlix Rust SDK.</p>".to_string(),
            text: "Hello\n\nSent with the Sendlix Rust SDK.".to_string(),
            tracking: false,
        },
        ..Default::default()
    };
    let additional = AdditionalOptions {
        category: "demo".to_string(),
        ..Default::default()
    };

    info!(%recipient, "sending email");
    let response = client
        .send_email(options, Some(additional))
        .await
        .context("failed to send email")?;

    info!(
        messages = ?response.message_list,
        emails_left = response.emails_left,
        "email sent"
    );
    Ok(())
}
