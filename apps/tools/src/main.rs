use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{WaitlistClient, WaitlistTransport};
use shared::domain::{prelaunch_slides, EmailAddress};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate an email locally and post it to the relay.
    Submit {
        #[arg(long, env = "PICTURA_RELAY_URL", default_value = "http://127.0.0.1:8888")]
        relay_url: String,
        #[arg(long)]
        email: String,
    },
    /// Check an email against the waitlist rules without sending it.
    Validate {
        #[arg(long)]
        email: String,
    },
    /// Print the carousel slides.
    Slides,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Submit { relay_url, email } => {
            let email = match EmailAddress::parse(&email) {
                Ok(email) => email,
                Err(err) => bail!("{}", err.form_message()),
            };
            let client = WaitlistClient::new(&relay_url)
                .with_context(|| format!("invalid relay url {relay_url}"))?;
            tracing::debug!(endpoint = %client.endpoint(), "submitting waitlist email");
            client
                .submit(&email)
                .await
                .with_context(|| format!("relay rejected {email}"))?;
            println!("submitted {email}");
        }
        Command::Validate { email } => match EmailAddress::parse(&email) {
            Ok(email) => println!("valid email domain={}", email.domain()),
            Err(err) => bail!("{}", err.form_message()),
        },
        Command::Slides => {
            for (idx, slide) in prelaunch_slides().iter().enumerate() {
                println!("{}\t{}\t{}", idx + 1, slide.image, slide.alt);
            }
        }
    }

    Ok(())
}
