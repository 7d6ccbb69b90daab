mod config;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use client_core::{
    BenefitForm, DeleteConfirmer, HttpBenefitRepository, Notification, NotificationKind,
    NotificationService, ViewController,
};
use rust_decimal::Decimal;
use shared::domain::{Benefit, BenefitId};
use url::Url;

#[derive(Parser, Debug)]
#[command(about = "Console client for the benefits API")]
struct Args {
    /// Overrides the configured server URL.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all benefits.
    List,
    /// Create a new benefit.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        balance: Decimal,
        #[arg(long, default_value_t = true)]
        active: bool,
    },
    /// Update an existing benefit.
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        balance: Decimal,
        #[arg(long, default_value_t = true)]
        active: bool,
    },
    /// Delete a benefit, after confirmation.
    Delete { id: i64 },
    /// Transfer an amount between two benefits.
    Transfer {
        #[arg(long)]
        from: i64,
        #[arg(long)]
        to: i64,
        #[arg(long)]
        amount: String,
    },
}

struct StdinConfirmer;

#[async_trait]
impl DeleteConfirmer for StdinConfirmer {
    async fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes" | "Yes")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    Url::parse(&settings.server_url)
        .with_context(|| format!("invalid server url: {}", settings.server_url))?;

    let repository = Arc::new(HttpBenefitRepository::with_base_path(
        settings.server_url,
        &settings.api_base_path,
    ));
    let notifications = Arc::new(NotificationService::new());
    let controller = ViewController::new(
        repository,
        Arc::clone(&notifications),
        Arc::new(StdinConfirmer),
    );

    match args.command {
        Command::List => {
            controller.load_benefits().await;
            print_benefits(&controller.benefits.get());
        }
        Command::Create {
            name,
            description,
            balance,
            active,
        } => {
            controller.open_form(None);
            submit_via_form(&controller, name, description, balance, active).await;
        }
        Command::Update {
            id,
            name,
            description,
            balance,
            active,
        } => {
            controller.load_benefits().await;
            let Some(existing) = controller
                .benefits
                .get()
                .into_iter()
                .find(|b| b.id == BenefitId(id))
            else {
                println!("No benefit with id {id}.");
                return Ok(());
            };
            controller.open_form(Some(existing));
            submit_via_form(&controller, name, description, balance, active).await;
        }
        Command::Delete { id } => {
            controller.delete_benefit(BenefitId(id)).await;
        }
        Command::Transfer { from, to, amount } => {
            controller.load_benefits().await;
            controller.open_transfer();
            controller.on_source_change(Some(BenefitId(from)));
            controller.on_destination_change(Some(BenefitId(to)));
            controller.on_amount_input(&amount);
            controller.submit_transfer().await;
        }
    }

    if let Some(notification) = notifications.current() {
        print_notification(&notification);
    }
    Ok(())
}

async fn submit_via_form(
    controller: &ViewController,
    name: String,
    description: String,
    balance: Decimal,
    active: bool,
) {
    let form = BenefitForm::new();
    if let Some(existing) = controller.selected_for_edit.get() {
        form.set_record(Some(&existing));
    }
    form.name.set(name);
    form.description.set(description);
    form.balance.set(Some(balance));
    form.active.set(active);

    match form.submit() {
        Some(draft) => controller.submit_form(draft).await,
        None => {
            println!("Invalid input: the name needs at least 3 characters and the balance must be at least 0.01.");
        }
    }
}

fn print_benefits(benefits: &[Benefit]) {
    if benefits.is_empty() {
        println!("No benefits registered.");
        return;
    }
    for benefit in benefits {
        println!(
            "#{:<4} {:<28} balance {:>12} {}",
            benefit.id.0,
            benefit.name,
            benefit.balance,
            if benefit.active { "" } else { "[inactive]" }
        );
    }
}

fn print_notification(notification: &Notification) {
    let prefix = match notification.kind {
        NotificationKind::Success => "OK",
        NotificationKind::Error => "ERROR",
    };
    match &notification.detail {
        Some(detail) => println!("{prefix}: {} ({detail})", notification.message),
        None => println!("{prefix}: {}", notification.message),
    }
}
