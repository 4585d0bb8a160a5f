use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use form::{
    Field, FormClient, HttpTransport, NotificationKind, SubmitOutcome,
    transport::DEFAULT_ENDPOINT,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, env = "LEADFORM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in and send the consultation form. Missing fields are prompted for.
    Submit {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// дом or квартира
        #[arg(long)]
        consultation: Option<String>,
    },

    /// Check that the endpoint is up.
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let transport = HttpTransport::new(args.endpoint);

    match args.command {
        Command::Submit {
            name,
            phone,
            consultation,
        } => submit(transport, [name, phone, consultation]).await,
        Command::Status => {
            info!("Checking {}", transport.endpoint());
            let status = transport.status().await?;
            println!("{} {} ({})", status.status, status.message, status.timestamp);

            Ok(())
        }
    }
}

async fn submit(transport: HttpTransport, given: [Option<String>; 3]) -> Result<()> {
    info!("Submitting to {}", transport.endpoint());
    let mut form = FormClient::new(transport);

    for (field, value) in Field::ALL.into_iter().zip(given) {
        let value = match value {
            Some(value) => value,
            None => prompt(field)?,
        };
        form.update_field(field, value);
    }

    loop {
        let spinner = spinner()?;
        let outcome = form.submit().await;
        spinner.finish_and_clear();

        match outcome {
            SubmitOutcome::Submitted(_) | SubmitOutcome::Ignored => {
                print_notification(&form);
                println!("✓ Спасибо за участие!");
                println!("Ваша заявка успешно отправлена.");

                return Ok(());
            }
            SubmitOutcome::Invalid(errors) => {
                print_notification(&form);

                for (field, message) in errors {
                    println!("  {}: {message}", label(field));
                    let value = prompt(field)?;
                    form.update_field(field, value);
                }
            }
            SubmitOutcome::Failed(_) => {
                print_notification(&form);

                if !confirm("Повторить отправку? [y/N] ")? {
                    bail!("Submission abandoned");
                }
            }
        }
    }
}

fn spinner() -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    pb.set_message("Отправка...");
    pb.enable_steady_tick(Duration::from_millis(100));

    Ok(pb)
}

fn print_notification<T: form::Transport>(form: &FormClient<T>) {
    if let Some(notification) = form.notification() {
        let icon = match notification.kind {
            NotificationKind::Error => "⚠️",
            NotificationKind::Success => "✅",
        };
        println!("{icon} {}", notification.message);
    }
}

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Имя",
        Field::Phone => "Телефон",
        Field::Consultation => "Консультация (дом / квартира)",
    }
}

fn prompt(field: Field) -> Result<String> {
    read_line(&format!("{}: ", label(field)))
}

fn confirm(question: &str) -> Result<bool> {
    let answer = read_line(question)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да"))
}

fn read_line(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("Input closed");
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
