use std::{
    io::{self, Write},
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    ContactFormController, ContactSender, HttpContactSender, SimulatedSender, SubmissionStatus,
    SubmitOutcome, SUCCESS_DISPLAY_WINDOW,
};
use shared::{content::SERVICE_OPTIONS, domain::FieldName};
use tokio::{sync::watch, task::JoinHandle};

/// Fills in the contact form from the command line and submits it.
#[derive(Parser, Debug)]
#[command(name = "contact")]
struct Args {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    company: String,
    #[arg(long, default_value = "")]
    service: String,
    #[arg(long, default_value = "")]
    message: String,
    /// Post to a running site server instead of simulating the send.
    #[arg(long)]
    server_url: Option<String>,
    /// Latency of the simulated send.
    #[arg(long, default_value_t = 2000)]
    delay_ms: u64,
    /// Keep running until the success banner clears.
    #[arg(long)]
    wait_reset: bool,
    #[arg(long)]
    list_services: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        )
        .init();
    let args = Args::parse();

    if args.list_services {
        for option in SERVICE_OPTIONS {
            println!("{option}");
        }
        return Ok(());
    }

    let sender: Arc<dyn ContactSender> = match &args.server_url {
        Some(url) => Arc::new(
            HttpContactSender::new(url).with_context(|| format!("invalid server url {url}"))?,
        ),
        None => Arc::new(SimulatedSender::new(Duration::from_millis(args.delay_ms))),
    };
    let form = ContactFormController::new(sender);

    for (field, value) in [
        (FieldName::Name, &args.name),
        (FieldName::Email, &args.email),
        (FieldName::Phone, &args.phone),
        (FieldName::Company, &args.company),
        (FieldName::Service, &args.service),
        (FieldName::Message, &args.message),
    ] {
        form.update_field(field, value.as_str()).await;
    }

    let printer = tokio::spawn(print_transitions(form.subscribe_status(), std::io::stdout()));

    let outcome = form.submit().await;
    match &outcome {
        SubmitOutcome::Sent => {
            println!("Message sent successfully! We'll get back to you soon.");
            if args.wait_reset {
                tokio::time::sleep(SUCCESS_DISPLAY_WINDOW + Duration::from_millis(50)).await;
            }
        }
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors.iter() {
                println!("{field}: {message}");
            }
        }
        SubmitOutcome::Busy => println!("a submission is already in progress"),
        SubmitOutcome::Failed(err) => println!("could not send message: {err}"),
    }

    form.teardown().await;
    drop(form);
    join_printer(printer).await?;

    match outcome {
        SubmitOutcome::Sent => Ok(()),
        SubmitOutcome::Invalid(errors) => {
            anyhow::bail!("{} field(s) need attention", errors.len())
        }
        SubmitOutcome::Busy => anyhow::bail!("submission already in progress"),
        SubmitOutcome::Failed(err) => Err(err.into()),
    }
}

/// Writes one line per status change until the form settles back to idle
/// or the controller goes away.
async fn print_transitions(
    mut status: watch::Receiver<SubmissionStatus>,
    mut out: impl Write + Send,
) -> io::Result<()> {
    while status.changed().await.is_ok() {
        let current = status.borrow_and_update().clone();
        writeln!(out, "status: {}", describe(&current))?;
        if current == SubmissionStatus::Idle {
            break;
        }
    }
    Ok(())
}

async fn join_printer(printer: JoinHandle<io::Result<()>>) -> Result<()> {
    printer
        .await
        .context("status printer stopped unexpectedly")?
        .context("failed to write status")
}

fn describe(status: &SubmissionStatus) -> &str {
    match status {
        SubmissionStatus::Idle => "idle",
        SubmissionStatus::Submitting => "sending...",
        SubmissionStatus::Succeeded => "sent",
        SubmissionStatus::Failed(reason) => reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prints_each_transition_until_idle() {
        let (status, rx) = watch::channel(SubmissionStatus::Idle);
        let mut out = Vec::new();
        let printing = print_transitions(rx, &mut out);
        let driving = async {
            tokio::task::yield_now().await;
            status.send_replace(SubmissionStatus::Submitting);
            tokio::task::yield_now().await;
            status.send_replace(SubmissionStatus::Succeeded);
            tokio::task::yield_now().await;
            status.send_replace(SubmissionStatus::Idle);
        };
        let (printed, ()) = tokio::join!(printing, driving);
        printed.expect("write");

        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.lines().last(), Some("status: idle"));
        assert!(text.contains("status: sent"));
    }

    #[tokio::test]
    async fn printer_stops_when_the_controller_is_dropped() {
        let (status, rx) = watch::channel(SubmissionStatus::Idle);
        status.send_replace(SubmissionStatus::Failed("connection reset".into()));
        drop(status);
        let mut out = Vec::new();
        print_transitions(rx, &mut out).await.expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "status: connection reset\n");
    }

    #[tokio::test]
    async fn a_panicking_printer_is_reported() {
        let printer: JoinHandle<io::Result<()>> =
            tokio::spawn(async { panic!("stdout went away") });
        let err = join_printer(printer).await.expect_err("panic surfaces");
        assert!(err.to_string().contains("status printer stopped unexpectedly"));
    }

    #[test]
    fn failure_reason_is_printed_verbatim() {
        let failed = SubmissionStatus::Failed("submission rejected (422): bad form".into());
        assert_eq!(describe(&failed), "submission rejected (422): bad form");
        assert_eq!(describe(&SubmissionStatus::Submitting), "sending...");
    }
}
