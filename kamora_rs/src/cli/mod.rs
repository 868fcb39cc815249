//! `kamora` command line: checks and exports the site content and config,
//! and runs the contact form rules outside the browser.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing::info;

use crate::config::SiteConfig;
use crate::contact::{ContactController, Field, FieldErrors, SimulatedSubmitter, SubmitOutcome};
use crate::content::SiteContent;
use crate::timers::{Timers, TokioTimers};

#[derive(Parser, Debug)]
#[command(name = "kamora")]
#[command(about = "Content and form tooling for the Kamora landing page")]
#[command(version)]
pub struct Cli {
    /// Site config file (missing file means defaults)
    #[arg(long, global = true, default_value = "kamora.toml")]
    pub config: PathBuf,

    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load and validate content and config
    Check {
        /// Content TOML (defaults to the built-in content)
        #[arg(long)]
        content: Option<PathBuf>,
    },
    /// Print the content as JSON
    Export {
        /// Content TOML (defaults to the built-in content)
        #[arg(long)]
        content: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Run the contact form validation pass (and optionally send)
    Contact(ContactArgs),
}

#[derive(Args, Debug, Default)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub company: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub message: String,
    #[arg(long)]
    pub service: Option<String>,
    /// Submit through the simulated endpoint after validation
    #[arg(long)]
    pub send: bool,
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = SiteConfig::load(&cli.config)?;
    match cli.command {
        Command::Check { content } => check(content.as_deref(), &config),
        Command::Export { content, pretty } => export(content.as_deref(), pretty),
        Command::Contact(args) => contact(args, &config),
    }
}

fn load_content(path: Option<&Path>) -> Result<SiteContent> {
    match path {
        Some(path) => SiteContent::load(path)
            .with_context(|| format!("content check failed for {}", path.display())),
        None => SiteContent::builtin().context("built-in content is invalid"),
    }
}

fn check(content: Option<&Path>, config: &SiteConfig) -> Result<ExitCode> {
    let site = load_content(content)?;
    println!(
        "content: {} testimonials, {} features, {} plans, {} services, {} faq entries",
        site.testimonials.len(),
        site.features.len(),
        site.pricing.plans.len(),
        site.contact.services.len(),
        site.pricing.faq.len(),
    );
    println!(
        "config: auto-advance {}ms, swipe confidence {}, submit delay {}ms, submit timeout {}",
        config.carousel.interval_ms,
        config.carousel.swipe_confidence,
        config.contact.submit_delay_ms,
        match config.contact.submit_timeout() {
            Some(limit) => format!("{}ms", limit.as_millis()),
            None => "off".to_string(),
        },
    );
    println!("ok");
    Ok(ExitCode::SUCCESS)
}

fn export(content: Option<&Path>, pretty: bool) -> Result<ExitCode> {
    let site = load_content(content)?;
    let out = if pretty {
        serde_json::to_string_pretty(&site)?
    } else {
        serde_json::to_string(&site)?
    };
    println!("{out}");
    Ok(ExitCode::SUCCESS)
}

fn error_messages(errors: &FieldErrors) -> BTreeMap<&'static str, String> {
    errors
        .iter()
        .map(|(field, err)| (field.as_str(), err.to_string()))
        .collect()
}

fn contact(args: ContactArgs, config: &SiteConfig) -> Result<ExitCode> {
    let timers: Rc<dyn Timers> = Rc::new(TokioTimers);
    let submitter = Rc::new(SimulatedSubmitter::new(
        timers.clone(),
        config.contact.submit_delay(),
    ));
    let controller = ContactController::new(submitter, timers, config.contact.submit_timeout());

    controller.set_field(Field::Name, args.name);
    controller.set_field(Field::Email, args.email);
    controller.set_field(Field::Company, args.company);
    controller.set_field(Field::Phone, args.phone);
    controller.set_field(Field::Message, args.message);
    if let Some(service) = args.service {
        controller.set_field(Field::Service, service);
    }

    if !args.send {
        let errors = crate::contact::validate(controller.form().fields());
        println!(
            "{}",
            json!({ "valid": errors.is_empty(), "errors": error_messages(&errors) })
        );
        return Ok(if errors.is_empty() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start timer runtime")?;
    let local = tokio::task::LocalSet::new();
    let outcome = local.block_on(&runtime, controller.submit());

    let (report, code) = match outcome {
        SubmitOutcome::Sent => {
            info!("contact: simulated delivery complete");
            (json!({ "valid": true, "sent": true }), ExitCode::SUCCESS)
        }
        SubmitOutcome::Invalid(errors) => (
            json!({ "valid": false, "sent": false, "errors": error_messages(&errors) }),
            ExitCode::from(1),
        ),
        SubmitOutcome::Failed(err) => (
            json!({ "valid": true, "sent": false, "failure": err.to_string() }),
            ExitCode::from(2),
        ),
        SubmitOutcome::Ignored => (json!({ "valid": true, "sent": false }), ExitCode::from(2)),
    };
    println!("{report}");
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_contact_flags() {
        let cli = Cli::try_parse_from([
            "kamora",
            "contact",
            "--name",
            "John Doe",
            "--email",
            "john@example.com",
            "--send",
        ])
        .expect("parse");
        let Command::Contact(args) = cli.command else {
            panic!("expected contact command");
        };
        assert_eq!(args.name, "John Doe");
        assert!(args.send);
        assert!(args.phone.is_empty());
        assert_eq!(cli.config, PathBuf::from("kamora.toml"));
    }

    #[test]
    fn export_flags() {
        let cli = Cli::try_parse_from(["kamora", "export", "--pretty"]).expect("parse");
        assert!(matches!(
            cli.command,
            Command::Export {
                content: None,
                pretty: true
            }
        ));
    }

    #[test]
    fn error_messages_use_field_names() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, crate::error::ValidationError::EmailInvalid);
        let messages = error_messages(&errors);
        assert_eq!(
            messages.get("email").map(String::as_str),
            Some("Please enter a valid email address")
        );
    }
}
