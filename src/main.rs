use clap::Parser;
use lead_relay::client::{FieldId, FormField};
use lead_relay::config::{Command, InvokeArgs, SubmitArgs};
use lead_relay::domain::ports::FormView;
use lead_relay::utils::{logger, validation::Validate};
use lead_relay::{
    CliConfig, FormController, FormSettings, HttpTransport, LeadRelayHandler, RelayConfig,
    RelayRequest, SubmitError,
};
use std::io::Read;

/// Renders form feedback to the terminal.
#[derive(Clone)]
struct TerminalView;

impl FormView for TerminalView {
    fn render_field(&self, field: &FormField) {
        if let Some(message) = field.error_message() {
            eprintln!("  ✗ {}: {}", field.id.name(), message);
        }
    }

    fn scroll_to_field(&self, id: FieldId) {
        tracing::debug!("First invalid field: {}", id.name());
    }

    fn set_submit_control(&self, disabled: bool, label: &str) {
        tracing::debug!("Submit control: {} (disabled: {})", label, disabled);
    }

    fn show_success(&self) {
        println!("✅ Thank you! Your request has been sent.");
    }

    fn hide_success(&self) {}

    fn alert(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}

async fn run_submit(args: SubmitArgs) -> i32 {
    let settings = FormSettings {
        business_phone: args.business_phone.clone(),
        ..FormSettings::default()
    };
    let transport = HttpTransport::new(&args.endpoint);
    tracing::debug!("Relay endpoint: {}", transport.endpoint());
    let mut form = FormController::new(transport, TerminalView, settings);

    form.on_input(FieldId::FirstName, &args.first_name);
    form.on_input(FieldId::LastName, &args.last_name);
    form.on_input(FieldId::Email, &args.email);
    form.on_input(FieldId::Phone, &args.phone);
    form.on_input(FieldId::Service, &args.service);
    form.on_input(FieldId::Message, &args.message);
    form.set_checked(FieldId::HumanCheck, args.human);

    match form.handle_submit().await {
        Ok(ack) => {
            if let Some(id) = ack.email_id {
                println!("📧 Email id: {}", id);
            }
            0
        }
        Err(SubmitError::Validation { count }) => {
            eprintln!("❌ {} field(s) need attention", count);
            1
        }
        Err(_) => 2,
    }
}

async fn run_invoke(args: InvokeArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = RelayConfig::from_env()?;
    config.validate()?;
    tracing::debug!("Relay config: {:?}", config);

    let body = match &args.body_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let handler = LeadRelayHandler::from_config(config);
    let response = handler
        .handle(RelayRequest::new(args.method, Some(body)))
        .await;

    println!("HTTP {}", response.status);
    println!("{}", serde_json::to_string_pretty(&response.body)?);

    Ok(if response.status == 200 { 0 } else { 1 })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting lead-relay CLI");

    let exit_code = match config.command {
        Command::Submit(args) => {
            if let Err(e) = args.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            run_submit(args).await
        }
        Command::Invoke(args) => {
            if let Err(e) = args.validate() {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            match run_invoke(args).await {
                Ok(code) => code,
                Err(e) => {
                    tracing::error!("❌ Relay invocation failed: {}", e);
                    eprintln!("❌ {}", e);
                    3
                }
            }
        }
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
