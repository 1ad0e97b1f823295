use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::oneshot;
use tokio::task::JoinSet;

use chatbot::config::{ConfigError, WidgetConfig};
use chatbot::net::ChatError;
use chatbot::state::lead::LeadField;
use chatbot::view::WidgetView;
use chatbot::ChatWidget;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("chat client setup failed: {0}")]
    Chat(#[from] ChatError),
    #[error("stdin read failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "chatbot", about = "Terminal host for the chat widget")]
struct Cli {
    /// Chat endpoint URL (overrides CHATBOT_ENDPOINT).
    #[arg(long)]
    endpoint: Option<String>,

    /// Require the lead form before chatting (overrides CHATBOT_REQUIRE_LEAD_FORM).
    /// Bare flag means `true`; pass `false` to turn an env-enabled gate off.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    require_lead_form: Option<bool>,

    /// Contact link shown in the panel (overrides CHATBOT_CONTACT_URL).
    #[arg(long)]
    contact_url: Option<String>,

    /// Per-request timeout in seconds (overrides CHATBOT_REQUEST_TIMEOUT_SECS).
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// Start with the panel open.
    #[arg(long, default_value_t = false)]
    open: bool,
}

/// One line of terminal input.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Toggle,
    Field(LeadField, &'a str),
    SubmitLead,
    Quit,
    Say(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
    match head {
        "/toggle" => Command::Toggle,
        "/name" => Command::Field(LeadField::Name, rest),
        "/email" => Command::Field(LeadField::Email, rest),
        "/member" => Command::Field(LeadField::MemberNumber, rest),
        "/submit" => Command::SubmitLead,
        "/quit" => Command::Quit,
        _ => Command::Say(line),
    }
}

fn apply_overrides(mut config: WidgetConfig, cli: &Cli) -> WidgetConfig {
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.clone_from(endpoint);
    }
    if let Some(require) = cli.require_lead_form {
        config.require_lead_form = require;
    }
    if cli.contact_url.is_some() {
        config.contact_url.clone_from(&cli.contact_url);
    }
    if cli.request_timeout_secs.is_some() {
        config.timeouts.request_secs = cli.request_timeout_secs;
    }
    config
}

/// Returns `view` when it differs from what was last printed, recording it.
fn next_frame(shown: &mut Option<WidgetView>, view: WidgetView) -> Option<WidgetView> {
    if shown.as_ref() == Some(&view) {
        return None;
    }
    *shown = Some(view.clone());
    Some(view)
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = apply_overrides(WidgetConfig::from_env()?, &cli);
    let widget = ChatWidget::from_config(&config)?;
    if cli.open {
        widget.toggle();
    }

    // Print the view whenever what is on screen changes.
    let mut rx = widget.subscribe();
    let render_widget = widget.clone();
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
    let renderer = tokio::spawn(async move {
        let mut shown: Option<WidgetView> = None;
        loop {
            if let Some(view) = next_frame(&mut shown, render_widget.view()) {
                print!("{view}");
            }
            tokio::select! {
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = &mut stop_rx => {
                    if let Some(view) = next_frame(&mut shown, render_widget.view()) {
                        print!("{view}");
                    }
                    break;
                }
            }
        }
    });

    let mut in_flight = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(line.trim_end()) {
            Command::Toggle => {
                widget.toggle();
            }
            Command::Field(field, value) => {
                if !widget.update_field(field, value) {
                    eprintln!("el formulario ya fue enviado");
                }
            }
            Command::SubmitLead => {
                if let Err(e) = widget.submit_lead_form() {
                    eprintln!("{}", e.notice());
                }
            }
            Command::Quit => break,
            Command::Say(text) => {
                // One task per question; stdin keeps reading while replies are pending.
                let sender = widget.clone();
                let question = text.to_string();
                in_flight.spawn(async move { sender.send(&question).await });
            }
        }
    }

    // Let in-flight replies land before exiting.
    while let Some(joined) = in_flight.join_next().await {
        if let Err(e) = joined {
            tracing::warn!(error = %e, "send task failed");
        }
    }
    let _ = stop_tx.send(());
    if let Err(e) = renderer.await {
        tracing::warn!(error = %e, "renderer task failed");
    }
    Ok(())
}
