//! Pushfire CLI - send one Firebase Cloud Messaging notification.
//!
//! ```text
//! pushfire --credentialsFile service-account.json --pushFile push.json --topic news
//! pushfire --credentialsFile service-account.json --pushFile push.json --token <device> --ttl 3600
//! ```

use clap::Parser;
use colored::Colorize;
use pushfire_core::Result;
use pushfire_core::{FcmClient, PushError, RawArgs, SendConfig, SystemClock, deliver, prepare};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Send a push notification through Firebase Cloud Messaging
#[derive(Parser, Debug)]
#[command(name = "pushfire")]
#[command(version)]
#[command(about = "Send a push notification to an FCM topic or device token")]
#[command(after_help = format!(
    "{}\n  {} pushfire --credentialsFile key.json --pushFile push.json --topic news\n  {} pushfire --credentialsFile key.json --pushFile push.json --token <device> --ttl 3600",
    "Examples:".bright_cyan().bold(),
    "$".dimmed(),
    "$".dimmed(),
))]
struct Cli {
    /// A Firebase credentials file downloaded from the Firebase console
    #[arg(
        long = "credentialsFile",
        value_name = "PATH",
        long_help = "A Firebase credentials file downloaded from the Firebase console.\n\
Log into the Firebase console and go to your project.\n\
Beside \"Project Overview\" on the left click the gear/settings icon.\n\
Select \"Project Settings\". In the Project Settings page, click on \"Service accounts\".\n\
Scroll down and click on \"Generate new private key\". This is your credentials file."
    )]
    credentials_file: Option<String>,

    /// Topic to send the message to
    #[arg(long)]
    topic: Option<String>,

    /// Device token to send the message to
    #[arg(long)]
    token: Option<String>,

    /// File with a notification and/or data to push
    #[arg(
        long = "pushFile",
        value_name = "PATH",
        long_help = "A file that contains a notification (title, body, image (optional))\n\
and/or data (a map of key/value pairs) that will be pushed to the client(s).\n\
Format:\n\
{\n   \"notification\" : {\n      \"title\" : \"Test Title\",\n      \"body\"  : \"Test Body\",\n      \"image\" : \"https://whatever.com/image.png\"\n   },\n\n   \"data\" : {\n     \"key1\" : \"value1\",\n     \"key2\" : \"value2\"\n   }\n}"
    )]
    push_file: Option<String>,

    /// Time-to-live for the message in seconds (0 to 2419200)
    #[arg(
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_name = "SECONDS",
        long_help = "Time-to-live value for notifications in seconds.\n\
0 (default) means \"now or never\", that is,\n\
deliver the message now or don't deliver it at all.\n\
Max value is 2419200 (28 days).\n\
For details see: https://firebase.google.com/docs/cloud-messaging/concept-options"
    )]
    ttl: i64,

    /// Ask FCM to validate the message without delivering it
    #[arg(long)]
    dry_run: bool,

    /// Print the FCM message JSON before sending
    #[arg(long)]
    print_request: bool,

    /// FCM API base URL
    #[arg(long, hide = true, env = "PUSHFIRE_FCM_ENDPOINT", value_name = "URL")]
    endpoint: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn raw_args(&self) -> RawArgs {
        RawArgs {
            credentials_file: self.credentials_file.clone(),
            push_file: self.push_file.clone(),
            topic: self.topic.clone(),
            token: self.token.clone(),
            ttl: self.ttl,
        }
    }

    fn log_filter(&self) -> EnvFilter {
        if self.verbose {
            EnvFilter::new("debug")
        } else if self.quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    }
}

fn init_logging(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .init();
}

async fn execute(cli: &Cli) -> Result<String> {
    let config = SendConfig::collect(cli.raw_args())?;
    debug!(?config, "Collected options");

    let request = prepare(&config, &SystemClock)?;

    if cli.print_request {
        let json = serde_json::to_string_pretty(&request)
            .map_err(|e| PushError::Delivery(e.into()))?;
        println!("{}", json);
    }

    let mut client = FcmClient::from_service_account(&config.credentials_file)?;
    if let Some(endpoint) = &cli.endpoint {
        client = client.endpoint(endpoint);
    }
    debug!(project = client.project_id(), "Loaded service account");

    deliver(&request, &client, cli.dry_run).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    init_logging(&cli);

    match execute(&cli).await {
        Ok(name) => {
            if !cli.quiet {
                println!("Successfully sent message: {}", name);
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_original_flag_names() {
        let cli = Cli::try_parse_from([
            "pushfire",
            "--credentialsFile",
            "key.json",
            "--pushFile=push.json",
            "--topic=news",
            "--ttl",
            "3600",
        ])
        .unwrap();

        let raw = cli.raw_args();
        assert_eq!(raw.credentials_file.as_deref(), Some("key.json"));
        assert_eq!(raw.push_file.as_deref(), Some("push.json"));
        assert_eq!(raw.topic.as_deref(), Some("news"));
        assert_eq!(raw.token, None);
        assert_eq!(raw.ttl, 3600);
    }

    #[test]
    fn test_ttl_defaults_to_zero_and_accepts_negative() {
        let cli = Cli::try_parse_from(["pushfire"]).unwrap();
        assert_eq!(cli.ttl, 0);

        let cli = Cli::try_parse_from(["pushfire", "--ttl", "-5"]).unwrap();
        assert_eq!(cli.ttl, -5);
    }

    #[test]
    fn test_endpoint_is_hidden() {
        let cli = Cli::try_parse_from(["pushfire", "--endpoint", "http://127.0.0.1:1"]).unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("http://127.0.0.1:1"));

        let help = Cli::command().render_long_help().to_string();
        assert!(!help.contains("--endpoint"));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["pushfire", "-v", "-q"]).is_err());
    }
}
