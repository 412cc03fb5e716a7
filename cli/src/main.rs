use std::fmt::Write;

use clap::{Args, Parser, Subcommand};
use rand::Rng;
use serde::Deserialize;
use trip::{DEFAULT_DAYS, ItineraryLine, PRESETS, Pace, TripRequest, ValidationError, parse_lines};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing destination; pass --destination or --surprise")]
    MissingDestination,
    #[error("invalid trip: {0}")]
    Invalid(#[from] ValidationError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
}

#[derive(Parser, Debug)]
#[command(name = "journeycraft", about = "JourneyCraft trip-planning CLI")]
struct Cli {
    #[arg(long, env = "JOURNEYCRAFT_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Generate an itinerary.
    Plan(PlanArgs),
    /// List the "Surprise me" presets.
    Presets,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[arg(long)]
    destination: Option<String>,

    #[arg(long, default_value_t = DEFAULT_DAYS)]
    days: u32,

    #[arg(long, default_value = "")]
    theme: String,

    #[arg(long, default_value = "moderate")]
    pace: Pace,

    /// Ignore the other trip flags and plan a random preset.
    #[arg(long)]
    surprise: bool,

    /// Print the server's text without day/activity formatting.
    #[arg(long)]
    raw: bool,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let base_url = cli.base_url.trim_end_matches('/').to_owned();

    match cli.command {
        Command::Ping => run_ping(&base_url).await,
        Command::Plan(args) => run_plan(&base_url, args).await,
        Command::Presets => {
            print!("{}", render_presets());
            Ok(())
        }
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client.get(format!("{base_url}/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Server { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_plan(base_url: &str, args: PlanArgs) -> Result<(), CliError> {
    let raw = args.raw;
    let request = if args.surprise {
        let index = rand::rng().random_range(0..PRESETS.len());
        trip::preset_at(index).to_request()
    } else {
        build_request(args)?
    };
    request.validate()?;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base_url}/api/plan-trip"))
        .json(&request)
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(CliError::Server { status: status.as_u16(), message: server_message(&body) });
    }

    if raw {
        println!("{}", body.trim_end());
    } else {
        print!("{}", render_itinerary(&request, &body));
    }
    Ok(())
}

fn build_request(args: PlanArgs) -> Result<TripRequest, CliError> {
    let destination = args
        .destination
        .filter(|d| !d.trim().is_empty())
        .ok_or(CliError::MissingDestination)?;
    Ok(TripRequest::new(destination.trim(), args.days, args.theme.trim(), args.pace))
}

/// `message` from a JSON error body, or the body itself.
fn server_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body).map_or_else(|_| body.trim().to_owned(), |err| err.message)
}

fn render_itinerary(request: &TripRequest, text: &str) -> String {
    let mut out = format!("{}\n{}\n", request.headline(), request.summary());
    for line in parse_lines(text) {
        let _ = match line {
            ItineraryLine::DayHeader(title) => writeln!(out, "\n📌 {title}"),
            ItineraryLine::Activity(activity) => writeln!(out, "   📍 {activity}"),
        };
    }
    out
}

fn render_presets() -> String {
    let mut out = String::new();
    for (i, preset) in PRESETS.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} | {} days | {} | {} pace",
            i + 1,
            preset.destination,
            preset.days,
            preset.theme,
            preset.pace.label()
        );
    }
    out
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
