//! Namecheap Check CLI Application
//!
//! A command-line interface for checking domain availability in bulk via the
//! Namecheap XML API. This CLI application provides a user-friendly interface
//! to the namecheap-check-lib library.

mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use namecheap_check_lib::{
    collect_domains, get_public_ip, load_env_config, AvailabilityClient, CheckError, CheckOptions,
    Credentials,
};
use std::path::Path;
use std::process;
use std::time::Duration;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for namecheap-check
#[derive(Parser, Debug)]
#[command(name = "namecheap-check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check domain availability via the Namecheap API")]
#[command(
    long_about = "Check domain availability in bulk via the Namecheap XML API.\n\nDomains are sent in batches of up to 50 per request. Credentials come from flags or NAMECHEAP_* environment variables; the client IP is detected automatically when not supplied."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// Comma-separated list of domains to check
    #[arg(
        long = "domains",
        value_name = "LIST",
        help_heading = "Domain Selection"
    )]
    pub domains: Option<String>,

    /// Input file with domains (one per line, # starts a comment)
    #[arg(
        short = 'f',
        long = "domains-file",
        value_name = "FILE",
        help_heading = "Domain Selection"
    )]
    pub domains_file: Option<String>,

    /// Namecheap API user (or env NAMECHEAP_API_USER)
    #[arg(long = "api-user", value_name = "USER", help_heading = "Credentials")]
    pub api_user: Option<String>,

    /// Namecheap API key (or env NAMECHEAP_API_KEY)
    #[arg(long = "api-key", value_name = "KEY", help_heading = "Credentials")]
    pub api_key: Option<String>,

    /// Account username, defaults to the API user (or env NAMECHEAP_USERNAME)
    #[arg(long = "username", value_name = "NAME", help_heading = "Credentials")]
    pub username: Option<String>,

    /// Client IP to register with the API (or env NAMECHEAP_CLIENT_IP).
    /// Detected via ipify when absent
    #[arg(long = "client-ip", value_name = "IP", help_heading = "Credentials")]
    pub client_ip: Option<String>,

    /// Use the sandbox endpoint
    #[arg(long = "sandbox", help_heading = "Endpoint")]
    pub sandbox: bool,

    /// HTTP timeout in seconds for every request
    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        default_value = "20",
        help_heading = "Endpoint"
    )]
    pub timeout: u64,

    /// Disable TLS certificate verification (not recommended)
    #[arg(long = "insecure", help_heading = "Endpoint")]
    pub insecure: bool,

    /// Do not annotate premium names
    #[arg(long = "no-premium", help_heading = "Output Format")]
    pub no_premium: bool,

    /// Output results in JSON format
    #[arg(short = 'j', long = "json", help_heading = "Output Format")]
    pub json: bool,

    /// Verbose progress output
    #[arg(short = 'v', long = "verbose", help_heading = "Configuration")]
    pub verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Validate arguments
    if let Err(e) = validate_args(&args) {
        eprintln!("Error: {}", e);
        process::exit(2);
    }

    // Run the availability check
    if let Err(e) = run_check(args).await {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}

/// Map library errors to process exit codes: 2 for usage problems
/// (missing domains or credentials), 1 for environmental failures
/// (network, timeout, IP detection).
fn exit_code(err: &CheckError) -> i32 {
    if err.is_usage_error() {
        2
    } else {
        1
    }
}

/// Validate command line arguments
fn validate_args(args: &Args) -> Result<(), String> {
    if args.domains.is_none() && args.domains_file.is_none() {
        return Err("provide --domains or --domains-file".to_string());
    }

    if args.timeout == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }

    Ok(())
}

/// Main availability checking logic
async fn run_check(args: Args) -> Result<(), CheckError> {
    // Collect and deduplicate domains from both sources
    let domains = collect_domains(
        args.domains.as_deref(),
        args.domains_file.as_deref().map(Path::new),
    )?;

    if args.verbose {
        println!(
            "Checking {} unique domain{}...",
            domains.len(),
            if domains.len() == 1 { "" } else { "s" }
        );
    }

    let timeout = Duration::from_secs(args.timeout);

    // Merge credentials: CLI flags win over environment variables.
    // Validated before IP detection so bad credentials never hit the network.
    let env = load_env_config();
    let mut credentials = Credentials::new(
        args.api_user.or(env.api_user).unwrap_or_default(),
        args.api_key.or(env.api_key).unwrap_or_default(),
    );
    if let Some(username) = args.username.or(env.username) {
        credentials = credentials.with_username(username);
    }
    credentials.validate()?;

    // Resolve the client IP: flag > env > ipify detection
    let client_ip = match args.client_ip.or(env.client_ip) {
        Some(ip) => ip,
        None => {
            if args.verbose {
                println!("Detecting public IP...");
            }
            let ip = get_public_ip(timeout, args.insecure).await?;
            if args.verbose {
                println!("Detected public IP: {}", ip);
            }
            ip
        }
    };

    let options = CheckOptions::default()
        .with_sandbox(args.sandbox)
        .with_timeout(timeout)
        .with_show_premium(!args.no_premium)
        .with_insecure(args.insecure);
    let show_premium = options.show_premium;

    if args.verbose && args.sandbox {
        println!("Using sandbox endpoint");
    }

    let client = AvailabilityClient::new(credentials, client_ip, options)?;

    let start_time = std::time::Instant::now();
    let result = client.check(&domains).await?;
    let duration = start_time.elapsed();

    if args.json {
        ui::print_json(&result)?;
    } else {
        ui::print_results(&result, show_premium);
        ui::print_summary(&result, duration);
    }

    Ok(())
}
