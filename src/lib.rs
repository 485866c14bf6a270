pub mod api;
pub mod bin_url;
pub mod curl;
pub mod error;
pub mod http;
pub mod model;
pub mod printer;
pub mod selector;
pub mod telemetry;

use api::ApiClient;
use bin_url::{parse_bin_url, BinUrl};
use clap::error::ErrorKind;
use clap::Parser;
use error::{CliError, RbError};
use crate::http::{HttpBackend, ReqwestBackend};
use indicatif::{ProgressBar, ProgressStyle};
use selector::{select_request, Target};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Ordered name/value pairs, e.g. headers or query parameters
pub type KeyValuePairs = Vec<(String, String)>;

#[derive(Parser, Debug)]
#[command(name = "rbcurl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// RequestBin URL, e.g. http://requestb.in/1234asdf?inspect#13mgnv
    pub url: Option<String>,
    /// Spread the generated command over multiple lines
    #[arg(short, long)]
    pub pretty: bool,
}

/// Runs `fut` while a spinner with `message` is drawn on stderr
///
/// The spinner is cleared before the future's output is returned, so
/// nothing it drew is left behind for later output.
pub async fn with_spinner<F: Future>(message: &str, fut: F) -> F::Output {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    let style_result = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner} {msg}");
    match style_result {
        Ok(style) => pb.set_style(style),
        Err(_) => pb.set_style(ProgressStyle::default_spinner()),
    }

    let result = fut.await;
    pb.finish_and_clear();
    result
}

/// Fetch the request `url` points at and render it as a curl command
///
/// Makes no network call when `url` is not a bin URL.
pub async fn generate_command<B: HttpBackend + Send + Sync>(
    api: &ApiClient<B>,
    url: &str,
    pretty: bool,
) -> Result<String, RbError> {
    let BinUrl { bin_id, request_id } = parse_bin_url(url)?;
    debug!(%bin_id, request_id = ?request_id, "parsed bin URL");

    let target = Target::from_request_id(request_id.as_deref());
    let request = select_request(api, &bin_id, target).await?;
    Ok(curl::format_curl_command(&request, pretty))
}

/// Executes one invocation against the real RequestBin API
pub async fn run(cli: Cli) -> Result<(), RbError> {
    let url = cli.url.ok_or(CliError::MissingUrl)?;
    let api = ApiClient::new(ReqwestBackend::new());

    let command = with_spinner(
        "Fetching request from RequestBin",
        generate_command(&api, &url, cli.pretty),
    )
    .await?;
    printer::print_command(&command)?;
    Ok(())
}

/// The error to report for a failed argument parse
///
/// `None` for `--help` and `--version`, which clap prints itself and exits 0.
pub fn argument_error(err: &clap::Error) -> Option<RbError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(RbError::Cli(CliError::InvalidArguments(
            err.to_string().trim_end().to_string(),
        ))),
    }
}

/// Turn the outcome of an invocation into a process exit code
///
/// Usage and API errors are printed to stderr and give 1. Fatal errors
/// are handed back untouched for `main` to return.
pub fn exit_code_for(result: Result<(), RbError>) -> Result<u8, RbError> {
    match result {
        Ok(()) => Ok(0),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            printer::print_error(&e);
            Ok(1)
        }
    }
}
