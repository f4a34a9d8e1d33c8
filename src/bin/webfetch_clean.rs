//! Fetch a page, strip the noise, print HTML or Markdown.
//!
//! Without `--cli` the binary serves JSON-RPC on stdin/stdout.

use std::fs;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use webfetch_clean::rpc::Server;
use webfetch_clean::{process_url, HttpRetriever, Options, RequestConfig, DEFAULT_TIMEOUT_SECS};

/// Fetch a URL, clean its HTML and convert it to Markdown or cleaned HTML.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Run once from the command line instead of serving JSON-RPC on stdio.
    #[clap(long)]
    cli: bool,
    /// URL to fetch (required with --cli).
    #[clap(short, long)]
    url: Option<String>,
    /// Output format.
    #[clap(short, long, default_value = "markdown", value_parser = ["html", "markdown"])]
    format: String,
    /// Only keep the content of the first <main> or <article>.
    #[clap(long)]
    preserve_main: bool,
    /// Remove all images.
    #[clap(long)]
    remove_images: bool,
    /// HTTP timeout in seconds, 0 for none.
    #[clap(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
    /// Write output to this file instead of stdout.
    #[clap(short, long)]
    output: Option<PathBuf>,
    /// Log each request to stderr.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let env = Env::default().filter_or("RUST_LOG", if cli.verbose { "info" } else { "warn" });
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .init();

    if cli.cli {
        run_cli(cli)
    } else {
        run_server()
    }
}

fn run_cli(cli: Cli) -> ExitCode {
    let Some(url) = cli.url.filter(|u| !u.is_empty()) else {
        eprintln!("Error: --url is required");
        return ExitCode::FAILURE;
    };

    let config = RequestConfig {
        url,
        format: cli.format,
        options: Options {
            preserve_main_only: cli.preserve_main,
            remove_images: cli.remove_images,
        },
        timeout_secs: cli.timeout,
        output: cli.output,
    };

    let result = process_url(&config, &HttpRetriever::new());
    if let Some(err) = result.error {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    match &config.output {
        Some(path) => {
            if let Err(err) = fs::write(path, &result.content) {
                eprintln!("Error writing to file: {err}");
                return ExitCode::FAILURE;
            }
        }
        None => println!("{}", result.content),
    }

    ExitCode::SUCCESS
}

fn run_server() -> ExitCode {
    let server = Server::new(HttpRetriever::new());
    let stdin = io::stdin();
    let stdout = io::stdout();

    match server.run(stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("server stopped: {err}");
            ExitCode::FAILURE
        }
    }
}
