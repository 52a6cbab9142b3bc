use anyhow::Context;
use args::{Cli, Invocation};
use clap::Parser;
use std::process::ExitCode;
use tracing::info;

mod args;
mod bootstrap;
mod di;
mod output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    bootstrap::init_logging(&cli.log_level);

    let invocation = match cli.into_invocation() {
        Ok(invocation) => invocation,
        Err(e) => {
            eprint!("{}", args::usage_message(&e));
            return ExitCode::FAILURE;
        }
    };

    let result = run(invocation)
        .await
        .and_then(|out| output::write_to(&mut std::io::stdout().lock(), &out));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(invocation: Invocation) -> anyhow::Result<String> {
    let use_cases = di::UseCases::new();

    match invocation {
        Invocation::Forward { domain, server } => {
            let server = use_cases
                .select_server
                .execute(server.as_deref())
                .await
                .context("Failed to determine DNS server")?;

            info!(domain = %domain, server = %server, "Starting forward lookup");

            let report = use_cases.fetch_records.execute(&domain, &server).await;
            let mut json = output::render_report(&report)?;
            json.push('\n');
            Ok(json)
        }
        Invocation::Reverse { ip } => {
            let names = use_cases
                .reverse_lookup
                .execute(&ip)
                .await
                .with_context(|| format!("Reverse lookup for {} failed", ip))?;

            Ok(output::render_hostnames(&ip, &names))
        }
    }
}
