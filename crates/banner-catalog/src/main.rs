use std::time::Instant;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use banner_catalog::cli::Cli;
use banner_catalog::endpoints::Endpoints;
use banner_catalog::{enrich, fetch, output, session};
use banner_common::http::SessionClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let started = Instant::now();

    // 1. Derive the term code and session token for this run
    let term = cli.term();
    let session_id = session::unique_session_id();
    info!(
        term = %term,
        session_id = %session_id,
        out = %cli.out.display(),
        "starting catalog run"
    );

    // 2. Build the shared cookie-bearing client
    let client = SessionClient::new(cli.client_config())?;
    let endpoints = Endpoints::new(cli.base_url.clone());

    // 3. Prime the session so searches answer for this term
    session::prime_session(&client, &endpoints, &term, &session_id).await;

    // 4. Page through the catalog
    let mut dataset = fetch::collect_catalog(
        &client,
        &endpoints,
        &term,
        &session_id,
        &cli.fetch_config(),
    )
    .await
    .inspect_err(|e| {
        tracing::error!(error = %e, "catalog fetch failed");
    })?;

    // 5. Enrich every course with its scraped description
    enrich::enrich_descriptions(
        &client,
        &endpoints,
        &term,
        &mut dataset.data,
        &cli.enrich_config(),
    )
    .await;

    // 6. Write the artifact
    output::write_dataset(&dataset, &cli.out).inspect_err(|e| {
        tracing::error!(error = %e, "failed to persist dataset");
    })?;

    info!(
        courses = dataset.data.len(),
        elapsed_secs = started.elapsed().as_secs_f64(),
        "catalog run complete"
    );
    Ok(())
}
