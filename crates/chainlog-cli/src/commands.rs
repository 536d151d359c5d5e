use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use chainlog_client::{ChainRemote, HttpRemote};
use chainlog_ledger::ChainValidator;
use chainlog_protocol::JsonCodec;
use chainlog_server::{ChainServer, ServerConfig};
use chainlog_types::Record;
use colored::Colorize;
use comfy_table::{presets, ContentArrangement, Table};

use crate::cli::*;
use crate::telemetry;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let Cli { command, host, verbose, format } = cli;
    let remote = || -> anyhow::Result<HttpRemote> {
        telemetry::init("warn", verbose);
        Ok(HttpRemote::new(host.as_str())?)
    };

    match command {
        Command::Serve(args) => {
            let config = resolve_config(&args)?;
            telemetry::init(&config.log_level, verbose);
            cmd_serve(config).await
        }
        Command::List => cmd_list(&remote()?, format).await,
        Command::Append(args) => cmd_append(&remote()?, &args.data, format).await,
        Command::Replace(args) => cmd_replace(&remote()?, &args.file, format).await,
        Command::Verify => cmd_verify(&remote()?, format).await,
        Command::Health => cmd_health(&remote()?, format).await,
    }
}

/// Defaults, then the TOML file, then flags and environment.
pub fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if args.strict_root {
        config.strict_root = true;
    }
    Ok(config)
}

async fn cmd_serve(config: ServerConfig) -> anyhow::Result<()> {
    println!(
        "{} chainlog node on {}{}",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        if config.strict_root { " (strict root)" } else { "" }
    );
    ChainServer::new(config)
        .serve_with_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown requested");
        })
        .await?;
    Ok(())
}

async fn cmd_list(remote: &dyn ChainRemote, format: OutputFormat) -> anyhow::Result<()> {
    let chain = remote.blocks().await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chain)?),
        OutputFormat::Text => {
            let table = render_table(&chain);
            let mut lines = table.lines();
            if let Some(header) = lines.next() {
                println!("{}", header.bold());
            }
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

async fn cmd_append(
    remote: &dyn ChainRemote,
    data: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if data.is_empty() {
        bail!("data is required");
    }
    let record = remote.mine(data).await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Text => println!(
            "Mined block #{} with hash {}",
            record.sequence_number.to_string().bold(),
            record.digest.yellow()
        ),
    }
    Ok(())
}

async fn cmd_replace(
    remote: &dyn ChainRemote,
    file: &Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let candidate = read_chain_input(file)?;
    let offered = candidate.len();
    let adopted = remote.replace(&candidate).await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&adopted)?),
        OutputFormat::Text => println!(
            "{} Chain replaced: node now holds {} blocks (offered {})",
            "✓".green().bold(),
            adopted.len().to_string().bold(),
            offered
        ),
    }
    Ok(())
}

async fn cmd_verify(remote: &dyn ChainRemote, format: OutputFormat) -> anyhow::Result<()> {
    let chain = remote.blocks().await?;
    let outcome = ChainValidator::strict().validate_chain(&chain);

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "valid": outcome.is_ok(),
                "length": chain.len(),
                "error": outcome.as_ref().err().map(|e| e.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => match &outcome {
            Ok(()) => {
                println!("{} Chain integrity verified", "✓".green().bold());
                println!("  Blocks: {}", chain.len().to_string().bold());
                if let Some(tip) = chain.last() {
                    println!("  Tip: #{} {}", tip.sequence_number, tip.short_digest().yellow());
                }
            }
            Err(e) => println!("{} Chain is invalid: {}", "✗".red().bold(), e),
        },
    }

    outcome.context("chain verification failed")
}

async fn cmd_health(remote: &dyn ChainRemote, format: OutputFormat) -> anyhow::Result<()> {
    let health = remote.health().await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&health)?),
        OutputFormat::Text => {
            println!("Status: {}", health.status.green());
            println!("Version: {} (protocol {})", health.version, health.protocol_version);
            println!("Blocks: {}", health.length.to_string().bold());
        }
    }
    Ok(())
}

/// Read a JSON array of records from `path`, or stdin when `path` is `-`.
pub fn read_chain_input(path: &Path) -> anyhow::Result<Vec<Record>> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("reading chain from stdin")?;
        buf
    } else {
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?
    };
    JsonCodec::decode_chain(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Column-aligned `INDEX TIMESTAMP DATA HASH` listing, header first.
pub fn render_table(chain: &[Record]) -> String {
    if chain.is_empty() {
        return "No blocks yet.\n".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .force_no_tty()
        .set_header(["INDEX", "TIMESTAMP", "DATA", "HASH"]);
    for record in chain {
        table.add_row([
            record.sequence_number.to_string(),
            record.created_at.to_seconds_text(),
            record.payload.clone(),
            record.short_digest().to_string(),
        ]);
    }
    for i in 0..4 {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }

    let mut out = String::new();
    for line in table.lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
