use anyhow::Context;
use group_mailer::app::build;
use group_mailer::config::get_configuration;
use group_mailer::telemetry::{open_log_file, setup_tracing};
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration")?;

    let log_file = open_log_file(&configuration.logging.file).with_context(|| {
        format!(
            "Failed to open log file {}",
            configuration.logging.file.display()
        )
    })?;
    setup_tracing("group_mailer", "info", std::io::stdout.and(log_file));

    let server = build(&configuration)?;
    tracing::info!(address = %server.local_addr(), "Admin panel listening");
    server.await?;
    Ok(())
}
