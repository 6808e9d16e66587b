mod telemetry;

use anyhow::Context;
use clap::Parser;
use court_scheduler_api::{submit_court_schedule_controller, TracingNotifier};
use court_scheduler_domain::{CourtScheduleForm, ID};
use court_scheduler_infra::setup_context;
use std::path::PathBuf;
use telemetry::{get_subscriber, init_subscriber};

/// Writes the weekly availability and an optional off-day of a court to the
/// court booking API.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Id of the court to update
    #[arg(long)]
    court: ID,
    /// JSON file holding the court schedule form
    #[arg(long)]
    form: PathBuf,
    /// Validate the form and print the payloads without sending them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("court_scheduler".into(), "info".into());
    init_subscriber(subscriber)?;

    let args = Args::parse();
    let form = std::fs::read_to_string(&args.form)
        .with_context(|| format!("Unable to read form file: {}", args.form.display()))?;
    let form: CourtScheduleForm =
        serde_json::from_str(&form).context("The form file is not a valid court schedule form")?;

    let ctx = setup_context();

    let plan = if args.dry_run {
        form.build_plan(ctx.sys.now_in(&ctx.config.timezone))?
    } else {
        submit_court_schedule_controller(args.court, form, &ctx, &TracingNotifier).await?
    };

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
