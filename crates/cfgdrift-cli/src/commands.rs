use colored::Colorize;
use tracing::debug;

use cfgdrift_classify::{classify, ChangeSet};
use cfgdrift_diff::{find_changed, find_new};
use cfgdrift_report::{render, render_json};
use cfgdrift_snapshot::capture;
use cfgdrift_store::{validate_instance, ConfigSession, DirSession};

use crate::cli::{Cli, Command, OutputFormat};
use crate::error::CliError;
use crate::profile::{self, Profiles};

/// Resolve the profile, open the store session, run the handshake, and
/// dispatch the selected mode.
pub fn run_command(cli: Cli) -> Result<(), CliError> {
    let path = cli
        .profiles_file
        .clone()
        .unwrap_or_else(profile::default_path);
    let profiles = Profiles::load(&path)?;
    let profile = profiles.resolve(&cli.profile)?;

    let mut session = DirSession::open(&profile.store)?;
    let info = session.instance_info()?;
    let identity = validate_instance(&info, &profile.database)?;
    debug!(
        instance = %identity.instance_id,
        database = %identity.database_name,
        "connected"
    );

    match cli.command {
        Command::Init => {
            let rows = run_init(&mut session)?;
            println!(
                "{} Initial configuration stored ({rows} rows).",
                "✓".green().bold()
            );
        }
        Command::Check => {
            let report = run_check(&mut session, cli.format)?;
            print!("{report}");
        }
        Command::Renew => {
            let rows = run_renew(&mut session)?;
            println!(
                "{} Configuration renewed ({rows} rows).",
                "✓".green().bold()
            );
        }
    }
    Ok(())
}

/// First-time initialization: create the baseline table and capture into
/// it. Fails when a baseline already exists.
pub fn run_init(session: &mut dyn ConfigSession) -> Result<usize, CliError> {
    if session.baseline_exists()? {
        return Err(CliError::Precondition(
            "a baseline already exists; run 'renew' to overwrite it".to_string(),
        ));
    }
    session.create_baseline()?;
    let rows = capture(session, false)?;
    session.commit()?;
    Ok(rows)
}

/// Destructive re-baseline: always overwrites, creating the table when
/// absent.
pub fn run_renew(session: &mut dyn ConfigSession) -> Result<usize, CliError> {
    if !session.baseline_exists()? {
        session.create_baseline()?;
    }
    let rows = capture(session, true)?;
    session.commit()?;
    Ok(rows)
}

/// The check pipeline: both match passes, shape validation before any row
/// is consumed, classification into a single deduplicating change set, then
/// rendering. Performs no writes.
pub fn run_check(
    session: &mut dyn ConfigSession,
    format: OutputFormat,
) -> Result<String, CliError> {
    if !session.baseline_exists()? {
        return Err(CliError::Precondition(
            "no baseline exists; run 'init' first".to_string(),
        ));
    }

    let baseline = session.baseline_rows()?;
    let live = session.live_rows()?;

    let mut changes = ChangeSet::new();
    for batch in [find_changed(&baseline, &live), find_new(&baseline, &live)] {
        batch.validate()?;
        for row in &batch.rows {
            changes.absorb(classify(row)?);
        }
    }
    debug!(changes = changes.len(), "check complete");

    match format {
        OutputFormat::Text => Ok(render(&changes)),
        OutputFormat::Json => Ok(render_json(&changes)? + "\n"),
    }
}
