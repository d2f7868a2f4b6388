use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};

use sendcam::backend::BackendReadiness;
use sendcam::classify::SchemeClassifier;
use sendcam::clipboard::SystemClipboard;
use sendcam::config::{Config, ConfigStore, Network};
use sendcam::console::{parse_line, ConsoleCommand, ConsoleNotifier, ConsolePrompt, ConsoleRouter};
use sendcam::error::AppError;
use sendcam::intake::{IntakeError, IntakeLayer};
use sendcam::logging::init_tracing;
use sendcam::mount::MountGuard;
use sendcam::sources::CameraFeed;
use sendcam::ui::scan::ScanPhase;
use sendcam::ui::{ScanSession, SessionDeps, SessionOutcome, SessionSettings};

/// Scan payment codes from stdin and print where the wallet would navigate.
#[derive(Debug, Parser)]
#[command(name = "sendcam", version)]
struct Cli {
    /// Path to config file (default: ~/.config/sendcam/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Network used for the debug fixture
    #[arg(long, value_enum)]
    network: Option<Network>,

    /// Enable the :debug fixture command
    #[arg(long)]
    debug_fixture: bool,

    /// Start with the wallet backend not ready (toggle with `:ready on`)
    #[arg(long)]
    not_ready: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let outcome = run(cli).await?;

    let summary = match outcome {
        SessionOutcome::Dispatched(target) => json!({ "outcome": "dispatched", "target": target }),
        SessionOutcome::Closed => json!({ "outcome": "closed" }),
        SessionOutcome::Unmounted => json!({ "outcome": "unmounted" }),
    };
    println!("{}", summary);
    Ok(())
}

async fn run(cli: Cli) -> Result<SessionOutcome, AppError> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let store = ConfigStore::open(path)?;
    store.update(|config| {
        if let Some(network) = cli.network {
            config.scan.network = network;
        }
        if cli.debug_fixture {
            config.scan.debug_fixture = true;
        }
    })?;
    let config = store.get();
    tracing::info!(
        path = %store.path().display(),
        network = ?config.scan.network,
        "Configuration loaded"
    );

    let (prompt, prompt_answers) = ConsolePrompt::channel();
    let deps = SessionDeps {
        classifier: Arc::new(SchemeClassifier::new()),
        router: Arc::new(ConsoleRouter),
        notifier: Arc::new(ConsoleNotifier),
        prompt: Arc::new(prompt),
    };
    let session = ScanSession::new(deps, SessionSettings::from(&config));
    let mut state = session.subscribe();
    let (intake, receiver) = IntakeLayer::new(config.scan.intake_buffer);
    let camera = CameraFeed::new(intake.clone(), session.subscribe());
    let readiness = BackendReadiness::new(!cli.not_ready);
    let mount = MountGuard::new();

    let mut task = tokio::spawn(session.run(receiver, readiness.clone(), mount.handle()));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let clipboard = SystemClipboard::new();

    let exit = loop {
        tokio::select! {
            finished = &mut task => return Ok(finished?),

            _ = tokio::signal::ctrl_c() => break Exit::Unmount,

            line = lines.next_line() => {
                let Some(line) = line? else { break Exit::InputClosed };

                if state.borrow().phase == ScanPhase::Prompting {
                    if prompt_answers.send(line).await.is_err() {
                        break Exit::InputClosed;
                    }
                    continue;
                }

                let sent = match parse_line(&line) {
                    ConsoleCommand::Frame(payload) => camera.on_decoded(&payload).map(|_| ()),
                    ConsoleCommand::Paste => intake.paste(&clipboard).await,
                    ConsoleCommand::Debug => match intake.debug_fixture(&config.scan).await {
                        Ok(false) => {
                            eprintln!("Debug fixture disabled (use --debug-fixture)");
                            Ok(())
                        }
                        other => other.map(|_| ()),
                    },
                    ConsoleCommand::Address => {
                        let sent = intake.address_lookup().await;
                        // The next line answers the prompt, so wait until the
                        // session has either opened it or moved past Idle.
                        let _ = state
                            .wait_for(|s| !matches!(s.phase, ScanPhase::Idle | ScanPhase::Stalled))
                            .await;
                        sent
                    }
                    ConsoleCommand::Flip => intake.toggle_orientation().await,
                    ConsoleCommand::Reenable => intake.reenable().await,
                    ConsoleCommand::Deny => camera.on_not_authorized().await,
                    ConsoleCommand::Ready(ready) => {
                        readiness.set_ready(ready);
                        Ok(())
                    }
                    ConsoleCommand::Quit => break Exit::Unmount,
                    ConsoleCommand::Unknown(input) => {
                        eprintln!("Unknown command: {}", input);
                        Ok(())
                    }
                    ConsoleCommand::Empty => Ok(()),
                };

                match sent {
                    Ok(()) => {}
                    Err(IntakeError::Closed) => break Exit::InputClosed,
                    Err(err) => tracing::warn!(error = %err, "Input not delivered"),
                }
            }
        }
    };

    match exit {
        Exit::Unmount => mount.unmount(),
        Exit::InputClosed => {
            // Closing every producer lets the session finish what is queued.
            drop(prompt_answers);
            drop(camera);
            drop(intake);
        }
    }
    Ok(task.await?)
}

/// Why the input loop stopped.
enum Exit {
    /// Quit or Ctrl-C: the screen is torn down, pending work is discarded.
    Unmount,
    /// Stdin reached EOF.
    InputClosed,
}
