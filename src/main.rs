//! ak820ctl: RGB lighting control for the Ajazz AK820 Pro keyboard.
//!
//! Plays the part of the vendor GUI: it owns the selected parameters,
//! validates them at the boundary, then applies them over one exclusive
//! HID session. `apply` dispatches the mode and sleep operations
//! concurrently and joins both before the session is closed.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ajazz_keyboard::{validate, Ak820Pro, Direction, LightingMode, RgbColor, SleepDelay};
use ajazz_transport::{protocol, HidSession, Transport};

#[derive(Parser)]
#[command(
    name = "ak820ctl",
    version,
    about = "RGB lighting control for the Ajazz AK820 Pro keyboard"
)]
struct Cli {
    /// USB vendor ID of the keyboard (hex)
    #[arg(long, value_parser = parse_hex_id, default_value = "258a")]
    vid: u16,

    /// USB product ID of the keyboard (hex)
    #[arg(long, value_parser = parse_hex_id, default_value = "010c")]
    pid: u16,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ModeArgs {
    /// Lighting mode, by name or wire number (see `list`)
    mode: LightingMode,

    /// Fixed color as RRGGBB hex (ignored when --rainbow is set)
    #[arg(long, default_value = "ffffff")]
    color: RgbColor,

    /// Cycle through colors instead of the fixed color
    #[arg(long)]
    rainbow: bool,

    /// Brightness level (0-5)
    #[arg(long, default_value_t = 3)]
    brightness: u8,

    /// Animation speed (0-5)
    #[arg(long, default_value_t = 3)]
    speed: u8,

    /// Animation direction (left/right)
    #[arg(long, default_value = "left")]
    direction: Direction,
}

#[derive(Subcommand)]
enum Command {
    /// Set the lighting mode
    Mode(ModeArgs),

    /// Set the idle delay before the LEDs sleep
    Sleep {
        /// Delay: never, 1m, 5m, 10m, 30m or a wire code (0-4)
        delay: SleepDelay,
    },

    /// Apply mode and sleep settings over one session
    Apply {
        #[command(flatten)]
        mode: ModeArgs,

        /// Idle delay before the LEDs sleep
        #[arg(long, default_value = "never")]
        sleep: SleepDelay,
    },

    /// List lighting modes and sleep delays
    List,
}

fn parse_hex_id(s: &str) -> Result<u16, String> {
    u16::from_str_radix(s.trim_start_matches("0x"), 16)
        .map_err(|e| format!("invalid hex id \"{s}\": {e}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Command::List = cli.command {
        print_tables();
        return Ok(());
    }

    let session = Arc::new(HidSession::new(cli.vid, cli.pid).context("HID subsystem init")?);
    let keyboard = Ak820Pro::new(session as Arc<dyn Transport>);

    match cli.command {
        Command::Mode(args) => {
            check_ranges(&args)?;
            keyboard.open()?;
            let result = set_mode(&keyboard, &args);
            keyboard.close();
            result?;
            info!("Lighting mode set to {}", args.mode);
        }
        Command::Sleep { delay } => {
            keyboard.open()?;
            let result = keyboard.set_sleep_time(delay);
            keyboard.close();
            result?;
            info!("LED sleep delay set to {}", delay.name());
        }
        Command::Apply { mode, sleep } => {
            check_ranges(&mode)?;

            // Open once, dispatch both, await both, close once. The session
            // must not be closed while either task is still running.
            keyboard.open()?;
            let mode_task = keyboard.set_mode_task(
                mode.mode,
                mode.color,
                mode.rainbow,
                mode.brightness,
                mode.speed,
                mode.direction,
            );
            let sleep_task = keyboard.set_sleep_time_task(sleep);
            let (mode_result, sleep_result) = tokio::join!(mode_task, sleep_task);
            keyboard.close();

            mode_result.context("mode task panicked")??;
            sleep_result.context("sleep task panicked")??;
            info!(
                "Applied mode {} and sleep delay {}",
                mode.mode,
                sleep.name()
            );
        }
        Command::List => unreachable!("handled above"),
    }

    Ok(())
}

/// Boundary check before the session is touched. The operations check
/// these again, but only after the device has been opened.
fn check_ranges(args: &ModeArgs) -> anyhow::Result<()> {
    validate::brightness(args.brightness)?;
    validate::speed(args.speed)?;
    Ok(())
}

fn set_mode(keyboard: &Ak820Pro, args: &ModeArgs) -> anyhow::Result<()> {
    keyboard.set_mode(
        args.mode,
        args.color,
        args.rainbow,
        args.brightness,
        args.speed,
        args.direction,
    )?;
    Ok(())
}

fn print_tables() {
    println!("Lighting modes:");
    for mode in LightingMode::ALL {
        println!("  {:2}  {}", mode as u8, mode.name());
    }
    println!();
    println!("Directions:");
    for direction in [Direction::LeftToRight, Direction::RightToLeft] {
        println!("  {:2}  {}", direction.wire_bit(), direction.name());
    }
    println!();
    println!("Sleep delays:");
    for delay in SleepDelay::ALL {
        println!("  {:2}  {}", delay.code(), delay.name());
    }
    println!();
    println!(
        "Default device: {:04x}:{:04x}",
        protocol::device::VENDOR_ID,
        protocol::device::PRODUCT_ID
    );
}
