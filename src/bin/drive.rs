use car_sim::drive::Drive;
use car_sim::error::{Result, SimError};
use car_sim::r#impl::buf_drive_logger::BufferLogWriter;
use car_sim::r#impl::cardinal_direction::CardinalDirection;
use car_sim::r#impl::decay_rollers::RngDecayRoller;
use car_sim::r#impl::simple_strategy_resolver::SimpleStrategyResolver;
use car_sim::r#impl::simulation_logic_service::SimulationLogicService;
use car_sim::r#impl::vehicle_status::Status;
use car_sim::serialization::{FromFile, ToFile};

use std::env::args;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

struct Config {
    seed: u64,
    status_path: Option<PathBuf>,
    save_path: Option<PathBuf>,
    direction: Option<CardinalDirection>,
    action_codes: Vec<i64>,
}

fn main() -> ExitCode {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(std::io::stderr)
        .init();

    let config = match parse_args() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("Error parsing arguments: {e}");
            eprintln!("usage: drive [--seed N] [--direction DIR] [--status FILE] [--save FILE] CODE...");
            return ExitCode::from(2);
        }
    };

    let mut initial_status = match &config.status_path {
        Some(path) => match Status::load_from_file(path) {
            Ok(x) => x,
            Err(e) => {
                eprintln!(
                    "failed to load status at '{}': {}",
                    path.to_string_lossy(),
                    e
                );
                return ExitCode::from(1);
            }
        },
        None => Status::default(),
    };
    if let Some(direction) = config.direction {
        initial_status.cardinal_direction = direction;
    }

    let logger = BufferLogWriter::new(io::BufWriter::new(stdout()));
    let logic = SimulationLogicService::new(
        SimpleStrategyResolver::new(),
        RngDecayRoller::from_seed(config.seed),
    );

    let mut drive = Drive::new("car", logic, initial_status, logger);
    drive.run_commands(config.action_codes);
    let (final_status, _, _) = drive.into_parts();

    if let Err(e) = final_status.save_to_writer(stdout()) {
        eprintln!("failed to print final status: {}", e);
        return ExitCode::from(1);
    }
    if let Some(path) = config.save_path {
        if let Err(e) = final_status.save_to_file(&path) {
            eprintln!("failed to save status to '{}': {}", path.to_string_lossy(), e);
            return ExitCode::from(1);
        }
    }

    ExitCode::SUCCESS
}

/// info unless the directives ask for something else
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

enum ArgsState {
    FlagOrCode,
    Seed,
    Direction,
    StatusPath,
    SavePath,
}

fn parse_args() -> Result<Config> {
    let mut config = Config {
        seed: 123456,
        status_path: None,
        save_path: None,
        direction: None,
        action_codes: Vec::new(),
    };

    let mut state = ArgsState::FlagOrCode;
    for arg in args().skip(1) {
        match state {
            ArgsState::FlagOrCode => match arg.as_str() {
                "-r" | "--seed" => state = ArgsState::Seed,
                "-d" | "--direction" => state = ArgsState::Direction,
                "-s" | "--status" => state = ArgsState::StatusPath,
                "-o" | "--save" => state = ArgsState::SavePath,
                s => {
                    let code = i64::from_str(s)
                        .map_err(|e| SimError::BadArgument(format!("action code '{s}': {e}")))?;
                    config.action_codes.push(code);
                }
            },
            ArgsState::Seed => {
                config.seed = u64::from_str(&arg)
                    .map_err(|e| SimError::BadArgument(format!("seed '{arg}': {e}")))?;
                state = ArgsState::FlagOrCode;
            }
            ArgsState::Direction => {
                config.direction = Some(CardinalDirection::from_str(&arg)?);
                state = ArgsState::FlagOrCode;
            }
            ArgsState::StatusPath => {
                config.status_path = Some(PathBuf::from(arg));
                state = ArgsState::FlagOrCode;
            }
            ArgsState::SavePath => {
                config.save_path = Some(PathBuf::from(arg));
                state = ArgsState::FlagOrCode;
            }
        }
    }

    if let ArgsState::FlagOrCode = state {
        Ok(config)
    } else {
        Err(SimError::BadArgument("flag is missing its value".to_owned()))
    }
}
