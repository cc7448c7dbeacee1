use clap::Parser;
use eclipse_sky::config::{Args, SessionConfig};
use eclipse_sky::frontend::HeadlessFrontend;
use eclipse_sky::{Result, Session, SkyProjector, SunCalc, run};
use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match start(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err} ({:?} failure)", err.kind());
            ExitCode::FAILURE
        }
    }
}

fn start(args: &Args) -> Result<()> {
    let config = SessionConfig::from_args(args)?;
    let projector = SkyProjector::default();
    let mut session = Session::new(config.initial_state()?, SunCalc, projector)?;

    if args.headless {
        let mut frontend = HeadlessFrontend::new(args.script.iter().copied(), args.max_frames);
        run(&mut session, &mut frontend)?;
        if let Some(last) = frontend.last_frame() {
            info!(
                "headless run ended after {} frames at {}",
                frontend.frames().len(),
                last.caption
            );
        }
        return Ok(());
    }
    windowed(&mut session, &projector)
}

#[cfg(feature = "raylib")]
fn windowed(session: &mut Session<SunCalc>, projector: &SkyProjector) -> Result<()> {
    let mut frontend = eclipse_sky::frontend::RaylibFrontend::open(projector)?;
    run(session, &mut frontend)
}

#[cfg(not(feature = "raylib"))]
fn windowed(_session: &mut Session<SunCalc>, _projector: &SkyProjector) -> Result<()> {
    Err(eclipse_sky::Error::render_surface(
        "built without the `raylib` feature; rebuild with `--features raylib` or rerun with --headless",
    ))
}
