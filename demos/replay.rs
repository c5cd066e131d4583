use sailnav_core::config::NavConfig;
use sailnav_core::nav_processor::Fix;
use sailnav_core::session::TrackingSession;
use std::env;

// Replays a recorded csv track (same columns as `tests/data/*.csv`) and
// prints the instruments after every fix.
//   cargo run --example replay -- tests/data/harbour_exit.csv [config.json]
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: {} <fixes.csv> [config.json]", args[0]);
        return Ok(());
    }
    let config = match args.get(2) {
        Some(path) => NavConfig::load(path)?,
        None => NavConfig::default(),
    };

    let mut reader = csv::Reader::from_path(&args[1])?;
    let mut session = TrackingSession::new(config);
    session.start();
    for record in reader.deserialize() {
        let fix: Fix = record?;
        let timestamp_ms = fix.timestamp_ms;
        if let Some(result) = session.on_fix(fix) {
            let readout = session.readout();
            println!(
                "{timestamp_ms} {result:?}: COG {} ({}) SOG {} ({})",
                readout.cog_label,
                readout.course_source,
                readout.sog_label,
                readout.speed_source
            );
        }
    }
    println!("trail: {} points", session.track().len());
    session.stop();
    Ok(())
}
