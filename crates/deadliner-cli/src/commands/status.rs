use chrono::Utc;
use deadliner_core::{parse_target, Snapshot};

pub fn run(target: &str) -> Result<(), Box<dyn std::error::Error>> {
    let target = parse_target(target)?;
    let snapshot = Snapshot::compute(target, Utc::now());
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
