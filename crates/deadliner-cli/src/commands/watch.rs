use chrono::Utc;
use deadliner_core::{parse_target, Config, Event, Watcher};

/// Run a countdown to completion, printing one JSON event per line.
pub fn run(target: &str) -> Result<(), Box<dyn std::error::Error>> {
    let target = parse_target(target)?;
    let cadence = Config::load_or_default().cadence.cadence();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let watcher = Watcher::spawn(target, cadence);
        // Subscribe before reading the initial value; a snapshot published
        // in between would otherwise be marked seen and never drained.
        let mut rx = watcher.subscribe();
        let first = rx.borrow_and_update().clone();
        let mut tier = first.tier();
        let mut passed = first.passed;

        emit(&Event::CountdownStarted {
            target,
            snapshot: first,
            at: Utc::now(),
        })?;
        while !passed && rx.changed().await.is_ok() {
            let snapshot = rx.borrow_and_update().clone();
            let next_tier = snapshot.tier();
            if next_tier != tier {
                emit(&Event::TierChanged {
                    from: tier,
                    to: next_tier,
                    at: Utc::now(),
                })?;
                tier = next_tier;
            }
            passed = snapshot.passed;
            emit(&Event::SnapshotPublished {
                snapshot,
                at: Utc::now(),
            })?;
        }

        if passed {
            emit(&Event::TargetPassed {
                target,
                at: Utc::now(),
            })?;
        }
        Ok(())
    })
}

fn emit(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}
