//! Example demonstrating reload and overrides

use envbind::Builder;

fn main() -> anyhow::Result<()> {
    std::env::set_var("WORKER_THREADS", "8");

    let worker = Builder::new("WORKER")
        .field("THREADS", 4)
        .field("QUEUE_DEPTH", 100)
        .load()?;

    println!("Initial: THREADS = {}", worker.get("THREADS").unwrap());

    // Environment changed after the initial load
    std::env::set_var("WORKER_THREADS", "16");
    let reloaded = worker.reload()?;
    println!("Reloaded: THREADS = {}", reloaded.get("THREADS").unwrap());

    // Overrides win over both the environment and the defaults
    let pinned = worker.reload_with([("THREADS", 2)])?;
    println!("Pinned:   THREADS = {}", pinned.get("THREADS").unwrap());

    Ok(())
}
