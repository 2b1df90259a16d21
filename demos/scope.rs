//! Example demonstrating scope population
//!
//! Loads two groups, flattens them into a caller-owned scope and prints the
//! resulting flat entries. Run with `RUST_LOG=debug` to see the resolution
//! events.

use envbind::{Builder, Entry, Scope};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    std::env::set_var("APP_PORT", "9000");
    std::env::set_var("REDIS_URL", "redis://localhost");

    let app = Builder::new("APP")
        .field("PORT", 8080)
        .field("WORKERS", 4)
        .load()?;

    let redis = Builder::new("REDIS")
        .field("URL", "redis://127.0.0.1")
        .load()?;

    let mut scope = Scope::new();
    scope.insert_binding("app", app);
    scope.insert_binding("redis", redis);
    scope.populate();

    println!("Scope after population:");
    for (name, entry) in scope.iter() {
        match entry {
            Entry::Value(value) => println!("  {name} = {value}"),
            Entry::Binding(binding) => println!("  {name} = <group {}>", binding.name()),
        }
    }

    Ok(())
}
