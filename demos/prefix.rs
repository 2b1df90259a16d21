//! Example demonstrating prefix derivation and explicit prefixes

use envbind::Builder;

fn main() -> anyhow::Result<()> {
    std::env::set_var("CACHE_SIZE", "512");
    std::env::set_var("TIMEOUT", "30");
    std::env::set_var("PG_HOST", "db.internal");

    // Derived prefix: group CACHE reads CACHE_SIZE
    let cache = Builder::new("CACHE").field("SIZE", 128).load()?;

    // The reserved name "root" reads unprefixed variables
    let root = Builder::new("root").field("TIMEOUT", 10).load()?;

    // Explicit prefix overrides derivation: group DATABASE reads PG_HOST
    let database = Builder::new("DATABASE")
        .prefix("PG_")
        .field("HOST", "localhost")
        .load()?;

    println!("CACHE_SIZE  = {}", cache.get("SIZE").unwrap());
    println!("TIMEOUT     = {}", root.get("TIMEOUT").unwrap());
    println!("PG_HOST     = {}", database.get("HOST").unwrap());

    Ok(())
}
