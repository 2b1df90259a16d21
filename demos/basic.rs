//! Example demonstrating basic group loading

use envbind::Builder;

fn main() -> anyhow::Result<()> {
    // Set environment variables
    std::env::set_var("SERVER_HOST", "0.0.0.0");
    std::env::set_var("SERVER_PORT", "3000");

    let server = Builder::new("SERVER")
        .field("HOST", "127.0.0.1")
        .field("PORT", 8080)
        .field("DEBUG", false)
        .load()?;

    println!("Server configuration:");
    for (name, value) in server.values() {
        println!("  {name} = {value}");
    }

    Ok(())
}
