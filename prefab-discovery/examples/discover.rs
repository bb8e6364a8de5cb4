//! Simple server discovery that outputs JSON for scripting
//!
//! Usage: cargo run -p prefab-sdk-discovery --example discover [timeout-secs]

use prefab_discovery::locate_with_timeout;
use std::time::Duration;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let timeout = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);

    match locate_with_timeout(Duration::from_secs(timeout)) {
        Some(server) => println!("{}", serde_json::to_string_pretty(&server).unwrap()),
        None => println!("null"),
    }
}
