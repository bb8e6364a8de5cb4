//! Walk every home, room, and accessory the server knows about
//!
//! Usage: cargo run -p prefab-api --example homes [base-url]

use prefab_api::{ClientConfig, PrefabClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // An explicit base URL skips discovery; otherwise browse the network
    let client = match std::env::args().nth(1) {
        Some(base_url) => PrefabClient::with_config(ClientConfig::for_server(base_url)),
        None => PrefabClient::new(),
    };

    if !client.test_connection() {
        eprintln!("No Prefab server reachable at {}", client.base_url());
        std::process::exit(1);
    }

    for home in client.get_homes()? {
        println!("Home: {}", home.name);
        for room in client.get_rooms(&home.name)? {
            println!("  Room: {}", room.name);
            for accessory in client.get_accessories(&home.name, &room.name)? {
                println!("    Accessory: {}", accessory.name);
            }
        }
    }

    Ok(())
}
