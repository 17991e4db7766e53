use path_finder::config::{parse_port, ServerConfig};
use path_finder::sample_graph;
use path_finder::web::server::start_server_with_config;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = ServerConfig::from_env()?;

    // An explicit port argument wins over the environment
    if let Some(port) = env::args().nth(1) {
        config.port = parse_port(&port)?;
    }

    println!("Starting path finder web server...");
    println!("   Port: {}", config.port);
    println!("   Static files: {}", config.static_dir);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Locale: {:?}", config.locale);
    println!();

    start_server_with_config(sample_graph(), config).await?;

    Ok(())
}
