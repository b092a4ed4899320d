/*
[INPUT]:  Console URL and credentials from environment variables
[OUTPUT]: Printed network and storage i/o device inventories
[POS]:    Examples - read-only device queries
[UPDATE]: When adding new collection endpoints
*/

use gingers390x_adapter::*;

/// Example: list the host's i/o devices
///
/// Set GINGER_URL, GINGER_USER, and GINGER_PASSWORD before running.
#[tokio::main]
async fn main() -> Result<()> {
    let base_url = std::env::var("GINGER_URL").unwrap_or_else(|_| "https://localhost:8001".to_string());
    let username = std::env::var("GINGER_USER").unwrap_or_else(|_| "root".to_string());
    let password = std::env::var("GINGER_PASSWORD").unwrap_or_default();

    let config = ClientConfig {
        accept_invalid_certs: true,
        ..ClientConfig::default()
    };
    let client = GingerClient::with_config(&base_url, config)?;
    client.login(&LoginRequest { username, password }).await?;

    println!("Network i/o devices:");
    for device in client.list_network_devices(None).await? {
        println!("  {} ({}, {})", device.name, device.card_type, device.state);
    }

    println!("\nStorage i/o devices:");
    for device in client.list_storage_devices(None).await? {
        println!("  {} ({}, {})", device.device, device.device_type, device.status);
    }

    println!("\nCIO ignore list:");
    for entry in client.cio_ignore_list().await?.ignored_devices {
        println!("  {entry}");
    }

    client.logout().await?;
    Ok(())
}
