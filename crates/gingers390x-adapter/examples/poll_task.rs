/*
[INPUT]:  Console URL, credentials, and a device id to remove from cio_ignore
[OUTPUT]: Submitted removal task polled to completion
[POS]:    Examples - action submission and task polling
[UPDATE]: When task-returning endpoints change
*/

use gingers390x_adapter::*;

/// Example: submit an asynchronous action and wait for its task
///
/// Set GINGER_URL, GINGER_USER, GINGER_PASSWORD, and GINGER_DEVICE
/// before running. The named device is removed from the ignore list.
#[tokio::main]
async fn main() -> Result<()> {
    let base_url = std::env::var("GINGER_URL").unwrap_or_else(|_| "https://localhost:8001".to_string());
    let username = std::env::var("GINGER_USER").unwrap_or_else(|_| "root".to_string());
    let password = std::env::var("GINGER_PASSWORD").unwrap_or_default();
    let device = std::env::var("GINGER_DEVICE").unwrap_or_else(|_| "0.0.0016".to_string());

    let config = ClientConfig {
        accept_invalid_certs: true,
        ..ClientConfig::default()
    };
    let client = GingerClient::with_config(&base_url, config)?;
    client.login(&LoginRequest { username, password }).await?;

    println!("Removing {device} from the cio_ignore list...");
    let task = client.remove_ignored_devices(&[device]).await?;
    println!("Accepted as task {} ({})", task.id, task.status);

    match client.wait_for_task(&task.id, TaskStatus::Finished).await {
        Ok(finished) => println!("Task finished: {}", finished.message),
        Err(GingerError::UnexpectedTaskStatus { task }) => {
            println!("Task ended in {}: {}", task.status, task.message)
        }
        Err(err) => return Err(err),
    }

    client.logout().await?;
    Ok(())
}
