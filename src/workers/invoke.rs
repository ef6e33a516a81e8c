use crate::common::init;
use crate::models::invocation::Invocation;
use crate::settings::AppSettings;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Handles exactly one invocation: the request is read as JSON from stdin and the
/// response is written as JSON to stdout.
pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    let invocation: Invocation = serde_json::from_str(&input)?;

    let state = init::initialize_state(settings);
    let response = state.handle(invocation).await;

    let mut output = serde_json::to_vec(&response)?;
    output.push(b'\n');
    let mut stdout = tokio::io::stdout();
    stdout.write_all(&output).await?;
    stdout.flush().await?;
    Ok(())
}
