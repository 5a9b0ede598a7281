//! Restart command - restart the running container

use console::style;
use proda_docker::{CommandRunner, DockerClient};

use crate::config;
use crate::error::Result;

/// Run the restart command
pub async fn run() -> Result<()> {
    let client = DockerClient::new();
    execute(&client).await
}

async fn execute<R: CommandRunner>(client: &DockerClient<R>) -> Result<()> {
    println!("{} Restarting container...", style("→").blue().bold());
    client.restart_container(config::DOCKER_CONTAINER).await?;
    println!(
        "{} Container {} restarted.",
        style("✓").green().bold(),
        style(config::DOCKER_CONTAINER).cyan()
    );
    Ok(())
}
