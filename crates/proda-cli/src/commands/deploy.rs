//! Deploy command - build the image and replace the running container

use console::style;
use proda_docker::{BuildOptions, CommandRunner, DockerClient, RunOptions};

use crate::config;
use crate::error::Result;

/// Run the deploy command
pub async fn run() -> Result<()> {
    let client = DockerClient::new();
    execute(&client).await
}

/// Deploy sequence: build, remove the old container, start the new one
///
/// Removal is the only step allowed to fail: on the first deploy there is
/// no container to remove. Build and run failures abort immediately.
async fn execute<R: CommandRunner>(client: &DockerClient<R>) -> Result<()> {
    println!("{} Building Docker image...", style("→").blue().bold());
    let build = BuildOptions::new(config::DOCKER_IMAGE, config::DOCKERFILE);
    client.build_image(&build).await?;

    println!(
        "{} Stopping old container (if exists)...",
        style("→").blue().bold()
    );
    if !client.remove_container(config::DOCKER_CONTAINER).await? {
        println!("  {}", style("no previous container to remove").dim());
    }

    println!("{} Starting new container...", style("→").blue().bold());
    let run = RunOptions::new(config::DOCKER_CONTAINER, config::DOCKER_IMAGE)
        .with_port(config::PORT);
    client.run_container(&run).await?;

    println!(
        "{} Deployment complete: {} on port {}",
        style("✓").green().bold(),
        style(config::DOCKER_CONTAINER).cyan(),
        style(config::PORT).yellow()
    );

    Ok(())
}
