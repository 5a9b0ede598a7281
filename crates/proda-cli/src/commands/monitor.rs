//! Monitor command - follow the running container's log stream

use console::style;
use proda_docker::{CommandRunner, DockerClient};

use crate::config;
use crate::error::Result;

/// Run the monitor command
///
/// Blocks until the log stream ends or the process is interrupted.
pub async fn run() -> Result<()> {
    let client = DockerClient::new();
    execute(&client).await
}

async fn execute<R: CommandRunner>(client: &DockerClient<R>) -> Result<()> {
    println!(
        "{} Tailing logs from {}...",
        style("→").blue().bold(),
        style(config::DOCKER_CONTAINER).cyan()
    );
    client.follow_logs(config::DOCKER_CONTAINER).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proda_docker::MockRunner;

    #[tokio::test]
    async fn test_monitor_issues_single_logs_call() {
        let runner = MockRunner::new();
        execute(&DockerClient::with_runner(runner.clone()))
            .await
            .unwrap();

        assert_eq!(
            runner.invocations(),
            vec![vec!["docker", "logs", "-f", "proda-server-instance"]]
        );
    }
}
