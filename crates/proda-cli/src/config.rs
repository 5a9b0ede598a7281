//! Fixed deployment parameters for the Proda server
//!
//! These are deliberately compile-time constants: the tool reads no
//! environment variables and no configuration files.

/// Tag applied to the server image on `--deploy`
pub const DOCKER_IMAGE: &str = "proda-server";

/// Name given to the running server container
pub const DOCKER_CONTAINER: &str = "proda-server-instance";

/// Build file at the root of the build context
pub const DOCKERFILE: &str = "dockerfile";

/// Port published identically on the host and container side
pub const PORT: u16 = 8080;
