//! Option types for image build and container run operations

use std::path::PathBuf;

/// Options for an image build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Tag applied to the built image
    pub tag: String,

    /// Build file passed to the runtime
    pub dockerfile: PathBuf,

    /// Build context directory
    pub context: PathBuf,
}

impl BuildOptions {
    /// Create build options with the default context "."
    pub fn new(tag: impl Into<String>, dockerfile: impl Into<PathBuf>) -> Self {
        Self {
            tag: tag.into(),
            dockerfile: dockerfile.into(),
            context: PathBuf::from("."),
        }
    }

    /// Use a different build context directory
    pub fn with_context(mut self, context: impl Into<PathBuf>) -> Self {
        self.context = context.into();
        self
    }

    pub(crate) fn to_args(&self) -> Vec<String> {
        vec![
            "build".to_string(),
            "-t".to_string(),
            self.tag.clone(),
            "-f".to_string(),
            self.dockerfile.display().to_string(),
            self.context.display().to_string(),
        ]
    }
}

/// Options for a detached container run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Name given to the container
    pub name: String,

    /// Image to instantiate
    pub image: String,

    /// Port published identically on the host and container side
    pub port: Option<u16>,
}

impl RunOptions {
    /// Create run options with no published port
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            port: None,
        }
    }

    /// Publish a port, mapped 1:1 between host and container
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub(crate) fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "run".to_string(),
            "-d".to_string(),
            "--name".to_string(),
            self.name.clone(),
        ];
        if let Some(port) = self.port {
            args.push("-p".to_string());
            args.push(format!("{}:{}", port, port));
        }
        args.push(self.image.clone());
        args
    }
}
