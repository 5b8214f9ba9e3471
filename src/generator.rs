//! External collaborator that proposes layouts and renders designs.
//!
//! The editor doesn't know how designs are generated or rendered. It only talks to a
//! [`Generator`]. [`CommandGenerator`] runs user-configured programs and exchanges JSON with
//! them over stdin and stdout:
//!
//! * The layouts command receives the dimensions and prints a JSON array of designs.
//! * The render command receives `{"design": ..., "dimensions": ...}` and prints an image
//!   reference (a path or URL) on a single line.

use std::fmt;
use std::io::Write as _;
use std::process::{Command, Stdio};

use anyhow::{bail, ensure, Context};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::{Design, Dimensions};

/// Where a rendered image can be found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait Generator {
    /// Proposes designs for a wardrobe of `dims`.
    fn generate_layouts(&mut self, dims: &Dimensions) -> anyhow::Result<Vec<Design>>;

    /// Renders a photorealistic image of `design`.
    fn render(&mut self, design: &Design, dims: &Dimensions) -> anyhow::Result<ImageRef>;
}

#[derive(Serialize)]
struct RenderRequest<'a> {
    design: &'a Design,
    dimensions: &'a Dimensions,
}

/// Generator backed by external programs.
#[derive(Debug, Clone, Default)]
pub struct CommandGenerator {
    layouts_command: Option<Vec<String>>,
    render_command: Option<Vec<String>>,
}

impl CommandGenerator {
    pub fn new(layouts_command: Option<Vec<String>>, render_command: Option<Vec<String>>) -> Self {
        Self {
            layouts_command,
            render_command,
        }
    }

    pub fn from_config(config: &wardrobe_config::Generator) -> Self {
        Self::new(
            config.layouts_command.as_ref().map(|c| c.argv.clone()),
            config.render_command.as_ref().map(|c| c.argv.clone()),
        )
    }
}

impl Generator for CommandGenerator {
    fn generate_layouts(&mut self, dims: &Dimensions) -> anyhow::Result<Vec<Design>> {
        let Some(argv) = &self.layouts_command else {
            bail!("no layouts-command configured");
        };

        let input = serde_json::to_string(dims)?;
        let output = run(argv, &input)?;
        let designs: Vec<Design> =
            serde_json::from_str(&output).context("error parsing generated designs")?;
        debug!("layouts command returned {} designs", designs.len());
        Ok(designs)
    }

    fn render(&mut self, design: &Design, dims: &Dimensions) -> anyhow::Result<ImageRef> {
        let Some(argv) = &self.render_command else {
            bail!("no render-command configured");
        };

        let input = serde_json::to_string(&RenderRequest {
            design,
            dimensions: dims,
        })?;
        let output = run(argv, &input)?;
        let image = output.trim();
        ensure!(!image.is_empty(), "render command printed no image reference");
        Ok(ImageRef(image.to_owned()))
    }
}

/// Runs `argv` with `input` on stdin and returns its stdout.
fn run(argv: &[String], input: &str) -> anyhow::Result<String> {
    let Some((program, args)) = argv.split_first() else {
        bail!("empty command");
    };

    debug!("running {argv:?}");
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("error spawning {program:?}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input.as_bytes())
            .with_context(|| format!("error writing to {program:?}"))?;
    }

    let output = child
        .wait_with_output()
        .with_context(|| format!("error waiting for {program:?}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("{program:?} failed with {}: {}", output.status, stderr.trim());
    }

    String::from_utf8(output.stdout).with_context(|| format!("{program:?} printed invalid UTF-8"))
}
