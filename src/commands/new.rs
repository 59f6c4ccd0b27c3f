use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use careplug::{paths, provision, validate, Error, ProjectIdentity};

use crate::tty;

use super::CmdResult;

/// Port offered when none is given, matching the template's dev server.
const DEFAULT_PORT: u16 = 10120;

#[derive(Args)]
pub struct NewArgs {
    /// Project name (prompted for when omitted on a terminal)
    pub name: Option<String>,

    /// Dev server port, 1024-65535
    #[arg(long, short = 'p')]
    pub port: Option<String>,

    /// Destination directory (defaults to ./<kebab-case name>)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Template directory override (defaults to the packaged template)
    #[arg(long, value_name = "DIR")]
    pub template: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct NewOutput {
    pub command: &'static str,
    pub name: String,
    pub kebab: String,
    pub snake: String,
    pub port: u16,
    pub location: String,
    pub files_copied: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub next_steps: Vec<String>,
}

pub fn run(args: NewArgs, _global: &super::GlobalArgs) -> CmdResult<NewOutput> {
    let name = resolve_name(args.name)?;
    let identity = ProjectIdentity::new(&name)?;
    let port = resolve_port(args.port)?;

    let template_dir = match args.template {
        Some(dir) => dir,
        None => paths::template_dir()?,
    };
    let target_dir = args
        .dir
        .unwrap_or_else(|| PathBuf::from(&identity.kebab));

    tty::status("Creating new Care plugin...");

    let outcome = provision::provision(&identity, port, &template_dir, &target_dir)?;

    tty::status(&format!(
        "Project created at {}. Your plugin will be available at http://localhost:{}",
        outcome.location.display(),
        port
    ));

    let dir_name = outcome
        .location
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| identity.kebab.clone());

    Ok((
        NewOutput {
            command: "new",
            name: identity.raw.clone(),
            kebab: identity.kebab.clone(),
            snake: identity.snake.clone(),
            port,
            location: outcome.location.display().to_string(),
            files_copied: outcome.files_copied,
            warnings: outcome.warnings,
            next_steps: vec![
                format!("cd {}", dir_name),
                "npm install".to_string(),
                "npm start".to_string(),
            ],
        },
        0,
    ))
}

/// Take the name from the arguments, or prompt for it on a terminal.
fn resolve_name(arg: Option<String>) -> careplug::Result<String> {
    if let Some(name) = arg {
        return Ok(name);
    }

    if !tty::can_prompt() {
        return Err(Error::validation_missing_argument(vec!["name".to_string()]));
    }

    loop {
        let answer = tty::prompt("Project name: ")?;
        match validate::validate_project_name(&answer) {
            Ok(()) => return Ok(answer),
            Err(err) => tty::status(&format!("{}", err)),
        }
    }
}

/// Take the port from the arguments, prompt on a terminal, or fall back to
/// the template default. An explicit port is never silently corrected.
fn resolve_port(arg: Option<String>) -> careplug::Result<u16> {
    if let Some(raw) = arg {
        return validate::validate_port(&raw);
    }

    if !tty::can_prompt() {
        return Ok(DEFAULT_PORT);
    }

    loop {
        let answer = tty::prompt_with_default(
            "What port should the dev server run on?",
            &DEFAULT_PORT.to_string(),
        )?;
        match validate::validate_port(&answer) {
            Ok(port) => return Ok(port),
            Err(err) => tty::status(&format!("{}", err)),
        }
    }
}
