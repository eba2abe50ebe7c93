//! Scripts, styles and build command implementations

use std::path::{Path, PathBuf};

use component_builder::error::{self, Result};
use component_builder::{BuildOutput, Builder};
use tracing::info;

use crate::cli::BuildArgs;

/// Run scripts command
pub async fn scripts(dir: PathBuf) -> Result<()> {
    let js = Builder::new(dir).build_scripts().await?;
    println!("{js}");
    Ok(())
}

/// Run styles command
pub async fn styles(dir: PathBuf) -> Result<()> {
    let css = Builder::new(dir).build_styles().await?;
    println!("{css}");
    Ok(())
}

/// Run build command
pub async fn run(dir: PathBuf, args: BuildArgs) -> Result<()> {
    let target = args.target.unwrap_or_else(|| dir.clone());
    let mut builder = Builder::new(dir);
    let output = builder.build(&target).await?;

    if args.json {
        println!("{}", to_json(&output));
        return Ok(());
    }

    emit(args.js.as_deref(), &output.scripts).await?;
    emit(args.css.as_deref(), &output.styles).await?;
    Ok(())
}

/// Write `content` to `file`, or print it when no file was given
async fn emit(file: Option<&Path>, content: &str) -> Result<()> {
    match file {
        Some(file) => {
            tokio::fs::write(file, content)
                .await
                .map_err(|e| error::fs::write_failed(file.display().to_string(), e.to_string()))?;
            info!(path = %file.display(), bytes = content.len(), "wrote bundle");
        }
        None => println!("{content}"),
    }
    Ok(())
}

/// Pretty-printed `{"scripts": ..., "styles": ...}` document
fn to_json(output: &BuildOutput) -> String {
    let json = serde_json::json!({
        "scripts": output.scripts,
        "styles": output.styles,
    });
    format!("{json:#}")
}
