//! Render command: resolve parameters, lay out the page and write SVG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::{debug, info, info_span};

use planner_layout::{PlannerParameters, render_page};
use planner_svg::write_svg;

use crate::cli::{PageArgs, RenderArgs};
use crate::config::{OutputToml, PlannerConfig};
use crate::convert;

/// Run the render pipeline.
pub fn run(args: RenderArgs) -> Result<()> {
    let _cmd = info_span!("render").entered();
    let (params, output_cfg) = resolve(&args.page)?;

    let interactive = args.interactive || output_cfg.interactive;
    let output = args
        .output
        .or(output_cfg.path)
        .unwrap_or_else(|| PathBuf::from(params.export_file_name()));

    info!(
        year = params.year,
        month = params.month,
        lang = %params.lang,
        "laying out page"
    );
    let page = render_page(&params).context("failed to lay out page")?;
    let page = if interactive { page } else { page.printable() };

    write_file(&output, |w| write_svg(&page, w).map_err(Into::into))?;
    info!(path = %output.display(), interactive, "wrote planner page");
    Ok(())
}

/// Print the resolved parameters as the editor's JSON object.
pub fn run_params(args: PageArgs) -> Result<()> {
    let _cmd = info_span!("params").entered();
    let (params, _) = resolve(&args)?;
    println!("{}", params.to_json()?);
    Ok(())
}

/// Resolves page parameters from `--params`, `--config` and overrides, in
/// that order. Without `--params` the current month is the starting point.
pub fn resolve(args: &PageArgs) -> Result<(PlannerParameters, OutputToml)> {
    let mut params = match &args.params {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read parameters: {}", path.display()))?;
            PlannerParameters::from_json(&json)
                .with_context(|| format!("failed to parse parameters: {}", path.display()))?
        }
        None => {
            let today = chrono::Local::now().date_naive();
            PlannerParameters::default().with_month(today.year(), today.month())
        }
    };

    let config = match &args.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str(&toml_str).context("failed to parse TOML config")?
        }
        None => PlannerConfig::default(),
    };

    params = convert::apply_config(params, &config)?;
    params = convert::apply_overrides(params, args)?;
    debug!(sections = ?params.section_names(), "resolved parameters");
    Ok((params, config.output))
}

fn write_file(path: &Path, body: impl FnOnce(&mut BufWriter<File>) -> Result<()>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("failed to create output file: {}", path.display()))?;
    let mut w = BufWriter::new(file);
    body(&mut w).with_context(|| format!("failed to write SVG: {}", path.display()))?;
    w.flush()
        .with_context(|| format!("failed to flush output file: {}", path.display()))?;
    Ok(())
}
