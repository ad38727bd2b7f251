//! Optional figure display.
//!
//! Display is an injectable capability rather than an unconditional call, so
//! headless runs need no special-casing. Presenter failure never fails the
//! pipeline.

use std::path::Path;

use anyhow::{Context, Result};

pub trait Presenter {
    fn present(&self, chart: &Path) -> Result<()>;
}

/// Default presenter for batch runs.
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    fn present(&self, _chart: &Path) -> Result<()> {
        Ok(())
    }
}

/// Opens the chart with the platform's default image viewer.
pub struct SystemViewer;

impl Presenter for SystemViewer {
    fn present(&self, chart: &Path) -> Result<()> {
        let program = if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "cmd"
        } else {
            "xdg-open"
        };
        let mut command = std::process::Command::new(program);
        if cfg!(target_os = "windows") {
            command.arg("/C").arg("start");
        }
        command
            .arg(chart)
            .spawn()
            .with_context(|| format!("failed to launch viewer for {}", chart.display()))?;
        Ok(())
    }
}
