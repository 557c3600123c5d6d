use anyhow::Result;

use crate::config::Settings;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub settings: Settings,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
