use anyhow::Context;
use sense_config::SenseConfig;

use crate::cli::{GlobalFlags, RunArgs};

/// Load layered config, apply CLI overrides, and validate the result.
pub fn load_config(flags: &GlobalFlags, run: Option<&RunArgs>) -> anyhow::Result<SenseConfig> {
    let mut config = SenseConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags, run);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// CLI flags sit above every other configuration source.
pub fn apply_overrides(config: &mut SenseConfig, flags: &GlobalFlags, run: Option<&RunArgs>) {
    if let Some(dir) = &flags.data_dir {
        config.data.dir.clone_from(dir);
    }
    if let Some(dir) = &flags.output_dir {
        config.output.dir.clone_from(dir);
    }

    let Some(run) = run else {
        return;
    };
    if let Some(key) = run.group_by {
        config.analysis.group_by = key;
    }
    if let Some(order) = run.order {
        config.analysis.order = order;
    }
    if let Some(proxy) = run.proxy {
        config.analysis.success_proxy = proxy;
    }
    if let Some(min) = run.min_group_size {
        config.analysis.min_group_size = min;
    }
    if let Some(top_n) = run.top_n {
        config.analysis.top_n = top_n;
    }
    if run.no_charts {
        config.output.charts = false;
    }
}
