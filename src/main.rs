use anyhow::Result;

use pwa_icons::config::GeneratorConfig;
use pwa_icons::generator::IconGenerator;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GeneratorConfig::from_current_dir()?;
    let summary = IconGenerator::new(config).run()?;

    // 单个图标失败不影响退出码，详情见汇总
    if summary.failed_count() > 0 {
        log::warn!(
            "{} of {} icons could not be generated",
            summary.failed_count(),
            summary.total()
        );
    }
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Run summary: {}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
