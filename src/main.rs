use anyhow::Result;
use lesson_diff::utils::logging;
use lesson_diff::{App, Config};

fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env()?;

    // 初始化并运行应用
    App::initialize(config)?.run()?;

    Ok(())
}
