use anyhow::Result;
use quiz_generator::utils::logging;
use quiz_generator::{App, Config};

fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::load();

    // 初始化并运行应用
    App::initialize(config)?.run()?;

    Ok(())
}
