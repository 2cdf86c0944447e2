use anyhow::Result;
use exam_question_extract::utils::logging;
use exam_question_extract::{App, Config};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置（config.toml 存在时优先，否则读环境变量）
    let config = Config::load_or_default(Path::new("config.toml")).await?;

    // 初始化并运行应用
    App::initialize(config)?.run().await?;

    Ok(())
}
