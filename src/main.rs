//! Vocara - 文本转音频生成 worker
//!
//! 启动流程：加载配置 → 初始化日志 → 预加载模型（进程级一次）
//! → 组装适配器 → 启动 HTTP 入口

use std::sync::Arc;

use vocara::application::ports::AudioGeneratorPort;
use vocara::application::JobHandler;
use vocara::config::{load_config, print_config, TtsEngineKind};
use vocara::infrastructure::adapters::{
    FakeTtsGenerator, FakeTtsGeneratorConfig, HttpTtsGenerator, HttpTtsGeneratorConfig,
    SupabaseStorageClient, SupabaseStorageConfig,
};
use vocara::infrastructure::http::{AppState, HttpServer, ServerConfig};
use vocara::infrastructure::scratch::FileScratchStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    // 存储三要素缺失在这里直接失败，不会进入服务状态
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},vocara={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(env_filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Vocara - text-to-audio generation worker");
    print_config(&config);

    // 确保临时目录存在
    tokio::fs::create_dir_all(&config.scratch.dir).await?;

    // 创建生成器
    let generator: Arc<dyn AudioGeneratorPort> = match config.tts.engine {
        TtsEngineKind::Http => {
            let tts_config = HttpTtsGeneratorConfig {
                base_url: config.tts.url.clone(),
                timeout_secs: config.tts.timeout_secs,
                preload_timeout_secs: config.tts.preload_timeout_secs,
            };
            Arc::new(
                HttpTtsGenerator::new(tts_config)
                    .map_err(|e| anyhow::anyhow!("Failed to create TTS generator: {}", e))?,
            )
        }
        TtsEngineKind::Fake => Arc::new(FakeTtsGenerator::new(FakeTtsGeneratorConfig::default())),
    };

    // 预加载模型权重（进程级一次，之后所有任务共享）
    generator
        .preload()
        .await
        .map_err(|e| anyhow::anyhow!("Model preload failed: {}", e))?;

    // 创建对象存储客户端
    let storage_config = SupabaseStorageConfig {
        endpoint: config.storage.endpoint.clone(),
        api_key: config.storage.api_key.clone(),
        bucket: config.storage.bucket.clone(),
        timeout_secs: config.storage.timeout_secs,
    };
    let storage = Arc::new(
        SupabaseStorageClient::new(storage_config)
            .map_err(|e| anyhow::anyhow!("Failed to create storage client: {}", e))?,
    );

    // 创建临时文件存储
    let scratch = Arc::new(FileScratchStore::new(&config.scratch.dir));

    // 创建任务处理器
    let job_handler = Arc::new(JobHandler::new(generator, storage, scratch));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(job_handler);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
