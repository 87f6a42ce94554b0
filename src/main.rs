//! Voice Bridge - 自托管 TTS 桥接服务
//!
//! 架构:
//! - Domain: audio/, voice/
//! - Application: commands, queries, ports, registry, pipeline
//! - Infrastructure: http, adapters (piper, playback)

use std::sync::Arc;

use voice_bridge::application::{PlaybackPort, SynthesisPipeline};
use voice_bridge::config::{load_config, print_config, AppConfig};
use voice_bridge::infrastructure::adapters::playback::{ProcessPlayer, ProcessPlayerConfig};
use voice_bridge::infrastructure::adapters::tts::build_registry;
use voice_bridge::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    // 配置无效不终止进程：退回默认配置并在日志初始化后警告
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // 初始化日志
    let log_filter = format!(
        "{},voice_bridge={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Voice Bridge - 自托管 TTS 桥接服务");
    if let Some(e) = config_error {
        tracing::warn!("Invalid configuration, using defaults: {}", e);
    }
    print_config(&config);

    // 扫描配置的模型目录，加载可用音色
    let registry = Arc::new(build_registry(&config.voices));

    // 合成管线与播放适配器
    let pipeline = SynthesisPipeline::new(config.playback.silence_padding_secs);
    let player: Arc<dyn PlaybackPort> = Arc::new(ProcessPlayer::new(ProcessPlayerConfig {
        backend: config.playback.backend.clone(),
        timeout_secs: config.playback.timeout_secs,
    }));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(registry, pipeline, player);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（Ctrl+C 优雅关闭）
    server
        .run_with_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
