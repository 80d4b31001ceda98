use squad_etl::utils::{logger, validation::Validate};
use squad_etl::{EtlEngine, LocalStorage, ProjectConfig, ProjectPipeline};

fn main() {
    logger::init_cli_logger(false);

    let config = ProjectConfig::default();
    tracing::info!("Starting squad-etl player projection");
    tracing::debug!("Job config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(".");
    let pipeline = ProjectPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Projection completed successfully!");
            println!("✅ Projection completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Projection failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
