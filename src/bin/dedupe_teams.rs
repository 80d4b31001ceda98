use squad_etl::utils::{logger, validation::Validate};
use squad_etl::{DedupeConfig, DedupePipeline, EtlEngine, LocalStorage};

fn main() {
    logger::init_cli_logger(false);

    let config = DedupeConfig::default();
    tracing::info!("Starting squad-etl team deduplication");
    tracing::debug!("Job config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(".");
    let pipeline = DedupePipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Deduplication completed successfully!");
            println!("✅ Deduplication completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Deduplication failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
