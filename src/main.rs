use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::fmt::time::ChronoLocal;
use voice_order::api::{self, AppState};
use voice_order::db::PgOrderStore;
use voice_order::notify::{LogNotifier, Notifier, RelayNotifier};
use voice_order::{create_pool, AppConfig, Catalog, OrderExtractor, OrderService, QuantityLexicon};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::load()?;
    info!("Starting server with config: {:?}", config);

    // 加载菜单
    let catalog = match &config.menu.path {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::default_menu(),
    };
    info!("Menu loaded: {} items", catalog.len());

    let extractor = Arc::new(OrderExtractor::new(&catalog, QuantityLexicon::default())?);

    // 创建数据库连接池 (延迟连接)
    let pool = create_pool(&config.database.url, config.database.max_connections)?;
    let store = Arc::new(PgOrderStore::new(pool));

    let notifier: Arc<dyn Notifier> = match &config.notify.relay_url {
        Some(url) => Arc::new(RelayNotifier::new(
            url.clone(),
            config.notify.sender.clone(),
            Duration::from_secs(config.notify.timeout_secs),
        )?),
        None => {
            warn!("No mail relay configured, confirmations will only be logged");
            Arc::new(LogNotifier)
        }
    };

    let state = AppState {
        catalog: Arc::new(catalog),
        orders: Arc::new(OrderService::new(extractor, store, notifier)),
    };
    let app = api::router(state);

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET  /api/menu           - menu items");
    info!("  POST /api/order          - parse transcript, save and confirm");
    info!("  GET  /api/orders/export  - recent orders as CSV");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
