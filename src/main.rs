use spender_ledger::{api, create_pool, db::schema, logging, AppConfig, PgTransactionStore};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置 (日志级别也在配置里)
    let config = AppConfig::from_env()?;
    // 初始化日志
    logging::init(&config.log);
    info!("Starting server with config: {:?}", config);

    // 创建数据库连接池
    let pool = create_pool(&config.database).await?;
    info!("Database pool created");
    schema::init(&pool).await?;

    // 构建路由
    let store = Arc::new(PgTransactionStore::new(pool));
    let app = api::router(store);

    // 启动服务器
    let addr = config.bind_address();
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET    {}/health", api::API_PREFIX);
    info!("  POST   {}/transactions", api::API_PREFIX);
    info!("  GET    {}/transactions?transaction_type=", api::API_PREFIX);
    info!("  POST   {}/incomes", api::API_PREFIX);
    info!("  GET    {}/spenders/:spender_id/transactions", api::API_PREFIX);
    info!("  PUT    {}/spenders/:spender_id/transactions/:trans_id", api::API_PREFIX);
    info!("  DELETE {}/spenders/:spender_id/transactions/:trans_id", api::API_PREFIX);
    info!("  GET    {}/spenders/:spender_id/expenses/summary", api::API_PREFIX);
    info!("  GET    {}/spenders/:spender_id/incomes/summary", api::API_PREFIX);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
