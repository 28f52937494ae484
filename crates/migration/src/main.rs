use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        let url = match std::env::var("KEYSTONE_DATABASE_HOST") {
            Ok(host) => format!(
                "postgres://{}:{}@{}:{}/{}",
                std::env::var("KEYSTONE_DATABASE_USER").unwrap_or_else(|_| "keystone".to_string()),
                std::env::var("KEYSTONE_DATABASE_PASSWORD").unwrap_or_default(),
                host,
                std::env::var("KEYSTONE_DATABASE_PORT").unwrap_or_else(|_| "5432".to_string()),
                std::env::var("KEYSTONE_DATABASE_NAME").unwrap_or_else(|_| "keystone".to_string()),
            ),
            Err(_) => "sqlite://keystone.db?mode=rwc".to_string(),
        };
        std::env::set_var("DATABASE_URL", url);
    }
    cli::run_cli(migration::Migrator).await;
}
