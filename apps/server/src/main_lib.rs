use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use poketrade_core::cards::{CardService, CardServiceTrait};
use poketrade_core::ledger::{LedgerService, LedgerServiceTrait};
use poketrade_core::orders::{OrderService, OrderServiceTrait};
use poketrade_core::portfolios::{PortfolioService, PortfolioServiceTrait};
use poketrade_storage_sqlite::cards::CardRepository;
use poketrade_storage_sqlite::db;
use poketrade_storage_sqlite::holdings::HoldingRepository;
use poketrade_storage_sqlite::ledger::LedgerRepository;
use poketrade_storage_sqlite::orders::OrderRepository;
use poketrade_storage_sqlite::portfolios::PortfolioRepository;

use crate::config::Config;

pub struct AppState {
    pub order_service: Arc<dyn OrderServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub card_service: Arc<dyn CardServiceTrait>,
    pub ledger_service: Arc<dyn LedgerServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    std::fs::create_dir_all(&config.data_dir)?;
    let db_path = db::init(&config.data_dir)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.clone());

    let card_repository = Arc::new(CardRepository::new(pool.clone(), writer.clone()));
    let portfolio_repository = Arc::new(PortfolioRepository::new(pool.clone(), writer.clone()));
    let holding_repository = Arc::new(HoldingRepository::new(pool.clone()));
    let ledger_repository = Arc::new(LedgerRepository::new(pool.clone()));
    let order_repository = Arc::new(OrderRepository::new(pool, writer));

    let card_service = Arc::new(CardService::new(card_repository.clone()));
    let portfolio_service = Arc::new(PortfolioService::new(
        portfolio_repository.clone(),
        holding_repository,
    ));
    let ledger_service = Arc::new(LedgerService::new(
        ledger_repository,
        portfolio_repository,
    ));
    let order_service = Arc::new(OrderService::new(order_repository, card_repository));

    Ok(Arc::new(AppState {
        order_service,
        portfolio_service,
        card_service,
        ledger_service,
    }))
}
