//! End-to-end settlement tests against a real SQLite database.

use std::sync::Arc;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use poketrade_core::cards::{CardRepositoryTrait, NewCard};
use poketrade_core::constants::starting_cash;
use poketrade_core::errors::{DatabaseError, Error};
use poketrade_core::holdings::HoldingRepositoryTrait;
use poketrade_core::ledger::LedgerRepositoryTrait;
use poketrade_core::orders::{
    NewOrder, OrderError, OrderRepositoryTrait, OrderSide, OrderStatus, OrderType,
};
use poketrade_core::portfolios::{PortfolioError, PortfolioRepositoryTrait};

use poketrade_storage_sqlite::cards::CardRepository;
use poketrade_storage_sqlite::db;
use poketrade_storage_sqlite::holdings::HoldingRepository;
use poketrade_storage_sqlite::ledger::LedgerRepository;
use poketrade_storage_sqlite::orders::OrderRepository;
use poketrade_storage_sqlite::portfolios::PortfolioRepository;

struct TestContext {
    _dir: TempDir,
    cards: CardRepository,
    portfolios: PortfolioRepository,
    holdings: HoldingRepository,
    ledger: LedgerRepository,
    orders: OrderRepository,
}

fn setup() -> TestContext {
    let dir = TempDir::new().expect("temp dir");
    let db_path = db::init(dir.path().to_str().unwrap()).expect("init db");
    let pool = db::create_pool(&db_path).expect("create pool");
    db::run_migrations(&pool).expect("run migrations");
    let writer = db::spawn_writer(pool.clone());

    TestContext {
        _dir: dir,
        cards: CardRepository::new(pool.clone(), writer.clone()),
        portfolios: PortfolioRepository::new(pool.clone(), writer.clone()),
        holdings: HoldingRepository::new(pool.clone()),
        ledger: LedgerRepository::new(pool.clone()),
        orders: OrderRepository::new(pool, writer),
    }
}

async fn seed_card(ctx: &TestContext, id: &str, price: rust_decimal::Decimal) {
    ctx.cards
        .create(NewCard {
            id: Some(id.to_string()),
            name: format!("Card {id}"),
            set_name: Some("Base Set".to_string()),
            rarity: Some("Rare".to_string()),
            image_url: None,
            current_price: price,
        })
        .await
        .expect("seed card");
}

fn market(side: OrderSide, quantity: i32, price: rust_decimal::Decimal) -> NewOrder {
    NewOrder {
        account_id: "acct-1".to_string(),
        card_id: "base1-4".to_string(),
        quantity,
        price,
        order_type: OrderType::Market,
        side,
    }
}

#[tokio::test]
async fn market_buy_settles_cash_holding_and_ledger_together() {
    let ctx = setup();
    seed_card(&ctx, "base1-4", dec!(100)).await;
    let portfolio = ctx
        .portfolios
        .get_or_create("acct-1", starting_cash())
        .await
        .unwrap();

    let fill = ctx
        .orders
        .submit(market(OrderSide::Buy, 2, dec!(100)))
        .await
        .unwrap();

    assert_eq!(fill.order.status, OrderStatus::Filled);
    assert!(fill.order.filled_at.is_some());

    let entry = fill.ledger_entry.expect("market fill writes a ledger entry");
    assert_eq!(entry.amount, dec!(200));
    assert_eq!(entry.order_id, fill.order.id);

    let refreshed = ctx.portfolios.get_by_account("acct-1").unwrap();
    assert_eq!(refreshed.cash_balance, starting_cash() - dec!(200));

    let holding = ctx
        .holdings
        .find_by_card(&portfolio.id, "base1-4")
        .unwrap()
        .expect("buy creates the holding");
    assert_eq!(holding.quantity, 2);
    assert_eq!(holding.average_cost, dec!(100));
    assert_eq!(holding.current_price, dec!(100));
}

#[tokio::test]
async fn rejected_buy_leaves_no_trace() {
    let ctx = setup();
    seed_card(&ctx, "base1-4", dec!(100)).await;
    let portfolio = ctx
        .portfolios
        .get_or_create("acct-1", starting_cash())
        .await
        .unwrap();

    let err = ctx
        .orders
        .submit(market(OrderSide::Buy, 200, dec!(100)))
        .await
        .unwrap_err();
    match err {
        Error::Portfolio(PortfolioError::InsufficientFunds { required, available }) => {
            assert_eq!(required, dec!(20000));
            assert_eq!(available, starting_cash());
        }
        other => panic!("expected InsufficientFunds, got {other:?}"),
    }

    // Nothing committed: no order row, no ledger entry, cash untouched.
    assert!(ctx.orders.list_by_account("acct-1").unwrap().is_empty());
    assert!(ctx.ledger.list_by_portfolio(&portfolio.id).unwrap().is_empty());
    assert_eq!(
        ctx.portfolios.get_by_account("acct-1").unwrap().cash_balance,
        starting_cash()
    );
}

#[tokio::test]
async fn partial_sell_reduces_the_holding_and_credits_cash() {
    let ctx = setup();
    seed_card(&ctx, "base1-4", dec!(100)).await;
    let portfolio = ctx
        .portfolios
        .get_or_create("acct-1", starting_cash())
        .await
        .unwrap();

    ctx.orders
        .submit(market(OrderSide::Buy, 3, dec!(100)))
        .await
        .unwrap();
    ctx.orders
        .submit(market(OrderSide::Sell, 1, dec!(120)))
        .await
        .unwrap();

    let holding = ctx
        .holdings
        .find_by_card(&portfolio.id, "base1-4")
        .unwrap()
        .expect("two cards remain");
    assert_eq!(holding.quantity, 2);
    assert_eq!(holding.current_price, dec!(120));
    assert_eq!(holding.average_cost, dec!(100));

    let refreshed = ctx.portfolios.get_by_account("acct-1").unwrap();
    assert_eq!(
        refreshed.cash_balance,
        starting_cash() - dec!(300) + dec!(120)
    );
}

#[tokio::test]
async fn selling_the_entire_position_deletes_the_holding_row() {
    let ctx = setup();
    seed_card(&ctx, "base1-4", dec!(50)).await;
    let portfolio = ctx
        .portfolios
        .get_or_create("acct-1", starting_cash())
        .await
        .unwrap();

    ctx.orders
        .submit(market(OrderSide::Buy, 2, dec!(50)))
        .await
        .unwrap();
    ctx.orders
        .submit(market(OrderSide::Sell, 2, dec!(60)))
        .await
        .unwrap();

    assert!(ctx
        .holdings
        .find_by_card(&portfolio.id, "base1-4")
        .unwrap()
        .is_none());
    assert!(ctx.holdings.list_by_portfolio(&portfolio.id).unwrap().is_empty());
}

#[tokio::test]
async fn overselling_is_rejected_without_touching_state() {
    let ctx = setup();
    seed_card(&ctx, "base1-4", dec!(100)).await;
    ctx.portfolios
        .get_or_create("acct-1", starting_cash())
        .await
        .unwrap();

    ctx.orders
        .submit(market(OrderSide::Buy, 1, dec!(100)))
        .await
        .unwrap();

    let err = ctx
        .orders
        .submit(market(OrderSide::Sell, 3, dec!(100)))
        .await
        .unwrap_err();
    match err {
        Error::Order(OrderError::InsufficientQuantity { requested, held }) => {
            assert_eq!(requested, 3);
            assert_eq!(held, 1);
        }
        other => panic!("expected InsufficientQuantity, got {other:?}"),
    }

    let orders = ctx.orders.list_by_account("acct-1").unwrap();
    assert_eq!(orders.len(), 1, "only the buy was recorded");
}

#[tokio::test]
async fn limit_buy_reserves_funds_and_cancellation_refunds_them() {
    let ctx = setup();
    seed_card(&ctx, "base1-4", dec!(100)).await;
    let portfolio = ctx
        .portfolios
        .get_or_create("acct-1", starting_cash())
        .await
        .unwrap();

    let fill = ctx
        .orders
        .submit(NewOrder {
            account_id: "acct-1".to_string(),
            card_id: "base1-4".to_string(),
            quantity: 5,
            price: dec!(90),
            order_type: OrderType::Limit,
            side: OrderSide::Buy,
        })
        .await
        .unwrap();

    assert_eq!(fill.order.status, OrderStatus::Open);
    assert!(fill.order.filled_at.is_none());
    assert!(fill.ledger_entry.is_none(), "limit orders never fill");
    assert!(ctx
        .holdings
        .find_by_card(&portfolio.id, "base1-4")
        .unwrap()
        .is_none());
    assert_eq!(
        ctx.portfolios.get_by_account("acct-1").unwrap().cash_balance,
        starting_cash() - dec!(450)
    );

    let cancelled = ctx
        .orders
        .cancel(fill.order.id.clone(), "acct-1".to_string())
        .await
        .unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(
        ctx.portfolios.get_by_account("acct-1").unwrap().cash_balance,
        starting_cash()
    );

    // A second cancellation hits the terminal-state rule.
    let err = ctx
        .orders
        .cancel(fill.order.id, "acct-1".to_string())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Order(OrderError::InvalidState { .. })
    ));
}

#[tokio::test]
async fn cancelling_someone_elses_order_is_unauthorized() {
    let ctx = setup();
    seed_card(&ctx, "base1-4", dec!(100)).await;
    ctx.portfolios
        .get_or_create("acct-1", starting_cash())
        .await
        .unwrap();
    ctx.portfolios
        .get_or_create("acct-2", starting_cash())
        .await
        .unwrap();

    let fill = ctx
        .orders
        .submit(NewOrder {
            account_id: "acct-1".to_string(),
            card_id: "base1-4".to_string(),
            quantity: 1,
            price: dec!(100),
            order_type: OrderType::Limit,
            side: OrderSide::Buy,
        })
        .await
        .unwrap();

    let err = ctx
        .orders
        .cancel(fill.order.id.clone(), "acct-2".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Order(OrderError::Unauthorized(_))));

    // Still open and still owned by the original account.
    let order = ctx.orders.get_by_id(&fill.order.id).unwrap();
    assert_eq!(order.status, OrderStatus::Open);
}

#[tokio::test]
async fn ledger_lists_fills_most_recent_first_and_never_shrinks() {
    let ctx = setup();
    seed_card(&ctx, "base1-4", dec!(100)).await;
    let portfolio = ctx
        .portfolios
        .get_or_create("acct-1", starting_cash())
        .await
        .unwrap();

    ctx.orders
        .submit(market(OrderSide::Buy, 2, dec!(100)))
        .await
        .unwrap();
    ctx.orders
        .submit(market(OrderSide::Sell, 1, dec!(110)))
        .await
        .unwrap();

    let entries = ctx.ledger.list_by_portfolio(&portfolio.id).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].side, OrderSide::Sell);
    assert_eq!(entries[0].amount, dec!(110));
    assert_eq!(entries[1].side, OrderSide::Buy);
    assert_eq!(entries[1].amount, dec!(200));
}

#[tokio::test]
async fn submitting_against_a_missing_portfolio_fails_with_not_found() {
    let ctx = setup();
    seed_card(&ctx, "base1-4", dec!(100)).await;

    let err = ctx
        .orders
        .submit(market(OrderSide::Buy, 1, dec!(100)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::NotFound(_))
    ));
}

#[tokio::test]
async fn get_or_create_is_idempotent_per_account() {
    let ctx = setup();

    let first = ctx
        .portfolios
        .get_or_create("acct-1", starting_cash())
        .await
        .unwrap();
    let second = ctx
        .portfolios
        .get_or_create("acct-1", starting_cash())
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.cash_balance, starting_cash());
}
