//! End-to-end pipeline tests: raw query text in, composed reply out,
//! against the built-in demo catalog with a pinned reference date.

use chrono::NaiveDate;
use shopmate_agent::{CANNOT_UNDERSTAND, ShoppingAgent};
use shopmate_catalog::MockCatalog;
use shopmate_config::AppConfig;
use std::sync::Arc;

fn agent() -> ShoppingAgent {
    // 2024-06-12 is a Wednesday; "by Monday" resolves to June 17.
    ShoppingAgent::new(Arc::new(MockCatalog::demo()), &AppConfig::default())
        .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap())
}

#[tokio::test]
async fn search_with_discount_reports_price_stock_and_final_price() {
    let reply = agent()
        .handle("Find a floral skirt under $140 in size S. Is it in stock, and can I apply a discount code 'SAVE10'?")
        .await
        .unwrap();

    assert!(reply.contains("Floral Summer Skirt"), "{reply}");
    assert!(reply.contains("$35.99"), "{reply}");
    assert!(reply.contains("10 available"), "{reply}");
    assert!(reply.contains("'SAVE10'"), "{reply}");
    assert!(reply.contains("$32.39"), "{reply}");
}

#[tokio::test]
async fn search_with_tight_deadline_reports_infeasible_shipping() {
    let reply = agent()
        .handle("I need white sneakers (size 8) for under $80 that can arrive by Monday.")
        .await
        .unwrap();

    assert!(reply.contains("White Athletic Sneakers"), "{reply}");
    assert!(reply.contains("$65.99"), "{reply}");
    // Transit for this product is 7 days; Monday is only 5 out.
    assert!(reply.contains("cannot guarantee delivery"), "{reply}");
    assert!(reply.contains("Wednesday, June 19"), "{reply}");
}

#[tokio::test]
async fn return_query_reports_the_store_policy() {
    let reply = agent()
        .handle("I want to buy a cocktail dress from StoreB, but only if returns are hassle-free. Do they accept returns?")
        .await
        .unwrap();

    assert!(reply.contains("StoreB accepts returns within 14 days"), "{reply}");
    assert!(reply.contains("Return shipping fee applies."), "{reply}");
    // The fee sentence appears exactly once.
    assert_eq!(reply.matches("Return shipping fee applies.").count(), 1);
}

#[tokio::test]
async fn comparison_query_lists_stores_cheapest_first() {
    let reply = agent()
        .handle("I found a 'casual denim jacket' at $79 on StoreA. Any better deals?")
        .await
        .unwrap();

    assert!(reply.contains("across stores:"), "{reply}");
    let b = reply.find("StoreB: $75.99").expect(&reply);
    let a = reply.find("StoreA: $80.00").expect(&reply);
    let c = reply.find("StoreC: $82.99").expect(&reply);
    assert!(b < a && a < c, "{reply}");
}

#[tokio::test]
async fn unknown_store_return_is_one_polite_fragment() {
    let reply = agent()
        .handle("Can I return items at MegaMart?")
        .await
        .unwrap();

    // MegaMart is not a known store; the reply is a single explanatory
    // sentence, not an error and not a repeated fragment.
    assert!(reply.contains("return policy"), "{reply}");
    assert_eq!(reply.matches("couldn't tell").count(), 1, "{reply}");
}

#[tokio::test]
async fn search_miss_with_discount_reports_the_miss_once() {
    let reply = agent()
        .handle("Find a silk tie under $50 with discount code 'SAVE10'")
        .await
        .unwrap();

    assert!(reply.contains("couldn't find any products"), "{reply}");
    // The discount step was skipped, so no final price and no second miss.
    assert!(!reply.contains("final price"), "{reply}");
    assert_eq!(reply.matches("couldn't find").count(), 1, "{reply}");
}

#[tokio::test]
async fn discount_only_query_with_price_applies_the_code() {
    let reply = agent()
        .handle("Can I apply discount code 'SAVE10' to $50?")
        .await
        .unwrap();

    // No product search runs; the bare price is the amount discounted.
    assert!(reply.contains("$45.00"), "{reply}");
    assert!(!reply.contains("couldn't find any products"), "{reply}");
}

#[tokio::test]
async fn discount_only_query_without_price_degrades_politely() {
    let reply = agent()
        .handle("Can I apply discount code 'SAVE10'?")
        .await
        .unwrap();
    assert!(reply.contains("price"), "{reply}");
}

#[tokio::test]
async fn blank_input_gets_the_fixed_reply() {
    let reply = agent().handle("   ").await.unwrap();
    assert_eq!(reply, CANNOT_UNDERSTAND);
}

#[tokio::test]
async fn same_query_twice_is_byte_identical() {
    let agent = agent();
    let query = "Find a floral skirt under $140 in size S with discount code 'SAVE10'";
    let first = agent.handle(query).await.unwrap();
    let second = agent.handle(query).await.unwrap();
    assert_eq!(first, second);
}
