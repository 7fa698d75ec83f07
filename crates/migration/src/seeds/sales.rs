//! # Sales Phase
//!
//! Carts and orders with their line items.

use ::error::Result;
use chrono::{DateTime, Utc};
use entity::{cart_items, carts, customers, order_items, orders, products, sea_orm_active_enums::PaymentStatus};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

use super::randomizer::Randomizer;

/// Most distinct products on one cart or order.
pub const MAX_LINE_ITEMS: usize = 3;
/// Largest quantity on one line item.
pub const MAX_QUANTITY: i32 = 5;
/// Orders are placed at most this many days before the run.
pub const ORDER_WINDOW_DAYS: i64 = 90;

/// Headers and line items written by one sales phase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineCounts {
    pub headers: usize,
    pub items:   usize,
}

/// Distinct products for one cart or order.
fn pick_products<'a, R: Randomizer>(products: &'a [products::Model], rand: &mut R) -> Vec<&'a products::Model> {
    let most = MAX_LINE_ITEMS.min(products.len()) as i32;
    let amount = rand.int_in(1 ..= most) as usize;
    rand.sample_indices(products.len(), amount)
        .into_iter()
        .map(|i| &products[i])
        .collect()
}

pub(crate) async fn seed_carts<C, R>(
    conn: &C,
    count: usize,
    products: &[products::Model],
    rand: &mut R,
    now: DateTime<Utc>,
) -> Result<LineCounts>
where
    C: ConnectionTrait,
    R: Randomizer,
{
    let mut counts = LineCounts::default();
    if count == 0 {
        logging::log_seed_phase!("carts", 0);
        return Ok(counts);
    }
    if products.is_empty() {
        logging::log_seed_skip!("carts", "no products");
        return Ok(counts);
    }

    for _ in 0 .. count {
        let cart = carts::ActiveModel {
            created_at: Set(now),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        for product in pick_products(products, rand) {
            cart_items::ActiveModel {
                cart_id: Set(cart.id),
                product_id: Set(product.id),
                quantity: Set(rand.int_in(1 ..= MAX_QUANTITY)),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            counts.items += 1;
        }
        counts.headers += 1;
    }

    logging::log_seed_phase!("carts", counts.headers, cart_items = counts.items);
    Ok(counts)
}

/// Creates orders for random customers. Each line item keeps the product's
/// price at the time of the order.
pub(crate) async fn seed_orders<C, R>(
    conn: &C,
    count: usize,
    customers: &[customers::Model],
    products: &[products::Model],
    rand: &mut R,
    now: DateTime<Utc>,
) -> Result<LineCounts>
where
    C: ConnectionTrait,
    R: Randomizer,
{
    let mut counts = LineCounts::default();
    if count == 0 {
        logging::log_seed_phase!("orders", 0);
        return Ok(counts);
    }
    if customers.is_empty() || products.is_empty() {
        let reason = if customers.is_empty() { "no customers" } else { "no products" };
        logging::log_seed_skip!("orders", reason);
        return Ok(counts);
    }

    for _ in 0 .. count {
        let customer = &customers[rand.choose_index(customers.len())];
        let status = PaymentStatus::ALL[rand.choose_index(PaymentStatus::ALL.len())];
        let order = orders::ActiveModel {
            placed_at: Set(rand.past_instant(now, ORDER_WINDOW_DAYS)),
            payment_status: Set(status),
            customer_id: Set(customer.id),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        for product in pick_products(products, rand) {
            order_items::ActiveModel {
                order_id: Set(order.id),
                product_id: Set(product.id),
                quantity: Set(rand.int_in(1 ..= MAX_QUANTITY)),
                unit_price: Set(product.unit_price),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            counts.items += 1;
        }
        counts.headers += 1;
    }

    logging::log_seed_phase!("orders", counts.headers, order_items = counts.items);
    Ok(counts)
}
