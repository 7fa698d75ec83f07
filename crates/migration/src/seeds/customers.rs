//! # Customer Phase
//!
//! Customers with optional login accounts, and their addresses.

use ::error::Result;
use chrono::{DateTime, Utc};
use entity::{
    addresses,
    customers,
    sea_orm_active_enums::MembershipTier,
    users,
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, TransactionTrait};

use super::randomizer::Randomizer;

/// Youngest seeded customer, in years.
pub const MIN_AGE: u32 = 18;
/// Oldest seeded customer, in years.
pub const MAX_AGE: u32 = 80;

/// Customers created in the customer phase.
#[derive(Debug, Default)]
pub(crate) struct CustomerBatch {
    pub customers:      Vec<customers::Model>,
    pub skipped:        usize,
    pub login_accounts: usize,
}

/// Creates `count` customers, each in its own savepoint.
///
/// When `password_hash` is given every customer gets a login account. A
/// uniqueness collision rolls back that customer only and the batch goes on.
pub(crate) async fn seed_customers<C, R>(
    conn: &C,
    count: usize,
    password_hash: Option<&str>,
    rand: &mut R,
    now: DateTime<Utc>,
) -> Result<CustomerBatch>
where
    C: ConnectionTrait + TransactionTrait,
    R: Randomizer,
{
    let mut batch = CustomerBatch::default();
    for index in 0 .. count {
        let savepoint = conn.begin().await?;
        match create_customer(&savepoint, password_hash, rand, now).await {
            Ok(customer) => {
                savepoint.commit().await?;
                if customer.user_id.is_some() {
                    batch.login_accounts += 1;
                }
                batch.customers.push(customer);
            },
            Err(err) if !err.is_fatal() => {
                savepoint.rollback().await?;
                tracing::warn!(target: "seed", index, error = %err, "Skipping customer after collision");
                batch.skipped += 1;
            },
            Err(err) => return Err(err),
        }
    }

    logging::log_seed_phase!(
        "customers",
        batch.customers.len(),
        skipped = batch.skipped,
        login_accounts = batch.login_accounts
    );
    Ok(batch)
}

async fn create_customer<C, R>(
    conn: &C,
    password_hash: Option<&str>,
    rand: &mut R,
    now: DateTime<Utc>,
) -> Result<customers::Model>
where
    C: ConnectionTrait,
    R: Randomizer,
{
    let first_name = rand.first_name();
    let last_name = rand.last_name();

    let (user_id, email) = match password_hash {
        Some(hash) => {
            let identity = rand.login_identity();
            let user = users::ActiveModel {
                username: Set(identity.username),
                email: Set(identity.email.clone()),
                password_hash: Set(hash.to_string()),
                first_name: Set(first_name.clone()),
                last_name: Set(last_name.clone()),
                is_staff: Set(false),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            (Some(user.id), identity.email)
        },
        None => (None, rand.unique_email()),
    };

    let tier = MembershipTier::ALL[rand.choose_index(MembershipTier::ALL.len())];
    let customer = customers::ActiveModel {
        first_name: Set(first_name),
        last_name: Set(last_name),
        email: Set(email),
        phone: Set(rand.phone()),
        birth_date: Set(Some(rand.date_of_birth(now.date_naive(), MIN_AGE, MAX_AGE))),
        membership: Set(tier),
        user_id: Set(user_id),
        ..Default::default()
    }
    .insert(conn)
    .await?;
    tracing::debug!(target: "seed", customer_id = customer.id, membership = %customer.membership, "Customer created");
    Ok(customer)
}

/// Gives every customer one or two addresses.
pub(crate) async fn seed_addresses<C, R>(conn: &C, customers: &[customers::Model], rand: &mut R) -> Result<usize>
where
    C: ConnectionTrait,
    R: Randomizer,
{
    let mut created = 0;
    for customer in customers {
        for _ in 0 .. rand.int_in(1 ..= 2) {
            addresses::ActiveModel {
                street: Set(rand.street()),
                city: Set(rand.city()),
                customer_id: Set(customer.id),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            created += 1;
        }
    }
    logging::log_seed_phase!("addresses", created);
    Ok(created)
}
