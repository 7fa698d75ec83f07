//! # Catalog Phase
//!
//! Collections, promotions, products and their promotion links.

use ::error::Result;
use chrono::{DateTime, Utc};
use entity::{ProductPromotions, collections, product_promotions, products, promotions};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

use super::{config::SeedConfig, randomizer::Randomizer};

/// Longest product description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

pub(crate) async fn seed_collections<C, R>(conn: &C, count: usize, rand: &mut R) -> Result<Vec<collections::Model>>
where
    C: ConnectionTrait,
    R: Randomizer,
{
    let mut created = Vec::with_capacity(count);
    for _ in 0 .. count {
        let collection = collections::ActiveModel {
            title: Set(rand.title()),
            featured_product_id: Set(None),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        created.push(collection);
    }
    logging::log_seed_phase!("collections", created.len());
    Ok(created)
}

pub(crate) async fn seed_promotions<C, R>(
    conn: &C,
    config: &SeedConfig,
    rand: &mut R,
) -> Result<Vec<promotions::Model>>
where
    C: ConnectionTrait,
    R: Randomizer,
{
    let (low, high) = config.discount_range;
    let mut created = Vec::with_capacity(config.promotion_count);
    for _ in 0 .. config.promotion_count {
        let promotion = promotions::ActiveModel {
            description: Set(rand.sentence()),
            discount: Set(rand.discount_in(low, high)),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        created.push(promotion);
    }
    logging::log_seed_phase!("promotions", created.len());
    Ok(created)
}

/// Products created in the catalog phase.
pub(crate) struct ProductBatch {
    pub products:        Vec<products::Model>,
    pub promotion_links: usize,
}

/// Creates products in random collections and links each to a random subset
/// of the promotions.
pub(crate) async fn seed_products<C, R>(
    conn: &C,
    config: &SeedConfig,
    collections: &[collections::Model],
    promotions: &[promotions::Model],
    rand: &mut R,
    now: DateTime<Utc>,
) -> Result<ProductBatch>
where
    C: ConnectionTrait,
    R: Randomizer,
{
    let mut batch = ProductBatch {
        products:        Vec::with_capacity(config.product_count),
        promotion_links: 0,
    };
    if config.product_count == 0 {
        logging::log_seed_phase!("products", 0);
        return Ok(batch);
    }
    if collections.is_empty() {
        logging::log_seed_skip!("products", "no collections");
        return Ok(batch);
    }

    let (low, high) = config.price_range;
    for _ in 0 .. config.product_count {
        let title = rand.unique_title();
        let slug = rand.unique_slug(&title);
        let collection = &collections[rand.choose_index(collections.len())];
        let product = products::ActiveModel {
            title: Set(title),
            slug: Set(slug),
            description: Set(rand.text(DESCRIPTION_MAX_CHARS)),
            unit_price: Set(rand.decimal_in(low, high)),
            inventory: Set(rand.int_in(config.inventory_range.clone())),
            last_update: Set(now),
            collection_id: Set(collection.id),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        tracing::debug!(target: "seed", product_id = product.id, slug = %product.slug, "Product created");

        let amount = rand.int_in(0 ..= promotions.len() as i32) as usize;
        let links: Vec<product_promotions::ActiveModel> = rand
            .sample_indices(promotions.len(), amount)
            .into_iter()
            .map(|i| {
                product_promotions::ActiveModel {
                    product_id:   Set(product.id),
                    promotion_id: Set(promotions[i].id),
                }
            })
            .collect();
        if !links.is_empty() {
            batch.promotion_links += links.len();
            ProductPromotions::insert_many(links)
                .exec_without_returning(conn)
                .await?;
        }
        batch.products.push(product);
    }

    logging::log_seed_phase!(
        "products",
        batch.products.len(),
        promotion_links = batch.promotion_links
    );
    Ok(batch)
}

/// Points each collection at one product, preferring its own products.
///
/// Runs after products exist, since collections are created first.
pub(crate) async fn feature_products<C, R>(
    conn: &C,
    collections: Vec<collections::Model>,
    products: &[products::Model],
    rand: &mut R,
) -> Result<usize>
where
    C: ConnectionTrait,
    R: Randomizer,
{
    if products.is_empty() {
        if !collections.is_empty() {
            logging::log_seed_skip!("featured_products", "no products");
        }
        return Ok(0);
    }

    let mut featured = 0;
    for collection in collections {
        let own: Vec<&products::Model> = products
            .iter()
            .filter(|p| p.collection_id == collection.id)
            .collect();
        let product_id = if own.is_empty() {
            products[rand.choose_index(products.len())].id
        }
        else {
            own[rand.choose_index(own.len())].id
        };

        let mut active: collections::ActiveModel = collection.into();
        active.featured_product_id = Set(Some(product_id));
        active.update(conn).await?;
        featured += 1;
    }
    logging::log_seed_phase!("featured_products", featured);
    Ok(featured)
}
