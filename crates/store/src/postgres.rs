//! PostgreSQL commerce store.
//!
//! Catalog lookups read from relational tables. Orders are written in a
//! single transaction: key columns plus a JSONB snapshot on `orders`, and
//! one `order_items` row per line for relational queries. Reads rebuild the
//! order from the snapshot.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;
use uuid::Uuid;

use common::OrderId;
use domain::{
    Channel, ChannelCode, ChannelRepository, CurrencyCode, Customer, CustomerId, CustomerRepository,
    Money,
    Order, OrderRepository, ProductVariant, ProductVariantRepository, RepositoryError, VariantCode,
};

type Result<T> = domain::repository::Result<T>;

/// Commerce store backed by PostgreSQL via sqlx.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store from an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database at the given URL.
    pub async fn connect(database_url: &str) -> std::result::Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Runs pending schema migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    /// Returns the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Inserts or updates a product variant.
    pub async fn upsert_variant(&self, variant: &ProductVariant) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO product_variants (code, product_name, unit_price_cents)
            VALUES ($1, $2, $3)
            ON CONFLICT (code) DO UPDATE
            SET product_name = EXCLUDED.product_name,
                unit_price_cents = EXCLUDED.unit_price_cents
            "#,
        )
        .bind(variant.code.as_str())
        .bind(&variant.product_name)
        .bind(variant.unit_price.cents())
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::backend)?;
        Ok(())
    }

    /// Inserts or updates a sales channel.
    pub async fn upsert_channel(&self, channel: &Channel) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO channels (code, name, base_currency)
            VALUES ($1, $2, $3)
            ON CONFLICT (code) DO UPDATE
            SET name = EXCLUDED.name,
                base_currency = EXCLUDED.base_currency
            "#,
        )
        .bind(channel.code.as_str())
        .bind(&channel.name)
        .bind(channel.base_currency.as_str())
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::backend)?;
        Ok(())
    }

    /// Inserts or updates a customer.
    pub async fn upsert_customer(&self, customer: &Customer) -> Result<()> {
        let default_address = customer
            .default_address
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(RepositoryError::backend)?;

        sqlx::query(
            r#"
            INSERT INTO customers (id, email, default_address)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET email = EXCLUDED.email,
                default_address = EXCLUDED.default_address
            "#,
        )
        .bind(customer.id.as_uuid())
        .bind(&customer.email)
        .bind(default_address)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::backend)?;
        Ok(())
    }
}

#[async_trait]
impl ProductVariantRepository for PostgresStore {
    #[tracing::instrument(skip(self), fields(variant = %code))]
    async fn find_variant(&self, code: &VariantCode) -> Result<Option<ProductVariant>> {
        let row = sqlx::query(
            "SELECT code, product_name, unit_price_cents FROM product_variants WHERE code = $1",
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::backend)?;

        match row {
            Some(row) => {
                let code: String = row.try_get("code").map_err(RepositoryError::backend)?;
                let product_name: String = row
                    .try_get("product_name")
                    .map_err(RepositoryError::backend)?;
                let cents: i64 = row
                    .try_get("unit_price_cents")
                    .map_err(RepositoryError::backend)?;
                Ok(Some(ProductVariant::new(
                    code,
                    product_name,
                    Money::from_cents(cents),
                )))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ChannelRepository for PostgresStore {
    #[tracing::instrument(skip(self), fields(channel = %code))]
    async fn find_channel(&self, code: &ChannelCode) -> Result<Option<Channel>> {
        let row = sqlx::query("SELECT code, name, base_currency FROM channels WHERE code = $1")
            .bind(code.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;

        match row {
            Some(row) => {
                let code: String = row.try_get("code").map_err(RepositoryError::backend)?;
                let name: String = row.try_get("name").map_err(RepositoryError::backend)?;
                let base_currency: String = row
                    .try_get("base_currency")
                    .map_err(RepositoryError::backend)?;
                Ok(Some(Channel::new(code, name, CurrencyCode::new(base_currency))))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CustomerRepository for PostgresStore {
    #[tracing::instrument(skip(self), fields(customer = %id))]
    async fn find_customer(&self, id: CustomerId) -> Result<Option<Customer>> {
        let row = sqlx::query("SELECT id, email, default_address FROM customers WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;

        match row {
            Some(row) => {
                let id: Uuid = row.try_get("id").map_err(RepositoryError::backend)?;
                let email: String = row.try_get("email").map_err(RepositoryError::backend)?;
                let default_address: Option<serde_json::Value> = row
                    .try_get("default_address")
                    .map_err(RepositoryError::backend)?;
                let default_address = default_address
                    .map(serde_json::from_value)
                    .transpose()
                    .map_err(RepositoryError::backend)?;
                Ok(Some(Customer::new(
                    CustomerId::from_uuid(id),
                    email,
                    default_address,
                )))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl OrderRepository for PostgresStore {
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    async fn save_order(&self, order: &Order) -> Result<()> {
        let data = serde_json::to_value(order).map_err(RepositoryError::backend)?;

        let mut tx = self.pool.begin().await.map_err(RepositoryError::backend)?;

        sqlx::query(
            r#"
            INSERT INTO orders
                (id, customer_id, channel_code, currency_code, locale_code,
                 checkout_state, total_cents, created_at, data)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(order.id().as_uuid())
        .bind(order.customer_id().map(|id| id.as_uuid()))
        .bind(order.channel_code().map(|c| c.as_str().to_string()))
        .bind(order.currency_code().map(|c| c.as_str().to_string()))
        .bind(order.locale_code().map(|l| l.as_str().to_string()))
        .bind(order.checkout_state().as_str())
        .bind(order.total().cents())
        .bind(order.created_at())
        .bind(data)
        .execute(&mut *tx)
        .await
        .map_err(RepositoryError::backend)?;

        for (position, item) in order.items().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_items
                    (order_id, position, variant_code, product_name,
                     quantity, unit_price_cents, total_cents)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(order.id().as_uuid())
            .bind(position as i32)
            .bind(item.variant_code.as_str())
            .bind(&item.product_name)
            .bind(item.quantity as i32)
            .bind(item.unit_price.cents())
            .bind(item.total.cents())
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::backend)?;
        }

        tx.commit().await.map_err(RepositoryError::backend)?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_order(&self, id: OrderId) -> Result<Option<Order>> {
        let row = sqlx::query("SELECT data FROM orders WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;

        match row {
            Some(row) => {
                let data: serde_json::Value =
                    row.try_get("data").map_err(RepositoryError::backend)?;
                let order = serde_json::from_value(data).map_err(RepositoryError::backend)?;
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }
}
