use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::producer::ProducerData;
use crate::error::{Result, StorageError};
use crate::models::Producer;

/// Repository for Producer database operations
pub struct ProducerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProducerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all producers, alphabetically
    pub async fn list(&self) -> Result<Vec<Producer>> {
        let producers = sqlx::query_as::<_, Producer>(
            r#"
            SELECT producer_id, name, contact_person, email, phone,
                   address, region, country, created_at
            FROM producers
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(producers)
    }

    /// Get a producer by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Producer> {
        let producer = sqlx::query_as::<_, Producer>(
            r#"
            SELECT producer_id, name, contact_person, email, phone,
                   address, region, country, created_at
            FROM producers
            WHERE producer_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(producer)
    }

    /// Create a new producer
    pub async fn create(&self, data: &ProducerData) -> Result<Producer> {
        let producer = sqlx::query_as::<_, Producer>(
            r#"
            INSERT INTO producers (name, contact_person, email, phone, address, region, country)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING producer_id, name, contact_person, email, phone,
                      address, region, country, created_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.contact_person)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(&data.region)
        .bind(&data.country)
        .fetch_one(self.pool)
        .await?;

        Ok(producer)
    }

    /// Update an existing producer
    pub async fn update(&self, id: Uuid, data: &ProducerData) -> Result<Producer> {
        let producer = sqlx::query_as::<_, Producer>(
            r#"
            UPDATE producers
            SET
                name = $2,
                contact_person = $3,
                email = $4,
                phone = $5,
                address = $6,
                region = $7,
                country = $8
            WHERE producer_id = $1
            RETURNING producer_id, name, contact_person, email, phone,
                      address, region, country, created_at
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.contact_person)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(&data.region)
        .bind(&data.country)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(producer)
    }
}
