use sqlx::{Error, PgPool};
use uuid::Uuid;

use crate::db::models::{NewProperty, NewPropertyImage, Property, PropertyImage, UpdateProperty};

pub struct PropertyRepository;

impl PropertyRepository {
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Property>, Error> {
        sqlx::query_as::<_, Property>(
            r#"
            SELECT id, slug, name, destination, kind, headline, description,
                   guests, bedrooms, bathrooms, hero_image, published,
                   created_at, updated_at
            FROM properties
            ORDER BY name
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn list_published(pool: &PgPool) -> Result<Vec<Property>, Error> {
        sqlx::query_as::<_, Property>(
            r#"
            SELECT id, slug, name, destination, kind, headline, description,
                   guests, bedrooms, bathrooms, hero_image, published,
                   created_at, updated_at
            FROM properties
            WHERE published
            ORDER BY destination, name
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Property>, Error> {
        sqlx::query_as::<_, Property>(
            r#"
            SELECT id, slug, name, destination, kind, headline, description,
                   guests, bedrooms, bathrooms, hero_image, published,
                   created_at, updated_at
            FROM properties
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Property>, Error> {
        sqlx::query_as::<_, Property>(
            r#"
            SELECT id, slug, name, destination, kind, headline, description,
                   guests, bedrooms, bathrooms, hero_image, published,
                   created_at, updated_at
            FROM properties
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &PgPool, data: &NewProperty) -> Result<Property, Error> {
        sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties
                (slug, name, destination, kind, headline, description,
                 guests, bedrooms, bathrooms, hero_image, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, slug, name, destination, kind, headline, description,
                      guests, bedrooms, bathrooms, hero_image, published,
                      created_at, updated_at
            "#,
        )
        .bind(&data.slug)
        .bind(&data.name)
        .bind(&data.destination)
        .bind(data.kind)
        .bind(&data.headline)
        .bind(&data.description)
        .bind(data.guests)
        .bind(data.bedrooms)
        .bind(data.bathrooms)
        .bind(&data.hero_image)
        .bind(data.published.unwrap_or(false))
        .fetch_one(pool)
        .await
    }

    pub async fn update(pool: &PgPool, id: Uuid, data: &UpdateProperty) -> Result<Property, Error> {
        sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties
            SET name = COALESCE($1, name),
                destination = COALESCE($2, destination),
                kind = COALESCE($3, kind),
                headline = COALESCE($4, headline),
                description = COALESCE($5, description),
                guests = COALESCE($6, guests),
                bedrooms = COALESCE($7, bedrooms),
                bathrooms = COALESCE($8, bathrooms),
                hero_image = COALESCE($9, hero_image),
                published = COALESCE($10, published),
                updated_at = NOW()
            WHERE id = $11
            RETURNING id, slug, name, destination, kind, headline, description,
                      guests, bedrooms, bathrooms, hero_image, published,
                      created_at, updated_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.destination)
        .bind(data.kind)
        .bind(&data.headline)
        .bind(&data.description)
        .bind(data.guests)
        .bind(data.bedrooms)
        .bind(data.bathrooms)
        .bind(&data.hero_image)
        .bind(data.published)
        .bind(id)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn list_images(pool: &PgPool, property_id: Uuid) -> Result<Vec<PropertyImage>, Error> {
        sqlx::query_as::<_, PropertyImage>(
            r#"
            SELECT id, property_id, url, caption, position
            FROM property_images
            WHERE property_id = $1
            ORDER BY position
            "#,
        )
        .bind(property_id)
        .fetch_all(pool)
        .await
    }

    pub async fn add_image(
        pool: &PgPool,
        property_id: Uuid,
        data: &NewPropertyImage,
    ) -> Result<PropertyImage, Error> {
        sqlx::query_as::<_, PropertyImage>(
            r#"
            INSERT INTO property_images (property_id, url, caption, position)
            VALUES ($1, $2, $3, $4)
            RETURNING id, property_id, url, caption, position
            "#,
        )
        .bind(property_id)
        .bind(&data.url)
        .bind(&data.caption)
        .bind(data.position.unwrap_or(0))
        .fetch_one(pool)
        .await
    }

    pub async fn delete_image(pool: &PgPool, image_id: Uuid) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM property_images WHERE id = $1")
            .bind(image_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
