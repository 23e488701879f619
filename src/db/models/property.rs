use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "property_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Villa,
    Yacht,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub destination: String,
    pub kind: PropertyKind,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub hero_image: Option<String>,
    pub published: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct PropertyImage {
    pub id: Uuid,
    pub property_id: Uuid,
    pub url: String,
    pub caption: Option<String>,
    pub position: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewProperty {
    #[validate(length(min = 1, message = "Slug must not be empty"))]
    pub slug: String,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Destination must not be empty"))]
    pub destination: String,
    pub kind: PropertyKind,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub hero_image: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProperty {
    pub name: Option<String>,
    pub destination: Option<String>,
    pub kind: Option<PropertyKind>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub guests: Option<i32>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub hero_image: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewPropertyImage {
    #[validate(length(min = 1, message = "Image URL must not be empty"))]
    pub url: String,
    pub caption: Option<String>,
    pub position: Option<i32>,
}
