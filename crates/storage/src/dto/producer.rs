use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Producer;

/// Request payload for creating or updating a producer
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProducerData {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub contact_person: String,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub email: String,

    #[validate(length(max = 64))]
    #[serde(default)]
    pub phone: String,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub address: String,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub region: String,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub country: String,
}

/// Response containing producer details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProducerResponse {
    pub producer_id: Uuid,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub region: String,
    pub country: String,
    pub created_at: NaiveDateTime,
}

impl From<Producer> for ProducerResponse {
    fn from(producer: Producer) -> Self {
        Self {
            producer_id: producer.producer_id,
            name: producer.name,
            contact_person: producer.contact_person,
            email: producer.email,
            phone: producer.phone,
            address: producer.address,
            region: producer.region,
            country: producer.country,
            created_at: producer.created_at,
        }
    }
}
