use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Structured description stored as JSONB.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ServiceDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub points: Vec<String>,
}

impl ServiceDescription {
    /// A description needs a summary or at least one point, and no blank entries.
    pub fn validate(&self, field: &str) -> Result<(), String> {
        if let Some(summary) = &self.summary {
            if summary.trim().is_empty() {
                return Err(format!("{field}.summary cannot be blank"));
            }
        }
        if self.points.iter().any(|p| p.trim().is_empty()) {
            return Err(format!("{field}.points cannot contain blank entries"));
        }
        if self.summary.is_none() && self.points.is_empty() {
            return Err(format!("{field} needs a summary or at least one point"));
        }
        Ok(())
    }
}

/// SeaORM entity for the `services` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub service_id: i32,
    pub service_title: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub description: ServiceDescription,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub main_description: Option<ServiceDescription>,
    pub service_type: String,
    #[sea_orm(column_type = "Double")]
    pub service_price: f64,
    pub service_duration: String,
    pub category_id: i32,
    #[sea_orm(column_type = "Text")]
    pub service_image: String,
    pub location: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bookings::Entity")]
    Bookings,
    #[sea_orm(has_many = "super::professionals::Entity")]
    Professionals,
    #[sea_orm(has_many = "super::service_reviews::Entity")]
    Reviews,
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl Related<super::professionals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professionals.def()
    }
}

impl Related<super::service_reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateService {
    pub service_title: Option<String>,
    pub description: Option<ServiceDescription>,
    pub main_description: Option<ServiceDescription>,
    pub service_type: Option<String>,
    pub service_price: Option<f64>,
    pub service_duration: Option<String>,
    pub category_id: Option<i32>,
    pub service_image: Option<String>,
    pub location: Option<String>,
}

/// A [`CreateService`] whose required fields are all present and valid.
#[derive(Debug, Clone)]
pub struct NewService {
    pub service_title: String,
    pub description: ServiceDescription,
    pub main_description: Option<ServiceDescription>,
    pub service_type: String,
    pub service_price: f64,
    pub service_duration: String,
    pub category_id: i32,
    pub service_image: String,
    pub location: Option<String>,
}

impl CreateService {
    pub fn validate(self) -> Result<NewService, String> {
        let text = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let (
            Some(service_title),
            Some(description),
            Some(service_type),
            Some(service_price),
            Some(service_duration),
            Some(category_id),
            Some(service_image),
        ) = (
            text(self.service_title),
            self.description,
            text(self.service_type),
            self.service_price,
            text(self.service_duration),
            self.category_id,
            text(self.service_image),
        )
        else {
            return Err("All fields are required".to_string());
        };

        description.validate("description")?;
        if let Some(main) = &self.main_description {
            main.validate("main_description")?;
        }
        validate_price(service_price)?;

        Ok(NewService {
            service_title,
            description,
            main_description: self.main_description,
            service_type,
            service_price,
            service_duration,
            category_id,
            service_image,
            location: self.location,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateService {
    pub service_title: Option<String>,
    pub description: Option<ServiceDescription>,
    pub main_description: Option<ServiceDescription>,
    pub service_type: Option<String>,
    pub service_price: Option<f64>,
    pub service_duration: Option<String>,
    pub category_id: Option<i32>,
    pub service_image: Option<String>,
    pub location: Option<String>,
}

impl UpdateService {
    pub fn is_empty(&self) -> bool {
        self.service_title.is_none()
            && self.description.is_none()
            && self.main_description.is_none()
            && self.service_type.is_none()
            && self.service_price.is_none()
            && self.service_duration.is_none()
            && self.category_id.is_none()
            && self.service_image.is_none()
            && self.location.is_none()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.is_empty() {
            return Err("No fields provided for update".to_string());
        }
        if let Some(description) = &self.description {
            description.validate("description")?;
        }
        if let Some(main) = &self.main_description {
            main.validate("main_description")?;
        }
        if let Some(price) = self.service_price {
            validate_price(price)?;
        }
        Ok(())
    }
}

fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price < 0.0 {
        return Err("service_price must be a non-negative number".to_string());
    }
    Ok(())
}
