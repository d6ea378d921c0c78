pub mod bookings;
pub mod payments;
pub mod professionals;
pub mod service_reviews;
pub mod services;
pub mod user_reviews_professionals;
pub mod users;

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Create a SeaORM database connection pool for `database_url`.
pub async fn create_pool(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
