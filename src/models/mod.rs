pub mod booking_rejections;
pub mod bookings;
pub mod payments;
pub mod professionals;
pub mod service_reviews;
pub mod services;
pub mod user_reviews_professionals;
pub mod users;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Ratings are whole stars between [`MIN_RATING`] and [`MAX_RATING`].
pub fn validate_rating(rating: i32) -> Result<(), String> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        ));
    }
    Ok(())
}
