pub mod bookings;
pub mod payments;
pub mod professionals;
pub mod service_reviews;
pub mod services;
pub mod user_reviews_professionals;
pub mod users;

use actix_web::{HttpResponse, web};

/// GET / — liveness banner.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Qwicky Backend API")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Service catalog ──
    cfg.service(
        web::resource("/services")
            .route(web::get().to(services::get_services))
            .route(web::post().to(services::create_service)),
    );
    cfg.service(
        web::resource("/services/{id}")
            .route(web::get().to(services::get_service))
            .route(web::put().to(services::update_service))
            .route(web::delete().to(services::delete_service)),
    );

    // ── Users ──
    cfg.service(
        web::resource("/users")
            .route(web::get().to(users::get_users))
            .route(web::post().to(users::create_user)),
    );
    cfg.service(
        web::resource("/users/phone/{phone_number}")
            .route(web::put().to(users::update_user_by_phone)),
    );
    cfg.service(
        web::resource("/users/{id}")
            .route(web::get().to(users::get_user))
            .route(web::put().to(users::update_user))
            .route(web::delete().to(users::delete_user)),
    );
    cfg.service(web::resource("/check-phone").route(web::post().to(users::check_user_by_phone)));

    // ── Bookings (accept / reject / cancel go through PUT /bookings/{id}) ──
    cfg.service(
        web::scope("/bookings")
            .route("", web::get().to(bookings::get_bookings))
            .route("", web::post().to(bookings::create_booking))
            .route("/user/{user_id}", web::get().to(bookings::get_bookings_by_user))
            .route(
                "/pending/{professional_id}",
                web::get().to(bookings::get_pending_for_professional),
            )
            .route("/{id}", web::get().to(bookings::get_booking))
            .route("/{id}", web::put().to(bookings::update_booking))
            .route("/{id}", web::delete().to(bookings::delete_booking)),
    );

    // ── Professionals ──
    cfg.service(
        web::scope("/professionals")
            .route("", web::get().to(professionals::get_professionals))
            .route("", web::post().to(professionals::create_professional))
            .route(
                "/service/{service_id}",
                web::get().to(professionals::get_professional_by_service),
            )
            .route("/{id}", web::get().to(professionals::get_professional))
            .route("/{id}", web::put().to(professionals::update_professional))
            .route("/{id}", web::delete().to(professionals::delete_professional)),
    );

    // ── Reviews ──
    cfg.service(
        web::scope("/servicereview")
            .route("", web::get().to(service_reviews::get_service_reviews))
            .route("", web::post().to(service_reviews::create_service_review))
            .route(
                "/service/{service_id}",
                web::get().to(service_reviews::get_reviews_by_service),
            )
            .route("/{id}", web::get().to(service_reviews::get_service_review))
            .route("/{id}", web::put().to(service_reviews::update_service_review))
            .route("/{id}", web::delete().to(service_reviews::delete_service_review)),
    );
    cfg.service(
        web::scope("/user-review-prof")
            .route("", web::get().to(user_reviews_professionals::get_reviews))
            .route("", web::post().to(user_reviews_professionals::create_review))
            .route(
                "/professional/{professional_id}",
                web::get().to(user_reviews_professionals::get_professional_ratings),
            )
            .route("/{id}", web::get().to(user_reviews_professionals::get_review))
            .route("/{id}", web::put().to(user_reviews_professionals::update_review))
            .route("/{id}", web::delete().to(user_reviews_professionals::delete_review)),
    );

    // ── Payments ──
    cfg.service(
        web::scope("/payment")
            .route("", web::get().to(payments::get_payments))
            .route("", web::post().to(payments::create_payment))
            .route("/{id}", web::get().to(payments::get_payment))
            .route("/{id}", web::put().to(payments::update_payment))
            .route("/{id}", web::delete().to(payments::delete_payment)),
    );
}
