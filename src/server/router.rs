use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        member::{CreateMemberDto, LoginCheckDto, LoginDto, MemberDto},
        reservation::{CreateReservationDto, ReservationDto},
        reservation_time::{
            AvailableReservationTimeDto, CreateReservationTimeDto, ReservationTimeDto,
        },
        theme::{CreateThemeDto, ThemeDto},
    },
    server::{
        controller::{
            auth::{self, login, login_check, logout},
            member::{self, create_member},
            reservation::{self, create_reservation, delete_reservation, get_reservations},
            reservation_time::{
                self, create_time, delete_time, get_available_times, get_times,
            },
            theme::{self, create_theme, delete_theme, get_popular_themes, get_themes},
        },
        state::AppState,
    },
};

/// OpenAPI document covering every endpoint of the service.
#[derive(OpenApi)]
#[openapi(
    info(title = "Room Escape Reservation API"),
    paths(
        reservation::create_reservation,
        reservation::get_reservations,
        reservation::delete_reservation,
        reservation_time::create_time,
        reservation_time::get_times,
        reservation_time::get_available_times,
        reservation_time::delete_time,
        theme::create_theme,
        theme::get_themes,
        theme::get_popular_themes,
        theme::delete_theme,
        member::create_member,
        auth::login,
        auth::login_check,
        auth::logout,
    ),
    components(schemas(
        ErrorDto,
        ReservationDto,
        CreateReservationDto,
        ReservationTimeDto,
        CreateReservationTimeDto,
        AvailableReservationTimeDto,
        ThemeDto,
        CreateThemeDto,
        MemberDto,
        CreateMemberDto,
        LoginDto,
        LoginCheckDto,
    )),
    tags(
        (name = "reservation", description = "Reservation booking"),
        (name = "reservation_time", description = "Bookable time slots"),
        (name = "theme", description = "Escape room themes"),
        (name = "member", description = "Member registration"),
        (name = "auth", description = "Cookie based login"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations",
            post(create_reservation).get(get_reservations),
        )
        .route("/reservations/{id}", delete(delete_reservation))
        .route("/times", post(create_time).get(get_times))
        .route("/times/available", get(get_available_times))
        .route("/times/{id}", delete(delete_time))
        .route("/themes", post(create_theme).get(get_themes))
        .route("/themes/popular", get(get_popular_themes))
        .route("/themes/{id}", delete(delete_theme))
        .route("/members", post(create_member))
        .route("/login", post(login))
        .route("/login/check", get(login_check))
        .route("/logout", post(logout))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
