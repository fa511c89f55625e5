use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{reservation_time::ReservationTimeDto, theme::ThemeDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i32,
    pub name: String,
    /// Reservation date formatted as `YYYY-MM-DD`
    #[schema(example = "2030-01-15")]
    pub date: String,
    pub time: ReservationTimeDto,
    pub theme: ThemeDto,
}

/// Request body for creating a reservation.
///
/// Fields are lenient at the JSON level so that missing values surface as
/// validation errors rather than deserialization rejections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[schema(example = "2030-01-15")]
    pub date: String,
    pub time_id: Option<i32>,
    pub theme_id: Option<i32>,
}
