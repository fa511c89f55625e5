use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationTimeDto {
    pub id: i32,
    /// Start time formatted as `HH:MM`
    #[schema(example = "10:00")]
    pub start_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationTimeDto {
    #[serde(default)]
    #[schema(example = "10:00")]
    pub start_at: String,
}

/// A time slot annotated with whether it is taken for a given date and theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailableReservationTimeDto {
    pub id: i32,
    #[schema(example = "10:00")]
    pub start_at: String,
    pub already_booked: bool,
}
