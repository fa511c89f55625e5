pub use super::member::Entity as Member;
pub use super::reservation::Entity as Reservation;
pub use super::reservation_time::Entity as ReservationTime;
pub use super::theme::Entity as Theme;
