mod member;
mod reservation;
mod reservation_time;
mod theme;
