mod auth;
mod member;
mod reservation_time;
mod theme;
