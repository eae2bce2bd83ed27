pub mod bookings;
pub mod inventory;
