pub mod orders;
pub mod rooms;
pub mod sales;
pub mod session;
