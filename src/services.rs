pub mod order_service;
pub use order_service::OrderService;
pub mod room_service;
pub use room_service::RoomService;
pub mod statistic_service;
pub use statistic_service::StatisticService;
