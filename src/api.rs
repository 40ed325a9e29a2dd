pub mod order_repo;
pub use order_repo::OrderRepository;
pub mod room_repo;
pub use room_repo::RoomRepository;
pub mod statistic_repo;
pub use statistic_repo::StatisticRepository;
