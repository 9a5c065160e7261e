//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod attendance_repo;
pub mod block_repo;
pub mod building_repo;
pub mod floor_repo;
pub mod room_repo;
pub mod student_repo;

pub use attendance_repo::AttendanceRepo;
pub use block_repo::BlockRepo;
pub use building_repo::BuildingRepo;
pub use floor_repo::FloorRepo;
pub use room_repo::RoomRepo;
pub use student_repo::StudentRepo;
