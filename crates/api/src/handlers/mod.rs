pub mod attendance;
pub mod block;
pub mod building;
pub mod floor;
pub mod room;
pub mod student;
