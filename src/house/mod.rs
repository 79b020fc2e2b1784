pub mod builder;
pub mod room;

pub use builder::{build_manor, House, HouseBuilder};
pub use room::{Room, RoomState};
