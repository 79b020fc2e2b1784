//! House construction and the dual-lock protocol over its rooms

use std::sync::MutexGuard;

use crate::core::config::SimConfig;
use crate::core::error::{Result, WraithwoodError};
use crate::core::types::RoomId;
use crate::house::room::{Room, RoomState};

/// The fixed graph of rooms a run plays out in
///
/// Topology is immutable once built; only per-room contents change, each
/// under its own lock.
#[derive(Debug)]
pub struct House {
    rooms: Vec<Room>,
    van: RoomId,
}

impl House {
    pub fn builder() -> HouseBuilder {
        HouseBuilder::new()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// The exit room where hunters start, regroup, and solve the case
    pub fn van(&self) -> RoomId {
        self.van
    }

    pub fn find_room(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().find(|r| r.name() == name).map(|r| r.id())
    }

    /// Short read-only check used by the ghost's move and boredom gates.
    ///
    /// The lock is released before the caller acts on the answer; a hunter
    /// may walk in between the check and the act. That window is part of
    /// the protocol, not a bug.
    pub fn room_has_hunters(&self, id: RoomId) -> bool {
        self.room(id).lock().has_hunters()
    }

    /// Lock two distinct rooms for an atomic two-room operation.
    ///
    /// Both locks are always acquired in ascending `RoomId` order no
    /// matter the argument order, so every caller agrees on first lock
    /// and circular wait is impossible. The guards come back labeled
    /// `(a, b)` to match the arguments.
    pub fn lock_pair(
        &self,
        a: RoomId,
        b: RoomId,
    ) -> (MutexGuard<'_, RoomState>, MutexGuard<'_, RoomState>) {
        assert_ne!(a, b, "lock_pair needs two distinct rooms");
        if a < b {
            let guard_a = self.room(a).lock();
            let guard_b = self.room(b).lock();
            (guard_a, guard_b)
        } else {
            let guard_b = self.room(b).lock();
            let guard_a = self.room(a).lock();
            (guard_a, guard_b)
        }
    }
}

/// Builds a [`House`] room by room, validating the result once at `finish`
pub struct HouseBuilder {
    config: SimConfig,
    rooms: Vec<(String, bool)>,
    connections: Vec<(String, String)>,
}

impl HouseBuilder {
    pub fn new() -> Self {
        Self {
            config: SimConfig::default(),
            rooms: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: &SimConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Add an ordinary room
    pub fn room(mut self, name: &str) -> Self {
        self.rooms.push((name.to_string(), false));
        self
    }

    /// Add the van: the single exit room and hunter base
    pub fn van(mut self, name: &str) -> Self {
        self.rooms.push((name.to_string(), true));
        self
    }

    /// Connect two rooms bidirectionally
    pub fn connect(mut self, a: &str, b: &str) -> Self {
        self.connections.push((a.to_string(), b.to_string()));
        self
    }

    pub fn finish(self) -> Result<House> {
        if self.rooms.is_empty() {
            return Err(WraithwoodError::EmptyHouse);
        }
        if self.rooms.len() > self.config.max_rooms {
            return Err(WraithwoodError::TooManyRooms(
                self.rooms.len(),
                self.config.max_rooms,
            ));
        }

        let mut rooms = Vec::with_capacity(self.rooms.len());
        let mut van = None;
        for (index, (name, is_van)) in self.rooms.into_iter().enumerate() {
            if rooms.iter().any(|r: &Room| r.name() == name) {
                return Err(WraithwoodError::DuplicateRoom(name));
            }
            let id = RoomId(index);
            if is_van {
                if let Some(RoomId(existing)) = van {
                    return Err(WraithwoodError::DuplicateVan(
                        rooms[existing].name().to_string(),
                    ));
                }
                van = Some(id);
            }
            rooms.push(Room::new(id, name, is_van, self.config.room_capacity));
        }
        let van = van.ok_or(WraithwoodError::NoVan)?;

        for (a, b) in self.connections {
            if a == b {
                return Err(WraithwoodError::SelfConnection(a));
            }
            let id_a = Self::lookup(&rooms, &a)?;
            let id_b = Self::lookup(&rooms, &b)?;
            rooms[id_a.0].push_neighbor(id_b);
            rooms[id_b.0].push_neighbor(id_a);
        }

        for room in &rooms {
            if room.neighbors().len() > self.config.max_connections {
                return Err(WraithwoodError::TooManyConnections(
                    room.name().to_string(),
                    self.config.max_connections,
                ));
            }
        }

        Ok(House { rooms, van })
    }

    fn lookup(rooms: &[Room], name: &str) -> Result<RoomId> {
        rooms
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.id())
            .ok_or_else(|| WraithwoodError::UnknownRoom(name.to_string()))
    }
}

impl Default for HouseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The default manor shipped with the binary: thirteen rooms around a
/// central hallway, with the van parked out front.
pub fn build_manor(config: &SimConfig) -> Result<House> {
    House::builder()
        .with_config(config)
        .van("Van")
        .room("Hallway")
        .room("Master Bedroom")
        .room("Boy's Bedroom")
        .room("Bathroom")
        .room("Basement")
        .room("Basement Hallway")
        .room("Right Storage Room")
        .room("Left Storage Room")
        .room("Kitchen")
        .room("Living Room")
        .room("Garage")
        .room("Utility Room")
        .connect("Van", "Hallway")
        .connect("Hallway", "Master Bedroom")
        .connect("Hallway", "Boy's Bedroom")
        .connect("Hallway", "Bathroom")
        .connect("Hallway", "Kitchen")
        .connect("Hallway", "Basement")
        .connect("Basement", "Basement Hallway")
        .connect("Basement Hallway", "Right Storage Room")
        .connect("Basement Hallway", "Left Storage Room")
        .connect("Kitchen", "Living Room")
        .connect("Kitchen", "Garage")
        .connect("Garage", "Utility Room")
        .finish()
}
