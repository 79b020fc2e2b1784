use thiserror::Error;

#[derive(Error, Debug)]
pub enum WraithwoodError {
    #[error("House has no rooms")]
    EmptyHouse,

    #[error("House has no van room")]
    NoVan,

    #[error("House already has a van room: {0}")]
    DuplicateVan(String),

    #[error("House has {0} rooms, maximum is {1}")]
    TooManyRooms(usize, usize),

    #[error("Room {0} has too many connections, maximum is {1}")]
    TooManyConnections(String, usize),

    #[error("Unknown room: {0}")]
    UnknownRoom(String),

    #[error("Room {0} cannot be connected to itself")]
    SelfConnection(String),

    #[error("Duplicate room name: {0}")]
    DuplicateRoom(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, WraithwoodError>;
