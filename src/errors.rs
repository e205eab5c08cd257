use schema::SpeciesId;
use std::fmt;

/// Main error type for the overworld core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverworldError {
    /// Error related to roster mutation
    Roster(RosterError),
    /// Error related to inventory consumption
    Bag(BagError),
    /// Error surfaced by a creature data provider
    Provider(ProviderError),
    /// Error related to invalid session usage
    Session(SessionError),
}

/// Errors related to roster mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// All six slots are occupied; the add was rejected without mutation
    RosterFull,
}

/// Errors related to inventory consumption
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BagError {
    /// The named item has a zero count (or was never stocked)
    OutOfStock(String),
}

/// Errors a creature data provider may answer with.
/// Both variants are recovered inside the core via the fallback stat block;
/// they never propagate past the spawn path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The species key is unknown to the data source
    NotFound(SpeciesId),
    /// The data source did not answer in time
    Timeout(SpeciesId),
}

/// Errors related to invalid session usage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A battle action was submitted with no battle in progress
    NoActiveBattle,
    /// A move was requested while a battle is in progress
    BattleInProgress,
}

impl fmt::Display for OverworldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverworldError::Roster(err) => write!(f, "Roster error: {}", err),
            OverworldError::Bag(err) => write!(f, "Bag error: {}", err),
            OverworldError::Provider(err) => write!(f, "Provider error: {}", err),
            OverworldError::Session(err) => write!(f, "Session error: {}", err),
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::RosterFull => write!(f, "Roster is full (6 creatures)"),
        }
    }
}

impl fmt::Display for BagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BagError::OutOfStock(item) => write!(f, "No {} left in the bag", item),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::NotFound(species) => write!(f, "Species not found: {}", species),
            ProviderError::Timeout(species) => {
                write!(f, "Species lookup timed out: {}", species)
            }
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoActiveBattle => write!(f, "No battle is in progress"),
            SessionError::BattleInProgress => write!(f, "A battle is already in progress"),
        }
    }
}

impl std::error::Error for OverworldError {}
impl std::error::Error for RosterError {}
impl std::error::Error for BagError {}
impl std::error::Error for ProviderError {}
impl std::error::Error for SessionError {}

impl From<RosterError> for OverworldError {
    fn from(err: RosterError) -> Self {
        OverworldError::Roster(err)
    }
}

impl From<BagError> for OverworldError {
    fn from(err: BagError) -> Self {
        OverworldError::Bag(err)
    }
}

impl From<ProviderError> for OverworldError {
    fn from(err: ProviderError) -> Self {
        OverworldError::Provider(err)
    }
}

impl From<SessionError> for OverworldError {
    fn from(err: SessionError) -> Self {
        OverworldError::Session(err)
    }
}

/// Type alias for Results using OverworldError
pub type OverworldResult<T> = Result<T, OverworldError>;

/// Type alias for Results using ProviderError
pub type ProviderResult<T> = Result<T, ProviderError>;
