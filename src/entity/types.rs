//! Entity types and structures

/// Entity type classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityType {
    /// Escaped SSID token
    Ssid,
    /// Plain text (not an entity)
    Plain,
}

/// An entity extracted from text
#[derive(Debug, Clone)]
pub struct Entity {
    /// Position in original text (start, end)
    pub location: (usize, usize),

    /// Entity type
    pub entity_type: EntityType,

    /// Original text
    pub text: String,

    /// Raw SSID bytes (for SSID entities)
    pub bytes: Option<Vec<u8>>,

    /// Whether the bytes classify as GBK
    pub gbk: bool,

    /// UTF-8 rendering after conversion
    pub utf8: Option<String>,
}

impl Entity {
    /// Create a new plain text entity
    pub fn plain(start: usize, end: usize, text: String) -> Self {
        Entity {
            location: (start, end),
            entity_type: EntityType::Plain,
            text,
            bytes: None,
            gbk: false,
            utf8: None,
        }
    }

    /// Create a new SSID entity from its escaped text and decoded bytes
    pub fn ssid(start: usize, end: usize, text: String, bytes: Vec<u8>) -> Self {
        Entity {
            location: (start, end),
            entity_type: EntityType::Ssid,
            text,
            bytes: Some(bytes),
            gbk: false,
            utf8: None,
        }
    }

    /// Check if this entity is an SSID
    pub fn is_ssid(&self) -> bool {
        matches!(self.entity_type, EntityType::Ssid)
    }
}

/// Collection of entities extracted from text
#[derive(Debug, Clone, Default)]
pub struct Entities {
    pub entities: Vec<Entity>,
}

impl Entities {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity to the collection
    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Sort entities by their position in text
    pub fn sort_by_position(&mut self) {
        self.entities.sort_by_key(|e| e.location.0);
    }

    /// Count of all entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if collection is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
