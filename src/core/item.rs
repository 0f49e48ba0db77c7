//! Item description: socket count and attribute requirements

use super::{ChromaError, Color};

/// Highest socket count any item can roll
pub const MAX_SOCKETS: u8 = 6;

/// Attribute requirements of an item base, in str/dex/int order
///
/// A zero entry means the attribute is not required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AttributeRequirements {
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
}

impl AttributeRequirements {
    #[must_use]
    pub const fn new(strength: u32, dexterity: u32, intelligence: u32) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
        }
    }

    /// Requirement for the attribute behind `color`
    #[inline]
    #[must_use]
    pub const fn get(&self, color: Color) -> u32 {
        match color {
            Color::Red => self.strength,
            Color::Green => self.dexterity,
            Color::Blue => self.intelligence,
        }
    }

    /// Iterate `(color, requirement)` pairs in str, dex, int order
    pub fn iter(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        Color::ALL
            .into_iter()
            .map(move |color| (color, self.get(color)))
    }

    /// Number of attributes with a nonzero requirement (0-3)
    #[must_use]
    pub fn required_count(&self) -> usize {
        self.iter().filter(|&(_, value)| value > 0).count()
    }
}

/// An item whose sockets are being colored
///
/// # Examples
/// ```
/// use chromatic_calc::core::{AttributeRequirements, ItemDescriptor};
///
/// let item = ItemDescriptor::new(6, AttributeRequirements::new(0, 0, 0)).unwrap();
/// assert_eq!(item.socket_count(), 6);
/// assert_eq!(item.required_attribute_count(), 0);
///
/// assert!(ItemDescriptor::new(0, AttributeRequirements::default()).is_err());
/// assert!(ItemDescriptor::new(7, AttributeRequirements::default()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemDescriptor {
    socket_count: u8,
    max_sockets: u8,
    requirements: AttributeRequirements,
}

impl ItemDescriptor {
    /// Create an item that can hold up to [`MAX_SOCKETS`] sockets
    ///
    /// # Errors
    /// Returns `ChromaError::InvalidSocketCount` if `socket_count` is 0 or above 6.
    pub fn new(socket_count: u8, requirements: AttributeRequirements) -> Result<Self, ChromaError> {
        Self::with_max_sockets(socket_count, MAX_SOCKETS, requirements)
    }

    /// Create an item whose base caps sockets below the game limit
    ///
    /// Gloves, boots and helmets top out at 4 sockets, for example.
    ///
    /// # Errors
    /// Returns `ChromaError::InvalidMaxSockets` if `max_sockets` is outside 1-6,
    /// and `ChromaError::InvalidSocketCount` if `socket_count` is outside `1..=max_sockets`.
    pub fn with_max_sockets(
        socket_count: u8,
        max_sockets: u8,
        requirements: AttributeRequirements,
    ) -> Result<Self, ChromaError> {
        if max_sockets == 0 || max_sockets > MAX_SOCKETS {
            return Err(ChromaError::InvalidMaxSockets(max_sockets));
        }

        if socket_count == 0 || socket_count > max_sockets {
            return Err(ChromaError::InvalidSocketCount {
                count: socket_count,
                max: max_sockets,
            });
        }

        Ok(Self {
            socket_count,
            max_sockets,
            requirements,
        })
    }

    #[inline]
    #[must_use]
    pub const fn socket_count(&self) -> u8 {
        self.socket_count
    }

    #[inline]
    #[must_use]
    pub const fn max_sockets(&self) -> u8 {
        self.max_sockets
    }

    #[inline]
    #[must_use]
    pub const fn requirements(&self) -> &AttributeRequirements {
        &self.requirements
    }

    /// Number of attributes the item requires
    #[must_use]
    pub fn required_attribute_count(&self) -> usize {
        self.requirements.required_count()
    }
}
