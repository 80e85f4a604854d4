use crate::{error::EngineError, HEIGHT, WIDTH};

/// Validated board dimensions for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    height: usize,
    width: usize,
}

impl GameConfig {
    /// Creates a config for a `height` x `width` board
    ///
    /// Fails with [`EngineError::InvalidDimension`] if either dimension is zero
    /// or the board would have more cells than can be addressed.
    pub fn new(height: usize, width: usize) -> Result<Self, EngineError> {
        if height == 0 || width == 0 || height.checked_mul(width).is_none() {
            return Err(EngineError::InvalidDimension { height, width });
        }
        Ok(Self { height, width })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: HEIGHT,
            width: WIDTH,
        }
    }
}
