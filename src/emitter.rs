use enigo::{Button, Direction, Enigo, Mouse, Settings};
use parking_lot::Mutex;

use crate::error::EmitError;

/// Something that can press the left mouse button once.
pub trait ClickEmitter: Send + Sync {
    fn emit(&self) -> Result<(), EmitError>;
}

/// Left click at the current cursor position through `enigo`.
pub struct EnigoEmitter {
    enigo: Mutex<Enigo>,
}

impl EnigoEmitter {
    /// Opens the input backend. Fails when no display or input device is reachable.
    pub fn new() -> Result<Self, EmitError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| EmitError::Unavailable(e.to_string()))?;
        Ok(Self { enigo: Mutex::new(enigo) })
    }
}

impl ClickEmitter for EnigoEmitter {
    fn emit(&self) -> Result<(), EmitError> {
        self.enigo
            .lock()
            .button(Button::Left, Direction::Click)
            .map_err(|e| EmitError::Failed(e.to_string()))
    }
}
