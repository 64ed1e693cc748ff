use crate::error::StorageError;
use std::cell::RefCell;
use std::rc::Rc;

/// The durable slot holding the chosen locale code across page loads.
pub trait LocaleSlot {
    /// Raw stored value, if any. Validation is the caller's concern.
    fn load(&self) -> Option<String>;

    fn store(&self, code: &str) -> Result<(), StorageError>;
}

/// Slot kept in memory. Clones share the same value, so a test can hand one
/// clone to a controller and another to a "reloaded" controller.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        let slot = Self::default();
        *slot.value.borrow_mut() = Some(value.to_string());
        slot
    }

    pub fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl LocaleSlot for MemorySlot {
    fn load(&self) -> Option<String> {
        self.get()
    }

    fn store(&self, code: &str) -> Result<(), StorageError> {
        *self.value.borrow_mut() = Some(code.to_string());
        Ok(())
    }
}
