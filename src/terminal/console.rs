use crate::domain::review::DiffLimits;
use std::cell::{RefCell, RefMut};
use std::io::Write;

/// Output sink and settings shared by every command.
pub struct Console {
    writer: RefCell<Box<dyn Write>>,
    limits: DiffLimits,
}

impl Console {
    pub fn new(writer: Box<dyn Write>, limits: DiffLimits) -> Self {
        Console {
            writer: RefCell::new(writer),
            limits,
        }
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn limits(&self) -> DiffLimits {
        self.limits
    }
}
