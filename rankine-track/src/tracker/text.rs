// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::tracker::{EntityManager, Track};
use crate::{Id, SharedWriter, Writer};

/// A simple text logger to output messages to a Writer.
///
/// Each event is written as a single line prefixed with the level and the
/// full name of the entity that emitted it.
pub struct TextTracker {
    entity_manager: EntityManager,

    /// Writer to which all events will be written.
    writer: SharedWriter,
}

impl TextTracker {
    /// Create a new [`TextTracker`] with an [`EntityManager`].
    pub fn new(entity_manager: EntityManager, writer: Writer) -> Self {
        Self {
            entity_manager,
            writer: Rc::new(RefCell::new(writer)),
        }
    }

    fn write_line(&self, line: String) {
        self.writer
            .borrow_mut()
            .write_all(line.as_bytes())
            .expect("should be able to write to tracker output");
    }
}

/// Implementation for each [`Track`] event
impl Track for TextTracker {
    fn unique_id(&self) -> Id {
        self.entity_manager.unique_id()
    }

    fn is_entity_enabled(&self, id: Id, level: log::Level) -> bool {
        self.entity_manager.is_log_enabled_at_level(id, level)
    }

    fn add_entity(&self, id: Id, entity_name: &str) {
        self.entity_manager.add_entity(id, entity_name);
    }

    fn value(&self, id: Id, name: &str, value: f64) {
        let entity = self.entity_manager.name_for(id);
        self.write_line(format!("VALUE: {entity}: {name} = {value:e}\n"));
    }

    fn log(&self, id: Id, level: log::Level, msg: std::fmt::Arguments) {
        let entity = self.entity_manager.name_for(id);
        self.write_line(format!("{level}: {entity}: {msg}\n"));
    }

    fn shutdown(&self) {
        self.writer
            .borrow_mut()
            .flush()
            .expect("should be able to flush tracker output");
    }
}
