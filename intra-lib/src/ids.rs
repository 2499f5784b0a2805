//! Identifier bundles used to build canonical paths.
//!
//! None of these are validated, a malformed code simply yields a path that the
//! resolver would later reject.

/// Identifies a module instance, e.g. `2021`, `B-PRO-300`, `RUN-3-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleId<'a> {
    pub scolaryear: u32,
    /// Module code, e.g. `B-PRO-300`.
    pub module: &'a str,
    /// Instance code, e.g. `RUN-3-1`.
    pub instance: &'a str,
}

/// Identifies an activity of a module instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityId<'a> {
    pub scolaryear: u32,
    pub module: &'a str,
    pub instance: &'a str,
    /// Activity code, e.g. `acti-458897`.
    pub activity: &'a str,
}

/// Identifies an event of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventId<'a> {
    pub scolaryear: u32,
    pub module: &'a str,
    pub instance: &'a str,
    pub activity: &'a str,
    /// Event code, e.g. `event-1234`.
    pub event: &'a str,
}

impl<'a> ModuleId<'a> {
    pub fn new(scolaryear: u32, module: &'a str, instance: &'a str) -> Self {
        Self {
            scolaryear,
            module,
            instance,
        }
    }

    pub fn activity(self, activity: &'a str) -> ActivityId<'a> {
        ActivityId {
            scolaryear: self.scolaryear,
            module: self.module,
            instance: self.instance,
            activity,
        }
    }
}

impl<'a> ActivityId<'a> {
    pub fn module(self) -> ModuleId<'a> {
        ModuleId::new(self.scolaryear, self.module, self.instance)
    }

    pub fn event(self, event: &'a str) -> EventId<'a> {
        EventId {
            scolaryear: self.scolaryear,
            module: self.module,
            instance: self.instance,
            activity: self.activity,
            event,
        }
    }
}

impl<'a> EventId<'a> {
    pub fn activity(self) -> ActivityId<'a> {
        self.module().activity(self.activity)
    }

    pub fn module(self) -> ModuleId<'a> {
        ModuleId::new(self.scolaryear, self.module, self.instance)
    }
}
