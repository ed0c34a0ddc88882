//! Bindable command: an action plus the enabled state and labels a button
//! shows for it.

use lvdd_core::observe::{Observers, Subscription, set_property};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandProperty {
    IsEnabled,
    Text,
    Description,
}

/// Events raised by a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEvent {
    PropertyChanged(CommandProperty),
    CanExecuteChanged,
}

pub type CommandAction = Rc<dyn Fn(&Command)>;

pub struct Command {
    action: CommandAction,
    is_enabled: bool,
    text: String,
    description: String,
    parameter: RefCell<Option<String>>,
    observers: Observers<CommandEvent>,
}

impl Command {
    pub fn new(
        action: impl Fn(&Command) + 'static,
        is_enabled: bool,
        text: &str,
        description: &str,
    ) -> Self {
        Self {
            action: Rc::new(action),
            is_enabled,
            text: text.to_string(),
            description: description.to_string(),
            parameter: RefCell::new(None),
            observers: Observers::new(),
        }
    }

    /// A command whose action does nothing.
    pub fn no_action(text: &str, description: &str) -> Self {
        Self::new(|_| {}, true, text, description)
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if set_property(
            &mut self.is_enabled,
            enabled,
            |a, b| a == b,
            &self.observers,
            CommandEvent::PropertyChanged(CommandProperty::IsEnabled),
        ) {
            self.observers.notify(&CommandEvent::CanExecuteChanged);
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        set_property(
            &mut self.text,
            text.to_string(),
            |a, b| a == b,
            &self.observers,
            CommandEvent::PropertyChanged(CommandProperty::Text),
        );
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) {
        set_property(
            &mut self.description,
            description.to_string(),
            |a, b| a == b,
            &self.observers,
            CommandEvent::PropertyChanged(CommandProperty::Description),
        );
    }

    /// The parameter passed to the running `execute`; `None` otherwise.
    pub fn parameter(&self) -> Option<String> {
        self.parameter.borrow().clone()
    }

    pub fn can_execute(&self) -> bool {
        self.is_enabled
    }

    /// Run the action when enabled. Returns whether it ran.
    pub fn execute(&self, parameter: Option<&str>) -> bool {
        if !self.is_enabled {
            log::trace!("command `{}` is disabled", self.text);
            return false;
        }
        *self.parameter.borrow_mut() = parameter.map(str::to_string);
        let action = Rc::clone(&self.action);
        action(self);
        *self.parameter.borrow_mut() = None;
        true
    }

    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, callback: impl Fn(&CommandEvent) + 'static) -> Subscription {
        self.observers.subscribe(callback)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("text", &self.text)
            .field("description", &self.description)
            .field("is_enabled", &self.is_enabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn disabled_command_does_not_run() {
        let runs = Rc::new(Cell::new(0));
        let r = Rc::clone(&runs);
        let mut command = Command::new(move |_| r.set(r.get() + 1), false, "+", "add");

        assert!(!command.execute(None));
        command.set_enabled(true);
        assert!(command.execute(None));
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn parameter_is_visible_only_while_running() {
        let seen = Rc::new(RefCell::new(None));
        let s = Rc::clone(&seen);
        let command = Command::new(move |c| *s.borrow_mut() = c.parameter(), true, "", "");

        command.execute(Some("payload"));
        assert_eq!(seen.borrow().as_deref(), Some("payload"));
        assert_eq!(command.parameter(), None);
    }

    #[test]
    fn enabling_raises_property_and_can_execute_events() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let e = Rc::clone(&events);
        let mut command = Command::no_action("go", "");
        let _sub = command.subscribe(move |ev| e.borrow_mut().push(*ev));

        command.set_enabled(true);
        command.set_enabled(false);
        command.set_text("go");
        command.set_description("run it");

        assert_eq!(
            *events.borrow(),
            vec![
                CommandEvent::PropertyChanged(CommandProperty::IsEnabled),
                CommandEvent::CanExecuteChanged,
                CommandEvent::PropertyChanged(CommandProperty::Description),
            ]
        );
    }
}
