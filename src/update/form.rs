use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::types::MSG_EMPTY_FIELD;
use crate::Effect;

/// Handle field interaction events (value mirroring, focus transitions)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::FieldChanged { name, value } => {
            if model.field_value(&name) == value {
                Command::done()
            } else {
                model.field_values.insert(name, value);
                render()
            }
        }

        // Focus-out runs the single-field check so the error shows as soon
        // as the user leaves an empty field.
        Event::FieldBlurred { name } => {
            validate_field(model, &name);
            render()
        }

        // Refocusing a field that is still empty clears its error text and
        // "empty" visual state. Other fields are left untouched.
        Event::FieldFocused { name } => {
            if model.field_value(&name).is_empty() && model.field_errors.remove(&name).is_some() {
                render()
            } else {
                Command::done()
            }
        }

        _ => unreachable!("Non-field event passed to form handler"),
    }
}

/// Non-empty check for a single field.
///
/// An empty value records the fixed error text and returns false. A
/// non-empty value returns true and leaves any prior error untouched;
/// clearing happens on focus-in, not here.
pub(crate) fn validate_field(model: &mut Model, name: &str) -> bool {
    if model.field_value(name).is_empty() {
        model
            .field_errors
            .insert(name.to_string(), MSG_EMPTY_FIELD.to_string());
        false
    } else {
        true
    }
}
