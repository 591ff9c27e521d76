mod form;
mod submit;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Initialization
        Event::Initialize { form } => {
            *model = Model {
                form,
                ..Default::default()
            };
            render()
        }

        // Field interaction domain
        Event::FieldChanged { .. } | Event::FieldBlurred { .. } | Event::FieldFocused { .. } => {
            form::handle(event, model)
        }

        // Submission domain
        Event::Submit | Event::SubmitResponse(_) => submit::handle(event, model),
    }
}
