use crux_core::{render::render, Command};

use crate::events::Event;
use crate::http_helpers::{build_url, encode_form_body, process_submit_response};
use crate::model::Model;
use crate::types::{
    SubmissionOutcome, SubmitButton, MSG_FILL_ALL_FIELDS, MSG_PROCESSING_PROBLEM, MSG_SUCCESS,
};
use crate::Effect;
use crate::HttpCmd;

use super::form::validate_field;

/// Handle the submission workflow (submit trigger and response classification)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Submit => handle_submit(model),
        Event::SubmitResponse(result) => handle_submit_response(result, model),
        _ => unreachable!("Non-submission event passed to submit handler"),
    }
}

fn handle_submit(model: &mut Model) -> Command<Effect, Event> {
    // A submit while a request is in flight is dropped.
    if model.is_submitting {
        return Command::done();
    }

    model.reset_feedback();

    // Validate every field, no short-circuit, so all error messages show
    // in one pass.
    let mut invalid = false;
    for spec in model.form.fields() {
        if !validate_field(model, spec.name) {
            invalid = true;
        }
    }

    if invalid {
        // Same presentation as a server-side 400, without a request.
        model.present(
            SubmissionOutcome::ValidationFailed,
            MSG_FILL_ALL_FIELDS,
            SubmitButton::XIcon,
        );
        return render();
    }

    model.is_submitting = true;
    model.submit_button = SubmitButton::Spinner;

    let body = encode_form_body(model);
    Command::all([
        render(),
        HttpCmd::post(build_url(model.form.endpoint()))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body_string(body)
            .build()
            .then_send(|result| Event::SubmitResponse(process_submit_response(result))),
    ])
}

fn handle_submit_response(result: Result<u16, String>, model: &mut Model) -> Command<Effect, Event> {
    model.is_submitting = false;

    match result {
        Ok(200) => model.present(
            SubmissionOutcome::Success,
            MSG_SUCCESS,
            SubmitButton::CheckIcon,
        ),
        Ok(400) => model.present(
            SubmissionOutcome::BadRequest,
            MSG_FILL_ALL_FIELDS,
            SubmitButton::XIcon,
        ),
        Ok(422) => model.present(
            SubmissionOutcome::UnprocessableEntity,
            MSG_PROCESSING_PROBLEM,
            SubmitButton::XIcon,
        ),
        Ok(status) => {
            // No presentation is defined for other statuses; the spinner
            // stays until the user acts again.
            log::warn!("Unhandled response status: {status}");
            model.last_outcome = Some(SubmissionOutcome::UnknownStatus);
        }
        Err(e) => {
            // Transport failures are diagnostic-only, never user-visible.
            log::error!("Error: {e}");
            model.last_outcome = Some(SubmissionOutcome::NetworkError);
        }
    }

    render()
}
