use crux_core::App as _;

use super::*;

#[test]
fn initialize_selects_the_form_variant() {
    let app = App;
    let mut model = Model::default();

    let _ = app.update(Event::Initialize { form: FormVariant::Wifi }, &mut model);

    assert_eq!(model.form, FormVariant::Wifi);
    assert_eq!(model.submit_button, SubmitButton::Label);
    assert!(model.field_errors.is_empty());
}

#[test]
fn wifi_form_round_trip() {
    let app = App;
    let mut model = Model::default();

    let _ = app.update(Event::Initialize { form: FormVariant::Wifi }, &mut model);
    let _ = app.update(
        Event::FieldChanged {
            name: "ssid".to_string(),
            value: "home".to_string(),
        },
        &mut model,
    );
    let _ = app.update(
        Event::FieldChanged {
            name: "password".to_string(),
            value: "secret".to_string(),
        },
        &mut model,
    );

    let mut command = app.update(Event::Submit, &mut model);

    let requests: Vec<_> = command
        .effects()
        .filter_map(|effect| match effect {
            Effect::Http(request) => Some(request.operation),
            _ => None,
        })
        .collect();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, b"ssid=home&password=secret".to_vec());

    let _ = app.update(Event::SubmitResponse(Ok(200)), &mut model);

    assert_eq!(model.status_message, MSG_SUCCESS);
    assert_eq!(model.submit_button, SubmitButton::CheckIcon);
    assert_eq!(model.last_outcome, Some(SubmissionOutcome::Success));
}

#[test]
fn sensor_form_with_empty_username_sends_nothing() {
    let app = App;
    let mut model = Model::default();

    let _ = app.update(
        Event::Initialize {
            form: FormVariant::Sensor,
        },
        &mut model,
    );
    for (name, value) in [("password", "s3cret"), ("cpf", "123"), ("serialcode", "sn-9")] {
        let _ = app.update(
            Event::FieldChanged {
                name: name.to_string(),
                value: value.to_string(),
            },
            &mut model,
        );
    }

    let mut command = app.update(Event::Submit, &mut model);

    assert!(command
        .effects()
        .all(|effect| matches!(effect, Effect::Render(_))));
    assert_eq!(model.status_message, MSG_FILL_ALL_FIELDS);
    assert!(model.field_errors.contains_key("username"));
    assert!(!model.field_errors.contains_key("password"));
}

#[test]
fn view_exposes_the_whole_model() {
    let app = App;
    let mut model = Model::default();
    model.status_message = MSG_SUCCESS.to_string();

    let view = app.view(&model);

    assert_eq!(view, model);
}
