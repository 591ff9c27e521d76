use serde::{Deserialize, Serialize};

/// A single required form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Internal field name, matching the input's `name` attribute.
    pub name: &'static str,
    /// Key used in the urlencoded request body. Differs from `name` for the
    /// sensor serial code (`serialcode` input, `serialCode` on the wire) -
    /// the case mismatch is part of the wire contract.
    pub wire_key: &'static str,
}

const SENSOR_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "username",
        wire_key: "username",
    },
    FieldSpec {
        name: "password",
        wire_key: "password",
    },
    FieldSpec {
        name: "cpf",
        wire_key: "cpf",
    },
    FieldSpec {
        name: "serialcode",
        wire_key: "serialCode",
    },
];

const WIFI_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "ssid",
        wire_key: "ssid",
    },
    FieldSpec {
        name: "password",
        wire_key: "password",
    },
];

/// The two provisioning forms served by the portal.
///
/// Each page runs the same controller, parameterized by this variant.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormVariant {
    /// Sensor registration form.
    #[default]
    Sensor,
    /// WiFi credentials form.
    Wifi,
}

impl FormVariant {
    /// Ordered field list; body serialization follows this order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormVariant::Sensor => SENSOR_FIELDS,
            FormVariant::Wifi => WIFI_FIELDS,
        }
    }

    /// Endpoint the form posts to.
    pub fn endpoint(&self) -> &'static str {
        "/"
    }
}
