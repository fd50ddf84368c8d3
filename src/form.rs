use crate::address::{Address, DEFAULT_COUNTRY};
use crate::validation::{FieldError, StringCheck, ValidationErrors};
use crate::{Action, Request};
use serde::Serialize;

/// Longest accepted address line.
pub const MAX_LINE_LENGTH: usize = 50;

/// Names of the inputs used by the address pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldNames {
    pub action: &'static str,
    pub line1: &'static str,
    pub line2: &'static str,
    pub line3: &'static str,
    pub town_or_city: &'static str,
    pub postcode: &'static str,
    pub lookup_postcode: &'static str,
    pub select_address: &'static str,
}

pub const FIELD_NAMES: FieldNames = FieldNames {
    action: "action",
    line1: "address-line-1",
    line2: "address-line-2",
    line3: "address-line-3",
    town_or_city: "address-town",
    postcode: "address-postcode",
    lookup_postcode: "lookup-postcode",
    select_address: "select-address",
};

/// The address form as submitted on one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressForm {
    pub action: Action,
    pub lookup_postcode: String,
    pub address: Option<Address>,
    pub field_names: FieldNames,
}

impl Default for FieldNames {
    fn default() -> Self {
        FIELD_NAMES
    }
}

impl AddressForm {
    /// A blank form on the first step.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form already on the manual step, showing `address`.
    pub fn manual(address: Address) -> Self {
        Self {
            action: Action::Manual,
            address: Some(address),
            ..Self::default()
        }
    }

    /// Reads the posted form values.
    pub fn read(r: &Request) -> Self {
        let action = Action::parse(&r.post_form_value(FIELD_NAMES.action));

        let address = match action {
            Action::Manual => Some(read_manual_address(r)),
            Action::PostcodeSelect | Action::ReuseSelect => {
                Address::decode(&r.post_form_value(FIELD_NAMES.select_address))
                    .map(with_default_country)
            }
            _ => None,
        };

        Self {
            action,
            lookup_postcode: r.post_form_value(FIELD_NAMES.lookup_postcode),
            address,
            field_names: FIELD_NAMES,
        }
    }

    /// Checks the form for the current action. `your` switches to the copy
    /// used when donors describe their own address.
    pub fn validate(&self, your: bool) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        let labels = if your { &YOUR_LABELS } else { &LABELS };

        match self.action {
            Action::Unselected => errors.add(
                FIELD_NAMES.action,
                FieldError::Select {
                    label: "ifUsePreviousAddressOrEnterNew".into(),
                },
            ),
            Action::PostcodeLookup => errors.string(
                FIELD_NAMES.lookup_postcode,
                labels.postcode,
                &self.lookup_postcode,
                &[StringCheck::Empty],
            ),
            Action::PostcodeSelect | Action::ReuseSelect => {
                if self.address.is_none() {
                    errors.add(
                        FIELD_NAMES.select_address,
                        FieldError::Select {
                            label: labels.from_the_list.into(),
                        },
                    );
                }
            }
            Action::Manual => {
                let blank = Address::default();
                let address = self.address.as_ref().unwrap_or(&blank);

                errors.string(
                    FIELD_NAMES.line1,
                    labels.line1,
                    &address.line1,
                    &[StringCheck::Empty, StringCheck::TooLong(MAX_LINE_LENGTH)],
                );
                errors.string(
                    FIELD_NAMES.line2,
                    labels.line2,
                    &address.line2,
                    &[StringCheck::TooLong(MAX_LINE_LENGTH)],
                );
                errors.string(
                    FIELD_NAMES.line3,
                    labels.line3,
                    &address.line3,
                    &[StringCheck::TooLong(MAX_LINE_LENGTH)],
                );
                errors.string(
                    FIELD_NAMES.town_or_city,
                    labels.town_or_city,
                    &address.town_or_city,
                    &[StringCheck::Empty],
                );
                errors.string(
                    FIELD_NAMES.postcode,
                    labels.postcode,
                    &address.postcode,
                    &[StringCheck::Empty],
                );
            }
            Action::Postcode | Action::Reuse | Action::Skip => {}
        }

        errors
    }
}

fn read_manual_address(r: &Request) -> Address {
    with_default_country(Address {
        line1: r.post_form_value(FIELD_NAMES.line1),
        line2: r.post_form_value(FIELD_NAMES.line2),
        line3: r.post_form_value(FIELD_NAMES.line3),
        town_or_city: r.post_form_value(FIELD_NAMES.town_or_city),
        postcode: r.post_form_value(FIELD_NAMES.postcode).to_uppercase(),
        country: String::new(),
    })
}

/// Fills in `GB` for a non-blank address that has no country.
fn with_default_country(mut address: Address) -> Address {
    if address.country.is_empty() && !address.is_empty() {
        address.country = DEFAULT_COUNTRY.to_string();
    }
    address
}

struct Labels {
    line1: &'static str,
    line2: &'static str,
    line3: &'static str,
    town_or_city: &'static str,
    postcode: &'static str,
    from_the_list: &'static str,
}

const LABELS: Labels = Labels {
    line1: "addressLine1",
    line2: "addressLine2Label",
    line3: "addressLine3Label",
    town_or_city: "townOrCity",
    postcode: "aPostcode",
    from_the_list: "anAddressFromTheList",
};

const YOUR_LABELS: Labels = Labels {
    line1: "addressLine1OfYourAddress",
    line2: "addressLine2OfYourAddress",
    line3: "addressLine3OfYourAddress",
    town_or_city: "yourTownOrCity",
    postcode: "yourPostcode",
    from_the_list: "yourAddressFromTheList",
};
