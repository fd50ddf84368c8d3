use crate::address::Address;
use crate::client::AddressClient;
use crate::form::{AddressForm, FIELD_NAMES};
use crate::logger::Logger;
use crate::validation::{FieldError, ValidationErrors};
use crate::Action;
use serde::Serialize;

/// Copy keys for the page heading at each step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleKeys {
    pub manual: &'static str,
    pub postcode: &'static str,
    pub postcode_select_and_postcode_lookup: &'static str,
    pub reuse_and_reuse_select: &'static str,
    pub reuse_or_new: &'static str,
}

impl Default for TitleKeys {
    fn default() -> Self {
        Self {
            manual: "personsAddress",
            postcode: "whatIsPersonsPostcode",
            postcode_select_and_postcode_lookup: "selectAnAddressForPerson",
            reuse_and_reuse_select: "selectAnAddressForPerson",
            reuse_or_new: "addPersonsAddress",
        }
    }
}

impl TitleKeys {
    /// Headings asking for a work address.
    pub fn professional() -> Self {
        Self {
            manual: "personsWorkAddress",
            postcode: "whatIsPersonsWorkPostcode",
            postcode_select_and_postcode_lookup: "selectPersonsWorkAddress",
            reuse_and_reuse_select: "selectAnAddressForPerson",
            reuse_or_new: "addPersonsAddress",
        }
    }

    /// Heading for the step `action` is on.
    pub fn for_action(&self, action: Action) -> &'static str {
        use Action::*;
        match action {
            Manual => self.manual,
            Postcode => self.postcode,
            PostcodeLookup | PostcodeSelect => self.postcode_select_and_postcode_lookup,
            Reuse | ReuseSelect => self.reuse_and_reuse_select,
            Unselected | Skip => self.reuse_or_new,
        }
    }
}

/// Everything the address page template needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChooseAddressData {
    pub form: AddressForm,
    pub addresses: Vec<Address>,
    pub errors: ValidationErrors,
    pub actor_label: &'static str,
    pub full_name: String,
    pub id: String,
    pub can_skip: bool,
    pub title_keys: TitleKeys,
    pub making_another_lpa: bool,
}

impl ChooseAddressData {
    /// Heading for the current step.
    pub fn title_key(&self) -> &'static str {
        self.title_keys.for_action(self.form.action)
    }
}

/// Looks up `data.form.lookup_postcode` and stores the candidates on
/// `data`. Failures never escape: they are logged and shown as field errors
/// with the form sent back to the postcode step.
pub async fn lookup_address(
    logger: &dyn Logger,
    client: &dyn AddressClient,
    data: &mut ChooseAddressData,
    your: bool,
) {
    match client.lookup_postcode(&data.form.lookup_postcode).await {
        Err(err) => {
            logger.print(&err);

            let error = if err.is_bad_request() {
                FieldError::Enter {
                    label: "invalidPostcode".into(),
                }
            } else {
                FieldError::Custom {
                    label: "couldNotLookupPostcode".into(),
                }
            };
            data.errors.add(FIELD_NAMES.lookup_postcode, error);
            data.form.action = Action::Postcode;
        }
        Ok(addresses) if addresses.is_empty() => {
            let label = if your {
                "noYourAddressesFound"
            } else {
                "noAddressesFound"
            };
            data.errors.add(
                FIELD_NAMES.lookup_postcode,
                FieldError::Custom {
                    label: label.into(),
                },
            );
            data.form.action = Action::Postcode;
        }
        Ok(addresses) => {
            data.addresses = addresses;
        }
    }
}
