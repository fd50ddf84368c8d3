use super::{ActorAddress, AddressHandler, AddressTarget};
use crate::address::Address;
use crate::client::AddressClient;
use crate::donor::DonorProvidedDetails;
use crate::logger::Logger;
use crate::path::Path;
use crate::store::DonorStore;
use crate::template::Template;
use crate::Request;
use std::sync::Arc;

/// The donor's own address.
#[derive(Debug, Clone, Copy, Default)]
pub struct YourAddress;

impl AddressTarget for YourAddress {
    fn actor_label(&self) -> &'static str {
        ""
    }

    fn your(&self) -> bool {
        true
    }

    fn find(&self, donor: &DonorProvidedDetails, _id: &str) -> Option<ActorAddress> {
        Some(ActorAddress {
            address: donor.donor.address.clone(),
            ..Default::default()
        })
    }

    fn set_address(&self, donor: &mut DonorProvidedDetails, _id: &str, address: Address) {
        donor.donor.address = address;
    }

    fn reuse_addresses(&self, _donor: &DonorProvidedDetails) -> Vec<Address> {
        Vec::new()
    }

    fn update_tasks(&self, _donor: &mut DonorProvidedDetails, _skipped: bool) {}

    fn next_path(&self) -> Path {
        Path::CanYouSignYourLpa
    }

    fn next(&self, r: &Request, donor: &DonorProvidedDetails, changed: bool) -> String {
        if r.form_value("makingAnotherLPA") != "1" {
            return self
                .next_path()
                .redirect_target(&donor.lpa_id, r.form_value("from"));
        }

        if changed {
            format!(
                "{}?detail=address",
                Path::WeHaveUpdatedYourDetails.format(&donor.lpa_id)
            )
        } else {
            Path::MakeANewLpa.format(&donor.lpa_id)
        }
    }
}

pub fn your_address(
    logger: Arc<dyn Logger>,
    template: Arc<dyn Template>,
    address_client: Arc<dyn AddressClient>,
    donor_store: Arc<dyn DonorStore>,
) -> AddressHandler<YourAddress> {
    AddressHandler::new(
        YourAddress,
        logger,
        template,
        address_client,
        donor_store,
    )
}
