use super::{ActorAddress, AddressHandler, AddressTarget};
use crate::address::Address;
use crate::client::AddressClient;
use crate::data::TitleKeys;
use crate::donor::{DonorProvidedDetails, Relationship};
use crate::logger::Logger;
use crate::path::Path;
use crate::store::DonorStore;
use crate::task::TaskState;
use crate::template::Template;
use crate::Action;
use std::sync::Arc;

/// Address of the certificate provider. A professional certificate provider
/// is asked for a work address and goes straight to the postcode step.
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateProviderAddress;

fn is_professional(donor: &DonorProvidedDetails) -> bool {
    donor.certificate_provider.relationship == Relationship::Professionally
}

impl AddressTarget for CertificateProviderAddress {
    fn actor_label(&self) -> &'static str {
        "certificateProvider"
    }

    fn title_keys(&self, donor: &DonorProvidedDetails) -> TitleKeys {
        if is_professional(donor) {
            TitleKeys::professional()
        } else {
            TitleKeys::default()
        }
    }

    fn initial_action(&self, donor: &DonorProvidedDetails) -> Action {
        if is_professional(donor) {
            Action::Postcode
        } else {
            Action::Unselected
        }
    }

    fn find(&self, donor: &DonorProvidedDetails, _id: &str) -> Option<ActorAddress> {
        Some(ActorAddress {
            id: String::new(),
            full_name: donor.certificate_provider.full_name(),
            address: donor.certificate_provider.address.clone(),
        })
    }

    fn set_address(&self, donor: &mut DonorProvidedDetails, _id: &str, address: Address) {
        donor.certificate_provider.address = address;
    }

    fn update_tasks(&self, donor: &mut DonorProvidedDetails, _skipped: bool) {
        donor.tasks.certificate_provider = TaskState::Completed;
    }

    fn next_path(&self) -> Path {
        Path::TaskList
    }
}

pub fn certificate_provider_address(
    logger: Arc<dyn Logger>,
    template: Arc<dyn Template>,
    address_client: Arc<dyn AddressClient>,
    donor_store: Arc<dyn DonorStore>,
) -> AddressHandler<CertificateProviderAddress> {
    AddressHandler::new(
        CertificateProviderAddress,
        logger,
        template,
        address_client,
        donor_store,
    )
}
