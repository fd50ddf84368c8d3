use super::{ActorAddress, AddressHandler, AddressTarget};
use crate::address::Address;
use crate::client::AddressClient;
use crate::donor::DonorProvidedDetails;
use crate::logger::Logger;
use crate::path::Path;
use crate::store::DonorStore;
use crate::task::TaskState;
use crate::template::Template;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default)]
pub struct ChoosePeopleToNotifyAddress;

impl AddressTarget for ChoosePeopleToNotifyAddress {
    fn actor_label(&self) -> &'static str {
        "personToNotify"
    }

    fn find(&self, donor: &DonorProvidedDetails, id: &str) -> Option<ActorAddress> {
        donor
            .people_to_notify
            .iter()
            .find(|p| p.id == id)
            .map(|p| ActorAddress {
                id: p.id.clone(),
                full_name: p.full_name(),
                address: p.address.clone(),
            })
    }

    fn set_address(&self, donor: &mut DonorProvidedDetails, id: &str, address: Address) {
        if let Some(person) = donor.people_to_notify.iter_mut().find(|p| p.id == id) {
            person.address = address;
        }
    }

    fn update_tasks(&self, donor: &mut DonorProvidedDetails, _skipped: bool) {
        donor.tasks.people_to_notify = TaskState::Completed;
    }

    fn not_found(&self) -> Path {
        Path::ChoosePeopleToNotify
    }

    fn next_path(&self) -> Path {
        Path::ChoosePeopleToNotifySummary
    }
}

pub fn choose_people_to_notify_address(
    logger: Arc<dyn Logger>,
    template: Arc<dyn Template>,
    address_client: Arc<dyn AddressClient>,
    donor_store: Arc<dyn DonorStore>,
) -> AddressHandler<ChoosePeopleToNotifyAddress> {
    AddressHandler::new(
        ChoosePeopleToNotifyAddress,
        logger,
        template,
        address_client,
        donor_store,
    )
}
