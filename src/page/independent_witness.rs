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

/// Address of the independent witness. Saving it completes the signatory
/// task.
#[derive(Debug, Clone, Copy, Default)]
pub struct YourIndependentWitnessAddress;

impl AddressTarget for YourIndependentWitnessAddress {
    fn actor_label(&self) -> &'static str {
        "independentWitness"
    }

    fn find(&self, donor: &DonorProvidedDetails, _id: &str) -> Option<ActorAddress> {
        Some(ActorAddress {
            id: String::new(),
            full_name: donor.independent_witness.full_name(),
            address: donor.independent_witness.address.clone(),
        })
    }

    fn set_address(&self, donor: &mut DonorProvidedDetails, _id: &str, address: Address) {
        donor.independent_witness.address = address;
    }

    fn update_tasks(&self, donor: &mut DonorProvidedDetails, _skipped: bool) {
        donor.tasks.choose_your_signatory = TaskState::Completed;
    }

    fn next_path(&self) -> Path {
        Path::TaskList
    }
}

pub fn your_independent_witness_address(
    logger: Arc<dyn Logger>,
    template: Arc<dyn Template>,
    address_client: Arc<dyn AddressClient>,
    donor_store: Arc<dyn DonorStore>,
) -> AddressHandler<YourIndependentWitnessAddress> {
    AddressHandler::new(
        YourIndependentWitnessAddress,
        logger,
        template,
        address_client,
        donor_store,
    )
}
