use super::{ActorAddress, AddressHandler, AddressTarget};
use crate::address::Address;
use crate::client::AddressClient;
use crate::donor::{DonorProvidedDetails, TrustCorporation};
use crate::logger::Logger;
use crate::path::Path;
use crate::store::DonorStore;
use crate::task::{choose_attorneys_state, TaskState};
use crate::template::Template;
use std::sync::Arc;

/// Address of an attorney, picked by `id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChooseAttorneysAddress;

impl AddressTarget for ChooseAttorneysAddress {
    fn actor_label(&self) -> &'static str {
        "attorney"
    }

    fn can_skip(&self) -> bool {
        true
    }

    fn find(&self, donor: &DonorProvidedDetails, id: &str) -> Option<ActorAddress> {
        donor.attorneys.get(id).map(|a| ActorAddress {
            id: a.id.clone(),
            full_name: a.full_name(),
            address: a.address.clone(),
        })
    }

    fn set_address(&self, donor: &mut DonorProvidedDetails, id: &str, address: Address) {
        if let Some(attorney) = donor.attorneys.get_mut(id) {
            attorney.address = address;
        }
    }

    fn update_tasks(&self, donor: &mut DonorProvidedDetails, skipped: bool) {
        donor.tasks.choose_attorneys = if skipped {
            TaskState::Completed
        } else {
            choose_attorneys_state(&donor.attorneys, &donor.attorney_decisions)
        };
    }

    fn not_found(&self) -> Path {
        Path::ChooseAttorneys
    }

    fn next_path(&self) -> Path {
        Path::ChooseAttorneysSummary
    }
}

/// Address of a replacement attorney, picked by `id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChooseReplacementAttorneysAddress;

impl AddressTarget for ChooseReplacementAttorneysAddress {
    fn actor_label(&self) -> &'static str {
        "replacementAttorney"
    }

    fn can_skip(&self) -> bool {
        true
    }

    fn find(&self, donor: &DonorProvidedDetails, id: &str) -> Option<ActorAddress> {
        donor.replacement_attorneys.get(id).map(|a| ActorAddress {
            id: a.id.clone(),
            full_name: a.full_name(),
            address: a.address.clone(),
        })
    }

    fn set_address(&self, donor: &mut DonorProvidedDetails, id: &str, address: Address) {
        if let Some(attorney) = donor.replacement_attorneys.get_mut(id) {
            attorney.address = address;
        }
    }

    fn update_tasks(&self, donor: &mut DonorProvidedDetails, skipped: bool) {
        donor.tasks.choose_replacement_attorneys = if skipped {
            TaskState::Completed
        } else {
            choose_attorneys_state(
                &donor.replacement_attorneys,
                &donor.replacement_attorney_decisions,
            )
        };
    }

    fn not_found(&self) -> Path {
        Path::ChooseReplacementAttorneys
    }

    fn next_path(&self) -> Path {
        Path::ChooseReplacementAttorneysSummary
    }
}

fn trust_corporation(trust_corporation: Option<&TrustCorporation>) -> ActorAddress {
    trust_corporation
        .map(|t| ActorAddress {
            id: String::new(),
            full_name: t.name.clone(),
            address: t.address.clone(),
        })
        .unwrap_or_default()
}

/// Address of the trust corporation acting as an attorney.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnterTrustCorporationAddress;

impl AddressTarget for EnterTrustCorporationAddress {
    fn actor_label(&self) -> &'static str {
        "theTrustCorporation"
    }

    fn find(&self, donor: &DonorProvidedDetails, _id: &str) -> Option<ActorAddress> {
        Some(trust_corporation(donor.attorneys.trust_corporation.as_ref()))
    }

    fn set_address(&self, donor: &mut DonorProvidedDetails, _id: &str, address: Address) {
        donor
            .attorneys
            .trust_corporation
            .get_or_insert_with(TrustCorporation::default)
            .address = address;
    }

    fn reuse_addresses(&self, donor: &DonorProvidedDetails) -> Vec<Address> {
        donor.actor_addresses()
    }

    fn update_tasks(&self, donor: &mut DonorProvidedDetails, _skipped: bool) {
        donor.tasks.choose_attorneys =
            choose_attorneys_state(&donor.attorneys, &donor.attorney_decisions);
    }

    fn next_path(&self) -> Path {
        Path::ChooseAttorneysSummary
    }
}

/// Address of the trust corporation acting as a replacement attorney.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnterReplacementTrustCorporationAddress;

impl AddressTarget for EnterReplacementTrustCorporationAddress {
    fn actor_label(&self) -> &'static str {
        "theTrustCorporation"
    }

    fn find(&self, donor: &DonorProvidedDetails, _id: &str) -> Option<ActorAddress> {
        Some(trust_corporation(
            donor.replacement_attorneys.trust_corporation.as_ref(),
        ))
    }

    fn set_address(&self, donor: &mut DonorProvidedDetails, _id: &str, address: Address) {
        donor
            .replacement_attorneys
            .trust_corporation
            .get_or_insert_with(TrustCorporation::default)
            .address = address;
    }

    fn reuse_addresses(&self, donor: &DonorProvidedDetails) -> Vec<Address> {
        donor.actor_addresses()
    }

    fn update_tasks(&self, donor: &mut DonorProvidedDetails, _skipped: bool) {
        donor.tasks.choose_replacement_attorneys = choose_attorneys_state(
            &donor.replacement_attorneys,
            &donor.replacement_attorney_decisions,
        );
    }

    fn next_path(&self) -> Path {
        Path::ChooseReplacementAttorneysSummary
    }
}

pub fn choose_attorneys_address(
    logger: Arc<dyn Logger>,
    template: Arc<dyn Template>,
    address_client: Arc<dyn AddressClient>,
    donor_store: Arc<dyn DonorStore>,
) -> AddressHandler<ChooseAttorneysAddress> {
    AddressHandler::new(
        ChooseAttorneysAddress,
        logger,
        template,
        address_client,
        donor_store,
    )
}

pub fn choose_replacement_attorneys_address(
    logger: Arc<dyn Logger>,
    template: Arc<dyn Template>,
    address_client: Arc<dyn AddressClient>,
    donor_store: Arc<dyn DonorStore>,
) -> AddressHandler<ChooseReplacementAttorneysAddress> {
    AddressHandler::new(
        ChooseReplacementAttorneysAddress,
        logger,
        template,
        address_client,
        donor_store,
    )
}

pub fn enter_trust_corporation_address(
    logger: Arc<dyn Logger>,
    template: Arc<dyn Template>,
    address_client: Arc<dyn AddressClient>,
    donor_store: Arc<dyn DonorStore>,
) -> AddressHandler<EnterTrustCorporationAddress> {
    AddressHandler::new(
        EnterTrustCorporationAddress,
        logger,
        template,
        address_client,
        donor_store,
    )
}

pub fn enter_replacement_trust_corporation_address(
    logger: Arc<dyn Logger>,
    template: Arc<dyn Template>,
    address_client: Arc<dyn AddressClient>,
    donor_store: Arc<dyn DonorStore>,
) -> AddressHandler<EnterReplacementTrustCorporationAddress> {
    AddressHandler::new(
        EnterReplacementTrustCorporationAddress,
        logger,
        template,
        address_client,
        donor_store,
    )
}
