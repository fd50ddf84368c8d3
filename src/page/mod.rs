/*!
Address pages for each actor on the LPA.

Every page runs the same [`AddressHandler`]. An [`AddressTarget`] says which
actor it edits, which copy it uses and where it goes next.
*/
use crate::address::Address;
use crate::client::AddressClient;
use crate::data::{lookup_address, ChooseAddressData, TitleKeys};
use crate::donor::DonorProvidedDetails;
use crate::error::Error;
use crate::form::AddressForm;
use crate::logger::Logger;
use crate::path::Path;
use crate::store::DonorStore;
use crate::template::Template;
use crate::{Action, Request, Response};
use std::sync::Arc;

mod attorneys;
mod certificate_provider;
mod independent_witness;
mod people_to_notify;
mod your_address;

pub use attorneys::{
    choose_attorneys_address, choose_replacement_attorneys_address,
    enter_replacement_trust_corporation_address, enter_trust_corporation_address,
    ChooseAttorneysAddress, ChooseReplacementAttorneysAddress,
    EnterReplacementTrustCorporationAddress, EnterTrustCorporationAddress,
};
pub use certificate_provider::{certificate_provider_address, CertificateProviderAddress};
pub use independent_witness::{your_independent_witness_address, YourIndependentWitnessAddress};
pub use people_to_notify::{choose_people_to_notify_address, ChoosePeopleToNotifyAddress};
pub use your_address::{your_address, YourAddress};

/// The actor a page is editing, as read from the donor's details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorAddress {
    pub id: String,
    pub full_name: String,
    pub address: Address,
}

/// What differs between the address pages.
pub trait AddressTarget: Send + Sync {
    /// Copy key naming the actor.
    fn actor_label(&self) -> &'static str;

    /// Whether the actor's address may be left for later.
    fn can_skip(&self) -> bool {
        false
    }

    /// Use the copy for donors describing their own address.
    fn your(&self) -> bool {
        false
    }

    fn title_keys(&self, _donor: &DonorProvidedDetails) -> TitleKeys {
        TitleKeys::default()
    }

    /// Step shown to an actor without an address.
    fn initial_action(&self, _donor: &DonorProvidedDetails) -> Action {
        Action::Unselected
    }

    /// The actor with `id`, or `None` when there is no such actor.
    fn find(&self, donor: &DonorProvidedDetails, id: &str) -> Option<ActorAddress>;

    fn set_address(&self, donor: &mut DonorProvidedDetails, id: &str, address: Address);

    /// Addresses offered on the reuse step.
    fn reuse_addresses(&self, donor: &DonorProvidedDetails) -> Vec<Address> {
        vec![donor.donor.address.clone()]
    }

    /// Recomputes the task list after the address is saved or skipped.
    fn update_tasks(&self, donor: &mut DonorProvidedDetails, skipped: bool);

    /// Where to send requests for an unknown actor.
    fn not_found(&self) -> Path {
        Path::TaskList
    }

    fn next_path(&self) -> Path;

    /// Redirect target once the page is done. `changed` is false when the
    /// submitted address matched the stored one.
    fn next(&self, r: &Request, donor: &DonorProvidedDetails, _changed: bool) -> String {
        self.next_path()
            .redirect_target(&donor.lpa_id, r.form_value("from"))
    }
}

/// Runs the address workflow for one kind of actor.
pub struct AddressHandler<T> {
    target: T,
    logger: Arc<dyn Logger>,
    template: Arc<dyn Template>,
    address_client: Arc<dyn AddressClient>,
    donor_store: Arc<dyn DonorStore>,
}

impl<T: AddressTarget> AddressHandler<T> {
    pub fn new(
        target: T,
        logger: Arc<dyn Logger>,
        template: Arc<dyn Template>,
        address_client: Arc<dyn AddressClient>,
        donor_store: Arc<dyn DonorStore>,
    ) -> Self {
        Self {
            target,
            logger,
            template,
            address_client,
            donor_store,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Handles one request against `donor`. Field problems and lookup
    /// failures are rendered back to the user; only storage and template
    /// failures are returned as errors.
    pub async fn serve(
        &self,
        r: &Request,
        donor: &mut DonorProvidedDetails,
    ) -> Result<Response, Error> {
        let id = r.form_value("id").to_string();

        let actor = match self.target.find(donor, &id) {
            Some(actor) => actor,
            None => {
                return Ok(Response::redirect(
                    &self.target.not_found().format(&donor.lpa_id),
                )?)
            }
        };

        let your = self.target.your();

        let mut data = ChooseAddressData {
            form: AddressForm {
                action: self.target.initial_action(donor),
                ..AddressForm::new()
            },
            actor_label: self.target.actor_label(),
            full_name: actor.full_name,
            id: actor.id,
            can_skip: self.target.can_skip(),
            title_keys: self.target.title_keys(donor),
            making_another_lpa: r.form_value("makingAnotherLPA") == "1",
            ..Default::default()
        };

        if !actor.address.is_empty() {
            data.form = AddressForm::manual(actor.address.clone());
        }

        if r.is_post() {
            data.form = AddressForm::read(r);
            data.errors = data.form.validate(your);

            match data.form.action {
                Action::Skip if data.can_skip => {
                    return self.skip(r, donor).await;
                }
                Action::Manual | Action::ReuseSelect if data.errors.none() => {
                    if let Some(address) = data.form.address.take() {
                        return self.save(r, donor, &id, &actor.address, address).await;
                    }
                }
                Action::PostcodeLookup => {
                    if data.errors.none() {
                        lookup_address(
                            self.logger.as_ref(),
                            self.address_client.as_ref(),
                            &mut data,
                            your,
                        )
                        .await;
                    } else {
                        data.form.action = Action::Postcode;
                    }
                }
                Action::PostcodeSelect => {
                    if data.errors.none() {
                        data.form.action = Action::Manual;
                    } else {
                        lookup_address(
                            self.logger.as_ref(),
                            self.address_client.as_ref(),
                            &mut data,
                            your,
                        )
                        .await;
                    }
                }
                Action::Reuse | Action::ReuseSelect => {
                    data.addresses = self.target.reuse_addresses(donor);
                }
                _ => {}
            }
        } else {
            match Action::parse(r.query_value("action")) {
                Action::Manual => data.form = AddressForm::manual(Address::default()),
                Action::Reuse => {
                    data.form.action = Action::Reuse;
                    data.addresses = self.target.reuse_addresses(donor);
                }
                _ => {}
            }
        }

        let body = self.template.execute(&data)?;
        Ok(Response::html(body))
    }

    async fn save(
        &self,
        r: &Request,
        donor: &mut DonorProvidedDetails,
        id: &str,
        stored: &Address,
        address: Address,
    ) -> Result<Response, Error> {
        let changed = *stored != address;

        if changed {
            self.target.set_address(donor, id, address);
            self.target.update_tasks(donor, false);

            log::debug!(
                "saving {} address for lpa {}",
                self.target.actor_label(),
                donor.lpa_id
            );
            self.donor_store.put(donor).await?;
        }

        Ok(Response::redirect(&self.target.next(r, donor, changed))?)
    }

    async fn skip(&self, r: &Request, donor: &mut DonorProvidedDetails) -> Result<Response, Error> {
        self.target.update_tasks(donor, true);

        log::debug!(
            "skipping {} address for lpa {}",
            self.target.actor_label(),
            donor.lpa_id
        );
        self.donor_store.put(donor).await?;

        Ok(Response::redirect(&self.target.next(r, donor, false))?)
    }
}
