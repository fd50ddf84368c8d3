/*!
# Address capture workflow for the LPA wizard

## Legal

Dual-licensed under `MIT` or the [UNLICENSE](http://unlicense.org/).

## Features

One multi-step page flow that collects a postal address for any actor on a
Lasting Power of Attorney: attorneys, replacement attorneys, trust
corporations, the certificate provider, people to notify, the independent
witness and the donor themselves.

The user can type an address, look one up by postcode, reuse an address
already given for someone else, or (for attorneys) skip the question for
now. Field problems and lookup failures are rendered back on the page; only
storage and template failures escape as [`Error`].

Postcode lookup uses [reqwest](https://crates.io/crates/reqwest) against
the Ordnance Survey Places API.

## Usage

Add dependency to Cargo.toml:

```toml
[dependencies]
lpa-address = "0.1"
```

Wire a page to your own template and storage:

```rust,ignore
use std::sync::Arc;

use lpa_address::{
    page, DonorProvidedDetails, LogLogger, OsPlacesClient, Request, TemplateError,
};

let client = Arc::new(OsPlacesClient::from_env()?);
let template = Arc::new(|data: &lpa_address::ChooseAddressData| {
    Ok::<_, TemplateError>(render_with_your_engine("choose_address.html", data))
});

let handler = page::choose_attorneys_address(
    Arc::new(LogLogger),
    template,
    client,
    Arc::new(MyDonorStore::new()),
);

let request = Request::post(
    "/?id=123",
    "application/x-www-form-urlencoded",
    body.as_bytes(),
);
let mut donor: DonorProvidedDetails = load_donor(lpa_id).await?;
let response = handler.serve(&request, &mut donor).await?;
```
*/
#[macro_use]
extern crate lazy_static;

mod action;
mod address;
mod client;
mod config;
mod data;
mod donor;
pub mod error;
mod form;
mod logger;
pub mod page;
mod path;
mod request;
mod store;
mod task;
mod template;
#[cfg(test)]
mod testing;
mod validation;

pub use ::reqwest;
pub use action::Action;
pub use address::{Address, DEFAULT_COUNTRY};
pub use client::{AddressClient, OsPlacesClient};
pub use config::Config;
pub use data::{lookup_address, ChooseAddressData, TitleKeys};
pub use donor::{
    Attorney, AttorneyDecisions, Attorneys, AttorneysAct, CertificateProvider, Donor,
    DonorProvidedDetails, IndependentWitness, PersonToNotify, Relationship, TrustCorporation,
};
pub use error::{
    BadRequestError, ConfigError, Error, LookupError, StoreError, TemplateError,
};
pub use form::{AddressForm, FieldNames, FIELD_NAMES, MAX_LINE_LENGTH};
pub use logger::{LogLogger, Logger};
pub use page::{ActorAddress, AddressHandler, AddressTarget};
pub use path::Path;
pub use request::{Request, Response};
pub use store::DonorStore;
pub use task::{choose_attorneys_state, TaskState, Tasks};
pub use template::Template;
pub use validation::{FieldError, FieldErrorEntry, StringCheck, ValidationErrors};
