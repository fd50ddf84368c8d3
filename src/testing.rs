//! Hand-written fakes for the workflow's collaborators.

use crate::address::Address;
use crate::client::AddressClient;
use crate::data::ChooseAddressData;
use crate::donor::DonorProvidedDetails;
use crate::error::{LookupError, StoreError, TemplateError};
use crate::logger::Logger;
use crate::page::{AddressHandler, AddressTarget};
use crate::store::DonorStore;
use crate::template::Template;
use async_trait::async_trait;
use std::error::Error as StdError;
use std::sync::{Arc, Mutex};

pub fn test_address() -> Address {
    Address {
        line1: "a".into(),
        line2: "b".into(),
        line3: "c".into(),
        town_or_city: "d".into(),
        postcode: "E".into(),
        country: "GB".into(),
    }
}

/// Form pairs for a manual submission of [`test_address`].
pub fn manual_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("action", "manual"),
        ("address-line-1", "a"),
        ("address-line-2", "b"),
        ("address-line-3", "c"),
        ("address-town", "d"),
        ("address-postcode", "e"),
    ]
}

#[derive(Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn print(&self, err: &(dyn StdError + 'static)) {
        self.messages.lock().unwrap().push(err.to_string());
    }
}

type MakeError = Box<dyn Fn() -> LookupError + Send + Sync>;

pub struct FakeAddressClient {
    result: Result<Vec<Address>, MakeError>,
    calls: Mutex<Vec<String>>,
}

impl FakeAddressClient {
    pub fn found(addresses: Vec<Address>) -> Self {
        Self {
            result: Ok(addresses),
            calls: Mutex::default(),
        }
    }

    pub fn failing<F>(make_error: F) -> Self
    where
        F: Fn() -> LookupError + Send + Sync + 'static,
    {
        Self {
            result: Err(Box::new(make_error)),
            calls: Mutex::default(),
        }
    }

    /// Postcodes looked up so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressClient for FakeAddressClient {
    async fn lookup_postcode(&self, postcode: &str) -> Result<Vec<Address>, LookupError> {
        self.calls.lock().unwrap().push(postcode.to_string());
        match self.result {
            Ok(ref addresses) => Ok(addresses.clone()),
            Err(ref make_error) => Err(make_error()),
        }
    }
}

#[derive(Default)]
pub struct FakeDonorStore {
    puts: Mutex<Vec<DonorProvidedDetails>>,
    fail: bool,
}

impl FakeDonorStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn puts(&self) -> Vec<DonorProvidedDetails> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl DonorStore for FakeDonorStore {
    async fn put(&self, donor: &DonorProvidedDetails) -> Result<(), StoreError> {
        self.puts.lock().unwrap().push(donor.clone());
        if self.fail {
            Err(StoreError::new("err"))
        } else {
            Ok(())
        }
    }
}

/// Template that records what it was asked to render.
#[derive(Default)]
pub struct RecordingTemplate {
    rendered: Mutex<Vec<ChooseAddressData>>,
    fail: bool,
}

impl RecordingTemplate {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn rendered(&self) -> Vec<ChooseAddressData> {
        self.rendered.lock().unwrap().clone()
    }

    /// The single page rendered.
    pub fn only(&self) -> ChooseAddressData {
        let rendered = self.rendered();
        assert_eq!(1, rendered.len());
        rendered.into_iter().next().unwrap()
    }
}

impl Template for RecordingTemplate {
    fn execute(&self, data: &ChooseAddressData) -> Result<String, TemplateError> {
        self.rendered.lock().unwrap().push(data.clone());
        if self.fail {
            Err(TemplateError::new("err"))
        } else {
            Ok("rendered".into())
        }
    }
}

/// A handler wired to fresh fakes, with the fakes kept for assertions.
pub struct Harness<T> {
    pub handler: AddressHandler<T>,
    pub logger: Arc<RecordingLogger>,
    pub template: Arc<RecordingTemplate>,
    pub client: Arc<FakeAddressClient>,
    pub store: Arc<FakeDonorStore>,
}

impl<T: AddressTarget> Harness<T> {
    pub fn new(target: T) -> Self {
        Self::with(
            target,
            RecordingTemplate::default(),
            FakeAddressClient::found(vec![test_address()]),
            FakeDonorStore::default(),
        )
    }

    pub fn with(
        target: T,
        template: RecordingTemplate,
        client: FakeAddressClient,
        store: FakeDonorStore,
    ) -> Self {
        let logger = Arc::new(RecordingLogger::default());
        let template = Arc::new(template);
        let client = Arc::new(client);
        let store = Arc::new(store);

        Self {
            handler: AddressHandler::new(
                target,
                logger.clone(),
                template.clone(),
                client.clone(),
                store.clone(),
            ),
            logger,
            template,
            client,
            store,
        }
    }
}
