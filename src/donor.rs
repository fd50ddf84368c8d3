/*!
The donor's LPA as stored between requests.

Only the parts the address pages read or write are modelled here.
*/
use crate::address::Address;
use crate::task::Tasks;
use serde::{Deserialize, Serialize};

/// Everything the donor has told us about their LPA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DonorProvidedDetails {
    pub lpa_id: String,
    pub donor: Donor,
    pub attorneys: Attorneys,
    pub attorney_decisions: AttorneyDecisions,
    pub replacement_attorneys: Attorneys,
    pub replacement_attorney_decisions: AttorneyDecisions,
    pub certificate_provider: CertificateProvider,
    pub people_to_notify: Vec<PersonToNotify>,
    pub independent_witness: IndependentWitness,
    pub tasks: Tasks,
}

impl DonorProvidedDetails {
    /// Distinct non-empty addresses already given for the donor, the
    /// certificate provider and every attorney, in that order.
    pub fn actor_addresses(&self) -> Vec<Address> {
        let mut addresses: Vec<Address> = Vec::new();

        let candidates = std::iter::once(&self.donor.address)
            .chain(std::iter::once(&self.certificate_provider.address))
            .chain(self.attorneys.addresses())
            .chain(self.replacement_attorneys.addresses());

        for address in candidates {
            if !address.is_empty() && !addresses.contains(address) {
                addresses.push(address.clone());
            }
        }

        addresses
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Donor {
    pub first_names: String,
    pub last_name: String,
    pub email: String,
    pub address: Address,
}

impl Donor {
    pub fn full_name(&self) -> String {
        full_name(&self.first_names, &self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attorney {
    pub id: String,
    pub first_names: String,
    pub last_name: String,
    pub email: String,
    pub address: Address,
}

impl Attorney {
    pub fn full_name(&self) -> String {
        full_name(&self.first_names, &self.last_name)
    }
}

/// A company acting as an attorney.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrustCorporation {
    pub name: String,
    pub company_number: String,
    pub email: String,
    pub address: Address,
}

/// Individual attorneys plus at most one trust corporation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attorneys {
    pub attorneys: Vec<Attorney>,
    pub trust_corporation: Option<TrustCorporation>,
}

impl Attorneys {
    /// Number of attorneys, counting the trust corporation.
    pub fn len(&self) -> usize {
        self.attorneys.len() + usize::from(self.trust_corporation.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &str) -> Option<&Attorney> {
        self.attorneys.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Attorney> {
        self.attorneys.iter_mut().find(|a| a.id == id)
    }

    fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.trust_corporation
            .iter()
            .map(|t| &t.address)
            .chain(self.attorneys.iter().map(|a| &a.address))
    }
}

/// How several attorneys make decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttorneysAct {
    Jointly,
    JointlyAndSeverally,
    JointlyForSomeSeverallyForOthers,
}

impl AttorneysAct {
    pub fn as_str(&self) -> &'static str {
        use AttorneysAct::*;
        match *self {
            Jointly => "jointly",
            JointlyAndSeverally => "jointly-and-severally",
            JointlyForSomeSeverallyForOthers => "mixed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttorneyDecisions {
    pub how: Option<AttorneysAct>,
    /// Which decisions are made jointly, only used for the mixed option.
    pub details: String,
}

impl AttorneyDecisions {
    pub fn is_complete(&self) -> bool {
        match self.how {
            None => false,
            Some(AttorneysAct::JointlyForSomeSeverallyForOthers) => !self.details.is_empty(),
            Some(_) => true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Relationship {
    #[default]
    Personally,
    Professionally,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateProvider {
    pub first_names: String,
    pub last_name: String,
    pub email: String,
    pub relationship: Relationship,
    pub address: Address,
}

impl CertificateProvider {
    pub fn full_name(&self) -> String {
        full_name(&self.first_names, &self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonToNotify {
    pub id: String,
    pub first_names: String,
    pub last_name: String,
    pub address: Address,
}

impl PersonToNotify {
    pub fn full_name(&self) -> String {
        full_name(&self.first_names, &self.last_name)
    }
}

/// Witnesses the signature when the donor cannot sign themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndependentWitness {
    pub first_names: String,
    pub last_name: String,
    pub address: Address,
}

impl IndependentWitness {
    pub fn full_name(&self) -> String {
        full_name(&self.first_names, &self.last_name)
    }
}

fn full_name(first_names: &str, last_name: &str) -> String {
    format!("{} {}", first_names, last_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(line1: &str) -> Address {
        Address {
            line1: line1.into(),
            ..Default::default()
        }
    }

    #[test]
    fn actor_addresses() {
        let donor = DonorProvidedDetails {
            donor: Donor {
                address: address("donor"),
                ..Default::default()
            },
            certificate_provider: CertificateProvider {
                address: address("donor"),
                ..Default::default()
            },
            attorneys: Attorneys {
                attorneys: vec![
                    Attorney {
                        address: address("attorney"),
                        ..Default::default()
                    },
                    Attorney::default(),
                ],
                trust_corporation: Some(TrustCorporation {
                    address: address("trust"),
                    ..Default::default()
                }),
            },
            replacement_attorneys: Attorneys {
                attorneys: vec![Attorney {
                    address: address("replacement"),
                    ..Default::default()
                }],
                trust_corporation: None,
            },
            ..Default::default()
        };

        assert_eq!(
            vec![
                address("donor"),
                address("trust"),
                address("attorney"),
                address("replacement"),
            ],
            donor.actor_addresses()
        );
    }

    #[test]
    fn attorneys_len_counts_trust_corporation() {
        let mut attorneys = Attorneys::default();
        assert!(attorneys.is_empty());

        attorneys.trust_corporation = Some(TrustCorporation::default());
        assert_eq!(1, attorneys.len());

        attorneys.attorneys.push(Attorney {
            id: "123".into(),
            ..Default::default()
        });
        assert_eq!(2, attorneys.len());
        assert!(attorneys.get("123").is_some());
        assert!(attorneys.get("456").is_none());
    }

    #[test]
    fn decisions_complete() {
        assert!(!AttorneyDecisions::default().is_complete());
        assert!(AttorneyDecisions {
            how: Some(AttorneysAct::JointlyAndSeverally),
            details: String::new(),
        }
        .is_complete());
        assert!(!AttorneyDecisions {
            how: Some(AttorneysAct::JointlyForSomeSeverallyForOthers),
            details: String::new(),
        }
        .is_complete());
    }

    #[test]
    fn full_name_keeps_space() {
        assert_eq!(" ", Attorney::default().full_name());
        assert_eq!(
            "John Smith",
            Donor {
                first_names: "John".into(),
                last_name: "Smith".into(),
                ..Default::default()
            }
            .full_name()
        );
    }
}
