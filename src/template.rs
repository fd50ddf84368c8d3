use crate::data::ChooseAddressData;
use crate::error::TemplateError;

/// Renders the address page.
pub trait Template: Send + Sync {
    fn execute(&self, data: &ChooseAddressData) -> Result<String, TemplateError>;
}

impl<F> Template for F
where
    F: Fn(&ChooseAddressData) -> Result<String, TemplateError> + Send + Sync,
{
    fn execute(&self, data: &ChooseAddressData) -> Result<String, TemplateError> {
        self(data)
    }
}
