/// Validation errors raised before an address is generated
use thiserror::Error;

/// The only two failures a generate action can report.
///
/// The `Display` text is the message shown to the user in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("يرجى إدخال اسم المستخدم")]
    MissingUsername,
    #[error("يرجى إدخال النطاق (Domain)")]
    MissingDomain,
}
