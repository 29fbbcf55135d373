//! Stable identifiers for port failures.

/// Identifies which failure a port error represents.
///
/// Implemented for every enum generated by `define_port_error!`. Services use
/// [`FailureKind::failure_kind`] to describe a caught failure without naming
/// the concrete error type at the call site.
pub trait FailureKind {
    /// Name of the enum variant carried by this error.
    fn variant_name(&self) -> &'static str;

    /// Fully qualified type path of the error followed by its variant, for
    /// example `phonebook::domain::ports::user_repository::UserRepositoryError::Query`.
    fn failure_kind(&self) -> String {
        format!(
            "{}::{}",
            std::any::type_name_of_val(self),
            self.variant_name()
        )
    }
}
