/// Macro to generate `From` implementations mapping lettre errors onto a
/// sender error type
///
/// Usage:
/// ```ignore
/// impl_lettre_error_conversions!(EmailError, InvalidAddress, Build, Transport);
/// ```
#[macro_export]
macro_rules! impl_lettre_error_conversions {
  ($error_type:ty, $address_variant:ident, $build_variant:ident, $transport_variant:ident) => {
    impl From<lettre::address::AddressError> for $error_type {
      fn from(err: lettre::address::AddressError) -> Self {
        <$error_type>::$address_variant(err.to_string())
      }
    }

    impl From<lettre::error::Error> for $error_type {
      fn from(err: lettre::error::Error) -> Self {
        <$error_type>::$build_variant(err.to_string())
      }
    }

    impl From<lettre::transport::smtp::Error> for $error_type {
      fn from(err: lettre::transport::smtp::Error) -> Self {
        <$error_type>::$transport_variant(err.to_string())
      }
    }
  };
}
