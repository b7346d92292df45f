//! Accessor generation macros
//!
//! These macros eliminate repetitive match code on the crate's sum types.
//! They use `paste` internally for identifier concatenation.

// =============================================================================
// Enum accessor generation
// =============================================================================

/// Generate is_xxx, as_xxx, as_xxx_mut for enums with typed variants
///
/// Uses paste's `:camel` modifier to convert the method name to both the
/// variant name and the payload type name.
///
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool`
/// - `as_xxx(&self) -> Option<&Type>`
/// - `as_xxx_mut(&mut self) -> Option<&mut Type>`
///
/// # Example
/// ```ignore
/// impl Node {
///     // element -> Element, text -> Text
///     impl_enum_accessors!(element, text);
/// }
/// ```
#[macro_export]
macro_rules! impl_enum_accessors {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " variant"]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get as " $variant " reference"]
                pub fn [<as_ $variant>](&self) -> Option<&[<$variant:camel>]> {
                    match self {
                        Self::[<$variant:camel>](v) => Some(v),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }

                #[doc = "Try to get as mutable " $variant " reference"]
                pub fn [<as_ $variant _mut>](&mut self) -> Option<&mut [<$variant:camel>]> {
                    match self {
                        Self::[<$variant:camel>](v) => Some(v),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            )*
        }
    };
}
