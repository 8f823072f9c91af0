//! Macros for declaring machine states.

/// Generate a [`State`](crate::core::State) implementation for a plain enum.
///
/// The enum also derives `Clone`, `PartialEq`, `Debug` and the serde traits.
/// Extra derives can be added as attributes.
///
/// # Example
///
/// ```
/// use dragtree::core::State;
/// use dragtree::state_enum;
///
/// state_enum! {
///     #[derive(Copy)]
///     pub enum Bracket {
///         Qualifying,
///         Eliminations,
///         Winner,
///         Disqualified,
///     }
///     final: [Winner, Disqualified]
///     error: [Disqualified]
/// }
///
/// assert_eq!(Bracket::Eliminations.name(), "Eliminations");
/// assert!(Bracket::Disqualified.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
