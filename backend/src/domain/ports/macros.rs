//! Defines helper macros for generating domain port error enums.

/// Declare a `thiserror` enum together with snake-case constructors.
///
/// Each struct-like variant gains a constructor whose parameters accept
/// `impl Into<T>`, so adapters can write `EnrollmentRepositoryError::unavailable("lock poisoned")`.
macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreProbeError {
            Closed => "store closed",
            Unavailable { message: String } => "store unavailable: {message}",
            Rejected { kind: String, count: usize } => "rejected {count} {kind} records",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(StoreProbeError::closed(), StoreProbeError::Closed);
        assert_eq!(StoreProbeError::closed().to_string(), "store closed");
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = StoreProbeError::unavailable("lock poisoned");
        assert_eq!(err.to_string(), "store unavailable: lock poisoned");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = StoreProbeError::rejected("enrollment", 2_usize);
        assert_eq!(err.to_string(), "rejected 2 enrollment records");
    }
}
