//! `define_port_error!` generates port error enums with `thiserror` messages
//! and one snake_case constructor per variant.
//!
//! Struct variant constructors take every field as `impl Into<T>`, so
//! `UserPersistenceError::query("timeout")` needs no `to_owned()`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = "Build [`Self::" $variant "`]."]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* }) => {
        ::paste::paste! {
            #[doc = "Build [`Self::" $variant "`] from its fields."]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
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
    use rstest::rstest;

    define_port_error! {
        /// Failures of an imaginary upstream link.
        pub enum LinkError {
            /// Nothing answered.
            Offline => "link offline",
            Refused { message: String } => "link refused: {message}",
            Slow { millis: u64 } => "link slow: {millis}ms",
            Moved { from: String, to: String } => "link moved from {from} to {to}",
        }
    }

    #[rstest]
    fn unit_variants_get_constructors() {
        assert_eq!(LinkError::offline(), LinkError::Offline);
        assert_eq!(LinkError::offline().to_string(), "link offline");
    }

    #[rstest]
    fn string_fields_accept_str() {
        let err = LinkError::refused("closed");
        assert_eq!(err, LinkError::Refused { message: "closed".to_owned() });
        assert_eq!(err.to_string(), "link refused: closed");
    }

    #[rstest]
    fn non_string_fields_keep_their_type() {
        assert_eq!(LinkError::slow(250_u64).to_string(), "link slow: 250ms");
    }

    #[rstest]
    fn multi_field_constructors_keep_field_order() {
        let err = LinkError::moved("a.example", String::from("b.example"));

        assert_eq!(
            err,
            LinkError::Moved {
                from: "a.example".to_owned(),
                to: "b.example".to_owned(),
            }
        );
        assert_eq!(err.to_string(), "link moved from a.example to b.example");
    }

    #[rstest]
    fn generated_enums_are_std_errors() {
        let err: Box<dyn std::error::Error> = Box::new(LinkError::offline());

        assert_eq!(err.to_string(), "link offline");
    }
}
