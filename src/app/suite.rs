use crate::app::assert::Failure;
use crate::app::error::RunError;
use crate::app::hooks::Method;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// A group of tests and their lifecycle hooks.
///
/// Instances are shared behind an `Arc` so that a test running on a timeout
/// worker keeps its own handle; state that tests mutate therefore needs
/// interior mutability.
pub trait Suite: Send + Sync + Sized + 'static {
    /// Zero-argument constructor, called once per registration.
    fn create() -> Result<Self, Failure>;

    /// Tagged methods in declaration order.
    fn methods() -> Vec<Method<Self>>;

    /// Defaults to the type name without its path. Generic arguments are
    /// dropped, so `Wrapper<Inner>` is reported as `Wrapper`; override this
    /// to tell instantiations of a generic suite apart.
    fn name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

pub(crate) fn instantiate<S: Suite>() -> Result<Arc<S>, RunError> {
    let suite = S::name();
    match panic::catch_unwind(AssertUnwindSafe(S::create)) {
        Ok(Ok(instance)) => {
            trace!("Created instance of suite '{}'", suite);
            Ok(Arc::new(instance))
        }
        Ok(Err(failure)) => Err(RunError::Instantiation {
            suite,
            cause: failure.to_string(),
        }),
        Err(payload) => Err(RunError::Instantiation {
            suite,
            cause: panic_message(payload.as_ref()),
        }),
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {}", message)
    } else {
        "panicked with a non-string payload".to_owned()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Plain;

    impl Suite for Plain {
        fn create() -> Result<Self, Failure> {
            Ok(Plain)
        }

        fn methods() -> Vec<Method<Self>> {
            vec![]
        }
    }

    struct Refusing;

    impl Suite for Refusing {
        fn create() -> Result<Self, Failure> {
            Err(Failure::error("database unavailable"))
        }

        fn methods() -> Vec<Method<Self>> {
            vec![]
        }
    }

    struct Exploding;

    impl Suite for Exploding {
        fn create() -> Result<Self, Failure> {
            panic!("constructor exploded")
        }

        fn methods() -> Vec<Method<Self>> {
            vec![]
        }
    }

    #[test]
    fn test_default_name_is_short_type_name() {
        assert_eq!(Plain::name(), "Plain");
    }

    struct Wrapper<T>(std::marker::PhantomData<T>);

    impl<T: Send + Sync + 'static> Suite for Wrapper<T> {
        fn create() -> Result<Self, Failure> {
            Err(Failure::error("never created"))
        }

        fn methods() -> Vec<Method<Self>> {
            vec![]
        }
    }

    #[test]
    fn test_default_name_drops_generic_arguments() {
        assert_eq!(Wrapper::<Plain>::name(), "Wrapper");
        assert_eq!(Wrapper::<Vec<std::string::String>>::name(), "Wrapper");
        assert_eq!(short_type_name("a::b::Outer<c::Inner<d::Leaf>>"), "Outer");
    }

    #[test]
    fn test_instantiation_succeeds() {
        assert!(instantiate::<Plain>().is_ok());
    }

    #[test]
    fn test_constructor_error_is_instantiation_error() {
        let error = instantiate::<Refusing>().err().unwrap();

        assert_eq!(
            error,
            RunError::Instantiation {
                suite: "Refusing",
                cause: "database unavailable".to_owned(),
            }
        );
    }

    #[test]
    fn test_constructor_panic_is_instantiation_error() {
        let error = instantiate::<Exploding>().err().unwrap();

        match error {
            RunError::Instantiation { suite, cause } => {
                assert_eq!(suite, "Exploding");
                assert_eq!(cause, "panicked: constructor exploded");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
