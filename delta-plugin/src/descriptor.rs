use crate::change::Change;
use delta_core::error::ChangeError;

/// Zero-argument constructor for one change type.
pub type Constructor = fn() -> Result<Box<dyn Change>, ChangeError>;

/// Constructible reference to a change type.
///
/// This is the type-level handle the registry stores, never a live instance.
/// Every call to [`instantiate`](Self::instantiate) produces a new object.
#[derive(Clone, Copy)]
pub struct ChangeDescriptor {
    type_name: &'static str,
    construct: Constructor,
}

fn construct_default<C>() -> Result<Box<dyn Change>, ChangeError>
where
    C: Change + Default + 'static,
{
    Ok(Box::new(C::default()))
}

impl ChangeDescriptor {
    /// Descriptor for a type whose construction cannot fail.
    pub fn of<C>() -> Self
    where
        C: Change + Default + 'static,
    {
        Self {
            type_name: std::any::type_name::<C>(),
            construct: construct_default::<C>,
        }
    }

    /// Descriptor backed by an explicit, possibly failing, constructor.
    pub fn new(type_name: &'static str, construct: Constructor) -> Self {
        Self {
            type_name,
            construct,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Build a fresh instance.
    pub fn instantiate(&self) -> Result<Box<dyn Change>, ChangeError> {
        (self.construct)()
    }

    /// Construct a throwaway instance and return the key it declares.
    ///
    /// The instance is dropped; callers that need one must instantiate again.
    pub fn declared_name(&self) -> Result<String, ChangeError> {
        let instance = self.instantiate()?;
        Ok(instance.change_name().to_string())
    }
}

/// Descriptors compare by type label alone.
///
/// The constructor is not compared: function pointer addresses are not
/// stable across codegen units, so two descriptors built by `of::<C>()` could
/// differ. Callers that pass the same label to [`ChangeDescriptor::new`] with
/// different constructors get descriptors that compare equal.
impl PartialEq for ChangeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
    }
}

impl Eq for ChangeDescriptor {}

impl std::fmt::Debug for ChangeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeDescriptor")
            .field("type_name", &self.type_name)
            .finish()
    }
}
