//! Binding registry keyed by library name

use crate::binding::ArrayBinding;
use axial_core::AxisError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Bindings for one array type, selected by library key.
///
/// The first binding registered becomes the default library until
/// [`set_default`](Self::set_default) picks another one.
///
/// # Examples
///
/// ```
/// use axial_exec::{BindingRegistry, DenseArray, DENSE_LIBRARY};
///
/// let registry = BindingRegistry::<DenseArray<f64>>::dense();
/// assert_eq!(registry.default_library(), Some(DENSE_LIBRARY));
/// assert!(registry.get("tensorflow").is_err());
/// ```
pub struct BindingRegistry<A> {
    bindings: HashMap<String, Arc<dyn ArrayBinding<A>>>,
    default_library: Option<String>,
}

impl<A> BindingRegistry<A> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            default_library: None,
        }
    }

    /// Register `binding` under its own library key, replacing any previous binding with that key
    pub fn register<B>(&mut self, binding: B) -> &mut Self
    where
        B: ArrayBinding<A> + 'static,
    {
        self.register_shared(Arc::new(binding))
    }

    /// Register an already shared binding
    pub fn register_shared(&mut self, binding: Arc<dyn ArrayBinding<A>>) -> &mut Self {
        let library = binding.library().to_string();
        if self.default_library.is_none() {
            self.default_library = Some(library.clone());
        }
        self.bindings.insert(library, binding);
        self
    }

    /// Make `library` the default selection.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::UnsupportedLibrary`] if nothing is registered under `library`.
    pub fn set_default(&mut self, library: &str) -> Result<(), AxisError> {
        if !self.bindings.contains_key(library) {
            return Err(unsupported(library));
        }
        self.default_library = Some(library.to_string());
        Ok(())
    }

    pub fn default_library(&self) -> Option<&str> {
        self.default_library.as_deref()
    }

    pub fn contains(&self, library: &str) -> bool {
        self.bindings.contains_key(library)
    }

    /// Registered library keys in sorted order
    pub fn libraries(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Binding registered under `library`.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::UnsupportedLibrary`] for an unknown key.
    pub fn get(&self, library: &str) -> Result<&dyn ArrayBinding<A>, AxisError> {
        self.bindings
            .get(library)
            .map(|b| b.as_ref())
            .ok_or_else(|| unsupported(library))
    }

    /// Binding for `library`, or the default binding when `library` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::UnsupportedLibrary`] for an unknown key or an empty registry.
    pub fn resolve(&self, library: Option<&str>) -> Result<&dyn ArrayBinding<A>, AxisError> {
        match library.or(self.default_library.as_deref()) {
            Some(library) => self.get(library),
            None => Err(unsupported("<default>")),
        }
    }
}

impl<A> Default for BindingRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for BindingRegistry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingRegistry")
            .field("libraries", &self.libraries())
            .field("default_library", &self.default_library)
            .finish()
    }
}

fn unsupported(library: &str) -> AxisError {
    AxisError::UnsupportedLibrary {
        library: library.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::{SymbolicBinding, SymbolicTensor, SYMBOLIC_LIBRARY};

    #[test]
    fn test_empty_registry_has_no_default() {
        let registry = BindingRegistry::<SymbolicTensor>::new();
        let err = registry.resolve(None).err().unwrap();
        assert_eq!(
            err,
            AxisError::UnsupportedLibrary {
                library: "<default>".to_string()
            }
        );
    }

    #[test]
    fn test_first_registration_becomes_default() {
        let mut registry = BindingRegistry::<SymbolicTensor>::new();
        registry.register(SymbolicBinding);

        assert_eq!(registry.default_library(), Some(SYMBOLIC_LIBRARY));
        assert_eq!(registry.resolve(None).unwrap().library(), SYMBOLIC_LIBRARY);
        assert_eq!(registry.libraries(), vec![SYMBOLIC_LIBRARY]);
    }

    #[test]
    fn test_unknown_library_is_unsupported() {
        let mut registry = BindingRegistry::<SymbolicTensor>::symbolic();
        assert!(matches!(
            registry.resolve(Some("torch")),
            Err(AxisError::UnsupportedLibrary { .. })
        ));
        assert!(registry.set_default("torch").is_err());
        assert_eq!(registry.default_library(), Some(SYMBOLIC_LIBRARY));
    }
}
