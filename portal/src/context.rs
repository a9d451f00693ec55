//! Explicit scoped context for page composition.
//!
//! Pages need a couple of ambient values: the address service (the app's
//! store) and the date/time locale. Instead of reaching for globals, a
//! [`Provider`] owns the value and hands a borrow to a nested builder, and
//! providers nest by pairing an outer value with an inner one.
//!
//! ```
//! use portal::context::{AppContext, Provider};
//! use portal::domain::DateTimeLocale;
//!
//! let context = AppContext::offline(DateTimeLocale::EnIn);
//! let tag = Provider::new(context).scope(|ctx| ctx.locale().tag());
//! assert_eq!(tag, "en-IN");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::domain::DateTimeLocale;
use crate::domain::ports::{AddressService, FixtureAddressService};

/// Ambient values shared by every page of the user and admin apps.
#[derive(Clone)]
pub struct AppContext {
    addresses: Arc<dyn AddressService>,
    locale: DateTimeLocale,
}

impl AppContext {
    /// Bundle an address service with a locale.
    pub fn new(addresses: Arc<dyn AddressService>, locale: DateTimeLocale) -> Self {
        Self { addresses, locale }
    }

    /// Context backed by [`FixtureAddressService`].
    pub fn offline(locale: DateTimeLocale) -> Self {
        Self::new(Arc::new(FixtureAddressService), locale)
    }

    /// Address service used by pages.
    pub fn addresses(&self) -> &dyn AddressService {
        self.addresses.as_ref()
    }

    /// Locale used to render timestamps.
    pub fn locale(&self) -> DateTimeLocale {
        self.locale
    }

    /// Copy of this context with a different locale and the same service.
    #[must_use]
    pub fn with_locale(&self, locale: DateTimeLocale) -> Self {
        Self {
            addresses: Arc::clone(&self.addresses),
            locale,
        }
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

/// Owns a context value and lends it to nested builders.
#[derive(Debug, Clone)]
pub struct Provider<C> {
    context: C,
}

impl<C> Provider<C> {
    /// Provide `context` to whatever is built inside this provider.
    pub const fn new(context: C) -> Self {
        Self { context }
    }

    /// Run `builder` with the provided context.
    pub fn scope<T>(&self, builder: impl FnOnce(&C) -> T) -> T {
        builder(&self.context)
    }

    /// Nest a provider for `inner` inside this one.
    ///
    /// Builders of the nested provider see both values, outer first.
    pub fn nest<I>(self, inner: I) -> Provider<Scoped<C, I>> {
        Provider::new(Scoped {
            outer: self.context,
            inner,
        })
    }

    /// Give back the provided value.
    pub fn into_inner(self) -> C {
        self.context
    }
}

/// Pair of values seen by builders of a nested provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoped<O, I> {
    /// Value from the enclosing provider.
    pub outer: O,
    /// Value added by the nested provider.
    pub inner: I,
}
