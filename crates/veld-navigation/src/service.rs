//! Navigation service facade
//!
//! Ties the table, the hosting context and the navigator together. Every
//! method is a pure read over the build-once table, so a shared service
//! can serve concurrent navigation calls without synchronization.

use tracing::debug;
use veld_router::{select_best_template, RouteTemplate};

use crate::error::NavigationError;
use crate::hosting::HostingContext;
use crate::navigator::{NavigationOptions, Navigator};
use crate::resolve::resolve_uri;
use crate::table::RouteTable;
use crate::target::ViewId;

/// Resolves view-model navigation intents into URIs and performs them.
pub struct NavigationService<H, N> {
    table: RouteTable,
    hosting: H,
    navigator: N,
}

impl<H: HostingContext, N: Navigator> NavigationService<H, N> {
    pub fn new(table: RouteTable, hosting: H, navigator: N) -> Self {
        Self {
            table,
            hosting,
            navigator,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// URI of the primary route for a view-model, with no substitution.
    ///
    /// Placeholders stay literal; for display and link generation.
    pub fn uri_for<T: 'static>(&self) -> Result<String, NavigationError> {
        let id = ViewId::of::<T>();
        let collection = self
            .table
            .collection_for(id)
            .ok_or_else(|| NavigationError::RouteNotFound(id.to_string()))?;
        Ok(self.resolve(collection.primary_template(), None))
    }

    /// URI of the primary route for a keyed target, with no substitution.
    pub fn uri_for_key(&self, key: &str) -> Result<String, NavigationError> {
        let collection = self
            .table
            .collection_for_key(key)
            .ok_or_else(|| NavigationError::KeyNotFound(key.to_string()))?;
        Ok(self.resolve(collection.primary_template(), None))
    }

    /// Resolves the best route for a view-model and navigates to it.
    pub fn navigate<T: 'static>(
        &self,
        parameters: Option<&str>,
        options: NavigationOptions,
    ) -> Result<(), NavigationError> {
        let id = ViewId::of::<T>();
        let collection = self
            .table
            .collection_for(id)
            .ok_or_else(|| NavigationError::RouteNotFound(id.to_string()))?;
        self.perform(select_best_template(collection, parameters), parameters, options);
        Ok(())
    }

    /// Resolves the best route for a keyed target and navigates to it.
    pub fn navigate_key(
        &self,
        key: &str,
        parameters: Option<&str>,
        options: NavigationOptions,
    ) -> Result<(), NavigationError> {
        let collection = self
            .table
            .collection_for_key(key)
            .ok_or_else(|| NavigationError::KeyNotFound(key.to_string()))?;
        self.perform(select_best_template(collection, parameters), parameters, options);
        Ok(())
    }

    fn perform(
        &self,
        template: &RouteTemplate,
        parameters: Option<&str>,
        options: NavigationOptions,
    ) {
        let uri = self.resolve(template, parameters);
        debug!(pattern = template.pattern(), %uri, "navigating");
        self.navigator.navigate_to(&uri, options);
    }

    fn resolve(&self, template: &RouteTemplate, parameters: Option<&str>) -> String {
        let prefix = self.hosting.active_prefix();
        resolve_uri(template, parameters, prefix.as_deref())
    }
}
