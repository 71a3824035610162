//! One filter request, end to end.
//!
//! decode -> form action -> cross-filter scopes -> options and bounds -> payload.

use std::time::Instant;

use shopfilter_observability::{LogLevel, StructuredLogger};

use crate::catalog::CatalogIndex;
use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::facet::{
    decode_reported, form_action, parse_query_string, query_of, FacetDimension, FacetState,
    QueryParams, RejectReason,
};
use crate::render::{render, FilterPayload, ResolvedFacets};
use crate::resolve::{resolve_category_options, resolve_price_bounds, resolve_tag_options};

/// Renders the filter sidebar against a catalog.
pub struct FilterPipeline<C> {
    catalog: C,
    config: FilterConfig,
    logger: StructuredLogger,
}

impl<C: CatalogIndex> FilterPipeline<C> {
    pub fn new(catalog: C, config: FilterConfig, logger: StructuredLogger) -> Self {
        Self {
            catalog,
            config,
            logger,
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Render the payload for a request to `current_url` with query `params`.
    ///
    /// Malformed parameters are dropped and logged. Only a catalog failure
    /// or an unusable URL is an error.
    pub fn render(
        &self,
        params: &QueryParams,
        current_url: &str,
    ) -> Result<FilterPayload, FilterError> {
        let started = Instant::now();
        let state = self.decode(params);
        let base = validated_base(current_url)?;

        let resolved = self.resolve(&state)?;
        let payload = render(&resolved, &state, &self.config, &base);

        self.logger
            .info_builder("filters rendered")
            .field("form_action", base.as_str())
            .field_i64("controls", payload.control_count() as i64)
            .field_bool("price", payload.price.is_some())
            .duration_us("render_us", started.elapsed())
            .emit();

        Ok(payload)
    }

    /// Render for a full URL, reading the query string from it.
    pub fn render_url(&self, url: &str) -> Result<FilterPayload, FilterError> {
        self.render(&parse_query_string(query_of(url)), url)
    }

    /// Like [`FilterPipeline::render`], but shows no filters on failure.
    pub fn render_or_empty(&self, params: &QueryParams, current_url: &str) -> FilterPayload {
        match self.render(params, current_url) {
            Ok(payload) => payload,
            Err(e) => {
                self.logger
                    .error_builder("filters omitted")
                    .field("error", e.to_string())
                    .emit();
                FilterPayload::empty()
            }
        }
    }

    fn decode(&self, params: &QueryParams) -> FacetState {
        let decoded = decode_reported(params);

        for rejected in &decoded.rejected {
            let reason = match rejected.reason {
                RejectReason::MalformedPrice => "malformed price",
                RejectReason::UnknownSort => "unknown sort key",
            };
            self.logger
                .warn_builder("ignored query parameter")
                .field("param", rejected.key.as_str())
                .field("value", rejected.value.as_str())
                .field("reason", reason)
                .emit();
        }

        let state = decoded.state;
        if self.logger.enabled(LogLevel::Debug) {
            self.logger
                .debug_builder("facet state decoded")
                .field("categories", state.categories.join())
                .field("tags", state.tags.join())
                .field_bool("price_range", state.has_price_range())
                .field("orderby", state.sort.as_str())
                .field_i64("preserved", state.preserved.len() as i64)
                .emit();
        }

        state
    }

    /// Each facet is resolved over the products matching every other active facet.
    fn resolve(&self, state: &FacetState) -> Result<ResolvedFacets, FilterError> {
        let mut resolved = ResolvedFacets::default();

        if self.config.categories.enabled {
            let scope = self
                .catalog
                .matching_product_ids(state, Some(FacetDimension::Categories))?;
            let options =
                resolve_category_options(&self.catalog, &scope, state, &self.config.categories)?;
            self.log_options("categories", scope.len(), options.len());
            resolved.categories = Some(options);
        }

        if self.config.tags.enabled {
            let scope = self
                .catalog
                .matching_product_ids(state, Some(FacetDimension::Tags))?;
            let options = resolve_tag_options(&self.catalog, &scope, state, &self.config.tags)?;
            self.log_options("tags", scope.len(), options.len());
            resolved.tags = Some(options);
        }

        if self.config.price.enabled {
            let scope = self
                .catalog
                .matching_product_ids(state, Some(FacetDimension::Price))?;
            resolved.price = resolve_price_bounds(&self.catalog, &scope)?;

            let logger = self.logger.for_widget("price");
            match resolved.price {
                Some(bounds) => logger
                    .debug_builder("price bounds resolved")
                    .field_i64("min", bounds.min)
                    .field_i64("max", bounds.max)
                    .emit(),
                None => logger
                    .debug_builder("price facet suppressed")
                    .field_i64("scope", scope.len() as i64)
                    .emit(),
            }
        }

        Ok(resolved)
    }

    fn log_options(&self, widget: &str, scope: usize, options: usize) {
        let logger = self.logger.for_widget(widget);
        let message = if options == 0 {
            "facet suppressed"
        } else {
            "options resolved"
        };
        logger
            .debug_builder(message)
            .field_i64("scope", scope as i64)
            .field_i64("options", options as i64)
            .emit();
    }
}

/// The navigation base for `url`, or an error if it cannot be one.
fn validated_base(url: &str) -> Result<String, FilterError> {
    let invalid = || FilterError::InvalidBaseUrl(url.to_string());

    if url.trim().is_empty() {
        return Err(invalid());
    }

    let base = form_action(url);
    if base.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid());
    }
    if base.contains("://") && url::Url::parse(&base).is_err() {
        return Err(invalid());
    }

    Ok(base)
}
