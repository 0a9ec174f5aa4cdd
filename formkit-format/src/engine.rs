//! The value formatting engine.
//!
//! `format` turns a stored value into a single formatted unit or a multi-unit
//! composition, dispatching four ways: single vs. multiple value, HTML vs.
//! text rendering. All failure modes degrade — unresolvable types format
//! through the placeholder, shape mismatches classify as absent, unknown
//! format ids fall back to defaults — because this code renders already-
//! submitted data and must never fatal during display.

use crate::composite::{
    AddressRenderer, CompositeRenderer, LinkRenderer, NameRenderer, TelephoneRenderer,
    format_composite, rendered_parts,
};
use crate::formatters::{
    BooleanFormatter, DateFormatter, GenericFormatter, ItemContext, ItemFormatter, LinkFormatter,
    OptionsFormatter, PasswordFormatter,
};
use crate::items::{combine, is_known_items_format};
use crate::output::{Formatted, Join};
use crate::template::referenced_item_formats;
use formkit_model::{
    DefaultsProvider, ElementInstance, ElementType, FormatSpec, NoDefaults, Shape,
};
use formkit_registry::ElementTypeRegistry;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Whether a formatted value is being rendered for HTML display or plain
/// text (email bodies, exports).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Html,
    Text,
}

/// The formatting engine: a type registry plus per-type formatting
/// strategies and composite renderers, with an injected source of global
/// format defaults.
///
/// Stateless aside from shared immutable configuration; formatting calls for
/// different submissions may run concurrently without coordination.
pub struct FormatEngine {
    registry: Arc<ElementTypeRegistry>,
    formatters: HashMap<String, Box<dyn ItemFormatter>>,
    composites: HashMap<String, Box<dyn CompositeRenderer>>,
    defaults: Box<dyn DefaultsProvider>,
    generic: GenericFormatter,
}

impl std::fmt::Debug for FormatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatEngine")
            .field("registry", &self.registry)
            .field("formatters", &self.formatters.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl FormatEngine {
    /// Creates an engine over the given registry with the builtin formatting
    /// strategies installed.
    pub fn new(registry: Arc<ElementTypeRegistry>) -> Self {
        let mut engine = Self {
            registry,
            formatters: HashMap::new(),
            composites: HashMap::new(),
            defaults: Box::new(NoDefaults),
            generic: GenericFormatter,
        };
        engine.register_formatter("checkbox", Box::new(BooleanFormatter));
        engine.register_formatter("password", Box::new(PasswordFormatter));
        engine.register_formatter("date", Box::new(DateFormatter::date()));
        engine.register_formatter("datetime", Box::new(DateFormatter::date()));
        engine.register_formatter("datelist", Box::new(DateFormatter::date()));
        engine.register_formatter("time", Box::new(DateFormatter::time()));
        engine.register_formatter("url", Box::new(LinkFormatter::url()));
        engine.register_formatter("email", Box::new(LinkFormatter::email()));
        engine.register_formatter("select", Box::new(OptionsFormatter));
        engine.register_formatter("radios", Box::new(OptionsFormatter));
        engine.register_formatter("checkboxes", Box::new(OptionsFormatter));
        engine.register_formatter("select_other", Box::new(OptionsFormatter));
        engine.register_composite_renderer("name", Box::new(NameRenderer));
        engine.register_composite_renderer("address", Box::new(AddressRenderer));
        engine.register_composite_renderer("telephone", Box::new(TelephoneRenderer));
        engine.register_composite_renderer("link", Box::new(LinkRenderer));
        engine
    }

    /// Injects the global per-type format defaults tier.
    pub fn with_defaults_provider(mut self, defaults: Box<dyn DefaultsProvider>) -> Self {
        self.defaults = defaults;
        self
    }

    /// Installs or replaces the single-item strategy for a type id.
    pub fn register_formatter(&mut self, type_id: &str, formatter: Box<dyn ItemFormatter>) {
        self.formatters.insert(type_id.to_string(), formatter);
    }

    /// Installs or replaces the composite renderer for a type id.
    pub fn register_composite_renderer(
        &mut self,
        type_id: &str,
        renderer: Box<dyn CompositeRenderer>,
    ) {
        self.composites.insert(type_id.to_string(), renderer);
    }

    pub fn registry(&self) -> &ElementTypeRegistry {
        &self.registry
    }

    /// Formats a stored value for display or export.
    pub fn format(
        &self,
        instance: &ElementInstance,
        value: Option<&Value>,
        spec: &FormatSpec,
        mode: RenderMode,
    ) -> Formatted {
        self.format_with_data(instance, value, spec, mode, None)
    }

    /// Text rendering shorthand: always a plain string.
    pub fn format_text(
        &self,
        instance: &ElementInstance,
        value: Option<&Value>,
        spec: &FormatSpec,
    ) -> String {
        self.format(instance, value, spec, RenderMode::Text)
            .to_text()
    }

    /// Formats a stored value with access to the containing submission's
    /// value map (needed by containers and by custom-template contexts).
    pub fn format_with_data(
        &self,
        instance: &ElementInstance,
        value: Option<&Value>,
        spec: &FormatSpec,
        mode: RenderMode,
        data: Option<&Map<String, Value>>,
    ) -> Formatted {
        let ty = self.registry.resolve(&instance.type_id);

        if ty.caps.container {
            return self.format_container(instance, spec, mode, data);
        }

        let multiple = instance.has_multiple(&ty);
        let shape = Shape::classify(value, ty.caps.composite, multiple);
        if matches!(shape, Shape::Absent) {
            return Formatted::Empty;
        }

        if multiple {
            self.format_multiple(instance, &ty, value, shape, spec, mode, data)
        } else {
            self.format_single(instance, &ty, value, shape, spec, mode, data)
        }
    }

    /// Containers have no value of their own; they format their children
    /// against the submission map, one per line.
    fn format_container(
        &self,
        instance: &ElementInstance,
        spec: &FormatSpec,
        mode: RenderMode,
        data: Option<&Map<String, Value>>,
    ) -> Formatted {
        let Some(data) = data else {
            return Formatted::Empty;
        };
        let items: Vec<Formatted> = instance
            .children
            .iter()
            .map(|child| {
                self.format_with_data(child, data.get(&child.key), spec, mode, Some(data))
            })
            .filter(|f| !f.is_empty())
            .collect();
        if items.is_empty() {
            Formatted::Empty
        } else {
            Formatted::Joined {
                join: Join::LineBreak,
                items,
            }
        }
    }

    fn format_multiple(
        &self,
        instance: &ElementInstance,
        ty: &ElementType,
        value: Option<&Value>,
        shape: Shape<'_>,
        spec: &FormatSpec,
        mode: RenderMode,
        data: Option<&Map<String, Value>>,
    ) -> Formatted {
        let mut items_format = spec.resolve_items(instance, ty, self.defaults.as_ref());
        if items_format == "custom" {
            match spec.resolve_items_template(instance) {
                Some(template) => {
                    return self.custom_output(instance, ty, value, template, data);
                }
                None => {
                    debug!(type_id = %ty.id, "custom items format without template, using type default");
                    items_format = ty.default_items_format.clone();
                }
            }
        }
        if !is_known_items_format(&items_format) {
            debug!(type_id = %ty.id, %items_format, "unknown items format, using type default");
            items_format = ty.default_items_format.clone();
        }

        let elements: &[Value] = match shape {
            Shape::List(items) | Shape::CompositeList(items) => items,
            // Shape and multiple flag disagree; classify() already screened
            // this, so nothing to iterate.
            _ => return Formatted::Empty,
        };
        let item_format = spec.resolve_item(instance, ty, self.defaults.as_ref());
        let formatted: Vec<Formatted> = elements
            .iter()
            .map(|element| self.format_one(instance, ty, element, &item_format, mode))
            .collect();
        combine(&items_format, formatted)
    }

    fn format_single(
        &self,
        instance: &ElementInstance,
        ty: &ElementType,
        value: Option<&Value>,
        shape: Shape<'_>,
        spec: &FormatSpec,
        mode: RenderMode,
        data: Option<&Map<String, Value>>,
    ) -> Formatted {
        let item_format = spec.resolve_item(instance, ty, self.defaults.as_ref());
        if item_format == "custom" {
            if let Some(template) = spec.resolve_item_template(instance) {
                return self.custom_output(instance, ty, value, template, data);
            }
            debug!(type_id = %ty.id, "custom item format without template, using type default");
            return match shape {
                Shape::Scalar(v) => {
                    self.format_one(instance, ty, v, &ty.default_item_format, mode)
                }
                Shape::Composite(map) => {
                    self.composite_output(instance, ty, map, &ty.default_item_format, mode)
                }
                _ => Formatted::Empty,
            };
        }
        match shape {
            Shape::Scalar(v) => self.format_one(instance, ty, v, &item_format, mode),
            Shape::Composite(map) => self.composite_output(instance, ty, map, &item_format, mode),
            _ => Formatted::Empty,
        }
    }

    /// Formats one stored element: composite values flatten, scalars go
    /// through the per-type strategy.
    fn format_one(
        &self,
        instance: &ElementInstance,
        ty: &ElementType,
        value: &Value,
        item_format: &str,
        mode: RenderMode,
    ) -> Formatted {
        if ty.caps.composite {
            return match value.as_object() {
                Some(map) => self.composite_output(instance, ty, map, item_format, mode),
                // A non-map element inside a composite list is a shape
                // violation; treat as absent.
                None => Formatted::Empty,
            };
        }
        self.format_item(instance, ty, value, item_format, mode)
    }

    fn composite_output(
        &self,
        instance: &ElementInstance,
        ty: &ElementType,
        value: &Map<String, Value>,
        item_format: &str,
        mode: RenderMode,
    ) -> Formatted {
        let parts = rendered_parts(instance, ty, value);
        let renderer = self.composites.get(&ty.id).map(Box::as_ref);
        format_composite(&parts, item_format, mode == RenderMode::Html, renderer)
    }

    /// Single-item formatting through the type's strategy, with the unknown-
    /// format and missing-html fallbacks applied.
    fn format_item(
        &self,
        instance: &ElementInstance,
        ty: &ElementType,
        value: &Value,
        item_format: &str,
        mode: RenderMode,
    ) -> Formatted {
        let format = if ty.knows_item_format(item_format) {
            item_format
        } else {
            debug!(type_id = %ty.id, item_format, "unknown item format, using value");
            "value"
        };
        let ctx = ItemContext {
            instance,
            ty,
            value,
            format,
        };
        let formatter = self
            .formatters
            .get(&ty.id)
            .map(Box::as_ref)
            .unwrap_or(&self.generic);
        let formatted = match mode {
            RenderMode::Html => formatter.format_html(&ctx),
            RenderMode::Text => formatter.format_text(&ctx).map(Formatted::Text),
        };
        if let Some(formatted) = formatted {
            return formatted;
        }
        // The type declared the format but its strategy does not produce it;
        // degrade to the generic value rendering.
        let ctx = ItemContext {
            format: "value",
            ..ctx
        };
        match mode {
            RenderMode::Html => self.generic.format_html(&ctx).unwrap_or(Formatted::Empty),
            RenderMode::Text => self
                .generic
                .format_text(&ctx)
                .map(Formatted::Text)
                .unwrap_or(Formatted::Empty),
        }
    }

    /// Text rendering of one element under one item format, used for
    /// template-context pre-rendering.
    fn item_text(
        &self,
        instance: &ElementInstance,
        ty: &ElementType,
        value: &Value,
        item_format: &str,
    ) -> String {
        self.format_one(instance, ty, value, item_format, RenderMode::Text)
            .to_text()
    }

    /// Builds the custom-template output: the template string plus a context
    /// map with `value`, pre-rendered `item`/`items` entries for each format
    /// the template references, and the containing submission's `data` map.
    fn custom_output(
        &self,
        instance: &ElementInstance,
        ty: &ElementType,
        value: Option<&Value>,
        template: &str,
        data: Option<&Map<String, Value>>,
    ) -> Formatted {
        let referenced = referenced_item_formats(template);
        let mut context = Map::new();
        context.insert("value".into(), value.cloned().unwrap_or(Value::Null));

        match value {
            Some(Value::Array(elements)) => {
                let items: Vec<Value> = elements
                    .iter()
                    .map(|element| {
                        Value::Object(self.prerendered(instance, ty, element, &referenced))
                    })
                    .collect();
                context.insert("items".into(), Value::Array(items));
            }
            Some(single) => {
                context.insert(
                    "item".into(),
                    Value::Object(self.prerendered(instance, ty, single, &referenced)),
                );
            }
            None => {}
        }

        context.insert(
            "data".into(),
            data.map(|d| Value::Object(d.clone())).unwrap_or(json!({})),
        );
        Formatted::Custom {
            template: template.to_string(),
            context,
        }
    }

    fn prerendered(
        &self,
        instance: &ElementInstance,
        ty: &ElementType,
        value: &Value,
        formats: &[String],
    ) -> Map<String, Value> {
        let mut map = Map::new();
        for format in formats {
            map.insert(
                format.clone(),
                Value::String(self.item_text(instance, ty, value, format)),
            );
        }
        map
    }
}
