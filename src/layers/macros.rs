//! Macros to reduce boilerplate in layer implementations

/// Implements the `Layer` accessors backed by a `LayerProperties` field.
///
/// Usage:
/// ```ignore
/// impl Layer for MyLayer {
///     impl_layer_trait!(properties);
///     fn options(&self) -> serde_json::Value { ... }
/// }
/// ```
#[macro_export]
macro_rules! impl_layer_trait {
    ($properties_field:ident) => {
        fn id(&self) -> &str {
            &self.$properties_field.id
        }

        fn name(&self) -> &str {
            &self.$properties_field.name
        }

        fn layer_type(&self) -> $crate::layers::base::LayerType {
            self.$properties_field.layer_type
        }

        fn is_visible(&self) -> bool {
            self.$properties_field.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.$properties_field.visible = visible;
        }
    };
}
