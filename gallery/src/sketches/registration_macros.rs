/// Build a [`RuntimeRegistry`](crate::runtime::registry::RuntimeRegistry)
/// from category blocks of sketch modules. Each module must expose
/// `SKETCH_CONFIG: SketchConfig` and `fn init() -> impl Sketch`.
#[macro_export]
macro_rules! register_sketches {
    (
        $(
            {
                title: $title:expr,
                enabled: $enabled:expr,
                sketches: [$($module:ident),* $(,)?]
            }
        ),+ $(,)?
    ) => {{
        (|| -> $crate::core::error::Result<
            $crate::runtime::registry::RuntimeRegistry,
        > {
            let mut __registry =
                $crate::runtime::registry::RuntimeRegistry::new();

            $(
                let mut __category_sketches = Vec::new();
                $(
                    __registry.register(
                        &$module::SKETCH_CONFIG,
                        Box::new($module::init()),
                    )?;
                    __category_sketches
                        .push($module::SKETCH_CONFIG.name.to_string());
                )*

                __registry.define_category(
                    $title,
                    $enabled,
                    __category_sketches,
                )?;
            )+

            Ok(__registry)
        })()
    }};
}
