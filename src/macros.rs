/// Expands each `name => field: Type` entry into a `fn name() -> RwSignal<Type>`
/// that reads `field` from [`crate::global_state::Globals`].
///
/// ```ignore
/// global_signals! {
///     pub live_enemies => live_enemies: usize,
///     pub fps => fps: f64,
/// }
///
/// live_enemies().set(stats.live_enemies);
/// ```
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
