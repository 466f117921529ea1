/// Marker trait for intents: user actions, request completions and
/// navigation events fed to a reducer.
pub trait Intent: Send + 'static {}
