use super::events::Event;
use super::types::Command;

/// Trait for dispatching composer commands.
///
/// Decouples command definitions from their execution. A UI implements it
/// over its own transport; the CLI replays scripts through [`super::ComposerStore`].
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received. No implicit batching.
/// - **Ignored commands**: A command that must not change anything (composer
///   disabled, stale upload callback, nothing to do) succeeds with a single
///   `Event::CommandIgnored`. Late callbacks therefore never surface as errors.
/// - **Errors**: Reserved for requests that were refused (invalid upload,
///   draft not submittable) or transport failures while submitting.
/// - **Events**: On success, dispatch returns a non-empty `Vec<Event>` in
///   chronological order. Compound commands (`Clear`, `Submit`) emit one
///   event per step.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
