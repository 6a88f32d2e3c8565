//! publisher-core: headless state for a social-network post composer
//!
//! A composer owns one draft (text, photos, audience, cross-posting services
//! and location) and turns user actions and upload callbacks into explicit
//! state transitions. Renderers read a declarative [`ComposerView`]; the
//! network is reached only through the [`Transport`] trait.
//!
//! # Main Entry Points
//!
//! - [`composer`] - The state aggregator and its view
//! - [`state`] - Commands, events and the dispatching store
//! - [`draft`] - Draft data model and pure selection rules
//! - [`config`] - Configuration management
//! - [`i18n`] - Message keys and catalogs

pub mod composer;
pub mod config;
pub mod draft;
pub mod errors;
pub mod i18n;
pub mod logging;
pub mod state;
pub mod transport;

// Re-export commonly used types at crate root for convenience
pub use composer::{Composer, ComposerError, ComposerView, Submission};
pub use config::PublisherConfig;
pub use draft::{
    AspectId, AttachmentStatus, ClientId, Draft, LocationRef, ServiceId, UploadOutcome,
    VisibilityScope, VisibilityTarget,
};
pub use errors::PublisherError;
pub use i18n::{Catalog, Message, Translate};
pub use state::{Command, ComposerStore, DispatchError, Event, IgnoreReason, Store};
pub use transport::{OfflineTransport, SubmitReceipt, Transport, TransportError};

// Logging
pub use logging::init_logging;
