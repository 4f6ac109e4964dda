//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! the hosted backend's SDK surface.

pub mod auth;
pub mod errors;
pub mod feedback;
pub mod image_picker;
pub mod object_storage;
pub mod profile_rows;

pub use auth::{AuthPort, AuthUser};
pub use errors::{AuthError, RowStoreError, StorageError};
pub use feedback::{Alert, AlertVariant, FeedbackPort};
pub use image_picker::{ImagePickerPort, PickedImage};
pub use object_storage::ObjectStoragePort;
pub use profile_rows::{ProfilePatch, ProfileRowPort};
