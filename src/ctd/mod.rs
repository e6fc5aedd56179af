//! Composition / transition / distribution (CTD) descriptors
pub mod descriptors;
pub mod encoder;
pub mod encoding;
pub mod properties;

pub use descriptors::{composition, distribution, transition};
pub use encoder::{ctd, Ctd, VALUES_PER_TABLE};
pub use encoding::{encode_class, ClassEncoding};
pub use properties::{PropertyRegistry, PropertyTable, PROPERTY_TABLES};
