mod origin;

pub use origin::{OriginGuardFactory, OriginGuardService};
