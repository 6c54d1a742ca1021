mod matcher;
mod partition;

#[doc(inline)]
pub use matcher::{match_nuts_bolts, match_nuts_bolts_ord};
#[doc(inline)]
pub use partition::partition;
