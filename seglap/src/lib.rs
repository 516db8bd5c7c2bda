#[cfg(feature = "core")]
#[doc(inline)]
pub use seglap_core as core;

#[cfg(feature = "overlaprs")]
#[doc(inline)]
pub use seglap_overlaprs as overlaprs;

#[cfg(feature = "io")]
#[doc(inline)]
pub use seglap_io as io;
