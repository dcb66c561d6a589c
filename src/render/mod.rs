pub(crate) mod config;
pub(crate) mod layout;
pub(crate) mod overlay;
pub(crate) mod polaroid;
pub(crate) mod preview;
