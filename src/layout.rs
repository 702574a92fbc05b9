pub(crate) mod buffer;
pub(crate) mod dims;
pub(crate) mod tiles;
