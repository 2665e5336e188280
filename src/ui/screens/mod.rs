pub(crate) mod comparison;
pub(crate) mod surplus;
pub(crate) mod trends;
