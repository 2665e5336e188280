mod detect;
mod load;

pub(crate) use load::{load, LedgerProfile};
