pub(crate) mod chain;
pub(crate) mod newline_per_chained_call;
