pub(crate) mod atoms;
pub(crate) mod molecules;
pub(crate) mod shell;
pub(crate) mod toast;
