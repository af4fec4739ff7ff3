mod generic_label;

pub use generic_label::GenericLabelPolicy;
