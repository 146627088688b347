mod fill;

pub use fill::NonzeroFill;
