mod uf;

pub use uf::Uf;
