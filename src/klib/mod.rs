//! Utilitários Internos do Kernel

pub mod test_framework;
