//! Core Module
//!
//! Contém a lógica central do kernel de bootstrap: a sequência de boot
//! (cabeçalho Multiboot, construtores globais, ponto de entrada) e o
//! sistema de logging.

pub mod boot;
pub mod logging;

#[cfg(feature = "self_test")]
pub mod test;
