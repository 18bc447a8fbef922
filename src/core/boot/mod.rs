//! # Boot - Inicialização do Sistema
//!
//! Sequência de boot e handoff do bootloader (Multiboot/GRUB).
//!
//! Fluxo: GRUB → `_start` (main.rs) → [`ctors::invoke_all`] →
//! [`entry::kernel_main`].

pub mod ctors;
pub mod entry;
pub mod multiboot;
