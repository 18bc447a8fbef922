//! Brasa Kernel Library.
//!
//! Ponto central de exportação dos módulos do kernel de bootstrap.
//! O binário (main.rs) só contém o cabeçalho Multiboot, a stack e o
//! trampolim de entrada; todo o resto mora aqui.

#![no_std]

// --- Módulos de Baixo Nível (Hardware) ---
pub mod drivers; // Drivers de diagnóstico (Serial, VGA texto)

// --- Módulos Centrais (Lógica do Kernel) ---
pub mod core; // Boot (Multiboot, ctors, entry) e Logging
pub mod klib; // Utilitários internos (framework de testes)
pub mod panic; // Panic handler obrigatório para no_std
