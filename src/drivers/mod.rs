//! # Kernel Driver Layer
//!
//! O kernel de bootstrap mantém APENAS os dois sumidouros de diagnóstico:
//!
//! | Driver   | Arquivo      | Papel |
//! |----------|--------------|-------|
//! | Serial   | `serial.rs`  | Logging de kernel (COM1, zero overhead) |
//! | VGA      | `vga.rs`     | Mensagem de boot no modo texto 80x25 |
//!
//! Drivers de verdade (timer, teclado, blocos) pertencem a camadas que
//! ainda não existem nesta fase do sistema.

pub mod serial; // UART 16550 - Logs
pub mod vga; // Modo texto 80x25 - Diagnóstico de boot
