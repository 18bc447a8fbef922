//! Panic Handler - Tratamento de pânicos do kernel
//!
//! Implementação do panic handler obrigatório para kernels no_std.
//!
//! Nesta fase do sistema não existe camada abaixo para reportar erros:
//! o handler registra o local do pânico na serial (sem core::fmt, escrita
//! crua) e trava a CPU com interrupções desabilitadas — a mesma disciplina
//! terminal da rede de segurança do trampolim de boot.

use core::panic::PanicInfo;

use crate::drivers::serial;

/// Panic handler do kernel.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    crate::kerror!("KERNEL PANIC");

    if let Some(location) = info.location() {
        serial::emit_str("  em ");
        serial::emit_str(location.file());
        serial::emit_str(":");
        serial::emit_hex(location.line());
        serial::emit_nl();
    }

    // Interrupções fora, CPU parada para sempre
    loop {
        unsafe {
            core::arch::asm!("cli", "hlt", options(nomem, nostack));
        }
    }
}
