//! Ponto de entrada do kernel.

use core::ffi::c_void;

use crate::drivers::vga;

/// Mensagem de diagnóstico fixa escrita no buffer de texto VGA.
const BOOT_BANNER: &str = "Brasa kernel online -- Redstone OS";

/// Ponto de entrada principal do kernel.
///
/// Chamado pelo `_start` em main.rs, com a stack válida e todos os
/// construtores globais já executados (pré-condições garantidas pelo
/// chamador, não re-checadas aqui).
///
/// # Argumentos (handoff Multiboot, encaminhados intactos pelo trampolim)
///
/// - `boot_info`: ponteiro opaco para a estrutura de boot-info do GRUB.
///   Emprestado pelo bootloader, somente leitura, válido por um ciclo de
///   boot. NÃO é interpretado nesta camada.
/// - `magic`: valor entregue em EAX (0x2BADB002 quando o boot foi Multiboot).
///   Registrado no log, deliberadamente não validado.
///
/// # Estado terminal
///
/// Depois do diagnóstico o kernel entra em loop infinito incondicional.
/// Isso não é um bug: não existe endereço de retorno válido, e manter a CPU
/// sob controle do kernel é o comportamento correto até existirem
/// interrupções e scheduler.
pub extern "C" fn kernel_main(boot_info: *const c_void, magic: u32) -> ! {
    crate::kinfo!("(Boot) Brasa kernel inicializando...");
    crate::kinfo!("(Boot) Magic do bootloader: ", magic);
    crate::kinfo!("(Boot) Boot-info em: ", boot_info as usize);

    #[cfg(feature = "self_test")]
    crate::core::test::run_boot_tests();

    vga::puts(BOOT_BANNER);
    crate::kinfo!("(Boot) Diagnostico emitido, estado terminal.");

    // Estado Halted-loop: hlt acorda em interrupção, mas nenhuma está
    // habilitada — a CPU fica parada aqui para sempre.
    loop {
        unsafe {
            core::arch::asm!("hlt", options(nomem, nostack, preserves_flags));
        }
    }
}
