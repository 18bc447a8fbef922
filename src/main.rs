//! Kernel Brasa — Binário Principal.
//!
//! Responsabilidade:
//! 1. Expor o cabeçalho Multiboot para o GRUB (seção .multiboot).
//! 2. Reservar a Stack do kernel (2 MiB, zerada em .bss).
//! 3. Configurar o ambiente de execução "naked" (Assembly 32-bit).
//! 4. Rodar os construtores globais (tabela .ctors).
//! 5. Saltar para `core::boot::entry::kernel_main` (da biblioteca `brasa`).

#![no_std]
#![no_main]

// Importar a biblioteca do kernel.
use brasa::core as kernel_core;
use brasa::core::boot::multiboot::{MultibootHeader, BOOT_FLAGS};

/// Cabeçalho Multiboot consumido pelo GRUB antes da transferência de controle.
///
/// O linker script coloca a seção .multiboot no início da imagem, dentro dos
/// primeiros 8192 bytes exigidos pela especificação. Criado em build-time,
/// nunca lido em runtime.
#[used]
#[link_section = ".multiboot"]
static MULTIBOOT_HEADER: MultibootHeader = MultibootHeader::new(BOOT_FLAGS);

/// Tamanho da stack do kernel (2 MiB).
const STACK_SIZE: usize = 2 * 1024 * 1024;

// Stack do kernel. Por ser um static mut zerado, vai parar em .bss:
// não ocupa bytes em disco, o loader zera a região inteira.
// Esgotamento de stack é comportamento indefinido nesta camada (sem guard
// page antes de existir um VMM).
#[repr(align(16))]
struct KernelStack([u8; STACK_SIZE]);

static mut KERNEL_STACK: KernelStack = KernelStack([0; STACK_SIZE]);

/// Ponto de entrada Naked — a primeira instrução executada após o GRUB.
///
/// O handoff Multiboot entrega (sem validação nesta camada):
/// - EAX = magic do bootloader (0x2BADB002)
/// - EBX = ponteiro físico para a estrutura de boot-info
///
/// # Sequência
///
/// 1. ESP ← topo da stack reservada (stacks crescem para baixo).
/// 2. EBP ← 0 (frame pointer limpo para backtraces).
/// 3. Empilha EAX e EBX — viram, intocados e na ordem de chegada, a lista de
///    argumentos cdecl de `kernel_main(boot_info, magic)`. Empilhar ANTES de
///    chamar os construtores garante que nenhum construtor possa corromper o
///    par de registradores do handoff.
/// 4. `call invoke_all` — roda todos os construtores globais.
/// 5. `call kernel_main` — nunca retorna.
/// 6. Rede de segurança: se retornar mesmo assim, desabilita interrupções e
///    trava em `hlt`. Não existe chamador válido para onde voltar.
#[unsafe(naked)]
#[no_mangle]
#[link_section = ".text._start"]
pub extern "C" fn _start() -> ! {
    ::core::arch::naked_asm!(
        // 1. Stack Pointer no topo da região reservada
        "lea esp, [{stack} + {stack_size}]",

        // 2. Zerar EBP (Frame Pointer)
        "xor ebp, ebp",

        // 3. Preservar o handoff do GRUB como argumentos cdecl
        //    (push na ordem inversa: magic primeiro, boot-info por último)
        "push eax",
        "push ebx",

        // 4. Construtores globais (cdecl preserva ESP, os pushes continuam lá)
        "call {ctors}",

        // 5. kernel_main(boot_info, magic) — não retorna
        "call {kernel_main}",

        // 6. Rede de segurança: nunca cair para fora do fluxo de boot
        "cli",
        "2:",
        "hlt",
        "jmp 2b",

        stack = sym KERNEL_STACK,
        stack_size = const STACK_SIZE,
        ctors = sym kernel_core::boot::ctors::invoke_all,
        kernel_main = sym kernel_core::boot::entry::kernel_main,
    );
}
