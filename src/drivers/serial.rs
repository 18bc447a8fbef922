// =============================================================================
// SERIAL DRIVER - ZERO OVERHEAD
// =============================================================================
//
// Driver de Porta Serial (COM1) para logging de kernel.
//
// ARQUITETURA:
// - SEM Mutex/Spinlock - Escrita direta via I/O ports
// - SEM core::fmt - Apenas strings literais e valores imediatos
// - SEM alocação, SEM interrupções
//
// Todas as escritas passam por `emit`, que faz busy-wait no Line Status
// Register (bit 5 = transmit buffer vazio) e envia o byte com `out`.
//
// FUNÇÕES DISPONÍVEIS:
// - emit(byte)       : Envia um byte
// - emit_str(s)      : Envia string
// - emit_hex(v)      : Envia u32 em hexadecimal (prefixo 0x)
// - emit_nl()        : Envia newline (\r\n)
//
// NOTA: Sem exclusão mútua — há exatamente um fluxo de controle neste
// kernel, do handoff até o loop terminal.
//
// =============================================================================

// Porta de dados da COM1
const COM1_DATA: u16 = 0x3F8;

// Porta de status da COM1 (Line Status Register)
const COM1_STATUS: u16 = 0x3FD;

// =============================================================================
// INICIALIZAÇÃO
// =============================================================================

/// Inicializa a porta serial COM1 (UART 16550).
///
/// Configura: 38400 baud, 8N1, FIFO habilitado.
pub fn init() {
    unsafe {
        // Disable interrupts
        port_out(COM1_DATA + 1, 0x00);

        // Enable DLAB (set baud rate divisor)
        port_out(COM1_DATA + 3, 0x80);

        // Set divisor to 3 (lo byte) = 38400 baud
        port_out(COM1_DATA, 0x03);

        // (hi byte)
        port_out(COM1_DATA + 1, 0x00);

        // 8 bits, no parity, one stop bit
        port_out(COM1_DATA + 3, 0x03);

        // Enable FIFO, clear them, with 14-byte threshold
        port_out(COM1_DATA + 2, 0xC7);

        // RTS/DSR set
        port_out(COM1_DATA + 4, 0x0B);
    }
}

/// Construtor global: serial pronta antes do `kernel_main`.
///
/// Registrado na tabela .ctors — o invocador de construtores roda isto
/// durante o trampolim de boot, então o primeiro `kinfo!` do entry já
/// encontra a UART configurada.
pub extern "C" fn early_init() {
    init();
}

crate::define_ctor!(__CTOR_SERIAL_EARLY_INIT, crate::drivers::serial::early_init);

// =============================================================================
// FUNÇÕES DE ESCRITA - CORE
// =============================================================================

/// Envia um único byte para a porta serial.
///
/// Busy-wait no LSR até o buffer de transmissão liberar. Todas as outras
/// funções de escrita usam esta internamente.
#[inline(always)]
pub fn emit(byte: u8) {
    unsafe {
        // Espera o buffer de transmissão estar vazio (bit 5 do LSR)
        loop {
            let status: u8;
            core::arch::asm!(
                "in al, dx",
                out("al") status,
                in("dx") COM1_STATUS,
                options(nostack, nomem, preserves_flags)
            );
            if (status & 0x20) != 0 {
                break;
            }
        }

        // Envia o byte
        core::arch::asm!(
            "out dx, al",
            in("al") byte,
            in("dx") COM1_DATA,
            options(nostack, nomem, preserves_flags)
        );
    }
}

/// Escreve diretamente em uma porta de I/O.
///
/// # Safety
/// Acesso direto a hardware; a porta precisa ser válida.
#[inline(always)]
unsafe fn port_out(port: u16, value: u8) {
    core::arch::asm!(
        "out dx, al",
        in("al") value,
        in("dx") port,
        options(nostack, nomem, preserves_flags)
    );
}

// =============================================================================
// FUNÇÕES DE ESCRITA - CONVENIÊNCIA
// =============================================================================

/// Envia uma string para a porta serial, byte a byte.
#[inline(never)]
pub fn emit_str(s: &str) {
    for byte in s.bytes() {
        emit(byte);
    }
}

/// Envia um u32 em hexadecimal (sempre 8 dígitos, prefixo "0x").
#[inline(never)]
pub fn emit_hex(value: u32) {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    emit(b'0');
    emit(b'x');
    // Do nibble mais significativo para o menos
    let mut shift = 28i32;
    while shift >= 0 {
        let nibble = ((value >> shift) & 0xF) as usize;
        emit(DIGITS[nibble]);
        shift -= 4;
    }
}

/// Envia uma quebra de linha (\r\n).
#[inline(always)]
pub fn emit_nl() {
    emit(b'\r');
    emit(b'\n');
}
