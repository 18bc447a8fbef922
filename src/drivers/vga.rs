//! Driver de Texto VGA (modo texto 80x25, buffer em 0xB8000).
//!
//! Cada célula do buffer é um u16: byte baixo = caractere, byte alto =
//! atributo (cores). O contrato desta camada: escrever os caracteres de uma
//! string a partir da célula de origem, SUBSTITUINDO o byte de caractere e
//! PRESERVANDO o byte de atributo já presente na célula.
//!
//! Toda a aritmética de endereço insegura fica confinada ao handle
//! [`VgaText`] — um único dono sobre a faixa fixa de memória mapeada, com
//! acessos via `VolatilePtr` para o compilador nunca elidir/reordenar MMIO.

use core::ptr::NonNull;

use spin::Mutex;
use volatile::VolatilePtr;

/// Endereço físico do buffer de texto VGA.
const VGA_TEXT_BASE: usize = 0xB8000;

/// Dimensões do modo texto padrão.
pub const VGA_WIDTH: usize = 80;
pub const VGA_HEIGHT: usize = 25;

/// Total de células (u16) do buffer.
pub const VGA_CELLS: usize = VGA_WIDTH * VGA_HEIGHT;

/// Handle de dono único sobre a faixa de células de texto.
pub struct VgaText {
    base: NonNull<u16>,
}

// O ponteiro aponta para MMIO fixo; há um único fluxo de controle e o
// handle global vive atrás de Mutex.
unsafe impl Send for VgaText {}

impl VgaText {
    /// Cria um handle sobre uma base arbitrária de células.
    ///
    /// # Safety
    /// `base` precisa apontar para pelo menos [`VGA_CELLS`] u16 válidos
    /// durante toda a vida do handle.
    pub const unsafe fn from_raw(base: *mut u16) -> Self {
        Self {
            base: NonNull::new_unchecked(base),
        }
    }

    /// Ponteiro volátil para a célula `index`.
    fn cell(&mut self, index: usize) -> VolatilePtr<'_, u16> {
        debug_assert!(index < VGA_CELLS);
        unsafe { VolatilePtr::new(NonNull::new_unchecked(self.base.as_ptr().add(index))) }
    }

    /// Escreve `s` a partir da célula de origem, preservando atributos.
    ///
    /// Escritas além da última célula são cortadas (sem wrap, sem scroll —
    /// o diagnóstico de boot cabe em uma linha).
    pub fn puts(&mut self, s: &str) {
        for (index, byte) in s.bytes().enumerate() {
            if index >= VGA_CELLS {
                break;
            }
            let cell = self.cell(index);
            // Mantém a cor, troca o caractere
            let attr = cell.read() & 0xFF00;
            cell.write(attr | byte as u16);
        }
    }
}

/// Handle global sobre o buffer de texto em 0xB8000.
static VGA: Mutex<VgaText> = Mutex::new(unsafe { VgaText::from_raw(VGA_TEXT_BASE as *mut u16) });

/// Escreve a string no buffer de texto VGA a partir da origem.
pub fn puts(s: &str) {
    VGA.lock().puts(s);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Buffer simulado com atributo 0x07 (cinza sobre preto) e 'X' em toda célula
    fn buffer_simulado() -> [u16; VGA_CELLS] {
        [0x0700 | b'X' as u16; VGA_CELLS]
    }

    #[test]
    fn test_preserva_byte_de_atributo() {
        let mut buffer = buffer_simulado();
        let mut vga = unsafe { VgaText::from_raw(buffer.as_mut_ptr()) };

        vga.puts("Oi");

        assert_eq!(buffer[0], 0x0700 | b'O' as u16);
        assert_eq!(buffer[1], 0x0700 | b'i' as u16);
        // Células não tocadas ficam intactas
        assert_eq!(buffer[2], 0x0700 | b'X' as u16);
    }

    #[test]
    fn test_corta_alem_do_buffer() {
        let mut buffer = buffer_simulado();
        let mut vga = unsafe { VgaText::from_raw(buffer.as_mut_ptr()) };

        // String maior que o buffer inteiro: não pode estourar
        let bytes = [b'A'; VGA_CELLS + 100];
        let longa = core::str::from_utf8(&bytes).unwrap();
        vga.puts(longa);

        assert_eq!(buffer[VGA_CELLS - 1], 0x0700 | b'A' as u16);
    }
}
